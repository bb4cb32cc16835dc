// Copyright 2025 Nimbus Cloud LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pull-based XML cursor for the generated response unmarshallers.
//!
//! The generated code drives this cursor in a fixed loop: compute the
//! target depth on entry, pull events, test each start tag against the
//! type's field paths, and return when an end tag drops below the entry
//! depth. [XmlCursor::test_expression] matches a `/`-separated tag path
//! against the tail of the open-element stack at an exact depth, so a tag
//! name nested inside a list item never binds to the parent record's field
//! of the same name.
//!
//! One cursor reads one document; its advance is strictly sequential and
//! the cursor is never shared across records being parsed concurrently.

use crate::DecodeError;
use quick_xml::Reader;
use quick_xml::events::Event;

/// The event kinds the generated unmarshallers dispatch on.
///
/// Text content is not an event here; it is consumed by [XmlCursor::read_text]
/// when a leaf field matches. Unmatched text is dropped as the cursor moves
/// past it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XmlToken {
    StartElement,
    EndElement,
    EndDocument,
}

/// A depth-tracking cursor over one XML document.
pub struct XmlCursor<'a> {
    reader: Reader<&'a [u8]>,
    stack: Vec<String>,
    // A self-closing tag is reported as a start element with this flag
    // set; the matching end element is synthesized on the next pull.
    pending_empty_end: bool,
    consumed_any: bool,
}

impl<'a> XmlCursor<'a> {
    pub fn new(document: &'a str) -> Self {
        let mut reader = Reader::from_str(document);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            stack: Vec::new(),
            pending_empty_end: false,
            consumed_any: false,
        }
    }

    /// True until the first event is pulled.
    ///
    /// Result unmarshallers invoked on a whole response document use this
    /// to aim one level deeper, past the response envelope element.
    pub fn is_start_of_document(&self) -> bool {
        !self.consumed_any
    }

    /// The number of currently open elements.
    pub fn current_depth(&self) -> usize {
        self.stack.len()
    }

    /// Advances to the next start tag, end tag, or end of document.
    pub fn next_event(&mut self) -> Result<XmlToken, DecodeError> {
        self.consumed_any = true;
        if self.pending_empty_end {
            self.pending_empty_end = false;
            self.stack.pop();
            return Ok(XmlToken::EndElement);
        }
        loop {
            match self
                .reader
                .read_event()
                .map_err(|e| DecodeError::malformed(e.to_string()))?
            {
                Event::Start(e) => {
                    self.stack
                        .push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                    return Ok(XmlToken::StartElement);
                }
                Event::Empty(e) => {
                    self.stack
                        .push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                    self.pending_empty_end = true;
                    return Ok(XmlToken::StartElement);
                }
                Event::End(_) => {
                    self.stack.pop();
                    return Ok(XmlToken::EndElement);
                }
                Event::Eof => return Ok(XmlToken::EndDocument),
                // Text between structural tags belongs to unmatched leaf
                // fields and is skipped, as are comments and declarations.
                _ => continue,
            }
        }
    }

    /// Tests a field path against the cursor position.
    ///
    /// `expression` is a `/`-separated tag path such as `groupSet/item`.
    /// It matches when the open-element stack is exactly
    /// `start_depth + segments - 1` deep and ends with the path's
    /// segments. The expression `.` matches unconditionally.
    pub fn test_expression(&self, expression: &str, start_depth: usize) -> bool {
        if expression == "." {
            return true;
        }
        let mut depth = start_depth;
        for _ in expression.matches('/') {
            depth += 1;
        }
        if self.stack.len() != depth {
            return false;
        }
        self.stack
            .iter()
            .rev()
            .zip(expression.rsplit('/'))
            .all(|(open, segment)| open == segment)
    }

    /// Reads the text content of the element just entered and consumes its
    /// end tag.
    ///
    /// Called by leaf-field unmarshallers right after the field's start tag
    /// matched. A child element inside the text is malformed input.
    pub fn read_text(&mut self) -> Result<String, DecodeError> {
        if self.pending_empty_end {
            self.pending_empty_end = false;
            self.stack.pop();
            return Ok(String::new());
        }
        let mut content = String::new();
        loop {
            match self
                .reader
                .read_event()
                .map_err(|e| DecodeError::malformed(e.to_string()))?
            {
                Event::Text(t) => {
                    let text = t
                        .unescape()
                        .map_err(|e| DecodeError::malformed(e.to_string()))?;
                    content.push_str(&text);
                }
                Event::CData(c) => {
                    content.push_str(&String::from_utf8_lossy(c.as_ref()));
                }
                Event::End(_) => {
                    self.stack.pop();
                    return Ok(content);
                }
                Event::Start(e) => {
                    return Err(DecodeError::malformed(format!(
                        "unexpected element <{}> inside text content",
                        String::from_utf8_lossy(e.local_name().as_ref())
                    )));
                }
                Event::Eof => return Err(DecodeError::UnexpectedEof),
                _ => continue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type Result = anyhow::Result<()>;

    #[test]
    fn walk_simple_document() -> Result {
        let mut cursor = XmlCursor::new("<a><b>text</b></a>");
        assert!(cursor.is_start_of_document());
        assert_eq!(cursor.next_event()?, XmlToken::StartElement);
        assert!(!cursor.is_start_of_document());
        assert_eq!(cursor.current_depth(), 1);
        assert_eq!(cursor.next_event()?, XmlToken::StartElement);
        assert_eq!(cursor.current_depth(), 2);
        assert!(cursor.test_expression("b", 2));
        assert_eq!(cursor.read_text()?, "text");
        assert_eq!(cursor.current_depth(), 1);
        assert_eq!(cursor.next_event()?, XmlToken::EndElement);
        assert_eq!(cursor.current_depth(), 0);
        assert_eq!(cursor.next_event()?, XmlToken::EndDocument);
        Ok(())
    }

    #[test]
    fn path_expressions_respect_depth() -> Result {
        let mut cursor = XmlCursor::new("<r><set><item><name>x</name></item></set></r>");
        cursor.next_event()?; // <r>
        cursor.next_event()?; // <set>
        assert!(!cursor.test_expression("set/item", 2));
        cursor.next_event()?; // <item>
        assert!(cursor.test_expression("set/item", 2));
        assert!(!cursor.test_expression("item", 2));
        assert!(cursor.test_expression("item", 3));
        cursor.next_event()?; // <name>
        assert!(cursor.test_expression("set/item/name", 2));
        assert!(!cursor.test_expression("set/item", 2));
        Ok(())
    }

    #[test]
    fn dot_matches_anywhere() -> Result {
        let mut cursor = XmlCursor::new("<a/>");
        cursor.next_event()?;
        assert!(cursor.test_expression(".", 17));
        Ok(())
    }

    #[test]
    fn empty_element_synthesizes_end() -> Result {
        let mut cursor = XmlCursor::new("<a><b/><c>v</c></a>");
        cursor.next_event()?; // <a>
        assert_eq!(cursor.next_event()?, XmlToken::StartElement); // <b/>
        assert_eq!(cursor.current_depth(), 2);
        assert_eq!(cursor.next_event()?, XmlToken::EndElement);
        assert_eq!(cursor.current_depth(), 1);
        assert_eq!(cursor.next_event()?, XmlToken::StartElement); // <c>
        assert_eq!(cursor.read_text()?, "v");
        Ok(())
    }

    #[test]
    fn empty_element_reads_empty_text() -> Result {
        let mut cursor = XmlCursor::new("<a><b/></a>");
        cursor.next_event()?;
        cursor.next_event()?;
        assert_eq!(cursor.read_text()?, "");
        assert_eq!(cursor.current_depth(), 1);
        Ok(())
    }

    #[test]
    fn read_text_unescapes_entities() -> Result {
        let mut cursor = XmlCursor::new("<a><b>fish &amp; chips</b></a>");
        cursor.next_event()?;
        cursor.next_event()?;
        assert_eq!(cursor.read_text()?, "fish & chips");
        Ok(())
    }

    #[test]
    fn read_text_rejects_child_elements() {
        let mut cursor = XmlCursor::new("<a><b><c/></b></a>");
        cursor.next_event().unwrap();
        cursor.next_event().unwrap();
        let got = cursor.read_text().unwrap_err();
        assert!(matches!(got, DecodeError::Malformed(_)), "{got:?}");
    }

    #[test]
    fn truncated_document_is_eof() {
        let mut cursor = XmlCursor::new("<a><b>dangling");
        cursor.next_event().unwrap();
        cursor.next_event().unwrap();
        let got = cursor.read_text().unwrap_err();
        assert!(
            matches!(got, DecodeError::UnexpectedEof | DecodeError::Malformed(_)),
            "{got:?}"
        );
    }
}
