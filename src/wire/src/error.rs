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

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// The error type for unmarshalling wire data into records.
///
/// Malformed input surfaces as a single opaque failure; the caller (the
/// transport layer) decides how to wrap it. Unknown properties and
/// unmatched tags are never errors, they are skipped during parsing.
///
/// # Examples
/// ```
/// # use nimbus_wire::DecodeError;
/// let e = nimbus_wire::scalar::parse_i32("not-a-number").unwrap_err();
/// assert!(matches!(e, DecodeError::Scalar { .. }));
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DecodeError {
    /// The document was structurally invalid.
    #[error("malformed document, source={0}")]
    Malformed(#[source] BoxedError),

    /// A scalar token could not be parsed as the field's type.
    #[error("cannot decode `{value}` as {expected}")]
    Scalar {
        value: String,
        expected: &'static str,
    },

    /// A timestamp token was out of range or misformatted.
    #[error("cannot decode timestamp, source={0}")]
    Timestamp(#[from] crate::TimestampError),

    /// The document ended before the record was complete.
    #[error("unexpected end of document")]
    UnexpectedEof,
}

impl DecodeError {
    pub fn malformed<T: Into<BoxedError>>(source: T) -> Self {
        DecodeError::Malformed(source.into())
    }
}
