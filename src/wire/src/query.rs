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

//! Query-string request parameters.
//!
//! Nimbus request operations are encoded as flat `name=value` parameter
//! lists. Every request carries the fixed `Action` and `Version`
//! parameters; the generated request marshallers append one parameter per
//! present field, indexing repeated values from 1 (`GroupName.1`,
//! `GroupName.2`, ...) and composing member keys for structure lists
//! (`Filter.1.Name`, `Filter.1.Value.1`).
//!
//! Absent fields contribute no parameters, and an empty list is
//! indistinguishable from an absent one in this encoding.

/// An ordered query-parameter list for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Creates the parameter list for one operation, seeding the fixed
    /// `Action` and `Version` parameters.
    pub fn new(action: &str, version: &str) -> Self {
        Self {
            pairs: vec![
                ("Action".to_string(), action.to_string()),
                ("Version".to_string(), version.to_string()),
            ],
        }
    }

    /// Appends one parameter.
    pub fn put<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.pairs.push((name.into(), value.into()));
    }

    /// The first value recorded under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders the parameters as an `application/x-www-form-urlencoded`
    /// request body, in insertion order.
    pub fn into_body(self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_and_version_always_present() {
        let params = Params::new("DescribeInstances", "2025-04-01");
        assert_eq!(params.get("Action"), Some("DescribeInstances"));
        assert_eq!(params.get("Version"), Some("2025-04-01"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut params = Params::new("CreateTags", "2025-04-01");
        params.put("ResourceId.1", "i-1234");
        params.put("Tag.1.Key", "env");
        params.put("Tag.1.Value", "prod");
        let names: Vec<_> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["Action", "Version", "ResourceId.1", "Tag.1.Key", "Tag.1.Value"]
        );
    }

    #[test]
    fn body_is_form_encoded() {
        let mut params = Params::new("AllocateAddress", "2025-04-01");
        params.put("Domain", "vpc");
        params.put("Note", "a b&c");
        assert_eq!(
            params.into_body(),
            "Action=AllocateAddress&Version=2025-04-01&Domain=vpc&Note=a+b%26c"
        );
    }

    #[test]
    fn get_returns_first_match() {
        let mut params = Params::new("X", "1");
        params.put("Name", "first");
        params.put("Name", "second");
        assert_eq!(params.get("Name"), Some("first"));
        assert_eq!(params.get("Missing"), None);
    }
}
