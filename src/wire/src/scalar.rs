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

//! Scalar codecs for wire text tokens.
//!
//! Every generated marshaller and unmarshaller routes scalar conversion
//! through these functions. A token that does not parse as the field's
//! type is a [DecodeError], never a silent default.

use crate::DecodeError;
use crate::Timestamp;

pub fn parse_i32(value: &str) -> Result<i32, DecodeError> {
    value.parse::<i32>().map_err(|_| DecodeError::Scalar {
        value: value.to_string(),
        expected: "a 32-bit signed integer",
    })
}

pub fn parse_i64(value: &str) -> Result<i64, DecodeError> {
    value.parse::<i64>().map_err(|_| DecodeError::Scalar {
        value: value.to_string(),
        expected: "a 64-bit signed integer",
    })
}

pub fn parse_f64(value: &str) -> Result<f64, DecodeError> {
    value.parse::<f64>().map_err(|_| DecodeError::Scalar {
        value: value.to_string(),
        expected: "a double precision number",
    })
}

/// Booleans are spelled `true` and `false` on the wire, nothing else.
pub fn parse_bool(value: &str) -> Result<bool, DecodeError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(DecodeError::Scalar {
            value: other.to_string(),
            expected: "a boolean literal",
        }),
    }
}

pub fn parse_timestamp(value: &str) -> Result<Timestamp, DecodeError> {
    Ok(Timestamp::try_from(value)?)
}

pub fn fmt_i32(value: i32) -> String {
    value.to_string()
}

pub fn fmt_i64(value: i64) -> String {
    value.to_string()
}

pub fn fmt_f64(value: f64) -> String {
    value.to_string()
}

pub fn fmt_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

pub fn fmt_timestamp(value: &Timestamp) -> String {
    String::from(*value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0", 0)]
    #[test_case("-42", -42)]
    #[test_case("2147483647", i32::MAX)]
    fn i32_ok(input: &str, want: i32) {
        assert_eq!(parse_i32(input).unwrap(), want);
    }

    #[test_case(""; "empty")]
    #[test_case("abc")]
    #[test_case("12.5"; "fraction")]
    #[test_case("2147483648"; "overflow")]
    fn i32_err(input: &str) {
        let got = parse_i32(input).unwrap_err();
        assert!(matches!(got, DecodeError::Scalar { .. }), "{got:?}");
    }

    #[test]
    fn i64_ok() {
        assert_eq!(parse_i64("9007199254740993").unwrap(), 9007199254740993);
        assert!(parse_i64("1e3").is_err());
    }

    #[test]
    fn f64_ok() {
        assert_eq!(parse_f64("1.25").unwrap(), 1.25);
        assert!(parse_f64("one").is_err());
    }

    #[test_case("true", true)]
    #[test_case("false", false)]
    fn bool_ok(input: &str, want: bool) {
        assert_eq!(parse_bool(input).unwrap(), want);
    }

    #[test_case("True")]
    #[test_case("1")]
    #[test_case("")]
    fn bool_err(input: &str) {
        assert!(parse_bool(input).is_err());
    }

    #[test]
    fn timestamp_round_trip() {
        let ts = parse_timestamp("2025-05-16T09:46:12.500Z").unwrap();
        assert_eq!(fmt_timestamp(&ts), "2025-05-16T09:46:12.5Z");
        assert!(parse_timestamp("last tuesday").is_err());
    }

    #[test]
    fn formatting() {
        assert_eq!(fmt_i32(-7), "-7");
        assert_eq!(fmt_i64(1 << 40), "1099511627776");
        assert_eq!(fmt_f64(0.5), "0.5");
        assert_eq!(fmt_bool(true), "true");
    }
}
