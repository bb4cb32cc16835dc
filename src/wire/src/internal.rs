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

//! Serde adapters used by the generated JSON marshallers.
//!
//! These types are not intended for application developers. They are
//! public because the generated service crates (roughly one per service)
//! use them in their hand-rolled `Serialize` and `Deserialize` impls.

use serde::de::Unexpected::Other;
use std::marker::PhantomData;

/// Deserialize `i32` fields from a JSON number or a numeric string.
///
/// Out-of-range and non-numeric tokens are data errors, never silently
/// coerced.
pub struct I32;

const ERRMSG_32: &str = "a 32-bit signed integer";

impl<'de> serde_with::DeserializeAs<'de, i32> for I32 {
    fn deserialize_as<D>(deserializer: D) -> Result<i32, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(I32Visitor)
    }
}

struct I32Visitor;

impl serde::de::Visitor<'_> for I32Visitor {
    type Value = i32;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str(ERRMSG_32)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value.parse::<i32>().map_err(E::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value)
            .map_err(|_| E::invalid_value(Other(&format!("{value}")), &ERRMSG_32))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value)
            .map_err(|_| E::invalid_value(Other(&format!("{value}")), &ERRMSG_32))
    }
}

impl serde_with::SerializeAs<i32> for I32 {
    fn serialize_as<S>(source: &i32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(*source)
    }
}

/// Deserialize `i64` fields from a JSON number or a numeric string.
pub struct I64;

const ERRMSG_64: &str = "a 64-bit signed integer";

impl<'de> serde_with::DeserializeAs<'de, i64> for I64 {
    fn deserialize_as<D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(I64Visitor)
    }
}

struct I64Visitor;

impl serde::de::Visitor<'_> for I64Visitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str(ERRMSG_64)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value.parse::<i64>().map_err(E::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value)
            .map_err(|_| E::invalid_value(Other(&format!("{value}")), &ERRMSG_64))
    }
}

impl serde_with::SerializeAs<i64> for I64 {
    fn serialize_as<S>(source: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(*source)
    }
}

/// Deserialize `f64` fields from a JSON number or a numeric string.
pub struct F64;

const ERRMSG_F64: &str = "a double precision number";

impl<'de> serde_with::DeserializeAs<'de, f64> for F64 {
    fn deserialize_as<D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(F64Visitor)
    }
}

struct F64Visitor;

impl serde::de::Visitor<'_> for F64Visitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str(ERRMSG_F64)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value.parse::<f64>().map_err(E::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value as f64)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value as f64)
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value)
    }
}

impl serde_with::SerializeAs<f64> for F64 {
    fn serialize_as<S>(source: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(*source)
    }
}

/// A nested-object field that tolerates a scalar in its place.
///
/// Services occasionally return a bare scalar where a structure is
/// documented. The generated unmarshallers read nested fields through this
/// wrapper so that case decodes as "absent" instead of failing the whole
/// record. `null` also decodes as absent; a JSON object delegates to the
/// nested type's own unmarshaller.
pub struct Guarded<T>(pub Option<T>);

impl<'de, T> serde::de::Deserialize<'de> for Guarded<T>
where
    T: serde::de::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(GuardedVisitor(PhantomData))
    }
}

struct GuardedVisitor<T>(PhantomData<T>);

impl<'de, T> serde::de::Visitor<'de> for GuardedVisitor<T>
where
    T: serde::de::Deserialize<'de>,
{
    type Value = Guarded<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a JSON object, or any scalar to skip")
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let value = T::deserialize(serde::de::value::MapAccessDeserializer::new(map))?;
        Ok(Guarded(Some(value)))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {}
        Ok(Guarded(None))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Guarded(None))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Guarded(None))
    }

    fn visit_bool<E>(self, _: bool) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Guarded(None))
    }

    fn visit_i64<E>(self, _: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Guarded(None))
    }

    fn visit_u64<E>(self, _: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Guarded(None))
    }

    fn visit_f64<E>(self, _: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Guarded(None))
    }

    fn visit_str<E>(self, _: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Guarded(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use serde_with::DeserializeAs;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test_case(json!(42), 42)]
    #[test_case(json!("42"), 42; "string")]
    #[test_case(json!(-7), -7)]
    #[test_case(json!(i32::MAX), i32::MAX; "max")]
    fn i32_ok(input: Value, want: i32) -> Result {
        let got = I32::deserialize_as(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!("abc"))]
    #[test_case(json!(i32::MAX as i64 + 1))]
    #[test_case(json!({}))]
    fn i32_err(input: Value) {
        assert!(I32::deserialize_as(input).is_err());
    }

    #[test_case(json!(9007199254740993_i64), 9007199254740993)]
    #[test_case(json!("9007199254740993"), 9007199254740993; "string")]
    fn i64_ok(input: Value, want: i64) -> Result {
        let got = I64::deserialize_as(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!(1.25), 1.25)]
    #[test_case(json!("1.25"), 1.25; "string")]
    #[test_case(json!(3), 3.0; "integer")]
    fn f64_ok(input: Value, want: f64) -> Result {
        let got = F64::deserialize_as(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn f64_err() {
        assert!(F64::deserialize_as(json!("one point five")).is_err());
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Inner {
        a: Option<String>,
    }

    #[test]
    fn guarded_object() -> Result {
        let got = serde_json::from_value::<Guarded<Inner>>(json!({"a": "x"}))?;
        assert_eq!(got.0, Some(Inner { a: Some("x".into()) }));
        Ok(())
    }

    #[test_case(json!("scalar"))]
    #[test_case(json!(5))]
    #[test_case(json!(true))]
    #[test_case(json!(null))]
    #[test_case(json!([1, 2, 3]))]
    fn guarded_skips(input: Value) -> Result {
        let got = serde_json::from_value::<Guarded<Inner>>(input)?;
        assert!(got.0.is_none());
        Ok(())
    }
}
