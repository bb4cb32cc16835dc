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

use time::format_description::well_known::Rfc3339;

/// A point in time, as used by the Nimbus Cloud APIs.
///
/// Encoded on the wire as an [RFC 3339](https://www.ietf.org/rfc/rfc3339.txt)
/// string in all three protocols; this type is the only place that format
/// is spelled out.
///
/// # Examples
/// ```
/// # use nimbus_wire::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2025-05-16T09:46:12.500Z")?;
/// assert_eq!(ts.seconds(), 1747388772);
/// assert_eq!(ts.nanos(), 500_000_000);
/// # Ok::<(), TimestampError>(())
/// ```
///
/// The representable range is 0001-01-01T00:00:00Z through
/// 9999-12-31T23:59:59.999999999Z, so every valid value formats as an
/// RFC 3339 date string.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[non_exhaustive]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

/// Failures converting or creating [Timestamp] values.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// The seconds and/or nanoseconds component was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// The input was not a valid RFC 3339 string.
    #[error("cannot deserialize timestamp, source={0}")]
    Deserialize(#[source] Box<dyn std::error::Error + Send + Sync>),
}

type Error = TimestampError;

impl Timestamp {
    const NS: i32 = 1_000_000_000;

    /// The minimum value for the `seconds` component, '0001-01-01T00:00:00Z'.
    pub const MIN_SECONDS: i64 = -62135596800;

    /// The maximum value for the `seconds` component, '9999-12-31T23:59:59Z'.
    pub const MAX_SECONDS: i64 = 253402300799;

    /// Creates a new [Timestamp], validating the range of both components.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(0..Self::NS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { seconds, nanos })
    }

    /// Creates a normalized [Timestamp], carrying extra nanoseconds into the
    /// seconds component and saturating at the representable range.
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let (seconds, nanos) = match nanos.cmp(&0_i32) {
            std::cmp::Ordering::Equal => (seconds, nanos),
            std::cmp::Ordering::Greater => (
                seconds.saturating_add((nanos / Self::NS) as i64),
                nanos % Self::NS,
            ),
            std::cmp::Ordering::Less => (
                seconds.saturating_sub(1 - (nanos / Self::NS) as i64),
                Self::NS + nanos % Self::NS,
            ),
        };
        if seconds < Self::MIN_SECONDS {
            return Self {
                seconds: Self::MIN_SECONDS,
                nanos: 0,
            };
        }
        if seconds > Self::MAX_SECONDS {
            return Self {
                seconds: Self::MAX_SECONDS,
                nanos: 0,
            };
        }
        Self { seconds, nanos }
    }

    /// Seconds of UTC time since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Non-negative fractions of a second at nanosecond resolution.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

const NS: i128 = 1_000_000_000;

// The struct invariants guarantee the value is in range for RFC 3339, so
// formatting cannot fail at runtime.
const EXPECT_IN_RANGE: &str = "Timestamp values are always in RFC 3339 range";

impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        let odt = time::OffsetDateTime::from_unix_timestamp_nanos(
            timestamp.seconds as i128 * NS + timestamp.nanos as i128,
        )
        .expect(EXPECT_IN_RANGE);
        odt.format(&Rfc3339).expect(EXPECT_IN_RANGE)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let odt = time::OffsetDateTime::parse(value, &Rfc3339)
            .map_err(|e| TimestampError::Deserialize(e.into()))?;
        let nanos_since_epoch = odt.unix_timestamp_nanos();
        let seconds = (nanos_since_epoch / NS) as i64;
        let nanos = (nanos_since_epoch % NS) as i32;
        if nanos < 0 {
            return Timestamp::new(seconds - 1, Self::NS + nanos);
        }
        Timestamp::new(seconds, nanos)
    }
}

impl TryFrom<&String> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Timestamp::try_from(value.as_str())
    }
}

impl TryFrom<String> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Timestamp::try_from(value.as_str())
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        String::from(*self).serialize(serializer)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a timestamp in RFC 3339 format")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Timestamp::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test]
    fn new_in_range() -> Result {
        let ts = Timestamp::new(1747388772, 500_000_000)?;
        assert_eq!(ts.seconds(), 1747388772);
        assert_eq!(ts.nanos(), 500_000_000);
        Ok(())
    }

    #[test_case(Timestamp::MAX_SECONDS + 1, 0)]
    #[test_case(Timestamp::MIN_SECONDS - 1, 0)]
    #[test_case(0, -1)]
    #[test_case(0, 1_000_000_000)]
    fn new_out_of_range(seconds: i64, nanos: i32) {
        assert!(matches!(
            Timestamp::new(seconds, nanos),
            Err(TimestampError::OutOfRange)
        ));
    }

    #[test]
    fn clamp_carries_and_saturates() {
        assert_eq!(
            Timestamp::clamp(100, 1_500_000_000),
            Timestamp::clamp(101, 500_000_000)
        );
        assert_eq!(
            Timestamp::clamp(100, -500_000_000),
            Timestamp::clamp(99, 500_000_000)
        );
        assert_eq!(
            Timestamp::clamp(Timestamp::MAX_SECONDS + 5, 0).seconds(),
            Timestamp::MAX_SECONDS
        );
    }

    #[test_case("2025-05-16T09:46:12Z", 1747388772, 0)]
    #[test_case("2025-05-16T09:46:12.500Z", 1747388772, 500_000_000)]
    #[test_case("1970-01-01T00:00:00Z", 0, 0)]
    #[test_case("1969-12-31T23:59:59.750Z", -1, 750_000_000; "before epoch")]
    fn parse(input: &str, seconds: i64, nanos: i32) -> Result {
        let ts = Timestamp::try_from(input)?;
        assert_eq!(ts.seconds(), seconds);
        assert_eq!(ts.nanos(), nanos);
        Ok(())
    }

    #[test_case("")]
    #[test_case("2025-05-16")]
    #[test_case("not a timestamp")]
    fn parse_error(input: &str) {
        assert!(matches!(
            Timestamp::try_from(input),
            Err(TimestampError::Deserialize(_))
        ));
    }

    #[test]
    fn format() -> Result {
        let ts = Timestamp::new(1747388772, 0)?;
        assert_eq!(String::from(ts), "2025-05-16T09:46:12Z");
        Ok(())
    }

    #[test]
    fn serde_round_trip() -> Result {
        let ts = Timestamp::new(1747388772, 0)?;
        let json = serde_json::to_value(ts)?;
        assert_eq!(json, serde_json::json!("2025-05-16T09:46:12Z"));
        let back = serde_json::from_value::<Timestamp>(json)?;
        assert_eq!(back, ts);
        Ok(())
    }

    #[test]
    fn serde_rejects_non_strings() {
        assert!(serde_json::from_value::<Timestamp>(serde_json::json!(1747388772)).is_err());
        assert!(serde_json::from_value::<Timestamp>(serde_json::json!({})).is_err());
    }
}
