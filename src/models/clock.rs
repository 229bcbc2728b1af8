//! Weekday and wall-clock time models.
//!
//! # Time Model
//! Meeting times are `HHMM` strings on a 24-hour clock (`"0930"`, `"1745"`).
//! They are parsed once, at ingestion, into [`ClockTime`]; a string that is
//! not exactly four digits, or names an hour above 23 or a minute above 59,
//! is rejected there rather than compared as garbage later.
//!
//! The display grid works in 5-minute blocks ([`BLOCK_MINUTES`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PlannerError, Result};

/// Grid resolution in minutes.
pub const BLOCK_MINUTES: u32 = 5;

/// Blocks per hour at [`BLOCK_MINUTES`] resolution.
pub const BLOCKS_PER_HOUR: usize = (60 / BLOCK_MINUTES) as usize;

/// Day of the week, Sunday first.
///
/// The declaration order is the grid column order (`Sun = 0 … Sat = 6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// All days in column order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Column index in the weekly grid (`Sun = 0`).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Three-letter abbreviation.
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

impl FromStr for Weekday {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        Weekday::ALL
            .iter()
            .copied()
            .find(|d| d.abbrev() == s)
            .ok_or_else(|| PlannerError::MalformedTimeSlot {
                input: s.to_string(),
                reason: "expected one of Sun, Mon, Tue, Wed, Thu, Fri, Sat".into(),
            })
    }
}

/// A wall-clock time of day with minute precision.
///
/// Ordered chronologically. Serialized as the `HHMM` string it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a time, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(PlannerError::MalformedTimeSlot {
                input: format!("{hour:02}{minute:02}"),
                reason: "hour must be 0-23 and minute 0-59".into(),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Parses an `HHMM` string.
    pub fn parse_hhmm(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(PlannerError::MalformedTimeSlot {
                input: s.to_string(),
                reason: "expected exactly 4 digits (HHMM)".into(),
            });
        }
        let digit = |i: usize| bytes[i] - b'0';
        let hour = digit(0) * 10 + digit(1);
        let minute = digit(2) * 10 + digit(3);
        Self::new(hour, minute).map_err(|_| PlannerError::MalformedTimeSlot {
            input: s.to_string(),
            reason: "hour must be 0-23 and minute 0-59".into(),
        })
    }

    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    #[inline]
    pub fn minutes_since_midnight(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Whether this time falls on a grid row boundary.
    #[inline]
    pub fn is_block_aligned(self) -> bool {
        u32::from(self.minute) % BLOCK_MINUTES == 0
    }

    /// Colon-separated label used by the grid (`"09:30"`).
    pub fn label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hhmm(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = PlannerError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse_hhmm(&s)
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm() {
        let t = ClockTime::parse_hhmm("0930").unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.minutes_since_midnight(), 570);
        assert_eq!(t.to_string(), "0930");
        assert_eq!(t.label(), "09:30");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["930", "09:30", "abcd", "2400", "1260", "", "09300"] {
            assert!(
                matches!(
                    ClockTime::parse_hhmm(bad),
                    Err(PlannerError::MalformedTimeSlot { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a: ClockTime = "0959".parse().unwrap();
        let b: ClockTime = "1000".parse().unwrap();
        assert!(a < b);
        assert!(ClockTime::new(23, 59).unwrap() > ClockTime::new(0, 0).unwrap());
    }

    #[test]
    fn test_block_alignment() {
        assert!(ClockTime::new(9, 55).unwrap().is_block_aligned());
        assert!(!ClockTime::new(9, 52).unwrap().is_block_aligned());
    }

    #[test]
    fn test_weekday_index_and_parse() {
        assert_eq!(Weekday::Sun.index(), 0);
        assert_eq!(Weekday::Sat.index(), 6);
        assert_eq!("Wed".parse::<Weekday>().unwrap(), Weekday::Wed);
        assert!("wednesday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_serde_hhmm_string() {
        let t: ClockTime = serde_json::from_str("\"1045\"").unwrap();
        assert_eq!(t, ClockTime::new(10, 45).unwrap());
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"1045\"");
        assert!(serde_json::from_str::<ClockTime>("\"10:45\"").is_err());
    }
}
