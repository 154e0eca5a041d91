use serde::{Deserialize, Serialize};
use std::fmt;

/// School-week day, identified by its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    #[serde(rename = "MO")]
    Mo,
    #[serde(rename = "TU")]
    Tu,
    #[serde(rename = "WE")]
    We,
    #[serde(rename = "TH")]
    Th,
    #[serde(rename = "FR")]
    Fr,
    #[serde(rename = "SA")]
    Sa,
}

impl Day {
    pub fn code(&self) -> &'static str {
        match self {
            Day::Mo => "MO",
            Day::Tu => "TU",
            Day::We => "WE",
            Day::Th => "TH",
            Day::Fr => "FR",
            Day::Sa => "SA",
        }
    }

    /// Parse a two-letter day code, tolerating case and surrounding whitespace.
    pub fn from_code(s: &str) -> Option<Day> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MO" => Some(Day::Mo),
            "TU" => Some(Day::Tu),
            "WE" => Some(Day::We),
            "TH" => Some(Day::Th),
            "FR" => Some(Day::Fr),
            "SA" => Some(Day::Sa),
            _ => None,
        }
    }

    /// Days from the schedule's anchor Monday.
    pub fn offset(&self) -> u64 {
        match self {
            Day::Mo => 0,
            Day::Tu => 1,
            Day::We => 2,
            Day::Th => 3,
            Day::Fr => 4,
            Day::Sa => 5,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One normalized timetable entry: a class on a given day in a given slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub day: Day,
    pub label: String,
    pub slot: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for day in [Day::Mo, Day::Tu, Day::We, Day::Th, Day::Fr, Day::Sa] {
            assert_eq!(Day::from_code(day.code()), Some(day));
        }
    }

    #[test]
    fn test_from_code_loose() {
        assert_eq!(Day::from_code(" mo "), Some(Day::Mo));
        assert_eq!(Day::from_code("Tu"), Some(Day::Tu));
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(Day::from_code("XX"), None);
        assert_eq!(Day::from_code(""), None);
    }

    #[test]
    fn test_offsets_are_monday_based() {
        assert_eq!(Day::Mo.offset(), 0);
        assert_eq!(Day::Fr.offset(), 4);
        assert_eq!(Day::Sa.offset(), 5);
    }
}
