use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Timestamp format used in the monthly log files.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format accepted from external callers.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One location in the cleaning schedule. Immutable; loaded in full from the
/// schedule file on every materialization check.
///
/// The raw `frequency` string is kept as-is and parsed at match time, so an
/// unrecognized rule degrades to "never matches" instead of poisoning the
/// whole schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub location_code: String,
    pub location_name: String,
    pub team: String,
    pub frequency: String,
}

/// Key of one monthly log: the unit of persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

/// One materialized task: a schedule entry bound to a concrete date.
///
/// Instances move one way, pending to completed. `is_verified` and
/// `verified_by` are persisted but never set here; they are reserved for a
/// separate verification flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskInstance {
    pub date: NaiveDate,
    pub location_code: String,
    pub location_name: String,
    pub team: String,
    #[serde(with = "zero_one_bool")]
    pub is_completed: bool,
    #[serde(with = "optional_text")]
    pub completed_by: Option<String>,
    #[serde(with = "optional_timestamp")]
    pub completion_time: Option<NaiveDateTime>,
    #[serde(with = "zero_one_bool")]
    pub is_verified: bool,
    #[serde(with = "optional_text")]
    pub verified_by: Option<String>,
}

impl TaskInstance {
    /// A fresh, zero-valued instance for a schedule entry on a given date.
    pub fn pending(date: NaiveDate, entry: &ScheduleEntry) -> Self {
        Self {
            date,
            location_code: entry.location_code.clone(),
            location_name: entry.location_name.clone(),
            team: entry.team.clone(),
            is_completed: false,
            completed_by: None,
            completion_time: None,
            is_verified: false,
            verified_by: None,
        }
    }

    pub fn mark_completed(&mut self, by: &str, at: NaiveDateTime) {
        self.is_completed = true;
        self.completed_by = Some(by.to_string());
        self.completion_time = Some(at);
    }
}

/// Parses a caller-supplied `YYYY-MM-DD` date string.
pub fn parse_log_date(date_str: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(CoreError::from)
}

/// Booleans are stored as "0"/"1" in the log files.
mod zero_one_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "1" } else { "0" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.trim() == "1")
    }
}

/// Absent text fields are stored as empty strings.
mod optional_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            Ok(None)
        } else {
            Ok(Some(raw))
        }
    }
}

/// Absent timestamps are stored as empty strings, present ones in
/// [`TIMESTAMP_FORMAT`].
mod optional_timestamp {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
            .map(Some)
            .map_err(de::Error::custom)
    }
}
