use chrono::{Datelike, NaiveDate, Weekday};
use std::str::FromStr;
use thiserror::Error;

use crate::models::ScheduleEntry;

/// Recurrence pattern attached to a schedule entry.
///
/// Parsed from the frequency strings used in the schedule file: `daily`,
/// `every-N` (suffixes such as `every-3-days` are tolerated) and
/// `weekly-<mon|tue|wed|thu|fri|sat|sun>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyRule {
    /// Matches every date.
    Daily,
    /// Matches when the day-of-year is divisible by N. The cadence resets
    /// every January 1 rather than anchoring to a fixed start date.
    EveryNDays(u32),
    /// Matches one weekday per week.
    Weekly(Weekday),
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid frequency rule: {0}")]
pub struct ParseFrequencyError(String);

impl FromStr for FrequencyRule {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        let mut parts = lower.split('-');
        let rule = match parts.next() {
            Some("daily") => Some(FrequencyRule::Daily),
            Some("every") => parts
                .next()
                .and_then(|interval| interval.parse::<u32>().ok())
                .filter(|interval| *interval > 0)
                .map(FrequencyRule::EveryNDays),
            Some("weekly") => parts.next().and_then(parse_weekday).map(FrequencyRule::Weekly),
            _ => None,
        };
        rule.ok_or_else(|| ParseFrequencyError(s.to_string()))
    }
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
        "mon" => Some(Weekday::Mon),
        "tue" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

impl FrequencyRule {
    /// Whether this rule applies on the given calendar date.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            FrequencyRule::Daily => true,
            FrequencyRule::EveryNDays(interval) => date.ordinal() % interval == 0,
            FrequencyRule::Weekly(weekday) => date.weekday() == *weekday,
        }
    }
}

impl std::fmt::Display for FrequencyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrequencyRule::Daily => write!(f, "daily"),
            FrequencyRule::EveryNDays(interval) => write!(f, "every {} days", interval),
            FrequencyRule::Weekly(weekday) => write!(f, "weekly on {}", weekday),
        }
    }
}

/// Filters a schedule down to the entries whose rule applies on `date`.
/// Entries with an unrecognized frequency string never match.
pub fn matching_entries(
    schedule: &[ScheduleEntry],
    date: NaiveDate,
) -> impl Iterator<Item = &ScheduleEntry> {
    schedule.iter().filter(move |entry| {
        entry
            .frequency
            .parse::<FrequencyRule>()
            .map(|rule| rule.matches(date))
            .unwrap_or(false)
    })
}
