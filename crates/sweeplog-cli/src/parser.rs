use anyhow::Result;
use chrono::{Local, NaiveDate};
use chrono_english::{parse_date_string, Dialect};

use sweeplog_core::models::parse_log_date;

/// Parses a checklist date: plain `YYYY-MM-DD` first, then human phrases
/// like `today` or `next monday`.
pub fn parse_task_date(date_str: &str) -> Result<NaiveDate> {
    if let Ok(date) = parse_log_date(date_str) {
        return Ok(date);
    }
    parse_date_string(date_str, Local::now(), Dialect::Us)
        .map(|dt| dt.date_naive())
        .map_err(|e| anyhow::anyhow!("Failed to parse date '{}': {}", date_str, e))
}
