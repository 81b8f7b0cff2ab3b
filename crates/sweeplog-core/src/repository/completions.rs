use async_trait::async_trait;
use chrono::{Local, NaiveDate};

use crate::error::CoreError;
use crate::models::MonthKey;
use crate::repository::{CompletionRepository, FlatFileRepository, LogStore};
use crate::schedule::ScheduleSource;

#[async_trait]
impl<S: ScheduleSource, L: LogStore> CompletionRepository for FlatFileRepository<S, L> {
    /// Marks submitted locations completed for a date.
    ///
    /// # Behavior
    /// - Load the month's log in full
    /// - For every instance of the date whose code is listed, set the
    ///   completion fields to the submitting user and the current local time
    /// - Persist the whole month, but only when something changed; unknown
    ///   codes are silently ignored and a no-op submission succeeds without
    ///   touching the file
    async fn submit_completions(
        &self,
        date: NaiveDate,
        location_codes: &[String],
        submitted_by: &str,
    ) -> Result<usize, CoreError> {
        let month = MonthKey::from_date(date);
        let mut rows = self.store().load(month).await?;
        let completion_time = Local::now().naive_local();

        let mut updated = 0;
        for row in rows.iter_mut().filter(|row| row.date == date) {
            if location_codes.iter().any(|code| *code == row.location_code) {
                row.mark_completed(submitted_by, completion_time);
                updated += 1;
            }
        }

        if updated > 0 {
            self.store().save(month, &rows).await?;
        }
        Ok(updated)
    }
}
