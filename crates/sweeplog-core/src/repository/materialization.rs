use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::CoreError;
use crate::models::{MonthKey, TaskInstance};
use crate::recurrence::matching_entries;
use crate::repository::{FlatFileRepository, LogStore, MaterializationRepository};
use crate::schedule::ScheduleSource;

#[async_trait]
impl<S: ScheduleSource, L: LogStore> MaterializationRepository for FlatFileRepository<S, L> {
    /// Gets or creates the daily checklist.
    ///
    /// # Behavior
    /// - Load the month's log in full (missing file means empty log)
    /// - If no instance for the date exists and the date was not handled
    ///   earlier in this run, evaluate every schedule entry against the date
    ///   and append one pending instance per match
    /// - Persist the whole month, but only when instances were created; a
    ///   date where nothing matches writes nothing and is remembered only by
    ///   the in-process sentinel
    /// - Return every instance for the requested date
    ///
    /// Once any instance exists for a date the schedule is not consulted
    /// again for it, so schedule edits never regenerate an already
    /// materialized day.
    async fn tasks_for_date(&self, date: NaiveDate) -> Result<Vec<TaskInstance>, CoreError> {
        let month = MonthKey::from_date(date);
        let mut rows = self.store().load(month).await?;

        let already_materialized =
            self.is_handled(date) || rows.iter().any(|row| row.date == date);
        if !already_materialized {
            let schedule = self.schedule().load().await?;
            let new_rows: Vec<TaskInstance> = matching_entries(&schedule, date)
                .map(|entry| TaskInstance::pending(date, entry))
                .collect();

            if !new_rows.is_empty() {
                rows.extend(new_rows);
                self.store().save(month, &rows).await?;
            }
            self.mark_handled(date);
        }

        Ok(rows.into_iter().filter(|row| row.date == date).collect())
    }
}
