use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Mutex;

use crate::error::CoreError;
use crate::models::TaskInstance;
use crate::schedule::ScheduleSource;

// Re-export domain modules
pub mod completions;
pub mod materialization;
pub mod store;

pub use store::{CsvLogStore, LogStore, MemoryLogStore};

/// Domain-specific trait for materialization operations
#[async_trait]
pub trait MaterializationRepository {
    /// Returns all task instances for a date, creating them from the
    /// schedule first if the date has not been materialized yet.
    async fn tasks_for_date(&self, date: NaiveDate) -> Result<Vec<TaskInstance>, CoreError>;
}

/// Domain-specific trait for completion operations
#[async_trait]
pub trait CompletionRepository {
    /// Marks the listed locations completed for a date and returns how many
    /// instances were updated. Codes without a matching instance are
    /// silently ignored.
    async fn submit_completions(
        &self,
        date: NaiveDate,
        location_codes: &[String],
        submitted_by: &str,
    ) -> Result<usize, CoreError>;
}

/// Main repository trait that composes all domain traits
#[async_trait]
pub trait Repository: MaterializationRepository + CompletionRepository {
    // Individual domain operations are defined in their respective traits
}

/// Flat-file implementation of the repository pattern: a schedule source
/// plus one CSV log per calendar month. Every operation is a full
/// read-compute-write of the affected month; concurrent writers against the
/// same month file can race, an accepted limitation of the format.
pub struct FlatFileRepository<S, L> {
    schedule: S,
    store: L,
    handled_dates: Mutex<HashSet<NaiveDate>>,
}

impl<S: ScheduleSource, L: LogStore> FlatFileRepository<S, L> {
    pub fn new(schedule: S, store: L) -> Self {
        Self {
            schedule,
            store,
            handled_dates: Mutex::new(HashSet::new()),
        }
    }

    pub(crate) fn schedule(&self) -> &S {
        &self.schedule
    }

    pub(crate) fn store(&self) -> &L {
        &self.store
    }

    /// Whether this date was already handled during this process run.
    /// Together with the on-disk instances this forms the materialize-once
    /// check: a date with zero matching entries leaves no trace on disk, so
    /// the in-memory sentinel is what stops it from being re-evaluated.
    pub(crate) fn is_handled(&self, date: NaiveDate) -> bool {
        self.handled_dates
            .lock()
            .map(|dates| dates.contains(&date))
            .unwrap_or(false)
    }

    pub(crate) fn mark_handled(&self, date: NaiveDate) {
        if let Ok(mut dates) = self.handled_dates.lock() {
            dates.insert(date);
        }
    }
}

impl<S: ScheduleSource, L: LogStore> Repository for FlatFileRepository<S, L> {}
