//! # Sweeplog Core Library
//!
//! A cleaning checklist library built around schedule-driven task
//! materialization: a static schedule of locations with recurrence rules is
//! turned, once per day, into concrete task instances persisted in flat
//! monthly log files.
//!
//! ## Features
//!
//! - **Materialize-Once Semantics**: the first lookup of a date creates its
//!   task instances; later lookups (and later schedule edits) never
//!   regenerate an already-materialized day
//! - **Simple Recurrence Rules**: `daily`, `every-N` and `weekly-<day>`
//!   frequency strings, evaluated per calendar date
//! - **Flat-File Monthly Logs**: one CSV log per calendar month, written
//!   atomically via temp-file-then-rename
//! - **Explicit Identity**: completion submissions carry the submitting
//!   user, no ambient session state
//!
//! ## Core Modules
//!
//! - [`models`]: Core data structures (schedule entries, task instances)
//! - [`recurrence`]: Frequency rule parsing and date matching
//! - [`repository`]: Materialization and completion operations over a
//!   pluggable log store
//! - [`schedule`]: Schedule source loading
//! - [`users`]: User directory and authentication
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sweeplog_core::{
//!     repository::{CsvLogStore, FlatFileRepository, MaterializationRepository},
//!     schedule::CsvScheduleSource,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = FlatFileRepository::new(
//!         CsvScheduleSource::new("cleaning.csv"),
//!         CsvLogStore::new("log"),
//!     );
//!
//!     let today = chrono::Local::now().date_naive();
//!     for task in repo.tasks_for_date(today).await? {
//!         println!("{} {}", task.location_code, task.location_name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod recurrence;
pub mod repository;
pub mod schedule;
pub mod users;
