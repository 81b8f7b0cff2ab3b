use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use sweeplog_core::error::CoreError;
use sweeplog_core::models::ScheduleEntry;
use sweeplog_core::repository::{
    CompletionRepository, CsvLogStore, FlatFileRepository, MaterializationRepository,
    MemoryLogStore,
};
use sweeplog_core::schedule::{CsvScheduleSource, ScheduleSource, StaticScheduleSource};

fn entry(code: &str, frequency: &str) -> ScheduleEntry {
    ScheduleEntry {
        location_code: code.to_string(),
        location_name: format!("Location {}", code),
        team: "Team 1".to_string(),
        frequency: frequency.to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Repository over a temporary directory with a fixed schedule.
fn setup_csv_repo(
    schedule: Vec<ScheduleEntry>,
) -> (FlatFileRepository<StaticScheduleSource, CsvLogStore>, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let repo = FlatFileRepository::new(
        StaticScheduleSource::new(schedule),
        CsvLogStore::new(temp_dir.path()),
    );
    (repo, temp_dir)
}

/// Schedule source whose entries can be swapped mid-test, to model schedule
/// edits happening between materializations.
#[derive(Clone, Default)]
struct SwappableScheduleSource {
    entries: Arc<Mutex<Vec<ScheduleEntry>>>,
}

impl SwappableScheduleSource {
    fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    fn replace(&self, entries: Vec<ScheduleEntry>) {
        *self.entries.lock().unwrap() = entries;
    }
}

#[async_trait]
impl ScheduleSource for SwappableScheduleSource {
    async fn load(&self) -> Result<Vec<ScheduleEntry>, CoreError> {
        Ok(self.entries.lock().unwrap().clone())
    }
}

#[tokio::test]
async fn daily_entry_materializes_exactly_once() {
    let (repo, temp_dir) = setup_csv_repo(vec![entry("A1", "daily")]);
    let day = date(2024, 3, 1);

    let first = repo.tasks_for_date(day).await.expect("materialize");
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].date, day);
    assert_eq!(first[0].location_code, "A1");
    assert!(!first[0].is_completed);
    assert!(first[0].completed_by.is_none());

    let second = repo.tasks_for_date(day).await.expect("reload");
    assert_eq!(first, second);

    assert!(temp_dir
        .path()
        .join("2024")
        .join("202403_log.csv")
        .exists());
}

#[tokio::test]
async fn materializing_more_dates_appends_to_the_month_log() {
    let (repo, _temp_dir) = setup_csv_repo(vec![entry("A1", "daily")]);

    let first_day = repo.tasks_for_date(date(2024, 3, 1)).await.unwrap();
    let second_day = repo.tasks_for_date(date(2024, 3, 2)).await.unwrap();
    assert_eq!(first_day.len(), 1);
    assert_eq!(second_day.len(), 1);
    assert_eq!(second_day[0].date, date(2024, 3, 2));

    // Re-reading the first day still returns only its own instance.
    let first_again = repo.tasks_for_date(date(2024, 3, 1)).await.unwrap();
    assert_eq!(first_again, first_day);
}

#[tokio::test]
async fn weekly_entry_skips_non_matching_days() {
    let (repo, _temp_dir) = setup_csv_repo(vec![entry("B2", "weekly-mon")]);

    // 2024-03-05 is a Tuesday, 2024-03-11 the following Monday.
    let tuesday = repo.tasks_for_date(date(2024, 3, 5)).await.unwrap();
    assert!(tuesday.is_empty());

    let monday = repo.tasks_for_date(date(2024, 3, 11)).await.unwrap();
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].location_code, "B2");
}

#[tokio::test]
async fn schedule_edits_never_regenerate_a_materialized_day() {
    let schedule = SwappableScheduleSource::new(vec![entry("A1", "daily")]);
    let repo = FlatFileRepository::new(schedule.clone(), MemoryLogStore::new());
    let day = date(2024, 3, 1);

    let before = repo.tasks_for_date(day).await.unwrap();
    assert_eq!(before.len(), 1);

    schedule.replace(vec![entry("A1", "daily"), entry("B2", "daily")]);

    let after = repo.tasks_for_date(day).await.unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn zero_match_day_is_not_rechecked_within_a_run() {
    let temp_dir = tempfile::tempdir().unwrap();
    let schedule = SwappableScheduleSource::new(vec![entry("B2", "weekly-mon")]);
    let repo = FlatFileRepository::new(schedule.clone(), CsvLogStore::new(temp_dir.path()));
    let tuesday = date(2024, 3, 5);

    assert!(repo.tasks_for_date(tuesday).await.unwrap().is_empty());

    // The schedule now matches the day, but the date was already handled.
    schedule.replace(vec![entry("A1", "daily")]);
    assert!(repo.tasks_for_date(tuesday).await.unwrap().is_empty());

    // A fresh process run cannot tell an empty day from an unvisited one
    // and evaluates the (new) schedule again.
    let fresh = FlatFileRepository::new(schedule.clone(), CsvLogStore::new(temp_dir.path()));
    assert_eq!(fresh.tasks_for_date(tuesday).await.unwrap().len(), 1);
}

#[tokio::test]
async fn submitted_completions_are_persisted() {
    let (repo, temp_dir) = setup_csv_repo(vec![entry("A1", "daily")]);
    let day = date(2024, 3, 1);

    repo.tasks_for_date(day).await.unwrap();
    let updated = repo
        .submit_completions(day, &["A1".to_string()], "alice")
        .await
        .unwrap();
    assert_eq!(updated, 1);

    // Reload through a fresh repository to prove the file was written.
    let reload_repo = FlatFileRepository::new(
        StaticScheduleSource::new(vec![entry("A1", "daily")]),
        CsvLogStore::new(temp_dir.path()),
    );
    let tasks = reload_repo.tasks_for_date(day).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].is_completed);
    assert_eq!(tasks[0].completed_by.as_deref(), Some("alice"));
    assert!(tasks[0].completion_time.is_some());
    assert!(!tasks[0].is_verified);
}

#[tokio::test]
async fn unknown_codes_mutate_nothing() {
    let (repo, temp_dir) = setup_csv_repo(vec![entry("A1", "daily")]);
    let day = date(2024, 3, 1);
    repo.tasks_for_date(day).await.unwrap();

    let log_path = temp_dir.path().join("2024").join("202403_log.csv");
    let before = std::fs::read_to_string(&log_path).unwrap();

    let updated = repo
        .submit_completions(day, &["ZZ".to_string()], "alice")
        .await
        .unwrap();
    assert_eq!(updated, 0);

    let after = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(before, after);

    let tasks = repo.tasks_for_date(day).await.unwrap();
    assert!(!tasks[0].is_completed);
}

#[tokio::test]
async fn submissions_only_touch_their_own_date() {
    let (repo, _temp_dir) = setup_csv_repo(vec![entry("A1", "daily")]);
    let first_day = date(2024, 3, 1);
    let second_day = date(2024, 3, 2);
    repo.tasks_for_date(first_day).await.unwrap();
    repo.tasks_for_date(second_day).await.unwrap();

    repo.submit_completions(first_day, &["A1".to_string()], "alice")
        .await
        .unwrap();

    let untouched = repo.tasks_for_date(second_day).await.unwrap();
    assert!(!untouched[0].is_completed);
}

#[tokio::test]
async fn missing_schedule_fails_with_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    let repo = FlatFileRepository::new(
        CsvScheduleSource::new(temp_dir.path().join("absent.csv")),
        CsvLogStore::new(temp_dir.path()),
    );

    let result = repo.tasks_for_date(date(2024, 3, 1)).await;
    assert!(matches!(result, Err(CoreError::ScheduleNotFound(_))));
}

#[tokio::test]
async fn each_month_gets_its_own_file() {
    let (repo, temp_dir) = setup_csv_repo(vec![entry("A1", "daily")]);
    repo.tasks_for_date(date(2024, 3, 31)).await.unwrap();
    repo.tasks_for_date(date(2024, 4, 1)).await.unwrap();

    let march_path = temp_dir.path().join("2024").join("202403_log.csv");
    let april_path = temp_dir.path().join("2024").join("202404_log.csv");
    assert!(march_path.exists());
    assert!(april_path.exists());

    // Submitting for April must not rewrite March.
    let march_before = std::fs::read_to_string(&march_path).unwrap();
    repo.submit_completions(date(2024, 4, 1), &["A1".to_string()], "alice")
        .await
        .unwrap();
    assert_eq!(march_before, std::fs::read_to_string(&march_path).unwrap());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// For any date, materializing twice returns the same set and never
        /// produces duplicate (date, location_code) pairs.
        #[test]
        fn materialization_is_idempotent_and_never_duplicates(offset in 0i64..3650) {
            let day = date(2020, 1, 1) + chrono::Duration::days(offset);
            tokio_test::block_on(async move {
                let repo = FlatFileRepository::new(
                    StaticScheduleSource::new(vec![
                        entry("A1", "daily"),
                        entry("B2", "weekly-mon"),
                        entry("C3", "every-7"),
                        entry("D4", "unrecognized"),
                    ]),
                    MemoryLogStore::new(),
                );

                let first = repo.tasks_for_date(day).await.unwrap();
                let second = repo.tasks_for_date(day).await.unwrap();
                prop_assert_eq!(&first, &second);

                let mut codes: Vec<String> =
                    second.iter().map(|t| t.location_code.clone()).collect();
                let total = codes.len();
                codes.sort();
                codes.dedup();
                prop_assert_eq!(total, codes.len());
                Ok(())
            })?;
        }
    }
}
