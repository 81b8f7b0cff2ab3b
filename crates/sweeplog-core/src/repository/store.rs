use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;

use crate::error::CoreError;
use crate::models::{MonthKey, TaskInstance};
use crate::schedule::strip_bom;

/// Persistence seam for monthly logs. Keyed by calendar month; a month is
/// always loaded and saved as a whole.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn load(&self, month: MonthKey) -> Result<Vec<TaskInstance>, CoreError>;
    async fn save(&self, month: MonthKey, rows: &[TaskInstance]) -> Result<(), CoreError>;
}

/// Monthly logs as CSV files under `<root>/<YYYY>/<YYYYMM>_log.csv`.
///
/// A missing month file loads as an empty log. Saves go through a temp file
/// in the same directory followed by a rename, so an interrupted write
/// leaves the previous log intact.
pub struct CsvLogStore {
    root: PathBuf,
}

impl CsvLogStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn month_path(&self, month: MonthKey) -> PathBuf {
        self.root
            .join(month.year.to_string())
            .join(format!("{}_log.csv", month))
    }
}

#[async_trait]
impl LogStore for CsvLogStore {
    async fn load(&self, month: MonthKey) -> Result<Vec<TaskInstance>, CoreError> {
        let path = self.month_path(month);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::Reader::from_reader(strip_bom(&raw));
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        Ok(rows)
    }

    async fn save(&self, month: MonthKey, rows: &[TaskInstance]) -> Result<(), CoreError> {
        let path = self.month_path(month);
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        let mut data = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut data);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }

        let tmp = path.with_extension("csv.tmp");
        tokio::fs::write(&tmp, &data).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

/// In-memory log store, the test double for the flat-file layout.
#[derive(Default)]
pub struct MemoryLogStore {
    months: Mutex<HashMap<MonthKey, Vec<TaskInstance>>>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw contents of one month, for assertions.
    pub async fn month(&self, month: MonthKey) -> Vec<TaskInstance> {
        self.months
            .lock()
            .await
            .get(&month)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn load(&self, month: MonthKey) -> Result<Vec<TaskInstance>, CoreError> {
        Ok(self
            .months
            .lock()
            .await
            .get(&month)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, month: MonthKey, rows: &[TaskInstance]) -> Result<(), CoreError> {
        self.months.lock().await.insert(month, rows.to_vec());
        Ok(())
    }
}
