use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::CoreError;
use crate::models::ScheduleEntry;

/// Source of the cleaning schedule. Loaded in full on every
/// materialization check; there is no caching layer by design.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn load(&self) -> Result<Vec<ScheduleEntry>, CoreError>;
}

/// Schedule read from a CSV file with columns
/// `location_code,location_name,team,frequency`.
pub struct CsvScheduleSource {
    path: PathBuf,
}

impl CsvScheduleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl ScheduleSource for CsvScheduleSource {
    async fn load(&self) -> Result<Vec<ScheduleEntry>, CoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CoreError::ScheduleNotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::Reader::from_reader(strip_bom(&raw));
        let mut entries = Vec::new();
        for record in reader.deserialize() {
            entries.push(record?);
        }
        Ok(entries)
    }
}

/// Fixed in-memory schedule, for tests and embedding.
pub struct StaticScheduleSource {
    entries: Vec<ScheduleEntry>,
}

impl StaticScheduleSource {
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl ScheduleSource for StaticScheduleSource {
    async fn load(&self) -> Result<Vec<ScheduleEntry>, CoreError> {
        Ok(self.entries.clone())
    }
}

/// Schedule and user files exported from spreadsheets often carry a UTF-8 BOM.
pub(crate) fn strip_bom(raw: &[u8]) -> &[u8] {
    raw.strip_prefix(b"\xef\xbb\xbf".as_slice()).unwrap_or(raw)
}
