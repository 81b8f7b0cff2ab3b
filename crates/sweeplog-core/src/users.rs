use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::schedule::strip_bom;

/// Permission level from the user file: `0` cleaners, `1` inspectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Cleaner,
    Inspector,
}

impl Permission {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Permission::Cleaner),
            1 => Some(Permission::Inspector),
            _ => None,
        }
    }
}

/// An authenticated identity, passed explicitly into completion
/// submissions. There is no session state.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: String,
    pub permission: Permission,
}

/// User directory read from a CSV file with rows `user_id,permission[,...]`.
///
/// The shared inspector password sits in the third column of the first data
/// row; the file format predates this tool and is kept as-is.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: BTreeMap<String, Permission>,
    shared_password: Option<String>,
}

impl UserDirectory {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = match tokio::fs::read(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CoreError::UsersNotFound(PathBuf::from(path)));
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(strip_bom(&raw));

        let mut directory = UserDirectory::default();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let user_id = match record.get(0) {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => continue,
            };
            let permission = record
                .get(1)
                .and_then(|code| code.trim().parse::<u8>().ok())
                .and_then(Permission::from_code)
                .ok_or_else(|| {
                    CoreError::InvalidInput(format!("bad permission for user '{}'", user_id))
                })?;

            if index == 0 {
                directory.shared_password = record
                    .get(2)
                    .filter(|password| !password.is_empty())
                    .map(String::from);
            }
            directory.users.insert(user_id, permission);
        }

        Ok(directory)
    }

    /// Known user ids, sorted.
    pub fn user_ids(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    pub fn requires_password(&self, user_id: &str) -> bool {
        matches!(self.users.get(user_id), Some(Permission::Inspector))
    }

    /// Checks a login attempt. Inspectors must present the shared password;
    /// cleaners sign in with their id alone.
    pub fn authenticate(
        &self,
        user_id: &str,
        password: Option<&str>,
    ) -> Result<User, CoreError> {
        let permission = self
            .users
            .get(user_id)
            .copied()
            .ok_or_else(|| CoreError::UnknownUser(user_id.to_string()))?;

        if permission == Permission::Inspector {
            match (self.shared_password.as_deref(), password) {
                (Some(expected), Some(given)) if expected == given => {}
                _ => return Err(CoreError::InvalidPassword),
            }
        }

        Ok(User {
            user_id: user_id.to_string(),
            permission,
        })
    }
}
