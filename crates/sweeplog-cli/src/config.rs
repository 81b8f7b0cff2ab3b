use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Root directory for the monthly log files.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Path to the cleaning schedule CSV.
    #[serde(default = "default_schedule_path")]
    pub schedule_path: PathBuf,
    /// Path to the user directory CSV.
    #[serde(default = "default_users_path")]
    pub users_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            schedule_path: default_schedule_path(),
            users_path: default_users_path(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("sweeplog.toml"))
            .merge(Env::prefixed("SWEEPLOG_"))
            .extract()
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("log")
}

fn default_schedule_path() -> PathBuf {
    PathBuf::from("cleaning.csv")
}

fn default_users_path() -> PathBuf {
    PathBuf::from("users.csv")
}
