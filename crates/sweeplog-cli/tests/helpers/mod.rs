use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands against a temporary data directory
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    /// Create a harness with a schedule and user directory in place
    pub fn new() -> Self {
        let harness = Self::empty();
        harness.write_schedule(
            "location_code,location_name,team,frequency\n\
             A1,Front lobby,Team 1,daily\n\
             B2,East stairwell,Team 2,weekly-mon\n\
             C3,Loading dock,Team 1,every-7\n",
        );
        harness.write_users(
            "userid,permission,password\n\
             alice,0,sweep-pass\n\
             inspector,1,\n",
        );
        harness
    }

    /// Create a harness with no fixture files at all
    pub fn empty() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    pub fn write_schedule(&self, contents: &str) {
        std::fs::write(self.temp_dir.path().join("cleaning.csv"), contents)
            .expect("Failed to write schedule fixture");
    }

    pub fn write_users(&self, contents: &str) {
        std::fs::write(self.temp_dir.path().join("users.csv"), contents)
            .expect("Failed to write users fixture");
    }

    /// Get a Command instance configured for this harness
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("sweeplog").expect("Failed to find sweeplog binary");

        cmd.current_dir(self.temp_dir.path());
        cmd.env("SWEEPLOG_LOG_DIR", self.temp_dir.path().join("log"));
        cmd.env(
            "SWEEPLOG_SCHEDULE_PATH",
            self.temp_dir.path().join("cleaning.csv"),
        );
        cmd.env(
            "SWEEPLOG_USERS_PATH",
            self.temp_dir.path().join("users.csv"),
        );

        cmd
    }

    /// Path of the monthly log file for a `YYYY`/`YYYYMM` pair
    pub fn log_path(&self, year: &str, month: &str) -> PathBuf {
        self.temp_dir
            .path()
            .join("log")
            .join(year)
            .join(format!("{}_log.csv", month))
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}
