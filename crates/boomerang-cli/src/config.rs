//! Runtime configuration.
//!
//! Durable storage lives at `<data dir>/storage.json` and cookies at
//! `<data dir>/cookies.json`. The data dir comes from `--data-dir`,
//! `BOOMERANG_DATA_DIR`, or the platform data directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use boomerang_core::{FileCookieJar, FileStorage, SessionStore};

const STORAGE_FILE: &str = "storage.json";
const COOKIE_FILE: &str = "cookies.json";

pub type FileSessionStore = SessionStore<FileStorage, FileCookieJar>;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => ProjectDirs::from("", "", "boomerang")
                .context("Could not determine data directory")?
                .data_dir()
                .to_path_buf(),
        };

        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        Ok(Self { data_dir })
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }

    pub fn cookie_path(&self) -> PathBuf {
        self.data_dir.join(COOKIE_FILE)
    }

    pub fn cookie_jar(&self) -> FileCookieJar {
        FileCookieJar::new(self.cookie_path())
    }

    pub fn session_store(&self) -> FileSessionStore {
        SessionStore::new(FileStorage::new(self.storage_path()), self.cookie_jar())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_live_under_data_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::resolve(Some(dir.path().join("data"))).unwrap();

        assert!(config.data_dir.is_dir());
        assert_eq!(config.storage_path(), dir.path().join("data/storage.json"));
        assert_eq!(config.cookie_path(), dir.path().join("data/cookies.json"));
    }
}
