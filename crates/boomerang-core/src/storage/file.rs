//! File-backed backends.
//!
//! Each store is a single JSON object of strings. Writes take an exclusive
//! lock on a sibling `.lock` file and replace the data file atomically.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, instrument, trace};

use crate::Result;
use crate::error::{Error, StorageError};

use super::{CookieJar, Storage};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

fn map_io(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |err| -> Error {
        Error::from(StorageError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}

/// Durable [`Storage`] kept in a JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Read every entry. A missing file is an empty store.
    pub fn entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(map_io(&self.path))?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            Error::from(StorageError::Corrupt {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })
        })
    }

    /// Apply `change` to the entries under an exclusive lock.
    fn update(&self, change: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(map_io(parent))?;
        }

        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(map_io(&lock_path))?;

        lock_file.lock_exclusive().map_err(map_io(&lock_path))?;

        let mut entries = self.entries()?;
        change(&mut entries);

        let content = serde_json::to_string_pretty(&entries).map_err(|e| StorageError::Corrupt {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(map_io(&temp_path))?;

        // Session tokens grant access to the account
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&temp_path)
                .map_err(map_io(&temp_path))?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&temp_path, perms).map_err(map_io(&temp_path))?;
        }

        fs::rename(&temp_path, &self.path).map_err(map_io(&self.path))?;

        lock_file.unlock().map_err(map_io(&lock_path))?;

        trace!(path = %self.path.display(), keys = entries.len(), "Wrote storage file");
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.remove(key))
    }

    #[instrument(skip(self, value), fields(path = %self.path.display()))]
    fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!("Setting storage key");
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn remove(&self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        debug!("Removing storage key");
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

/// A [`CookieJar`] kept in its own JSON file.
///
/// The external login flow is simulated by [`FileCookieJar::set`].
#[derive(Debug, Clone)]
pub struct FileCookieJar {
    store: FileStorage,
}

impl FileCookieJar {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            store: FileStorage::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Deposit a cookie.
    pub fn set(&self, name: &str, value: &str) -> Result<()> {
        self.store.set(name, value)
    }
}

impl CookieJar for FileCookieJar {
    fn get(&self, name: &str) -> Result<Option<String>> {
        self.store.get(name)
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.store.remove(name)
    }
}
