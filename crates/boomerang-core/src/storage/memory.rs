//! In-memory backends.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::Result;
use crate::error::StorageError;

use super::{CookieJar, Storage, parse_cookie_header};

/// Process-local [`Storage`] that forgets everything on drop.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// Process-local [`CookieJar`].
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: RwLock<HashMap<String, String>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a jar from a `Cookie` request header.
    pub fn from_header(header: &str) -> Self {
        Self {
            cookies: RwLock::new(parse_cookie_header(header).into_iter().collect()),
        }
    }

    /// Set a cookie, as an external login flow would.
    pub fn set(&self, name: &str, value: &str) -> Result<()> {
        let mut cookies = self.cookies.write().map_err(|_| StorageError::Poisoned)?;
        cookies.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Result<Option<String>> {
        let cookies = self.cookies.read().map_err(|_| StorageError::Poisoned)?;
        Ok(cookies.get(name).cloned())
    }

    fn remove(&self, name: &str) -> Result<()> {
        let mut cookies = self.cookies.write().map_err(|_| StorageError::Poisoned)?;
        cookies.remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set("username", "alice").unwrap();
        storage.set("username", "bob").unwrap();
        assert_eq!(storage.get("username").unwrap().as_deref(), Some("bob"));
        assert_eq!(storage.len(), 1);

        storage.remove("username").unwrap();
        storage.remove("username").unwrap();
        assert_eq!(storage.get("username").unwrap(), None);
    }

    #[test]
    fn cookie_jar_from_header() {
        let jar = MemoryCookieJar::from_header("jwt=a.b.c; theme=dark");
        assert_eq!(jar.get("jwt").unwrap().as_deref(), Some("a.b.c"));
        assert_eq!(jar.get("theme").unwrap().as_deref(), Some("dark"));

        jar.remove("jwt").unwrap();
        assert_eq!(jar.get("jwt").unwrap(), None);
    }
}
