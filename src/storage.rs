//! Durable local key/value storage.
//!
//! Values are opaque strings. Nothing here is transactional: a `set` either
//! lands or returns an error, and callers decide whether that matters.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key inside `dir`. Writes go through `<file>.tmp` and a rename
/// so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(file)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(s) => Some(s),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("failed to read {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let written = write_then_rename(&tmp, &path, value.as_bytes());
        if written.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        Ok(written?)
    }
}

fn write_then_rename(tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(tmp, path)
}

/// Accepts reads as empty and rejects every write.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingStorage;

#[cfg(test)]
impl Storage for FailingStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(crate::error::Error::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only storage",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_get_set() {
        let mut s = MemoryStorage::new();
        assert_eq!(s.get("dh_lang"), None);
        s.set("dh_lang", "de").unwrap();
        s.set("dh_lang", "en").unwrap();
        assert_eq!(s.get("dh_lang").as_deref(), Some("en"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn file_storage_creates_dir_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = FileStorage::new(tmp.path().join("nested"));
        assert_eq!(s.get("daggerheart-resources-player"), None);

        s.set("daggerheart-resources-player", "[]").unwrap();
        s.set("daggerheart-resources-player", "[1]").unwrap();
        assert_eq!(s.get("daggerheart-resources-player").as_deref(), Some("[1]"));
        assert!(!s.dir().join("daggerheart-resources-player.tmp").exists());
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = FileStorage::new(tmp.path());
        // A non-empty directory at the target path makes the rename fail.
        let target = tmp.path().join("dh_lang");
        fs::create_dir_all(target.join("occupied")).unwrap();

        assert!(s.set("dh_lang", "de").is_err());
        assert!(!tmp.path().join("dh_lang.tmp").exists());
        assert!(target.is_dir());
    }

    #[test]
    fn file_storage_keeps_keys_inside_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = FileStorage::new(tmp.path());
        s.set("../escape", "x").unwrap();
        assert!(tmp.path().join("___escape").exists());
        assert_eq!(s.get("../escape").as_deref(), Some("x"));
    }
}
