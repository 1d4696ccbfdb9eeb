//! Recent-search history
//!
//! A bounded, most-recent-first list of past queries stored as a JSON
//! array of strings in a single file. Reads are lenient: a missing or
//! corrupt file behaves like an empty history, so a broken history file
//! can never break search itself.

use parking_lot::Mutex;
use remsearch_core::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Maximum number of queries retained in the history
pub const MAX_RECENT: usize = 10;

/// File-backed recent-search history
///
/// All access goes through an internal mutex, so a single instance can be
/// shared across threads. The file is re-read on every operation; the
/// history is tiny and correctness beats caching here.
pub struct RecentSearches {
    path: PathBuf,
    lock: Mutex<()>,
}

impl RecentSearches {
    /// Create a history backed by the given file path
    ///
    /// The file is created lazily on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecentSearches {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the history, most recent first
    ///
    /// Never fails: a missing file is an empty history, and a corrupt file
    /// is logged and treated as empty.
    pub fn load(&self) -> Vec<String> {
        let _guard = self.lock.lock();
        self.read_unlocked()
    }

    /// Record a query at the front of the history
    ///
    /// An existing equal entry is moved to the front rather than
    /// duplicated, and the list is truncated to [`MAX_RECENT`]. Blank
    /// queries are ignored. Write failures propagate to the caller.
    pub fn save(&self, query: &str) -> Result<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        let _guard = self.lock.lock();
        let mut searches = self.read_unlocked();
        searches.retain(|entry| entry != query);
        searches.insert(0, query.to_string());
        searches.truncate(MAX_RECENT);

        let json = serde_json::to_string(&searches)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Delete the history file
    ///
    /// Succeeds if the file does not exist.
    pub fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn read_unlocked(&self) -> Vec<String> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read recent searches");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(searches) => searches,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt recent-search file, starting empty");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store(dir: &tempfile::TempDir) -> RecentSearches {
        RecentSearches::new(dir.path().join("recent.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        assert!(store(&dir).load().is_empty());
    }

    #[test]
    fn test_save_prepends() {
        let dir = tempdir().unwrap();
        let recent = store(&dir);
        recent.save("first").unwrap();
        recent.save("second").unwrap();
        assert_eq!(recent.load(), vec!["second", "first"]);
    }

    #[test]
    fn test_save_dedups_and_moves_to_front() {
        let dir = tempdir().unwrap();
        let recent = store(&dir);
        recent.save("a").unwrap();
        recent.save("b").unwrap();
        recent.save("a").unwrap();
        assert_eq!(recent.load(), vec!["a", "b"]);
    }

    #[test]
    fn test_capped_at_max_recent() {
        let dir = tempdir().unwrap();
        let recent = store(&dir);
        for i in 0..15 {
            recent.save(&format!("query {}", i)).unwrap();
        }
        let loaded = recent.load();
        assert_eq!(loaded.len(), MAX_RECENT);
        assert_eq!(loaded[0], "query 14");
        assert_eq!(loaded[9], "query 5");
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let dir = tempdir().unwrap();
        let recent = store(&dir);
        recent.save("   ").unwrap();
        recent.save("").unwrap();
        assert!(recent.load().is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let dir = tempdir().unwrap();
        let recent = store(&dir);
        recent.save("  send money  ").unwrap();
        assert_eq!(recent.load(), vec!["send money"]);
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let recent = store(&dir);
        fs::write(recent.path(), "not json at all").unwrap();
        assert!(recent.load().is_empty());
        // And saving over it recovers
        recent.save("fresh").unwrap();
        assert_eq!(recent.load(), vec!["fresh"]);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let recent = store(&dir);
        recent.save("a").unwrap();
        recent.clear().unwrap();
        assert!(recent.load().is_empty());
        assert!(!recent.path().exists());
    }

    #[test]
    fn test_clear_missing_file_is_ok() {
        let dir = tempdir().unwrap();
        assert!(store(&dir).clear().is_ok());
    }
}
