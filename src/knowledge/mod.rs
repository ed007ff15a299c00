//! Knowledge store - persistent question/answer memory
//!
//! One flat UTF-8 text file, one `question|answer` record per line, split on
//! the first `|`. Records are replayed in file order at load time; keys are
//! the normalized question and a later duplicate overwrites the earlier
//! answer. Teaching appends to the file without rewriting it, so after a
//! duplicate teach the in-memory view and the file diverge until the next
//! load, which reconciles last-line-wins.
//!
//! The store carries no concurrency guard and assumes a single logical
//! writer; concurrent teaches race on both the map and the file append.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::responder::normalize;

/// One taught question/answer pair.
#[derive(Debug, Clone)]
pub struct Record {
    /// Normalized question, unique within the store.
    pub key: String,
    /// Answer, verbatim as taught.
    pub answer: String,
}

/// In-memory mapping from normalized question to answer, backed by an
/// append-only record file.
///
/// Entries keep their insertion (file) order; the keyword and fuzzy match
/// stages iterate in that order, so the earliest qualifying record wins
/// ties. Overwriting an existing key keeps its original position.
#[derive(Debug)]
pub struct KnowledgeStore {
    path: PathBuf,
    entries: Vec<Record>,
    index: HashMap<String, usize>,
}

impl KnowledgeStore {
    /// Load the store by replaying every record in file order.
    ///
    /// Lines without a `|` separator (blank lines included) are skipped. A
    /// missing file is an empty store; an unreadable one is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut store = Self {
            path: path.as_ref().to_path_buf(),
            entries: Vec::new(),
            index: HashMap::new(),
        };

        if !store.path.exists() {
            info!("No knowledge file at {}, starting empty", store.path.display());
            return Ok(store);
        }

        let contents = std::fs::read_to_string(&store.path)
            .with_context(|| format!("Failed to read {}", store.path.display()))?;

        for line in contents.lines() {
            if let Some((question, answer)) = line.split_once('|') {
                store.insert(normalize(question), answer.to_string());
            }
        }

        info!(
            "Loaded {} knowledge entries from {}",
            store.entries.len(),
            store.path.display()
        );
        Ok(store)
    }

    /// Teach a pair: overwrite in memory and append one record to the file.
    ///
    /// The append is a single write call followed by a flush. The payload
    /// starts with a newline so the record lands on a fresh line even if the
    /// existing file has no trailing newline; the loader tolerates the
    /// resulting blank lines. Existing records are never rewritten.
    pub fn upsert(&mut self, raw_question: &str, answer: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        file.write_all(format!("\n{}|{}", raw_question, answer).as_bytes())
            .with_context(|| format!("Failed to append to {}", self.path.display()))?;
        file.flush()
            .with_context(|| format!("Failed to flush {}", self.path.display()))?;

        self.insert(normalize(raw_question), answer.to_string());
        info!("Learned '{}'", raw_question);
        Ok(())
    }

    /// Answer for an exact normalized key, if taught.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].answer.as_str())
    }

    /// Records in insertion (file) order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter()
    }

    /// Number of distinct normalized keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the backing record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn insert(&mut self, key: String, answer: String) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].answer = answer,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Record { key, answer });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> KnowledgeStore {
        KnowledgeStore::load(dir.path().join("conversations.txt")).unwrap()
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_skips_lines_without_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conversations.txt");
        std::fs::write(&path, "\nWhat is your name?|I am a bot\njust a stray line\nhow are you|fine\n").unwrap();

        let store = KnowledgeStore::load(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("what is your name"), Some("I am a bot"));
        assert_eq!(store.get("how are you"), Some("fine"));
    }

    #[test]
    fn test_answer_keeps_later_separators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conversations.txt");
        std::fs::write(&path, "pipes|a|b|c\n").unwrap();

        let store = KnowledgeStore::load(&path).unwrap();
        assert_eq!(store.get("pipes"), Some("a|b|c"));
    }

    #[test]
    fn test_duplicate_keys_reconcile_last_line_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conversations.txt");
        std::fs::write(&path, "hello|first\nHELLO!|second\n").unwrap();

        let store = KnowledgeStore::load(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("hello"), Some("second"));
    }

    #[test]
    fn test_upsert_appends_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.upsert("What is your name?", "I am a bot").unwrap();
        store.upsert("how are you", "fine").unwrap();

        let reloaded = KnowledgeStore::load(store.path()).unwrap();
        assert_eq!(reloaded.get("what is your name"), Some("I am a bot"));
        assert_eq!(reloaded.get("how are you"), Some("fine"));
    }

    #[test]
    fn test_upsert_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.upsert("hello", "first").unwrap();
        store.upsert("goodbye", "later").unwrap();
        store.upsert("Hello!", "second").unwrap();

        // Overwrite keeps the original position and does not grow the store
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("hello"), Some("second"));
        let keys: Vec<&str> = store.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["hello", "goodbye"]);

        // All three appends are on disk; reload reconciles to the same view
        let reloaded = KnowledgeStore::load(store.path()).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("hello"), Some("second"));
    }

    #[test]
    fn test_append_tolerates_missing_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conversations.txt");
        std::fs::write(&path, "hello|hi there").unwrap();

        let mut store = KnowledgeStore::load(&path).unwrap();
        store.upsert("how are you", "fine").unwrap();

        let reloaded = KnowledgeStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("hello"), Some("hi there"));
        assert_eq!(reloaded.get("how are you"), Some("fine"));
    }
}
