//! Responder - intent dispatch over the knowledge store
//!
//! Evaluates intents in fixed priority order: teach command, date query,
//! time query, stored answers, fallback. Teaching is the only stage with a
//! side effect.

pub mod matcher;
pub mod normalize;

pub use normalize::normalize;

use anyhow::Result;
use chrono::Local;
use thiserror::Error;
use tracing::error;

use crate::knowledge::KnowledgeStore;
use crate::locale::LocaleTable;

/// Case-insensitive prefix marking a teach command.
const TEACH_PREFIX: &str = "teach:";

/// Reply when the backing file cannot be written during a teach.
const STORAGE_FAILURE_REPLY: &str = "Sorry, I could not save that. Please try again.";

/// Why a teach command could not be parsed. Recovered locally into the
/// fixed format-error reply; never surfaced to callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TeachParseError {
    #[error("missing '|' separator")]
    MissingSeparator,
    #[error("empty question")]
    EmptyQuestion,
    #[error("empty answer")]
    EmptyAnswer,
}

/// Rule-based responder owning the knowledge store and locale table.
pub struct Responder {
    store: KnowledgeStore,
    locales: LocaleTable,
}

impl Responder {
    pub fn new(store: KnowledgeStore, locales: LocaleTable) -> Self {
        Self { store, locales }
    }

    /// Respond to raw input. Always returns a reply string: a failing
    /// storage medium is logged and reported as an apology, so callers
    /// never see a fault.
    pub fn respond(&mut self, raw_input: &str) -> String {
        match self.respond_checked(raw_input) {
            Ok(reply) => reply,
            Err(e) => {
                error!("Storage failure while responding: {:#}", e);
                STORAGE_FAILURE_REPLY.to_string()
            }
        }
    }

    /// Respond to raw input, propagating storage-medium failures.
    ///
    /// Everything else (malformed teach commands, unmatched input) is
    /// translated into an ordinary reply.
    pub fn respond_checked(&mut self, raw_input: &str) -> Result<String> {
        // Teach works on the raw input so the stored question keeps its
        // original casing and punctuation on disk.
        if let Some(prefix) = raw_input.get(..TEACH_PREFIX.len()) {
            if prefix.eq_ignore_ascii_case(TEACH_PREFIX) {
                return self.teach(&raw_input[TEACH_PREFIX.len()..]);
            }
        }

        let normalized = normalize(raw_input);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        if let Some(pack) = self.locales.date_pack(&tokens) {
            let date = Local::now().format("%Y-%m-%d").to_string();
            return Ok(pack.date_reply.replace("{date}", &date));
        }

        if let Some(pack) = self.locales.time_pack(&tokens) {
            let time = Local::now().format("%H:%M:%S").to_string();
            return Ok(pack.time_reply.replace("{time}", &time));
        }

        if let Some(answer) = matcher::resolve(&normalized, &self.store) {
            return Ok(answer.to_string());
        }

        Ok(self.locales.fallback_pack(raw_input).fallback.clone())
    }

    /// Read access to the knowledge store (status reporting, tests).
    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    fn teach(&mut self, rest: &str) -> Result<String> {
        match parse_teach(rest) {
            Ok((question, answer)) => {
                self.store.upsert(question, answer)?;
                Ok(format!("Learned: '{}' -> '{}'", question, answer))
            }
            Err(_) => Ok("Invalid teach format. Use: teach: question | answer".to_string()),
        }
    }
}

/// Split the text after the teach prefix into a trimmed question and answer.
fn parse_teach(rest: &str) -> Result<(&str, &str), TeachParseError> {
    let (question, answer) = rest.split_once('|').ok_or(TeachParseError::MissingSeparator)?;
    let question = question.trim();
    let answer = answer.trim();
    if question.is_empty() {
        return Err(TeachParseError::EmptyQuestion);
    }
    if answer.is_empty() {
        return Err(TeachParseError::EmptyAnswer);
    }
    Ok((question, answer))
}
