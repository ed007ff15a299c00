//! Locale table for intents and fallback messages
//!
//! Date/time triggers and reply strings are data, not code: the table ships
//! with English and Hindi packs and round-trips through the config file, so
//! adding a language is a config edit.

use serde::{Deserialize, Serialize};

/// Trigger tokens and reply strings for one supported language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalePack {
    /// Locale code, e.g. "en" or "hi".
    pub code: String,
    /// Inclusive Unicode code point range owning this locale's script;
    /// `None` for the default Latin pack. Used to pick the fallback
    /// language from the raw input.
    #[serde(default)]
    pub script_range: Option<(u32, u32)>,
    /// Tokens (in normalized form) that trigger the date intent.
    pub date_triggers: Vec<String>,
    /// Tokens (in normalized form) that trigger the time intent.
    pub time_triggers: Vec<String>,
    /// Date reply template; `{date}` is replaced with YYYY-MM-DD.
    pub date_reply: String,
    /// Time reply template; `{time}` is replaced with HH:MM:SS.
    pub time_reply: String,
    /// Reply when no stage matched, including the teach-syntax hint.
    pub fallback: String,
}

impl LocalePack {
    fn english() -> Self {
        Self {
            code: "en".to_string(),
            script_range: None,
            date_triggers: vec!["date".to_string()],
            time_triggers: vec!["time".to_string()],
            date_reply: "Today's date is {date}".to_string(),
            time_reply: "Current time is {time}".to_string(),
            fallback: "I don't understand. Teach me using: teach: question | answer".to_string(),
        }
    }

    fn hindi() -> Self {
        Self {
            code: "hi".to_string(),
            // Devanagari block
            script_range: Some((0x0900, 0x097F)),
            date_triggers: vec!["तारीख".to_string(), "दिनांक".to_string()],
            time_triggers: vec!["समय".to_string()],
            date_reply: "आज की तारीख {date} है".to_string(),
            time_reply: "अभी का समय {time} है".to_string(),
            fallback: "मुझे समझ नहीं आया। मुझे ऐसे सिखाएँ: teach: प्रश्न | उत्तर".to_string(),
        }
    }

    /// Whether any character of `text` falls inside this pack's script range.
    pub fn owns_script(&self, text: &str) -> bool {
        match self.script_range {
            Some((lo, hi)) => text.chars().any(|c| (lo..=hi).contains(&(c as u32))),
            None => false,
        }
    }
}

/// Ordered set of locale packs; the first pack is the default language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable {
    pub packs: Vec<LocalePack>,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self {
            packs: vec![LocalePack::english(), LocalePack::hindi()],
        }
    }
}

impl LocaleTable {
    /// The default-language pack.
    ///
    /// The table always holds at least one pack; config loading replaces an
    /// empty table with the built-in packs.
    pub fn default_pack(&self) -> &LocalePack {
        &self.packs[0]
    }

    /// Pack whose date triggers contain any of `tokens`.
    pub fn date_pack(&self, tokens: &[&str]) -> Option<&LocalePack> {
        self.packs
            .iter()
            .find(|p| tokens.iter().any(|t| p.date_triggers.iter().any(|d| d == t)))
    }

    /// Pack whose time triggers contain any of `tokens`.
    pub fn time_pack(&self, tokens: &[&str]) -> Option<&LocalePack> {
        self.packs
            .iter()
            .find(|p| tokens.iter().any(|t| p.time_triggers.iter().any(|d| d == t)))
    }

    /// Pack for the fallback message: the first pack whose script appears in
    /// the raw input, else the default pack.
    pub fn fallback_pack(&self, raw_input: &str) -> &LocalePack {
        self.packs
            .iter()
            .find(|p| p.owns_script(raw_input))
            .unwrap_or_else(|| self.default_pack())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order() {
        let table = LocaleTable::default();
        assert_eq!(table.default_pack().code, "en");
        assert_eq!(table.packs.len(), 2);
    }

    #[test]
    fn test_date_pack_by_token() {
        let table = LocaleTable::default();
        assert_eq!(table.date_pack(&["the", "date"]).map(|p| p.code.as_str()), Some("en"));
        assert_eq!(table.date_pack(&["तारीख"]).map(|p| p.code.as_str()), Some("hi"));
        assert!(table.date_pack(&["update"]).is_none());
    }

    #[test]
    fn test_fallback_pack_by_script() {
        let table = LocaleTable::default();
        assert_eq!(table.fallback_pack("आप कौन हैं?").code, "hi");
        assert_eq!(table.fallback_pack("who are you?").code, "en");
        assert_eq!(table.fallback_pack("").code, "en");
    }
}
