//! Knowledge base - the fixed keyword-to-guidance table.
//!
//! Replies for recognized topics come from this table. The scan order is part
//! of the contract: the first keyword (in declaration order) that occurs as a
//! substring of the lowercased message wins, so the table is a `Vec`, never a
//! map.

use once_cell::sync::Lazy;

/// A single keyword-to-guidance mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    keyword: &'static str,
    guidance: &'static str,
}

impl KnowledgeEntry {
    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    pub fn guidance(&self) -> &'static str {
        self.guidance
    }
}

/// The ordered keyword table used for direct-match replies.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

/// The standard table. Declaration order (cold, flu, covid, diabetes) is the
/// tie-break for messages that mention several topics.
static STANDARD_ENTRIES: Lazy<Vec<KnowledgeEntry>> = Lazy::new(|| {
    vec![
        KnowledgeEntry {
            keyword: "cold",
            guidance: "Common cold: runny/stuffy nose, sore throat, mild cough. Rest and fluids.",
        },
        KnowledgeEntry {
            keyword: "flu",
            guidance: "Flu: fever, body aches, fatigue. Seek care if high risk or severe symptoms.",
        },
        KnowledgeEntry {
            keyword: "covid",
            guidance: "COVID-19: fever, cough, loss of taste/smell. Isolate if symptomatic and seek testing.",
        },
        KnowledgeEntry {
            keyword: "diabetes",
            guidance: "Diabetes: increased thirst, frequent urination. Manage with diet and medical care.",
        },
    ]
});

impl KnowledgeBase {
    /// Returns the standard four-entry table.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES.clone(),
        }
    }

    /// Scans the table in declaration order and returns the guidance of the
    /// first keyword that occurs as a substring of the message.
    ///
    /// Matching is case-insensitive; the message is lowercased once up front.
    pub fn match_message(&self, message: &str) -> Option<&'static str> {
        let lowered = message.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(entry.keyword))
            .map(|entry| entry.guidance)
    }

    /// All guidance strings, in table order. Feeds the randomized fallback.
    pub fn guidance_values(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.guidance).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
