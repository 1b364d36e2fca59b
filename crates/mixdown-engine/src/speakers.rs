//! Speaker identity for chat transcripts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A participant in an article's chat sections.
///
/// Supplied externally with the article metadata; `id` is the identity key
/// and is compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Speaker {
    /// A stand-in speaker for a label the registry does not know, using the
    /// raw label as both id and display name.
    pub fn unknown(raw_label: &str) -> Self {
        Self {
            id: raw_label.to_string(),
            name: raw_label.to_string(),
            role: None,
            avatar: None,
        }
    }
}

/// Lookup table from lower-cased speaker id to speaker metadata.
#[derive(Debug, Clone, Default)]
pub struct SpeakerRegistry {
    by_id: HashMap<String, Speaker>,
}

impl SpeakerRegistry {
    pub fn new(speakers: impl IntoIterator<Item = Speaker>) -> Self {
        let by_id = speakers
            .into_iter()
            .map(|s| (s.id.to_lowercase(), s))
            .collect();
        Self { by_id }
    }

    /// Resolves a raw chat label to a speaker. Total: unknown labels fall
    /// back to [`Speaker::unknown`] instead of failing.
    pub fn resolve(&self, raw_label: &str) -> Speaker {
        match self.by_id.get(&raw_label.to_lowercase()) {
            Some(speaker) => speaker.clone(),
            None => Speaker::unknown(raw_label),
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
