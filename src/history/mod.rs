// SPDX-License-Identifier: MPL-2.0
//! Bounded, persisted record of previously generated icons.

mod storage;
mod store;

pub use storage::{FileStorage, HistoryStorage, MemoryStorage};
pub use store::HistoryStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of icons retained; older entries are evicted silently.
pub const HISTORY_LIMIT: usize = 20;

/// A single generated icon together with its originating request.
///
/// Only `url` ever mutates after creation (background removal replaces the
/// payload in place); identity and ordering are fixed at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedIcon {
    pub id: Uuid,
    /// Inline image payload as a `data:` URI.
    pub url: String,
    /// The user's original description, before prompt composition.
    pub prompt: String,
    /// Display name of the style selected at generation time.
    pub style: String,
    pub timestamp: DateTime<Utc>,
}

impl GeneratedIcon {
    /// Creates a new icon with a fresh id and the current time.
    #[must_use]
    pub fn new(url: String, prompt: String, style: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            prompt,
            style,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_icons_get_distinct_ids() {
        let a = GeneratedIcon::new("data:a".into(), "p".into(), "s".into());
        let b = GeneratedIcon::new("data:b".into(), "p".into(), "s".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn json_round_trip_preserves_fields() {
        let icon = GeneratedIcon::new(
            "data:image/png;base64,AAAA".into(),
            "a robotic hummingbird".into(),
            "Soft Clay".into(),
        );
        let json = serde_json::to_string(&icon).expect("serialize");
        let back: GeneratedIcon = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, icon);
    }
}
