//! Round-robin mission selection.

use serde::{Deserialize, Serialize};

/// Mission ids verified in rotation, one per account.
pub const DEFAULT_MISSION_IDS: [&str; 3] = [
    "a4d5f5f4-8cd8-454f-9d36-765fa6cbe5b7",
    "199859ef-4c8b-426d-8ed2-e8945f177d73",
    "cfeef6a5-dc4f-49c8-8a73-6c02a63f10b6",
];

/// Ordered list of mission ids, picked round-robin by account index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionRotation(Vec<String>);

impl MissionRotation {
    pub fn new(ids: Vec<String>) -> Self {
        Self(ids)
    }

    /// Mission for a 1-based account index: 1 → ids[0], 2 → ids[1], wrapping.
    pub fn select(&self, account_index: usize) -> Option<&str> {
        if self.0.is_empty() {
            return None;
        }
        let slot = account_index.saturating_sub(1) % self.0.len();
        self.0.get(slot).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for MissionRotation {
    fn default() -> Self {
        Self(DEFAULT_MISSION_IDS.iter().map(|id| id.to_string()).collect())
    }
}
