use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-user like/pass record, keyed by ConnectID in `userActions`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserActions {
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub passes: Vec<String>,
    #[serde(default)]
    pub liked_by: Vec<String>,
    #[serde(default)]
    pub matches: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<serde_json::Value>,
}

impl UserActions {
    pub fn has_liked(&self, other: &str) -> bool {
        self.likes.iter().any(|id| id == other)
    }

    pub fn is_liked_by(&self, other: &str) -> bool {
        self.liked_by.iter().any(|id| id == other)
    }

    /// Everyone this user has liked or passed on.
    pub fn acted_on(&self) -> HashSet<&str> {
        self.likes
            .iter()
            .chain(self.passes.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn last_updated_display(&self) -> String {
        match &self.last_updated {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "N/A".to_string(),
        }
    }
}
