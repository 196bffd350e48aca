use std::collections::HashSet;

use crate::modules::actions::model::UserActions;
use crate::modules::match_pool::model::UserMatchPool;

#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: String,
    pub matches: usize,
    pub unviewed: usize,
}

/// What a user can still be shown, given what they already acted on.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolAnalysis {
    pub days: Vec<DaySummary>,
    pub total_matches: usize,
    pub unviewed_matches: usize,
    pub acted_on: usize,
    pub available: usize,
    /// Unviewed candidates not yet liked or passed, in pool order.
    pub unviewed_unacted: Vec<String>,
    pub overlap: usize,
}

impl PoolAnalysis {
    pub fn new(actions: Option<&UserActions>, pool: Option<&UserMatchPool>) -> Self {
        let acted_on: HashSet<&str> = actions.map(UserActions::acted_on).unwrap_or_default();

        let mut days = Vec::new();
        let mut available: HashSet<&str> = HashSet::new();
        let mut unviewed_unacted = Vec::new();

        for entry in pool.map(|p| p.daily_entries.as_slice()).unwrap_or_default() {
            days.push(DaySummary {
                date: if entry.date.is_empty() { "Unknown".to_string() } else { entry.date.clone() },
                matches: entry.matches.len(),
                unviewed: entry.unviewed(),
            });

            for candidate in &entry.matches {
                let id = candidate.match_connect_id.as_str();
                if id.is_empty() {
                    continue;
                }
                available.insert(id);
                if !candidate.viewed && !acted_on.contains(id) {
                    unviewed_unacted.push(id.to_string());
                }
            }
        }

        Self {
            total_matches: days.iter().map(|d| d.matches).sum(),
            unviewed_matches: days.iter().map(|d| d.unviewed).sum(),
            days,
            acted_on: acted_on.len(),
            available: available.len(),
            overlap: acted_on.intersection(&available).count(),
            unviewed_unacted,
        }
    }

    pub fn exhausted(&self) -> bool {
        self.unviewed_unacted.is_empty()
    }
}
