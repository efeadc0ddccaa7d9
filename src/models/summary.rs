use serde::Serialize;

use super::entry::MoodEntry;

/// All entries of one calendar day, newest first, with the day's mean score.
///
/// Derived on demand from the store contents; never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: String,
    pub moods: Vec<MoodEntry>,
    pub average_score: f64,
}

impl DailySummary {
    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }
}

/// Arithmetic mean of the entries' scores; 0.0 for no entries.
pub fn average_score(entries: &[MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let total: i64 = entries.iter().map(|e| i64::from(e.score())).sum();
    total as f64 / entries.len() as f64
}
