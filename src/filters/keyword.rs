use crate::models::MoodEntry;

/// Keeps entries whose note contains `query`, ignoring case.
///
/// Only the note is searched. A blank query keeps everything.
pub fn filter_by_keyword(entries: &[MoodEntry], query: &str) -> Vec<MoodEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|m| m.note.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
