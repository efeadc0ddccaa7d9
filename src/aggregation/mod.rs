//! Day-level grouping of mood entries.

use std::collections::BTreeMap;

use crate::models::{average_score, DailySummary, MoodEntry};

/// Groups entries into one summary per day key.
///
/// Days come back newest first and each day's entries newest first; entries
/// with identical timestamps keep their input order. The input is not touched.
pub fn group_by_day(entries: &[MoodEntry]) -> Vec<DailySummary> {
    let mut days: BTreeMap<&str, Vec<MoodEntry>> = BTreeMap::new();
    for entry in entries {
        days.entry(entry.day_key()).or_default().push(entry.clone());
    }

    days.into_iter()
        .rev()
        .map(|(date, mut moods)| {
            moods.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            let average_score = average_score(&moods);
            DailySummary {
                date: date.to_string(),
                moods,
                average_score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoodType;

    fn entry(id: i64, mood: MoodType, ts: &str) -> MoodEntry {
        let mut e = MoodEntry::at(mood, format!("note {id}"), ts);
        e.id = id;
        e
    }

    #[test]
    fn empty_input_yields_no_days() {
        assert!(group_by_day(&[]).is_empty());
    }

    #[test]
    fn groups_by_day_newest_first() {
        let e1 = entry(1, MoodType::Happy, "2025-10-19 10:00:00");
        let e2 = entry(2, MoodType::Sad, "2025-10-19 09:00:00");
        let e3 = entry(3, MoodType::Neutral, "2025-10-18 12:00:00");
        let input = vec![e2.clone(), e3.clone(), e1.clone()];

        let days = group_by_day(&input);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2025-10-19");
        assert_eq!(days[0].moods, vec![e1, e2]);
        assert_eq!(days[0].average_score, 0.5);
        assert_eq!(days[1].date, "2025-10-18");
        assert_eq!(days[1].moods, vec![e3]);
        assert_eq!(days[1].average_score, 0.0);
        // Input order is left alone.
        assert_eq!(input[0].id, 2);
    }

    #[test]
    fn sunshine_and_lost_keys_share_one_day() {
        let sunshine = entry(1, MoodType::Happy, "2025-10-19 09:12:03");
        let keys = entry(2, MoodType::Sad, "2025-10-19 21:05:41");

        let days = group_by_day(&[sunshine.clone(), keys.clone()]);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, "2025-10-19");
        assert_eq!(days[0].average_score, 0.5);
        assert_eq!(days[0].moods, vec![keys, sunshine]);
    }

    #[test]
    fn identical_timestamps_keep_input_order() {
        let a = entry(1, MoodType::Happy, "2025-10-19 09:00:00");
        let b = entry(2, MoodType::Angry, "2025-10-19 09:00:00");

        let days = group_by_day(&[a.clone(), b.clone()]);
        assert_eq!(days[0].moods, vec![a, b]);
        assert_eq!(days[0].average_score, 0.0);
    }

    #[test]
    fn average_uses_every_entry_of_the_day() {
        let days = group_by_day(&[
            entry(1, MoodType::Happy, "2025-10-19 08:00:00"),
            entry(2, MoodType::Happy, "2025-10-19 09:00:00"),
            entry(3, MoodType::Relaxed, "2025-10-19 10:00:00"),
        ]);
        assert!((days[0].average_score - 5.0 / 3.0).abs() < 1e-9);
    }
}
