//! Aggregate statistics for the insights screen: one day at a time.

use serde::Serialize;

use crate::models::{DailySummary, MoodType};

/// Buckets a daily average back onto the mood scale.
///
/// Thresholds sit halfway between neighbouring scores: 1.5, 0.5, -0.5, -1.5.
pub fn mood_for_average(average: f64) -> MoodType {
    if average >= 1.5 {
        MoodType::Happy
    } else if average >= 0.5 {
        MoodType::Relaxed
    } else if average >= -0.5 {
        MoodType::Neutral
    } else if average >= -1.5 {
        MoodType::Sad
    } else {
        MoodType::Angry
    }
}

/// Mean score over every entry of every day; 0.0 when there are none.
pub fn overall_average(days: &[DailySummary]) -> f64 {
    let count: usize = days.iter().map(DailySummary::len).sum();
    if count == 0 {
        return 0.0;
    }
    let total: i64 = days
        .iter()
        .flat_map(|d| d.moods.iter())
        .map(|m| i64::from(m.score()))
        .sum();
    total as f64 / count as f64
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodCount {
    pub mood: MoodType,
    pub count: usize,
}

/// What the ring chart and legend show for a single day.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayInsight {
    pub date: String,
    pub average_score: f64,
    pub average_mood: MoodType,
    /// Every mood type in declaration order, zero counts included.
    pub counts: Vec<MoodCount>,
}

impl DayInsight {
    pub fn from_summary(day: &DailySummary) -> Self {
        let counts = MoodType::ALL
            .iter()
            .map(|&mood| MoodCount {
                mood,
                count: day.moods.iter().filter(|m| m.mood == mood).count(),
            })
            .collect();

        Self {
            date: day.date.clone(),
            average_score: day.average_score,
            average_mood: mood_for_average(day.average_score),
            counts,
        }
    }

    pub fn count_of(&self, mood: MoodType) -> usize {
        self.counts
            .iter()
            .find(|c| c.mood == mood)
            .map_or(0, |c| c.count)
    }
}

/// Day-by-day navigation over summaries ordered newest first.
///
/// "Previous" walks back in time (towards the end of the list), "next" walks
/// forward towards the newest day at index 0.
#[derive(Debug, Clone, Default)]
pub struct InsightsCursor {
    days: Vec<DailySummary>,
    index: usize,
}

impl InsightsCursor {
    pub fn new(days: Vec<DailySummary>) -> Self {
        Self { days, index: 0 }
    }

    pub fn days(&self) -> &[DailySummary] {
        &self.days
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&DailySummary> {
        self.days.get(self.index)
    }

    pub fn current_insight(&self) -> Option<DayInsight> {
        self.current().map(DayInsight::from_summary)
    }

    pub fn can_go_prev(&self) -> bool {
        self.index + 1 < self.days.len()
    }

    pub fn can_go_next(&self) -> bool {
        self.index > 0
    }

    pub fn prev_day(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn next_day(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.index -= 1;
        true
    }
}
