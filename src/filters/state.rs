use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{filter_days, range::MinAverage};
use crate::models::{DailySummary, MoodEntry};

/// Quick date ranges offered next to the custom bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DatePreset {
    All,
    Today,
    /// `[today - 6, today]`, both ends inclusive.
    Last7Days,
}

impl DatePreset {
    pub fn bounds(&self, today: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match self {
            DatePreset::All => (None, None),
            DatePreset::Today => (Some(today), Some(today)),
            DatePreset::Last7Days => (Some(today - Duration::days(6)), Some(today)),
        }
    }
}

/// Current list filters. Each stage can be cleared on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub keyword: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub min_average: MinAverage,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn clear_keyword(&mut self) {
        self.keyword.clear();
    }

    pub fn clear_dates(&mut self) {
        self.date_from = None;
        self.date_to = None;
    }

    pub fn clear_min_average(&mut self) {
        self.min_average = MinAverage::Any;
    }

    pub fn apply_preset(&mut self, preset: DatePreset, today: NaiveDate) {
        let (from, to) = preset.bounds(today);
        self.date_from = from;
        self.date_to = to;
    }

    pub fn is_active(&self) -> bool {
        !self.keyword.trim().is_empty()
            || self.date_from.is_some()
            || self.date_to.is_some()
            || self.min_average != MinAverage::Any
    }

    pub fn apply(&self, entries: &[MoodEntry]) -> Vec<DailySummary> {
        filter_days(
            entries,
            &self.keyword,
            self.date_from,
            self.date_to,
            self.min_average,
        )
    }
}
