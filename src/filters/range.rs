use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DailySummary;

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Lowest score any mood can have; a slider parked here means "no minimum".
pub const SLIDER_FLOOR: f64 = -2.0;

/// Minimum daily average a day must reach to be shown.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum MinAverage {
    /// No filtering at all.
    #[default]
    Any,
    AtLeast(f64),
}

impl MinAverage {
    /// Maps the insights slider value; the floor position turns filtering off.
    pub fn from_slider(value: f64) -> Self {
        if value <= SLIDER_FLOOR {
            MinAverage::Any
        } else {
            MinAverage::AtLeast(value)
        }
    }

    pub fn admits(&self, average: f64) -> bool {
        match self {
            MinAverage::Any => true,
            MinAverage::AtLeast(threshold) => average >= *threshold,
        }
    }
}

/// Parses a day key; `None` when it is not a `yyyy-MM-dd` date.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).ok()
}

/// Inclusive date-range check. Keys that do not parse pass.
pub fn day_in_range(key: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    let Some(day) = parse_day_key(key) else {
        return true;
    };
    from.map_or(true, |from| day >= from) && to.map_or(true, |to| day <= to)
}

pub fn filter_by_date_range(
    days: Vec<DailySummary>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<DailySummary> {
    days.into_iter()
        .filter(|d| day_in_range(&d.date, from, to))
        .collect()
}

pub fn filter_by_min_average(days: Vec<DailySummary>, min: MinAverage) -> Vec<DailySummary> {
    days.into_iter()
        .filter(|d| min.admits(d.average_score))
        .collect()
}
