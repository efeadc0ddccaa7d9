//! Keyword, date-range and minimum-average filters over the day view.
//!
//! Stages run in a fixed order: keyword on raw entries, then day grouping,
//! then date range, then minimum average.

mod keyword;
mod range;
mod state;

pub use keyword::filter_by_keyword;
pub use range::{
    day_in_range, filter_by_date_range, filter_by_min_average, parse_day_key, MinAverage,
    SLIDER_FLOOR,
};
pub use state::{DatePreset, FilterState};

use chrono::NaiveDate;

use crate::aggregation::group_by_day;
use crate::models::{DailySummary, MoodEntry};

/// Runs the whole pipeline and returns the days to show, newest first.
pub fn filter_days(
    entries: &[MoodEntry],
    keyword: &str,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    min_average: MinAverage,
) -> Vec<DailySummary> {
    let matching = filter_by_keyword(entries, keyword);
    let days = group_by_day(&matching);
    let days = filter_by_date_range(days, date_from, date_to);
    filter_by_min_average(days, min_average)
}
