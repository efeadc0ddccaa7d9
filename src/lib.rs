mod aggregation;
mod config;
mod error;
mod filters;
mod insights;
mod models;
mod store;
mod utils;

pub use aggregation::group_by_day;
pub use config::{JournalConfig, DEFAULT_STORE_FILE};
pub use error::{DecodeError, StoreError, StoreResult};
pub use filters::{
    day_in_range, filter_by_date_range, filter_by_keyword, filter_by_min_average, filter_days,
    parse_day_key, DatePreset, FilterState, MinAverage, SLIDER_FLOOR,
};
pub use insights::{mood_for_average, overall_average, DayInsight, InsightsCursor, MoodCount};
pub use models::{
    average_score, decode_optional, DailySummary, FoodType, Hobby, Location, MoodEntry, MoodType,
    SleepQuality, SocialActivity, DAY_KEY_LEN, TIMESTAMP_FORMAT, UNASSIGNED_ID,
};
pub use store::{JsonMoodStore, MoodStore};
pub use utils::{init_logging, parse_level};

use anyhow::{Context, Result};

const ENABLE_LOGS: bool = true;

/// The journal a host application holds: one store plus the list filters.
///
/// Screens borrow it; anything that changes entries needs `&mut`, so there is
/// never more than one writer.
pub struct Journal {
    config: JournalConfig,
    store: JsonMoodStore,
    filters: FilterState,
}

impl Journal {
    pub fn open(config: JournalConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir).with_context(|| {
            format!(
                "failed to create journal directory {}",
                config.data_dir.display()
            )
        })?;

        let store_path = config.store_path();
        let store = JsonMoodStore::open(&store_path)
            .with_context(|| format!("failed to open mood store at {}", store_path.display()))?;

        log_info!(
            "Journal ready at {} with {} moods",
            store_path.display(),
            store.len()
        );

        Ok(Self {
            config,
            store,
            filters: FilterState::default(),
        })
    }

    /// Initializes logging from `MOODRING_*` variables and opens the journal.
    pub fn open_from_env() -> Result<Self> {
        let config = JournalConfig::from_env();
        init_logging(config.log_level);
        Self::open(config)
    }

    pub fn config(&self) -> &JournalConfig {
        &self.config
    }

    pub fn store(&self) -> &JsonMoodStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut JsonMoodStore {
        &mut self.store
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// The list view: current entries through the current filters.
    pub fn days(&self) -> Vec<DailySummary> {
        self.filters.apply(self.store.find_all())
    }

    /// Insights ignore the list filters and start at the newest day.
    pub fn insights(&self) -> InsightsCursor {
        InsightsCursor::new(group_by_day(self.store.find_all()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> Journal {
        Journal::open(JournalConfig::new(dir.path().join("nested"))).unwrap()
    }

    #[test]
    fn open_creates_data_dir_and_starts_empty() {
        let dir = TempDir::new().unwrap();
        let journal = open(&dir);
        assert!(dir.path().join("nested").is_dir());
        assert!(journal.store().is_empty());
        assert!(journal.days().is_empty());
        assert!(journal.insights().current().is_none());
    }

    #[test]
    fn journal_round_trip_through_filters() {
        let dir = TempDir::new().unwrap();
        let mut journal = open(&dir);
        let store = journal.store_mut();
        store
            .create(MoodEntry::at(MoodType::Happy, "Sunshine", "2025-10-19 09:12:03"))
            .unwrap();
        store
            .create(MoodEntry::at(MoodType::Sad, "Lost my keys", "2025-10-19 21:05:41"))
            .unwrap();
        store
            .create(MoodEntry::at(MoodType::Relaxed, "Sunday walk", "2025-10-12 16:00:00"))
            .unwrap();

        let days = journal.days();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].average_score, 0.5);
        assert_eq!(days[0].moods[0].note, "Lost my keys");

        let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        journal
            .filters_mut()
            .apply_preset(DatePreset::Last7Days, today);
        assert_eq!(journal.days().len(), 1);

        journal.filters_mut().keyword = "sun".into();
        journal.filters_mut().clear_dates();
        let days = journal.days();
        assert_eq!(days.len(), 2);
        assert!(days.iter().all(|d| d.moods.len() == 1));

        // Insights see the unfiltered view.
        let insights = journal.insights();
        assert_eq!(insights.days().len(), 2);
        assert_eq!(insights.current().unwrap().len(), 2);

        let reopened = open(&dir);
        assert_eq!(reopened.store().len(), 3);
    }

    #[test]
    fn malformed_store_is_fatal_to_open() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("nested");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::write(data_dir.join(DEFAULT_STORE_FILE), "[{").unwrap();

        let err = match Journal::open(JournalConfig::new(&data_dir)) {
            Ok(_) => panic!("malformed store should not open"),
            Err(err) => err,
        };
        assert!(err.downcast_ref::<StoreError>().is_some());
    }
}
