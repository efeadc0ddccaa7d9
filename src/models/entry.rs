use chrono::Local;
use serde::{Deserialize, Serialize};

use super::mood::{FoodType, Hobby, MoodType, SleepQuality, SocialActivity};

/// `id` value of an entry the store has not assigned yet.
pub const UNASSIGNED_ID: i64 = 0;

/// Fixed, lexicographically sortable timestamp layout.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the date prefix of a timestamp (`yyyy-MM-dd`).
pub const DAY_KEY_LEN: usize = 10;

/// Map position picked for an entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub zoom: f32,
}

/// One logged mood observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "type", alias = "moodType")]
    pub mood: MoodType,
    #[serde(default)]
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep: Option<SleepQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialActivity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hobby: Option<Hobby>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<FoodType>,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl MoodEntry {
    /// A fresh, unassigned entry stamped with the current local time.
    pub fn new(mood: MoodType, note: impl Into<String>) -> Self {
        Self::at(mood, note, Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn at(mood: MoodType, note: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            mood,
            note: note.into(),
            sleep: None,
            social: None,
            hobby: None,
            food: None,
            timestamp: timestamp.into(),
            photo_uri: None,
            location: None,
        }
    }

    pub fn with_sleep(mut self, sleep: SleepQuality) -> Self {
        self.sleep = Some(sleep);
        self
    }

    pub fn with_social(mut self, social: SocialActivity) -> Self {
        self.social = Some(social);
        self
    }

    pub fn with_hobby(mut self, hobby: Hobby) -> Self {
        self.hobby = Some(hobby);
        self
    }

    pub fn with_food(mut self, food: FoodType) -> Self {
        self.food = Some(food);
        self
    }

    pub fn with_photo(mut self, photo_uri: impl Into<String>) -> Self {
        self.photo_uri = Some(photo_uri.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn has_id(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    pub fn score(&self) -> i32 {
        self.mood.score()
    }

    /// Date prefix of the timestamp; the whole timestamp if it is shorter.
    pub fn day_key(&self) -> &str {
        match self.timestamp.char_indices().nth(DAY_KEY_LEN) {
            Some((end, _)) => &self.timestamp[..end],
            None => &self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn day_key_is_date_prefix() {
        let entry = MoodEntry::at(MoodType::Happy, "", "2025-10-19 09:12:03");
        assert_eq!(entry.day_key(), "2025-10-19");
    }

    #[test]
    fn day_key_of_short_timestamp_is_whole_string() {
        let entry = MoodEntry::at(MoodType::Happy, "", "2025-10");
        assert_eq!(entry.day_key(), "2025-10");
    }

    #[test]
    fn new_entry_is_unassigned_and_stamped_in_fixed_format() {
        let entry = MoodEntry::new(MoodType::Relaxed, "tea");
        assert!(!entry.has_id());
        assert!(NaiveDateTime::parse_from_str(&entry.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(entry.timestamp.len(), 19);
    }

    #[test]
    fn legacy_record_without_id_reads_as_sentinel() {
        let json = r#"{"type":"SAD","note":"rain","timestamp":"2025-10-19 21:05:41"}"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, UNASSIGNED_ID);
        assert_eq!(entry.mood, MoodType::Sad);
        assert!(entry.sleep.is_none());
        assert!(entry.location.is_none());
    }

    #[test]
    fn mood_type_field_alias_is_accepted() {
        let json = r#"{"id":4,"moodType":"ANGRY","timestamp":"2025-10-19 21:05:41"}"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.mood, MoodType::Angry);
        assert_eq!(entry.note, "");
    }

    #[test]
    fn serialized_record_uses_persisted_field_names() {
        let entry = MoodEntry::at(MoodType::Happy, "walk", "2025-10-19 09:12:03")
            .with_food(FoodType::FastFood)
            .with_photo("content://photos/1")
            .with_location(Location {
                lat: 52.25,
                lng: -7.11,
                zoom: 15.0,
            });
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "HAPPY");
        assert_eq!(value["food"], "FAST_FOOD");
        assert_eq!(value["photoUri"], "content://photos/1");
        assert_eq!(value["location"]["lat"], 52.25);
        assert!(value.get("sleep").is_none());
        assert!(value.get("social").is_none());
        assert!(value.get("hobby").is_none());
    }

    #[test]
    fn absent_attributes_are_omitted_not_null() {
        let entry = MoodEntry::at(MoodType::Neutral, "", "2025-10-19 09:12:03");
        let value = serde_json::to_value(&entry).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 4);
        for key in ["id", "type", "note", "timestamp"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }

    #[test]
    fn record_without_mood_type_is_rejected() {
        let json = r#"{"id":1,"note":"x","timestamp":"2025-10-18 08:00:00"}"#;
        assert!(serde_json::from_str::<MoodEntry>(json).is_err());
    }
}
