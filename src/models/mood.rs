//! Mood categories and the optional context attributes of an entry.
//!
//! Every enumeration persists as its upper-snake tag (`"HAPPY"`, `"FAST_FOOD"`)
//! and decodes UI labels through an exhaustive `from_label`.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Turns a display label such as `"Fast food"` or `"Happy 😊"` into the
/// persisted tag form (`"FAST_FOOD"`, `"HAPPY"`).
fn normalize_tag(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '_')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_ascii_uppercase()
}

fn unknown(kind: &'static str, label: &str) -> DecodeError {
    DecodeError::UnknownTag {
        kind,
        tag: label.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoodType {
    Happy,
    Relaxed,
    Neutral,
    Sad,
    Angry,
}

impl MoodType {
    /// Declaration order; insights list counts in this order.
    pub const ALL: [MoodType; 5] = [
        MoodType::Happy,
        MoodType::Relaxed,
        MoodType::Neutral,
        MoodType::Sad,
        MoodType::Angry,
    ];

    /// Positive for pleasant moods, negative for unpleasant ones.
    pub fn score(&self) -> i32 {
        match self {
            MoodType::Happy => 2,
            MoodType::Relaxed => 1,
            MoodType::Neutral => 0,
            MoodType::Sad => -1,
            MoodType::Angry => -2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodType::Happy => "Happy 😊",
            MoodType::Relaxed => "Relaxed 😌",
            MoodType::Neutral => "Neutral 😐",
            MoodType::Sad => "Sad 😢",
            MoodType::Angry => "Angry 😠",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodType::Happy => "HAPPY",
            MoodType::Relaxed => "RELAXED",
            MoodType::Neutral => "NEUTRAL",
            MoodType::Sad => "SAD",
            MoodType::Angry => "ANGRY",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, DecodeError> {
        match normalize_tag(label).as_str() {
            "HAPPY" => Ok(MoodType::Happy),
            "RELAXED" => Ok(MoodType::Relaxed),
            "NEUTRAL" => Ok(MoodType::Neutral),
            "SAD" => Ok(MoodType::Sad),
            "ANGRY" => Ok(MoodType::Angry),
            _ => Err(unknown("mood type", label)),
        }
    }
}

/// How well the user slept the night before.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SleepQuality {
    Good,
    Medium,
    Poor,
}

impl SleepQuality {
    pub fn from_label(label: &str) -> Result<Self, DecodeError> {
        match normalize_tag(label).as_str() {
            "GOOD" => Ok(SleepQuality::Good),
            "MEDIUM" => Ok(SleepQuality::Medium),
            "POOR" => Ok(SleepQuality::Poor),
            _ => Err(unknown("sleep quality", label)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SocialActivity {
    Family,
    Friends,
    Date,
    Party,
}

impl SocialActivity {
    pub fn from_label(label: &str) -> Result<Self, DecodeError> {
        match normalize_tag(label).as_str() {
            "FAMILY" => Ok(SocialActivity::Family),
            "FRIENDS" => Ok(SocialActivity::Friends),
            "DATE" => Ok(SocialActivity::Date),
            "PARTY" => Ok(SocialActivity::Party),
            _ => Err(unknown("social activity", label)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Hobby {
    Movies,
    Reading,
    Games,
    Sport,
    Relaxation,
}

impl Hobby {
    pub fn from_label(label: &str) -> Result<Self, DecodeError> {
        match normalize_tag(label).as_str() {
            "MOVIES" => Ok(Hobby::Movies),
            "READING" => Ok(Hobby::Reading),
            "GAMES" => Ok(Hobby::Games),
            "SPORT" => Ok(Hobby::Sport),
            "RELAXATION" => Ok(Hobby::Relaxation),
            _ => Err(unknown("hobby", label)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodType {
    Healthy,
    FastFood,
    Homemade,
    Restaurant,
    NoSugar,
}

impl FoodType {
    pub fn from_label(label: &str) -> Result<Self, DecodeError> {
        match normalize_tag(label).as_str() {
            "HEALTHY" => Ok(FoodType::Healthy),
            "FAST_FOOD" => Ok(FoodType::FastFood),
            "HOMEMADE" => Ok(FoodType::Homemade),
            "RESTAURANT" => Ok(FoodType::Restaurant),
            "NO_SUGAR" => Ok(FoodType::NoSugar),
            _ => Err(unknown("food type", label)),
        }
    }
}

/// Decodes an optional UI selection; absent or blank means "not chosen".
pub fn decode_optional<T>(
    label: Option<&str>,
    decode: impl Fn(&str) -> Result<T, DecodeError>,
) -> Result<Option<T>, DecodeError> {
    match label.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => decode(raw).map(Some),
    }
}
