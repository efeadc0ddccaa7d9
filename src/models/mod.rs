pub mod entry;
pub mod mood;
pub mod summary;

pub use entry::{Location, MoodEntry, DAY_KEY_LEN, TIMESTAMP_FORMAT, UNASSIGNED_ID};
pub use mood::{decode_optional, FoodType, Hobby, MoodType, SleepQuality, SocialActivity};
pub use summary::{average_score, DailySummary};
