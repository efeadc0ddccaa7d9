//! Durable, identity-stable storage of mood entries.

mod json;

pub use json::JsonMoodStore;

use crate::error::StoreResult;
use crate::models::MoodEntry;

/// CRUD contract the journal screens are written against.
///
/// Mutations take `&mut self`: a store has exactly one writer at a time.
pub trait MoodStore {
    /// All live entries in insertion/load order.
    fn find_all(&self) -> &[MoodEntry];

    fn find_by_id(&self, id: i64) -> Option<&MoodEntry>;

    /// Stores `entry`, assigning the next id when it carries the unassigned
    /// sentinel, and returns the stored copy.
    fn create(&mut self, entry: MoodEntry) -> StoreResult<MoodEntry>;

    /// Replaces the entry with the same id. `Ok(false)` when no entry matched;
    /// nothing is written in that case.
    fn update(&mut self, entry: &MoodEntry) -> StoreResult<bool>;

    /// Removes every entry with the same id and returns how many went.
    /// Deleting an absent id is a successful no-op.
    fn delete(&mut self, entry: &MoodEntry) -> StoreResult<usize>;
}
