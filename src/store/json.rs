use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{StoreError, StoreResult},
    log_debug, log_info, log_warn,
    models::{MoodEntry, UNASSIGNED_ID},
};

use super::MoodStore;

const ENABLE_LOGS: bool = true;

/// Mood entries kept in memory and mirrored to a pretty-printed JSON array.
///
/// Every successful mutation rewrites the whole file. If a write fails the
/// in-memory collection keeps the change and the file lags behind until the
/// next successful persist.
#[derive(Debug)]
pub struct JsonMoodStore {
    path: PathBuf,
    moods: Vec<MoodEntry>,
    /// Highest id ever handed out or seen on disk.
    last_id: i64,
}

impl JsonMoodStore {
    /// Opens the store backed by `path`, loading it if the file exists.
    ///
    /// Records without an id (written by older versions) get one in file
    /// order, and the file is rewritten once if any record changed.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let mut store = Self {
            path,
            moods: Vec::new(),
            last_id: 0,
        };

        if store.path.exists() {
            store.moods = load(&store.path)?;
            log_info!(
                "Loaded {} moods from {}",
                store.moods.len(),
                store.path.display()
            );

            let assigned = store.backfill_ids()?;
            if assigned > 0 {
                log_info!("Assigned ids to {assigned} legacy moods");
                store.persist()?;
            }
        } else {
            log_debug!("No mood file at {}; starting empty", store.path.display());
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }

    /// The allocation watermark; the next new id is `last_id() + 1`.
    pub fn last_id(&self) -> i64 {
        self.last_id
    }

    fn next_id(&mut self) -> StoreResult<i64> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::IdsExhausted {
                path: self.path.clone(),
            })?;
        self.last_id = next;
        Ok(next)
    }

    /// Single pass in file order: unassigned records take the next id, assigned
    /// ones raise the watermark. Returns how many records were assigned.
    fn backfill_ids(&mut self) -> StoreResult<usize> {
        let mut assigned = 0;
        for index in 0..self.moods.len() {
            let id = self.moods[index].id;
            if id == UNASSIGNED_ID {
                self.moods[index].id = self.next_id()?;
                assigned += 1;
            } else if id > self.last_id {
                self.last_id = id;
            }
        }
        Ok(assigned)
    }

    fn persist(&self) -> StoreResult<()> {
        let serialized =
            serde_json::to_string_pretty(&self.moods).map_err(|source| StoreError::Serialize {
                path: self.path.clone(),
                source,
            })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, serialized).map_err(|source| {
            log_warn!("Failed to save moods to {}: {source}", self.path.display());
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        log_info!("Saved {} moods to JSON.", self.moods.len());
        Ok(())
    }
}

fn load(path: &Path) -> StoreResult<Vec<MoodEntry>> {
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl MoodStore for JsonMoodStore {
    fn find_all(&self) -> &[MoodEntry] {
        &self.moods
    }

    fn find_by_id(&self, id: i64) -> Option<&MoodEntry> {
        self.moods.iter().find(|m| m.id == id)
    }

    fn create(&mut self, mut entry: MoodEntry) -> StoreResult<MoodEntry> {
        if entry.id == UNASSIGNED_ID {
            entry.id = self.next_id()?;
        } else if self.find_by_id(entry.id).is_some() {
            let taken = entry.id;
            entry.id = self.next_id()?;
            log_warn!("Mood id {taken} already in use; stored as {}", entry.id);
        } else if entry.id > self.last_id {
            self.last_id = entry.id;
        }
        self.moods.push(entry.clone());
        self.persist()?;
        Ok(entry)
    }

    fn update(&mut self, entry: &MoodEntry) -> StoreResult<bool> {
        let Some(slot) = self.moods.iter_mut().find(|m| m.id == entry.id) else {
            log_debug!("Update skipped: no mood with id {}", entry.id);
            return Ok(false);
        };
        *slot = entry.clone();
        self.persist()?;
        Ok(true)
    }

    fn delete(&mut self, entry: &MoodEntry) -> StoreResult<usize> {
        let before = self.moods.len();
        self.moods.retain(|m| m.id != entry.id);
        let removed = before - self.moods.len();
        if removed == 0 {
            log_debug!("Delete skipped: no mood with id {}", entry.id);
            return Ok(0);
        }
        self.persist()?;
        Ok(removed)
    }
}
