use crate::calendar::SUPPORTED_YEARS;
use crate::color::completed_count;
use crate::errors::HabitError;
use crate::models::{DayHabits, HABIT_COUNT, HabitRecord};
use crate::storage::KeyValueStore;
use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

pub const STORAGE_KEY: &str = "habits";

/// Reads the persisted record, falling back to an empty one when the blob is
/// absent or malformed. Days with no completed habit are dropped on the way in.
pub fn load(storage: &impl KeyValueStore) -> HabitRecord {
    let Some(blob) = storage.get(STORAGE_KEY) else {
        return HabitRecord::default();
    };

    match serde_json::from_str::<HabitRecord>(&blob) {
        Ok(mut record) => {
            record.days.retain(|_, habits| habits.iter().any(|done| *done));
            record
        }
        Err(err) => {
            warn!("discarding malformed habit data: {err}");
            HabitRecord::default()
        }
    }
}

pub fn persist(storage: &mut impl KeyValueStore, record: &HabitRecord) -> Result<(), HabitError> {
    let payload = serde_json::to_string(record)?;
    storage.set(STORAGE_KEY, &payload)
}

/// Returns a copy of `record` with habit `index` on `date` flipped.
///
/// A day whose habits all end up unchecked is dropped, so toggling the same
/// slot twice restores the original record exactly.
pub fn toggle(record: &HabitRecord, date: &str, index: usize) -> Result<HabitRecord, HabitError> {
    if index >= HABIT_COUNT {
        return Err(HabitError::OutOfRange {
            index,
            count: HABIT_COUNT,
        });
    }

    let mut updated = record.clone();
    let habits = updated
        .days
        .entry(date.to_string())
        .or_insert([false; HABIT_COUNT]);
    habits[index] = !habits[index];
    if habits.iter().all(|done| !done) {
        updated.days.remove(date);
    }

    Ok(updated)
}

/// Parses a `YYYY-MM-DD` key, limited to the years the calendar renders.
pub fn parse_date(value: &str) -> Result<NaiveDate, HabitError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .filter(|date| SUPPORTED_YEARS.contains(&date.year()))
        .ok_or_else(|| HabitError::InvalidDate(value.to_string()))
}

/// The in-memory record together with the storage it is mirrored to.
#[derive(Debug)]
pub struct HabitStore<S> {
    storage: S,
    record: HabitRecord,
}

impl<S: KeyValueStore> HabitStore<S> {
    pub fn open(storage: S) -> Self {
        let record = load(&storage);
        debug!(days = record.days.len(), "loaded habit record");
        Self { storage, record }
    }

    pub fn record(&self) -> &HabitRecord {
        &self.record
    }

    pub fn completed(&self, date: &str) -> DayHabits {
        self.record
            .days
            .get(date)
            .copied()
            .unwrap_or([false; HABIT_COUNT])
    }

    pub fn completed_count(&self, date: &str) -> usize {
        completed_count(&self.record, date)
    }

    /// Flips one habit and writes the whole record back before adopting it.
    pub fn toggle(&mut self, date: &str, index: usize) -> Result<DayHabits, HabitError> {
        let updated = toggle(&self.record, date, index)?;
        persist(&mut self.storage, &updated)?;
        self.record = updated;
        Ok(self.completed(date))
    }
}
