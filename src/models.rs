use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color::{Bucket, Color};

pub const HABIT_COUNT: usize = 7;
pub const DAYS_PER_WEEK: usize = 7;

pub type DayHabits = [bool; HABIT_COUNT];

/// Completed habits per ISO date. Serialized as a flat `{ "YYYY-MM-DD": [bool; 7] }` object.
///
/// A day is present only while at least one of its habits is done; an absent
/// day and an all-false day mean the same thing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct HabitRecord {
    pub days: BTreeMap<String, DayHabits>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Zero-based position of the day within its month.
    pub index: usize,
}

impl DayCell {
    pub fn key(&self) -> String {
        date_key(self.date)
    }

    pub fn label(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

pub type WeekRow = [Option<DayCell>; DAYS_PER_WEEK];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// Calendar month, 1 = January.
    pub month: u32,
    pub weeks: Vec<WeekRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCalendar {
    pub year: i32,
    pub months: Vec<MonthGrid>,
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub index: usize,
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct HabitStatus {
    pub index: usize,
    pub name: String,
    pub icon: Option<String>,
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub date: String,
    pub habits: Vec<HabitStatus>,
    pub completed: usize,
    pub bucket: Bucket,
    pub color: Color,
}

#[derive(Debug, Serialize)]
pub struct CalendarCell {
    pub date: String,
    pub index: usize,
    pub completed: usize,
    pub color: Color,
}

#[derive(Debug, Serialize)]
pub struct MonthView {
    pub month: u32,
    pub name: &'static str,
    pub weeks: Vec<Vec<Option<CalendarCell>>>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub months: Vec<MonthView>,
}
