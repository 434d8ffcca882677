use crate::models::HabitRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color(&'static str);

impl Color {
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Completion ranges, ordered from no progress to every habit done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    None,
    Low,
    Medium,
    High,
    Full,
}

impl Bucket {
    pub fn from_count(completed: usize) -> Self {
        match completed {
            0 => Bucket::None,
            1..=2 => Bucket::Low,
            3..=4 => Bucket::Medium,
            5..=6 => Bucket::High,
            _ => Bucket::Full,
        }
    }

    pub fn rank(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(pub [Color; 5]);

impl Palette {
    pub const BLUE: Palette = Palette([
        Color::new("#EDEDED"),
        Color::new("#A5DAFF"),
        Color::new("#4FA8FF"),
        Color::new("#1E90FF"),
        Color::new("#8A2BE2"),
    ]);

    pub const GREEN: Palette = Palette([
        Color::new("#EBEDF0"),
        Color::new("#C6E48B"),
        Color::new("#7BC96F"),
        Color::new("#239A3B"),
        Color::new("#196127"),
    ]);

    pub fn color(&self, bucket: Bucket) -> Color {
        self.0[bucket.rank()]
    }
}

pub fn completed_count(record: &HabitRecord, date: &str) -> usize {
    record
        .days
        .get(date)
        .map(|habits| habits.iter().filter(|done| **done).count())
        .unwrap_or(0)
}

pub fn bucket_for(record: &HabitRecord, date: &str) -> Bucket {
    Bucket::from_count(completed_count(record, date))
}

pub fn color_for(record: &HabitRecord, date: &str, palette: &Palette) -> Color {
    palette.color(bucket_for(record, date))
}
