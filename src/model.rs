use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SCHEMA_VERSION: u32 = 1;

pub const DAYS_IN_WEEK: usize = 7;

/// Number of intensity levels, one per palette color.
pub const BUCKET_COUNT: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: DateTime<FixedOffset>,
    pub author: String,
}

impl Event {
    pub fn new(timestamp: DateTime<FixedOffset>, author: impl Into<String>) -> Self {
        Self {
            timestamp,
            author: author.into(),
        }
    }

    /// Calendar date in the event's own offset.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub count: u32,
    /// `None` until the normalizer has run.
    pub bucket: Option<u8>,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            count: 0,
            bucket: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot<'a> {
    #[default]
    Blank,
    Day(&'a Day),
}

impl<'a> Slot<'a> {
    pub fn day(&self) -> Option<&'a Day> {
        match self {
            Slot::Blank => None,
            Slot::Day(day) => Some(*day),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Slot::Blank)
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("week column already holds seven slots")]
pub struct ColumnFull;

/// One week of slots, Sunday at index 0.
///
/// Slots past `len` are unfilled; a column is only complete once
/// [`WeekColumn::fill`] (or enough pushes) brings `len` to seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekColumn<'a> {
    slots: [Slot<'a>; DAYS_IN_WEEK],
    len: usize,
    separator: bool,
}

impl<'a> WeekColumn<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fully blank column dividing two months.
    pub fn separator() -> Self {
        Self {
            slots: [Slot::Blank; DAYS_IN_WEEK],
            len: DAYS_IN_WEEK,
            separator: true,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == DAYS_IN_WEEK
    }

    pub fn is_separator(&self) -> bool {
        self.separator
    }

    pub fn try_push(&mut self, slot: Slot<'a>) -> Result<(), ColumnFull> {
        if self.is_full() {
            return Err(ColumnFull);
        }
        self.slots[self.len] = slot;
        self.len += 1;
        Ok(())
    }

    /// Append up to `count` blanks, stopping at a full column.
    pub fn pad(&mut self, count: usize) {
        self.len = (self.len + count).min(DAYS_IN_WEEK);
    }

    pub fn fill(&mut self) {
        self.len = DAYS_IN_WEEK;
    }

    pub fn get(&self, row: usize) -> Option<Slot<'a>> {
        if row < self.len {
            Some(self.slots[row])
        } else {
            None
        }
    }

    pub fn slots(&self) -> &[Slot<'a>] {
        &self.slots[..self.len]
    }

    pub fn days(&self) -> impl Iterator<Item = &'a Day> + '_ {
        self.slots().iter().filter_map(|slot| slot.day())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid<'a> {
    columns: Vec<WeekColumn<'a>>,
}

impl<'a> Grid<'a> {
    pub(crate) fn from_columns(columns: Vec<WeekColumn<'a>>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[WeekColumn<'a>] {
        &self.columns
    }

    /// Columns a consumer should draw: separator columns are dropped when
    /// month separation is disabled.
    pub fn visible_columns(
        &self,
        month_separation: bool,
    ) -> impl Iterator<Item = &WeekColumn<'a>> + '_ {
        self.columns
            .iter()
            .filter(move |col| month_separation || !col.is_separator())
    }

    pub fn slot(&self, row: usize, column: usize) -> Option<Slot<'a>> {
        self.columns.get(column).and_then(|col| col.get(row))
    }

    pub fn day_count(&self) -> usize {
        self.columns.iter().map(|col| col.days().count()).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotOutput {
    pub date: NaiveDate,
    pub count: u32,
    pub bucket: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnOutput {
    pub separator: bool,
    pub slots: Vec<Option<SlotOutput>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitterCount {
    pub author: String,
    pub commits: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub total_events: usize,
    pub columns: Vec<ColumnOutput>,
    pub top_committers: Vec<CommitterCount>,
}
