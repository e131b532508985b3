use crate::error::{GitheatError, Result};
use crate::model::{Day, Grid, Slot, WeekColumn};
use crate::util::{is_last_day_of_month, sunday_index};
use std::mem;

/// Lay out consecutive days as Sunday-first week columns.
///
/// Every month ends its column early (the rest is blank), is followed by a
/// fully blank separator column, and the next month starts in a fresh column
/// whose leading blanks put its first day on the right weekday row. The
/// separators are always present; [`Grid::visible_columns`] hides them.
/// A month ending on the last day of `days` gets no trailing separator,
/// since nothing follows it.
pub fn build_grid(days: &[Day]) -> Result<Grid<'_>> {
    let first = days.first().ok_or(GitheatError::EmptyWindow)?;

    let mut columns = Vec::with_capacity(days.len() / 7 + 26);
    let mut current = WeekColumn::new();
    current.pad(sunday_index(first.date));

    for (i, day) in days.iter().enumerate() {
        if current.is_full() {
            columns.push(mem::take(&mut current));
        }
        current.try_push(Slot::Day(day))?;

        let Some(next) = days.get(i + 1) else {
            break;
        };
        if is_last_day_of_month(day.date) {
            current.fill();
            columns.push(mem::take(&mut current));
            columns.push(WeekColumn::separator());
            current.pad(sunday_index(next.date));
        }
    }

    current.fill();
    columns.push(current);
    Ok(Grid::from_columns(columns))
}
