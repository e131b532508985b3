use crate::error::{GitheatError, Result};
use crate::model::Day;
use crate::util::sunday_index;
use chrono::{Days, Months, NaiveDate};
use tracing::debug;

/// The contiguous run of days the heatmap covers, one zeroed [`Day`] per date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    start: NaiveDate,
    end: NaiveDate,
    days: Vec<Day>,
}

impl Window {
    /// One year and one week back from `today`, moved forward to a Sunday.
    pub fn ending(today: NaiveDate) -> Result<Self> {
        let raw_start = today
            .checked_sub_months(Months::new(12))
            .and_then(|d| d.checked_sub_days(Days::new(7)))
            .ok_or_else(|| GitheatError::InvalidDate(format!("no year before {today}")))?;
        let start = first_sunday_from(raw_start)?;
        debug!(%raw_start, %start, end = %today, "computed window");
        Self::between(start, today)
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(GitheatError::InvalidDate(format!(
                "window start {start} is after end {end}"
            )));
        }
        let days = start.iter_days().take_while(|d| *d <= end).map(Day::new).collect();
        Ok(Self { start, end, days })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn days_mut(&mut self) -> &mut [Day] {
        &mut self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn day_mut(&mut self, date: NaiveDate) -> Option<&mut Day> {
        if !self.contains(date) {
            return None;
        }
        let offset = (date - self.start).num_days() as usize;
        self.days.get_mut(offset)
    }
}

fn first_sunday_from(date: NaiveDate) -> Result<NaiveDate> {
    let skip = (7 - sunday_index(date)) % 7;
    date.checked_add_days(Days::new(skip as u64))
        .ok_or_else(|| GitheatError::InvalidDate(format!("no Sunday after {date}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_starts_on_sunday_for_every_day_of_a_year() {
        for today in ymd(2023, 1, 1).iter_days().take(400) {
            let window = Window::ending(today).unwrap();
            assert_eq!(window.start().weekday(), Weekday::Sun, "today = {today}");
            assert_eq!(window.end(), today);
            assert!(window.len() >= 52 * 7 + 1, "today = {today}");
            assert_eq!(window.days().first().unwrap().date, window.start());
            assert_eq!(window.days().last().unwrap().date, today);
        }
    }

    #[test]
    fn test_window_known_dates() {
        // 2023-07-08 is a Saturday; the Sunday after is 2023-07-09.
        let window = Window::ending(ymd(2024, 7, 15)).unwrap();
        assert_eq!(window.start(), ymd(2023, 7, 9));
        assert_eq!(window.len(), 373);
    }

    #[test]
    fn test_raw_start_already_sunday() {
        // 2024-07-22 minus a year is 2023-07-22, minus a week is 2023-07-15 (Saturday).
        // 2024-07-23 gives 2023-07-16, a Sunday, which is kept as is.
        let window = Window::ending(ymd(2024, 7, 23)).unwrap();
        assert_eq!(window.start(), ymd(2023, 7, 16));
    }

    #[test]
    fn test_leap_day_today() {
        let window = Window::ending(ymd(2024, 2, 29)).unwrap();
        // 2023-02-28 minus a week is 2023-02-21 (Tuesday), next Sunday 2023-02-26.
        assert_eq!(window.start(), ymd(2023, 2, 26));
    }

    #[test]
    fn test_days_are_zeroed_and_contiguous() {
        let window = Window::between(ymd(2024, 1, 28), ymd(2024, 2, 10)).unwrap();
        assert_eq!(window.len(), 14);
        for (i, day) in window.days().iter().enumerate() {
            assert_eq!(day.date, ymd(2024, 1, 28) + Days::new(i as u64));
            assert_eq!(day.count, 0);
            assert_eq!(day.bucket, None);
        }
    }

    #[test]
    fn test_day_mut_bounds() {
        let mut window = Window::between(ymd(2024, 1, 28), ymd(2024, 2, 10)).unwrap();
        assert!(window.day_mut(ymd(2024, 1, 27)).is_none());
        assert!(window.day_mut(ymd(2024, 2, 11)).is_none());
        window.day_mut(ymd(2024, 2, 10)).unwrap().count += 1;
        assert_eq!(window.days()[13].count, 1);
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        assert!(Window::between(ymd(2024, 2, 10), ymd(2024, 1, 28)).is_err());
    }
}
