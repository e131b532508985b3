use super::aggregate::{aggregate, Tally};
use super::grid::build_grid;
use super::normalize::normalize;
use super::parse::parse_lines;
use super::stats::top_committers;
use super::window::Window;
use crate::config::HeatmapConfig;
use crate::error::{GitheatError, Result};
use crate::model::{CommitterCount, Day, Event, Grid};
use tracing::info;

/// A window whose days have been counted and bucketed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heatmap {
    window: Window,
    tally: Tally,
}

impl Heatmap {
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn days(&self) -> &[Day] {
        self.window.days()
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn grid(&self) -> Result<Grid<'_>> {
        build_grid(self.window.days())
    }

    pub fn top_committers(&self, n: usize) -> Vec<CommitterCount> {
        top_committers(&self.tally, n)
    }
}

/// Parse raw log lines and run them through [`run_events`].
pub fn run<S: AsRef<str>>(lines: &[S], window: Window, config: &HeatmapConfig) -> Result<Heatmap> {
    let events = parse_lines(lines, config.strict)?;
    info!(lines = lines.len(), events = events.len(), "parsed log");
    run_events(&events, window, config)
}

/// Count `events` into `window` and bucket the result.
///
/// Fails with [`GitheatError::EmptyResult`] when no event survives the
/// filters inside the window.
pub fn run_events(events: &[Event], mut window: Window, config: &HeatmapConfig) -> Result<Heatmap> {
    if events.is_empty() || window.is_empty() {
        return Err(GitheatError::EmptyResult);
    }

    let tally = aggregate(&mut window, events, config);
    if tally.counted == 0 {
        return Err(GitheatError::EmptyResult);
    }

    normalize(window.days_mut());
    Ok(Heatmap { window, tally })
}
