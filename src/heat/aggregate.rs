use super::window::Window;
use crate::config::HeatmapConfig;
use crate::model::Event;
use std::collections::HashMap;
use tracing::debug;

/// What the aggregator kept: how many events landed in the window, and by whom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub counted: usize,
    pub skipped: usize,
    pub authors: HashMap<String, usize>,
}

/// Count every accepted event on its calendar day.
///
/// Events outside the window, or rejected by the weekday/author filters,
/// are dropped without error. Order of `events` does not matter.
pub fn aggregate(window: &mut Window, events: &[Event], config: &HeatmapConfig) -> Tally {
    let mut tally = Tally::default();

    for event in events {
        if !config.accepts(&event.author, event.weekday()) {
            tally.skipped += 1;
            continue;
        }

        let Some(day) = window.day_mut(event.date()) else {
            tally.skipped += 1;
            continue;
        };

        day.count += 1;
        tally.counted += 1;
        *tally.authors.entry(event.author.clone()).or_insert(0) += 1;
    }

    debug!(counted = tally.counted, skipped = tally.skipped, "aggregated events");
    tally
}
