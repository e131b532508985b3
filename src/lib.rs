//! Calendar heatmap of a year of git activity, drawn in the terminal.
//!
//! Log lines are parsed into events, counted into a Sunday-aligned window of
//! days, bucketed into six intensity levels and laid out as week columns
//! (`heat::build_grid`) for the renderer in `heat::output`.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod heat;
pub mod model;
pub mod util;
