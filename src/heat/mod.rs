pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod grid;
pub mod normalize;
pub mod output;
pub mod parse;
pub mod pipeline;
pub mod stats;
pub mod window;

pub use aggregate::{aggregate, Tally};
pub use exec::exec;
pub use fetch::{fetch_log_lines, open_source};
pub use grid::build_grid;
pub use normalize::normalize;
pub use output::{output_heatmap, output_json};
pub use parse::{parse_line, parse_lines};
pub use pipeline::{run, run_events, Heatmap};
pub use stats::top_committers;
pub use window::Window;
