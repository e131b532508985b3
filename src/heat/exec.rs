use super::fetch::fetch_log_lines;
use super::output::{output_heatmap, output_json};
use super::pipeline::run;
use super::window::Window;
use crate::cli::Cli;
use crate::error::GitheatError;
use anyhow::Context;
use tracing::info;

pub fn exec(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config()?;
    let today = cli.today()?;
    let window = Window::ending(today).context("Failed to compute heatmap window")?;

    let lines = fetch_log_lines(&cli.source, window.start())?;

    let heatmap = match run(lines.as_slice(), window, &config) {
        Ok(heatmap) => heatmap,
        Err(GitheatError::EmptyResult) => {
            info!("nothing to draw");
            println!("No contribution found");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    // Build the whole grid before printing anything.
    let grid = heatmap.grid().context("Failed to lay out heatmap grid")?;

    if config.json {
        output_json(&heatmap, &grid, &config)?;
    } else {
        output_heatmap(&heatmap, &grid, &config)?;
    }

    Ok(())
}
