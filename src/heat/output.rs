use super::pipeline::Heatmap;
use super::stats::TOP_COMMITTERS;
use crate::config::{HeatmapConfig, LayoutMode};
use crate::model::{
    ColumnOutput, Grid, HeatmapOutput, Slot, SlotOutput, WeekColumn, DAYS_IN_WEEK, SCHEMA_VERSION,
};
use anyhow::Result;
use chrono::{Datelike, Utc};
use console::Style;

/// xterm-256 color of the month labels.
const MONTH_COLOR: u8 = 6;

fn paint(config: &HeatmapConfig, bucket: u8) -> String {
    Style::new()
        .color256(0)
        .on_color256(config.palette.color(bucket))
        .apply_to(config.width.glyph())
        .to_string()
}

fn block_separator(config: &HeatmapConfig) -> &'static str {
    if config.block_separation {
        " "
    } else {
        ""
    }
}

fn render_slot(slot: Slot<'_>, config: &HeatmapConfig) -> String {
    match slot.day() {
        Some(day) => paint(config, day.bucket.unwrap_or(0)),
        None => config.width.glyph().to_string(),
    }
}

/// Month abbreviations over the first visible column of each month.
pub fn render_month_header(columns: &[&WeekColumn<'_>], config: &HeatmapConfig) -> String {
    let cell = config.width.cells() + block_separator(config).len();
    let mut header = String::new();
    let mut last_month = None;

    for (i, col) in columns.iter().enumerate() {
        let Some(day) = col.days().find(|d| d.date.day() == 1 || last_month.is_none()) else {
            continue;
        };
        let month = (day.date.year(), day.date.month());
        if last_month == Some(month) {
            continue;
        }
        let at = i * cell;
        if header.chars().count() > at {
            continue;
        }
        last_month = Some(month);
        header.push_str(&" ".repeat(at - header.chars().count()));
        header.push_str(&day.date.format("%b").to_string());
    }

    Style::new().color256(MONTH_COLOR).apply_to(header).to_string()
}

/// Seven weekday rows, Sunday first, one block per visible column.
pub fn render_block(grid: &Grid<'_>, config: &HeatmapConfig) -> String {
    let columns: Vec<_> = grid.visible_columns(config.month_separation).collect();
    let sep = block_separator(config);
    let mut out = String::new();

    if config.shows_month_header() {
        out.push_str(&render_month_header(&columns, config));
        out.push('\n');
    }

    for row in 0..DAYS_IN_WEEK {
        for col in &columns {
            let slot = col.get(row).unwrap_or_default();
            out.push_str(&render_slot(slot, config));
            out.push_str(sep);
        }
        out.push('\n');
        if config.block_separation {
            out.push('\n');
        }
    }

    out
}

/// One dated block per day, oldest first.
pub fn render_inline(heatmap: &Heatmap, config: &HeatmapConfig) -> String {
    let mut out = String::new();
    for day in heatmap.days() {
        out.push_str(&paint(config, day.bucket.unwrap_or(0)));
        out.push(' ');
        out.push_str(&day.date.format("%b %d, %Y").to_string());
        out.push('\n');
    }
    out
}

pub fn render_stats(heatmap: &Heatmap) -> String {
    let top = heatmap.top_committers(TOP_COMMITTERS);
    if top.is_empty() {
        return String::new();
    }
    let mut out = format!("Top {} committers:\n", TOP_COMMITTERS);
    for (idx, entry) in top.iter().enumerate() {
        out.push_str(&format!("{}. {}: {}\n", idx + 1, entry.author, entry.commits));
    }
    out
}

pub fn heatmap_output(heatmap: &Heatmap, grid: &Grid<'_>, config: &HeatmapConfig) -> HeatmapOutput {
    let columns = grid
        .visible_columns(config.month_separation)
        .map(|col| ColumnOutput {
            separator: col.is_separator(),
            slots: col
                .slots()
                .iter()
                .map(|slot| {
                    slot.day().map(|day| SlotOutput {
                        date: day.date,
                        count: day.count,
                        bucket: day.bucket.unwrap_or(0),
                    })
                })
                .collect(),
        })
        .collect();

    HeatmapOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        window_start: heatmap.window().start(),
        window_end: heatmap.window().end(),
        total_events: heatmap.tally().counted,
        columns,
        top_committers: heatmap.top_committers(TOP_COMMITTERS),
    }
}

pub fn output_json(heatmap: &Heatmap, grid: &Grid<'_>, config: &HeatmapConfig) -> Result<()> {
    let output = heatmap_output(heatmap, grid, config);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print the heatmap in the configured layout, followed by stats if asked.
pub fn output_heatmap(heatmap: &Heatmap, grid: &Grid<'_>, config: &HeatmapConfig) -> Result<()> {
    let body = match config.layout {
        LayoutMode::Inline => render_inline(heatmap, config),
        LayoutMode::Block => render_block(grid, config),
    };
    print!("{body}");

    if config.show_stats {
        let stats = render_stats(heatmap);
        if !stats.is_empty() {
            println!();
            print!("{stats}");
        }
    }
    Ok(())
}
