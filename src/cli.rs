use crate::config::{AuthorFilter, BlockWidth, DayArg, HeatmapConfig, LayoutMode, Palette};
use crate::util::parse_day;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "githeat")]
#[command(about = "githeat: Heatmap for your git repos on your terminal")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub source: SourceArgs,

    #[clap(flatten)]
    pub display: DisplayArgs,

    #[clap(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args, Clone, Debug, Default)]
pub struct SourceArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Read '<date> ~ <author>' lines from this file instead of git ('-' for stdin)")]
    pub log_file: Option<PathBuf>,

    #[arg(long, help = "Draw the year ending on this date (YYYY-MM-DD) instead of today")]
    pub as_of: Option<String>,

    #[arg(long, help = "Fail on the first malformed log line instead of skipping it")]
    pub strict: bool,
}

#[derive(Args, Clone, Debug)]
pub struct DisplayArgs {
    #[arg(short = 't', long = "type", value_enum, default_value_t = LayoutMode::Block, help = "Choose how you want the graph to be displayed")]
    pub layout: LayoutMode,

    #[arg(short, long, value_enum, default_value_t = BlockWidth::Reg, help = "Choose how wide you want the graph blocks to be")]
    pub width: BlockWidth,

    #[arg(short, long, value_enum, default_value_t = Palette::Grass, help = "Choose the color palette")]
    pub color: Palette,

    #[arg(short, long, help = "Show commits stat")]
    pub stat: bool,

    #[arg(short, long, help = "Separate each day")]
    pub block: bool,

    #[arg(short, long, help = "Merge months (no blank column between them)")]
    pub merge: bool,

    #[arg(long, help = "Do not print month names above the graph")]
    pub no_month_header: bool,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct FilterArgs {
    #[arg(short, long, value_enum, help = "Choose what day to show")]
    pub day: Option<DayArg>,

    #[arg(short, long, help = "Filter heatmap by author. You can also write regex here")]
    pub author: Option<String>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Freeze the arguments into the configuration every stage reads.
    pub fn config(&self) -> Result<HeatmapConfig> {
        let author = self
            .filter
            .author
            .as_deref()
            .map(AuthorFilter::new)
            .transpose()?;

        Ok(HeatmapConfig {
            layout: self.display.layout,
            width: self.display.width,
            palette: self.display.color,
            weekday: self.filter.day.map(Into::into),
            author,
            show_stats: self.display.stat,
            block_separation: self.display.block,
            month_separation: !self.display.merge,
            month_header: !self.display.no_month_header,
            json: self.display.json,
            strict: self.source.strict,
        })
    }

    pub fn today(&self) -> Result<NaiveDate> {
        match self.source.as_of.as_deref() {
            Some(date) => Ok(parse_day(date)?),
            None => Ok(Local::now().date_naive()),
        }
    }

    pub fn execute(self) -> Result<()> {
        crate::heat::exec(&self)
    }
}
