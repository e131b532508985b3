use crate::error::Result;
use chrono::Weekday;
use clap::ValueEnum;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LayoutMode {
    /// One dated block per line
    Inline,
    /// Weekday rows by week columns
    #[default]
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BlockWidth {
    Thick,
    #[default]
    Reg,
    Thin,
}

impl BlockWidth {
    pub fn cells(self) -> usize {
        match self {
            BlockWidth::Thick => 3,
            BlockWidth::Reg => 2,
            BlockWidth::Thin => 1,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            BlockWidth::Thick => "   ",
            BlockWidth::Reg => "  ",
            BlockWidth::Thin => " ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Palette {
    #[default]
    Grass,
    Fire,
    Sky,
}

const COLORS_GRASS: [u8; 6] = [0, 22, 28, 34, 40, 46];
const COLORS_SKY: [u8; 6] = [0, 24, 31, 38, 45, 51];
const COLORS_FIRE: [u8; 6] = [232, 220, 214, 208, 202, 196];

impl Palette {
    pub fn colors(self) -> &'static [u8; 6] {
        match self {
            Palette::Grass => &COLORS_GRASS,
            Palette::Fire => &COLORS_FIRE,
            Palette::Sky => &COLORS_SKY,
        }
    }

    /// xterm-256 background for a bucket; out-of-range buckets saturate.
    pub fn color(self, bucket: u8) -> u8 {
        let colors = self.colors();
        colors[usize::from(bucket).min(colors.len() - 1)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DayArg {
    Sun,
    Mon,
    Tues,
    Wedn,
    Thur,
    Fri,
    Sat,
}

impl From<DayArg> for Weekday {
    fn from(day: DayArg) -> Self {
        match day {
            DayArg::Sun => Weekday::Sun,
            DayArg::Mon => Weekday::Mon,
            DayArg::Tues => Weekday::Tue,
            DayArg::Wedn => Weekday::Wed,
            DayArg::Thur => Weekday::Thu,
            DayArg::Fri => Weekday::Fri,
            DayArg::Sat => Weekday::Sat,
        }
    }
}

/// Author restriction: an exact name or a regular expression.
#[derive(Debug, Clone)]
pub struct AuthorFilter {
    pattern: String,
    regex: Regex,
}

impl AuthorFilter {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: pattern.to_string(),
            regex: Regex::new(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, author: &str) -> bool {
        author == self.pattern || self.regex.is_match(author)
    }
}

/// Everything the pipeline and renderer need, fixed before the run starts.
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    pub layout: LayoutMode,
    pub width: BlockWidth,
    pub palette: Palette,
    pub weekday: Option<Weekday>,
    pub author: Option<AuthorFilter>,
    pub show_stats: bool,
    pub block_separation: bool,
    pub month_separation: bool,
    pub month_header: bool,
    pub json: bool,
    pub strict: bool,
}

impl HeatmapConfig {
    pub fn new() -> Self {
        Self {
            layout: LayoutMode::default(),
            width: BlockWidth::default(),
            palette: Palette::default(),
            weekday: None,
            author: None,
            show_stats: false,
            block_separation: false,
            month_separation: true,
            month_header: true,
            json: false,
            strict: false,
        }
    }

    pub fn with_weekday(mut self, weekday: Weekday) -> Self {
        self.weekday = Some(weekday);
        self
    }

    pub fn with_author(mut self, author: AuthorFilter) -> Self {
        self.author = Some(author);
        self
    }

    /// Whether an event by `author` on `weekday` passes the configured filters.
    pub fn accepts(&self, author: &str, weekday: Weekday) -> bool {
        if let Some(wd) = self.weekday {
            if wd != weekday {
                return false;
            }
        }
        if let Some(filter) = &self.author {
            if !filter.matches(author) {
                return false;
            }
        }
        true
    }

    pub fn shows_month_header(&self) -> bool {
        self.month_header && self.width != BlockWidth::Thin
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self::new()
    }
}
