use crate::error::{GitheatError, Result};
use crate::model::Event;
use chrono::{DateTime, FixedOffset};
use tracing::warn;

const SEPARATOR: char = '~';

/// Parse one `<timestamp> ~ <author>` line.
pub fn parse_line(line: &str) -> Result<Event> {
    let trimmed = line.trim().trim_matches(|c: char| c == '\'' || c == '"');

    let (stamp, author) = trimmed
        .split_once(SEPARATOR)
        .ok_or_else(|| GitheatError::parse_failure(line, "missing '~' separator"))?;

    let timestamp = parse_timestamp(stamp.trim())
        .ok_or_else(|| GitheatError::parse_failure(line, format!("unparsable timestamp '{}'", stamp.trim())))?;

    Ok(Event::new(timestamp, author.trim()))
}

fn parse_timestamp(input: &str) -> Option<DateTime<FixedOffset>> {
    // git %ci
    if let Ok(dt) = DateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S %z") {
        return Some(dt);
    }
    // git %cI
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt);
    }
    // git %cD
    DateTime::parse_from_rfc2822(input).ok()
}

/// Parse a whole log. Blank lines are ignored; malformed lines are skipped
/// with a warning unless `strict` is set, in which case the first one aborts.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], strict: bool) -> Result<Vec<Event>> {
    let mut events = Vec::with_capacity(lines.len());

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(event) => events.push(event),
            Err(e) if strict => return Err(e),
            Err(e) => warn!("skipping log line: {e}"),
        }
    }

    Ok(events)
}
