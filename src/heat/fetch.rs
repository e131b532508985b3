use crate::cli::SourceArgs;
use crate::error::{GitheatError, Result};
use crate::git::{FileLogSource, GitRepo, LogSource};
use chrono::{Days, NaiveDate};
use tracing::{debug, info};

/// Pick the log source the arguments ask for. Commits older than the day
/// before `since` are never read from git; the extra day absorbs timezone
/// offsets.
pub fn open_source(args: &SourceArgs, since: NaiveDate) -> Result<Box<dyn LogSource>> {
    if let Some(path) = &args.log_file {
        return Ok(Box::new(FileLogSource::new(path)));
    }

    let cutoff = since
        .checked_sub_days(Days::new(1))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc());
    let repo = GitRepo::open(args.repo.as_ref())?;
    Ok(Box::new(match cutoff {
        Some(cutoff) => repo.with_since(cutoff),
        None => repo,
    }))
}

/// Read the raw log. A log file that cannot be read is reported as
/// [`GitheatError::LogUnreadable`]; every other failure, whatever its cause,
/// as [`GitheatError::SourceUnavailable`].
pub fn fetch_log_lines(args: &SourceArgs, since: NaiveDate) -> Result<Vec<String>> {
    let source = open_source(args, since).map_err(unavailable)?;
    debug!(source = %source.describe(), "reading log");
    let lines = source.read_lines().map_err(unavailable)?;
    info!(source = %source.describe(), lines = lines.len(), "read log");
    Ok(lines)
}

fn unavailable(err: GitheatError) -> GitheatError {
    match err {
        GitheatError::SourceUnavailable(_) | GitheatError::LogUnreadable { .. } => err,
        other => GitheatError::SourceUnavailable(other.to_string()),
    }
}
