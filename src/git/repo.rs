use super::LogSource;
use crate::error::{GitheatError, Result};
use chrono::{DateTime, FixedOffset, Utc};
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Commit log of a local repository, rendered as `%ci ~ %an` lines.
pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
    since: Option<DateTime<Utc>>,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self {
            repo,
            path,
            since: None,
        })
    }

    /// Only report commits whose committer time is at or after `since`.
    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn log_lines(&self) -> Result<Vec<String>> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            debug!(path = %self.path.display(), "HEAD is unborn, empty log");
            return Ok(Vec::new());
        }
        let head_commit = head.peel_to_commit_in_place()?;

        let mut lines = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Reading commit log...");

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            for pid in commit.parent_ids() {
                stack.push_back(pid.into());
            }

            let time = commit.time()?;
            let utc = DateTime::from_timestamp(time.seconds, 0).ok_or_else(|| {
                GitheatError::InvalidDate(format!("Invalid timestamp: {}", time.seconds))
            })?;
            if self.since.is_some_and(|since| utc < since) {
                continue;
            }

            let offset = FixedOffset::east_opt(time.offset).ok_or_else(|| {
                GitheatError::InvalidDate(format!("Invalid offset: {}", time.offset))
            })?;
            let author = commit.author()?;
            lines.push(format!(
                "{} ~ {}",
                utc.with_timezone(&offset).format("%Y-%m-%d %H:%M:%S %z"),
                author.name
            ));

            pb.inc(1);
        }

        pb.finish_and_clear();
        debug!(commits = lines.len(), walked = seen.len(), "read commit log");
        Ok(lines)
    }
}

impl LogSource for GitRepo {
    fn describe(&self) -> String {
        format!("git repository at {}", self.path.display())
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        self.log_lines()
    }
}
