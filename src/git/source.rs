use crate::error::{GitheatError, Result};
use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Anything that can hand over a raw `<timestamp> ~ <author>` log, one entry
/// per line.
pub trait LogSource {
    fn describe(&self) -> String;

    fn read_lines(&self) -> Result<Vec<String>>;
}

/// A log captured ahead of time, e.g. by `git log --pretty=format:'%ci ~ %an'`.
/// The path `-` reads standard input.
#[derive(Debug, Clone)]
pub struct FileLogSource {
    path: PathBuf,
}

impl FileLogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    fn unreadable(&self, err: std::io::Error) -> GitheatError {
        GitheatError::LogUnreadable {
            name: self.describe(),
            reason: err.to_string(),
        }
    }
}

impl LogSource for FileLogSource {
    fn describe(&self) -> String {
        if self.is_stdin() {
            "standard input".to_string()
        } else {
            format!("log file {}", self.path.display())
        }
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        let bytes = if self.is_stdin() {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| self.unreadable(e))?;
            buf
        } else {
            std::fs::read(&self.path).map_err(|e| self.unreadable(e))?
        };
        Ok(split_lines(&bytes))
    }
}

/// Split a raw log on `\n`, dropping a trailing `\r`. Bytes that are not
/// UTF-8 are replaced so one badly encoded author cannot sink the whole log.
fn split_lines(bytes: &[u8]) -> Vec<String> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    if body.is_empty() {
        return Vec::new();
    }

    body.split(|&b| b == b'\n')
        .enumerate()
        .map(|(idx, line)| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            let text = String::from_utf8_lossy(line);
            if let Cow::Owned(_) = text {
                warn!(line = idx + 1, "log line is not valid UTF-8, replacing undecodable bytes");
            }
            text.into_owned()
        })
        .collect()
}
