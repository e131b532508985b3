use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitheatError>;

#[derive(Error, Debug)]
pub enum GitheatError {
    #[error("Malformed log line {line:?}: {reason}")]
    ParseFailure { line: String, reason: String },
    #[error("No contribution found")]
    EmptyResult,
    #[error("Are you sure you're in an initialized git directory? ({0})")]
    SourceUnavailable(String),
    #[error("Cannot read {name}: {reason}")]
    LogUnreadable { name: String, reason: String },
    #[error("Cannot build a grid from an empty window")]
    EmptyWindow,
    #[error(transparent)]
    ColumnFull(#[from] crate::model::ColumnFull),
    #[error("Invalid author pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Git error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
}

impl GitheatError {
    pub fn parse_failure(line: &str, reason: impl Into<String>) -> Self {
        GitheatError::ParseFailure {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::discover::Error> for GitheatError {
    fn from(err: gix::discover::Error) -> Self {
        GitheatError::GitDiscover(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GitheatError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GitheatError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GitheatError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GitheatError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GitheatError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GitheatError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for GitheatError {
    fn from(err: gix::object::commit::Error) -> Self {
        GitheatError::Commit(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GitheatError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GitheatError::ObjectDecode(Box::new(err))
    }
}
