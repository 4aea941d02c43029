use thiserror::Error;
use werset_index::ResolveError;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("expected 3 digit book number: {0}")]
    BookNumberWidth(String),

    /// The grammar only ever builds one or two labels.
    #[error("parser error, expected 1 or 2 labels, found {labels}")]
    MalformedReference { labels: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("plan day does not exist: {0}")]
    UnknownDay(usize),
}
