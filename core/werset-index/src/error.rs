use std::io;

use thiserror::Error;
use werset_protocol::{BookNumber, Label};

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("book does not exist: {0}")]
    UnknownBook(String),

    #[error("no names registered for book number {0}")]
    UnknownBookNumber(BookNumber),

    #[error("given label does not exist: {0}")]
    UnknownLabel(Label),

    #[error("index does not exist: {0}")]
    UnknownIndex(usize),

    #[error("invalid label: {0:?}")]
    InvalidLabel(Label),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {reason}")]
    Format { line: u64, reason: String },

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("snapshot version {found} is not supported (expected {expected})")]
    UnsupportedSnapshot { found: u32, expected: u32 },
}
