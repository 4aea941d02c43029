//! Index resolution over a linear verse corpus.
//!
//! A [`Corpus`] owns the label <-> index tables and the book alias table,
//! answers chapter boundary scans, and renders resolved [`Verse`] ranges back
//! into headed text. Reference parsers drive it through [`Resolver`].

pub mod books;
pub mod corpus;
pub mod error;
pub mod load;
pub mod passage;
pub mod resolver;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use books::BookTable;
pub use corpus::{ChapterEndPolicy, Corpus, CHAPTER_START_PROBES};
pub use error::{LoadError, ResolveError, Result};
pub use resolver::Resolver;

pub use werset_protocol::{BookNumber, Label, Passage, Verse};
