use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::BookNumber;
use crate::label::Label;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Bumped whenever the archived layout changes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// One display alias of a book. A book number may appear several times.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct BookAlias {
    pub number: BookNumber,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct VerseRecord {
    pub label: Label,
    pub text: String,
}

/// Everything the resolver needs, in corpus order.
///
/// The position of a record in `verses` is its sequential index.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct CorpusSnapshot {
    pub version: u32,
    pub books: Vec<BookAlias>,
    pub verses: Vec<VerseRecord>,
}

/// A rendered reference: header plus (marker, text) pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Passage {
    pub header: String,
    pub segments: Vec<(String, String)>,
}

impl Passage {
    /// Flat message text, e.g. `"Ap 3,20\n 20 Oto stoję"`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.header.len() + 1);
        out.push_str(&self.header);
        out.push('\n');
        for (marker, text) in &self.segments {
            out.push(' ');
            out.push_str(marker);
            out.push(' ');
            out.push_str(text);
        }
        out
    }
}
