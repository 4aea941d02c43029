use alloc::format;
use alloc::string::String;
use core::fmt;
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::ids::FIELD_WIDTH;

/// Value read back for any field a label is too short to carry.
pub const DEFAULT_FIELD: &str = "001";

/// Length of a book + chapter label (whole chapter).
pub const CHAPTER_LABEL_LEN: usize = 2 * FIELD_WIDTH;

/// Length of a book + chapter + verse label.
pub const VERSE_LABEL_LEN: usize = 3 * FIELD_WIDTH;

/// Positional verse address: three 3-character fields, book / chapter / verse.
///
/// Example: `"028002013"` is book 28, chapter 2, verse 13. The verse field is
/// text, not a number: corpora may carry verses like `"01a"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(transparent)]
pub struct Label(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// Book and chapter only: addresses the whole chapter.
    Chapter,
    /// Book, chapter and verse.
    Verse,
    /// Any other length.
    Invalid,
}

impl Label {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Concatenates already padded fields.
    pub fn from_fields(book: &str, chapter: &str, verse: &str) -> Self {
        Self(format!("{book}{chapter}{verse}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn kind(&self) -> LabelKind {
        match self.0.len() {
            CHAPTER_LABEL_LEN => LabelKind::Chapter,
            VERSE_LABEL_LEN => LabelKind::Verse,
            _ => LabelKind::Invalid,
        }
    }

    pub fn is_chapter(&self) -> bool {
        self.kind() == LabelKind::Chapter
    }

    pub fn book(&self) -> &str {
        self.field(0)
    }

    pub fn chapter(&self) -> &str {
        self.field(1)
    }

    pub fn verse(&self) -> &str {
        self.field(2)
    }

    /// Appends a verse field, turning a chapter label into a verse label.
    pub fn with_verse(&self, verse: &str) -> Self {
        Self(format!("{}{}", self.0, verse))
    }

    fn field(&self, slot: usize) -> &str {
        let start = slot * FIELD_WIDTH;
        self.0.get(start..start + FIELD_WIDTH).unwrap_or(DEFAULT_FIELD)
    }
}

/// Left-pads a numeric field with zeros to [`FIELD_WIDTH`]. Longer input is
/// returned untouched, empty input becomes `"000"`.
pub fn pad_field(field: &str) -> String {
    format!("{:0>width$}", field, width = FIELD_WIDTH)
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Label {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Label {
    fn from(raw: &str) -> Self {
        Self(String::from(raw))
    }
}
