use alloc::format;
use alloc::string::String;
use core::fmt;
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Width of every positional field inside a [`Label`](crate::Label).
pub const FIELD_WIDTH: usize = 3;

/// Canonical number of a book, shared by all of its display aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(transparent)]
pub struct BookNumber(pub u32);

impl BookNumber {
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Zero-padded label field, e.g. `28 -> "028"`.
    ///
    /// Numbers above 999 come back wider than [`FIELD_WIDTH`]; callers
    /// building labels must reject them.
    pub fn field(&self) -> String {
        format!("{:03}", self.0)
    }
}

impl From<u32> for BookNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl From<BookNumber> for u32 {
    fn from(number: BookNumber) -> u32 {
        number.0
    }
}

impl fmt::Display for BookNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
