#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A resolved reference: sequential corpus positions.
///
/// `end == 0` means a single verse. Otherwise `end > start` always holds;
/// [`Verse::new`] collapses anything else to a single verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Verse {
    start: usize,
    end: usize,
}

impl Verse {
    pub const fn single(start: usize) -> Self {
        Self { start, end: 0 }
    }

    pub const fn new(start: usize, end: usize) -> Self {
        if end > start {
            Self { start, end }
        } else {
            Self::single(start)
        }
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    pub const fn is_single(&self) -> bool {
        self.end <= self.start
    }

    pub const fn is_range(&self) -> bool {
        self.start < self.end
    }

    /// Last position covered, inclusive.
    pub const fn last(&self) -> usize {
        if self.is_range() {
            self.end
        } else {
            self.start
        }
    }
}
