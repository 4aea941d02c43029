use werset_protocol::{BookNumber, Label, LabelKind, Verse};

use crate::corpus::Corpus;
use crate::error::Result;

/// The lookups a reference parser needs: book aliases in, verse ranges out.
pub trait Resolver {
    fn book_number(&self, name: &str) -> Result<BookNumber>;

    /// Verse label -> single verse; chapter label -> whole chapter.
    fn verse_from_single_label(&self, label: &Label) -> Result<Verse>;

    /// Start label to end label; a chapter end label extends to its last verse.
    fn verse_from_dual_label(&self, start: &Label, end: &Label) -> Result<Verse>;
}

impl Resolver for Corpus {
    fn book_number(&self, name: &str) -> Result<BookNumber> {
        self.books().number(name)
    }

    fn verse_from_single_label(&self, label: &Label) -> Result<Verse> {
        let start = self.index_from_label(label)?;
        let verse = match label.kind() {
            LabelKind::Chapter => Verse::new(start, self.chapter_end_index(start)?),
            _ => Verse::single(start),
        };
        tracing::debug!(%label, ?verse, "resolved single label");
        Ok(verse)
    }

    fn verse_from_dual_label(&self, start: &Label, end: &Label) -> Result<Verse> {
        let first = self.index_from_label(start)?;
        let mut last = self.index_from_label(end)?;
        if end.is_chapter() {
            last = self.chapter_end_index(last)?;
        }
        let verse = Verse::new(first, last);
        tracing::debug!(%start, %end, ?verse, "resolved label range");
        Ok(verse)
    }
}

impl Corpus {
    /// Re-resolves the label stored at `index` as a single reference.
    pub fn verse_from_index(&self, index: usize) -> Result<Verse> {
        let label = self.label(index)?.clone();
        self.verse_from_single_label(&label)
    }
}
