use std::collections::HashMap;

use werset_protocol::{BookNumber, CorpusSnapshot, Label, LabelKind, VerseRecord, SNAPSHOT_VERSION};

use crate::books::BookTable;
use crate::error::{ResolveError, Result};

/// Verse suffixes probed, in order, when a chapter label is resolved.
///
/// Assumes every chapter carries a verse 1, 2 or 3 (a chapter may begin past
/// verse 1 when a superscription is numbered separately). Not a general search.
pub const CHAPTER_START_PROBES: [&str; 3] = ["001", "002", "003"];

/// What [`Corpus::chapter_end_index`] reports when the forward scan reaches
/// the corpus end without seeing a chapter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChapterEndPolicy {
    /// Report `0`. Historical behavior: a chapter-only reference into the
    /// final chapter therefore resolves to a single verse.
    #[default]
    Legacy,
    /// Report the last index of the corpus.
    ClampToCorpusEnd,
}

/// Read-only lookup tables over a linear verse corpus.
///
/// Built once by a loader and shared by every parse; nothing here mutates
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    books: BookTable,
    label_to_index: HashMap<Label, usize>,
    index_to_label: Vec<Label>,
    texts: Vec<String>,
    chapter_end: ChapterEndPolicy,
}

impl Corpus {
    /// Records are indexed in iteration order, starting at 0.
    pub fn new(books: BookTable, verses: impl IntoIterator<Item = VerseRecord>) -> Self {
        let verses = verses.into_iter();
        let (lower, _) = verses.size_hint();

        let mut corpus = Self {
            books,
            label_to_index: HashMap::with_capacity(lower),
            index_to_label: Vec::with_capacity(lower),
            texts: Vec::with_capacity(lower),
            chapter_end: ChapterEndPolicy::default(),
        };

        for (index, record) in verses.enumerate() {
            if let Some(previous) = corpus.label_to_index.insert(record.label.clone(), index) {
                tracing::warn!(label = %record.label, previous, index, "duplicate label, later verse wins");
            }
            corpus.index_to_label.push(record.label);
            corpus.texts.push(record.text);
        }

        tracing::debug!(
            verses = corpus.texts.len(),
            aliases = corpus.books.len(),
            "corpus tables built"
        );
        corpus
    }

    pub fn from_snapshot(snapshot: CorpusSnapshot) -> Self {
        let books = snapshot.books.into_iter().collect();
        Self::new(books, snapshot.verses)
    }

    pub fn to_snapshot(&self) -> CorpusSnapshot {
        CorpusSnapshot {
            version: SNAPSHOT_VERSION,
            books: self.books.aliases(),
            verses: self
                .index_to_label
                .iter()
                .zip(&self.texts)
                .map(|(label, text)| VerseRecord {
                    label: label.clone(),
                    text: text.clone(),
                })
                .collect(),
        }
    }

    pub fn with_chapter_end(mut self, policy: ChapterEndPolicy) -> Self {
        self.chapter_end = policy;
        self
    }

    pub fn chapter_end_policy(&self) -> ChapterEndPolicy {
        self.chapter_end
    }

    pub fn books(&self) -> &BookTable {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Highest valid sequential index, `None` for an empty corpus.
    pub fn max_index(&self) -> Option<usize> {
        self.texts.len().checked_sub(1)
    }

    pub fn book_number(&self, name: &str) -> Result<BookNumber> {
        self.books.number(name)
    }

    pub fn label(&self, index: usize) -> Result<&Label> {
        self.index_to_label
            .get(index)
            .ok_or(ResolveError::UnknownIndex(index))
    }

    pub fn text(&self, index: usize) -> Result<&str> {
        self.texts
            .get(index)
            .map(String::as_str)
            .ok_or(ResolveError::UnknownIndex(index))
    }

    /// Exact lookup of a full label.
    pub fn label_to_index(&self, label: &Label) -> Result<usize> {
        self.label_to_index
            .get(label)
            .copied()
            .ok_or_else(|| ResolveError::UnknownLabel(label.clone()))
    }

    /// Index of the first probed verse ([`CHAPTER_START_PROBES`]) that exists
    /// in the given chapter.
    pub fn chapter_label_to_index(&self, label: &Label) -> Result<usize> {
        CHAPTER_START_PROBES
            .iter()
            .find_map(|verse| self.label_to_index.get(&label.with_verse(verse)).copied())
            .ok_or_else(|| ResolveError::UnknownLabel(label.clone()))
    }

    /// Verse labels map directly; chapter labels map to the first index of
    /// that chapter, which is not always verse 1.
    pub fn index_from_label(&self, label: &Label) -> Result<usize> {
        match label.kind() {
            LabelKind::Verse => self.label_to_index(label),
            LabelKind::Chapter => {
                let probe = self.chapter_label_to_index(label)?;
                self.chapter_start_index(probe)
            }
            LabelKind::Invalid => Err(ResolveError::InvalidLabel(label.clone())),
        }
    }

    /// Walks backward from `index` while the chapter field stays the same.
    pub fn chapter_start_index(&self, index: usize) -> Result<usize> {
        let chapter = self.label(index)?.chapter();

        let start = (0..=index)
            .rev()
            .take_while(|&i| self.index_to_label[i].chapter() == chapter)
            .last()
            .unwrap_or(index);
        Ok(start)
    }

    /// Walks forward from `index` to the last position of its chapter.
    ///
    /// Running off the corpus end is answered per [`ChapterEndPolicy`].
    pub fn chapter_end_index(&self, index: usize) -> Result<usize> {
        let chapter = self.label(index)?.chapter();

        let changed = self.index_to_label[index..]
            .iter()
            .position(|label| label.chapter() != chapter);

        match (changed, self.chapter_end) {
            (Some(offset), _) => Ok(index + offset - 1),
            (None, ChapterEndPolicy::Legacy) => Ok(0),
            (None, ChapterEndPolicy::ClampToCorpusEnd) => Ok(self.index_to_label.len() - 1),
        }
    }
}
