use werset_protocol::{BookNumber, Label, Passage, Verse};

use crate::corpus::Corpus;
use crate::error::{ResolveError, Result};

/// Field without its zero padding, `"020" -> "20"`, `"000" -> "0"`.
fn number(field: &str) -> &str {
    match field.trim_start_matches('0') {
        "" if !field.is_empty() => "0",
        trimmed => trimmed,
    }
}

impl Corpus {
    pub fn book_names(&self, number: BookNumber) -> Result<&[String]> {
        self.books().names(number)
    }

    /// Display name (first alias) of the book a label points into.
    pub fn book_name(&self, label: &Label) -> Result<&str> {
        let number = label
            .book()
            .parse::<u32>()
            .map_err(|_| ResolveError::InvalidLabel(label.clone()))?;
        self.books().display_name(BookNumber::new(number))
    }

    /// `[book, "<chapter>,", "<verse>"]` for one position.
    pub fn index_header(&self, index: usize) -> Result<Vec<String>> {
        let label = self.label(index)?;
        Ok(vec![
            self.book_name(label)?.to_string(),
            format!("{},", number(label.chapter())),
            number(label.verse()).to_string(),
        ])
    }

    /// Human readable reference, e.g. `1Kor 1,1-2,1`.
    pub fn verse_header(&self, verse: &Verse) -> Result<String> {
        let start = self.label(verse.start())?;
        let book = self.book_name(start)?;
        let (chapter, first) = (number(start.chapter()), number(start.verse()));

        if verse.is_single() {
            return Ok(format!("{book} {chapter},{first}"));
        }

        let end = self.label(verse.end())?;
        let (end_chapter, last) = (number(end.chapter()), number(end.verse()));

        let header = if start.book() != end.book() {
            let end_book = self.book_name(end)?;
            format!("{book} {chapter},{first} - {end_book} {end_chapter},{last}")
        } else if start.chapter() != end.chapter() {
            format!("{book} {chapter},{first}-{end_chapter},{last}")
        } else {
            format!("{book} {chapter},{first}-{last}")
        };
        Ok(header)
    }

    /// Verse number shown before a verse inside a range; the first verse of
    /// a chapter also carries its chapter.
    fn inline_marker(&self, index: usize) -> Result<String> {
        let label = self.label(index)?;
        let verse = number(label.verse());
        if verse == "1" {
            Ok(format!("{},{}", number(label.chapter()), verse))
        } else {
            Ok(verse.to_string())
        }
    }

    pub fn passage(&self, verse: &Verse) -> Result<Passage> {
        let header = self.verse_header(verse)?;

        let segments = if verse.is_single() {
            let label = self.label(verse.start())?;
            vec![(number(label.verse()).to_string(), self.text(verse.start())?.to_string())]
        } else {
            (verse.start()..=verse.end())
                .map(|index| Ok((self.inline_marker(index)?, self.text(index)?.to_string())))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Passage { header, segments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn test_single_header_and_text() {
        let corpus = first_corinthians();
        let passage = corpus.passage(&Verse::single(APOCALYPSE_3_1 + 19)).unwrap();
        assert_eq!(passage.header, "Ap 3,20");
        assert_eq!(passage.render(), "Ap 3,20\n 20 <066003020>");
    }

    #[test]
    fn test_same_chapter_range() {
        let corpus = first_corinthians();
        let passage = corpus.passage(&Verse::new(FIRST_COR_1_1 + 29, FIRST_COR_1_31)).unwrap();
        assert_eq!(passage.header, "1Kor 1,30-31");
        assert_eq!(passage.segments.len(), 2);
        assert_eq!(passage.segments[0].0, "30");
    }

    #[test]
    fn test_cross_chapter_range_marks_chapter() {
        let corpus = first_corinthians();
        let passage = corpus.passage(&Verse::new(FIRST_COR_1_31, FIRST_COR_2_1 + 1)).unwrap();
        assert_eq!(passage.header, "1Kor 1,31-2,2");
        let markers: Vec<_> = passage.segments.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(markers, ["31", "2,1", "2"]);
    }

    #[test]
    fn test_cross_book_header() {
        let corpus = first_corinthians();
        let header = corpus.verse_header(&Verse::new(FIRST_COR_2_16, APOCALYPSE_3_1)).unwrap();
        assert_eq!(header, "1Kor 2,16 - Ap 3,1");
    }

    #[test]
    fn test_index_header() {
        let corpus = first_corinthians();
        assert_eq!(corpus.index_header(FIRST_COR_2_1 + 12).unwrap(), ["1Kor", "2,", "13"]);
    }

    #[test]
    fn test_superscription_verse_zero() {
        let mut books = crate::books::BookTable::new();
        books.insert(BookNumber::new(19), "Ps");
        let verses = ["019003000", "019003001"].map(|label| werset_protocol::VerseRecord {
            label: Label::from(label),
            text: format!("<{label}>"),
        });
        let corpus = Corpus::new(books, verses);

        assert_eq!(corpus.verse_header(&Verse::single(0)).unwrap(), "Ps 3,0");
        assert_eq!(corpus.index_header(0).unwrap(), ["Ps", "3,", "0"]);
        let passage = corpus.passage(&Verse::new(0, 1)).unwrap();
        assert_eq!(passage.header, "Ps 3,0-1");
        assert_eq!(passage.render(), "Ps 3,0-1\n 0 <019003000> 3,1 <019003001>");
    }

    #[test]
    fn test_unknown_index() {
        let corpus = first_corinthians();
        assert_eq!(
            corpus.passage(&Verse::single(99_999)),
            Err(ResolveError::UnknownIndex(99_999))
        );
    }
}
