//! Readers for the source data files and the binary snapshot.
//!
//! * books: `<number> <alias>` per line
//! * text: `<label> <verse text>` per line, line order is corpus order
//! * plan: one day per line, references separated by `;`

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::AlignedVec;
use werset_protocol::{BookNumber, CorpusSnapshot, Label, VerseRecord, SNAPSHOT_VERSION};

use crate::books::BookTable;
use crate::corpus::Corpus;
use crate::error::LoadError;

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

pub fn read_books<R: Read>(reader: R) -> Result<BookTable, LoadError> {
    let mut csv = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut books = BookTable::new();
    for record in csv.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = line_of(&record);

        let (Some(number), Some(name)) = (record.get(0), record.get(1)) else {
            return Err(LoadError::Format {
                line,
                reason: "expected `<number> <name>`".to_string(),
            });
        };
        let number = number.parse::<u32>().map_err(|e| LoadError::Format {
            line,
            reason: format!("bad book number {number:?}: {e}"),
        })?;
        books.insert(BookNumber::new(number), name);
    }
    Ok(books)
}

pub fn read_verses<R: BufRead>(reader: R) -> Result<Vec<VerseRecord>, LoadError> {
    let mut verses = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let Some((label, text)) = line.split_once(' ') else {
            return Err(LoadError::Format {
                line: i as u64 + 1,
                reason: "expected `<label> <text>`".to_string(),
            });
        };
        verses.push(VerseRecord {
            label: Label::from(label),
            text: text.to_string(),
        });
    }
    Ok(verses)
}

/// Raw references per plan day, in file order.
pub fn read_plan<R: Read>(reader: R) -> Result<Vec<Vec<String>>, LoadError> {
    let mut csv = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::Fields)
        .from_reader(reader);

    let mut days = Vec::new();
    for record in csv.records() {
        days.push(record?.iter().map(str::to_string).collect());
    }
    Ok(days)
}

pub fn load_corpus(books_path: &Path, text_path: &Path) -> Result<Corpus, LoadError> {
    tracing::info!(books = %books_path.display(), text = %text_path.display(), "loading corpus");
    let books = read_books(File::open(books_path)?)?;
    let verses = read_verses(BufReader::new(File::open(text_path)?))?;
    Ok(Corpus::new(books, verses))
}

pub fn load_plan(path: &Path) -> Result<Vec<Vec<String>>, LoadError> {
    tracing::info!(plan = %path.display(), "loading plan");
    read_plan(File::open(path)?)
}

pub fn snapshot_bytes(corpus: &Corpus) -> Result<AlignedVec, LoadError> {
    let mut serializer = AllocSerializer::<4096>::default();
    serializer
        .serialize_value(&corpus.to_snapshot())
        .map_err(|e| LoadError::Snapshot(format!("{e:?}")))?;
    Ok(serializer.into_serializer().into_inner())
}

/// Validates the archive before rebuilding the lookup tables.
pub fn corpus_from_bytes(bytes: &[u8]) -> Result<Corpus, LoadError> {
    // Archives must be read from aligned memory
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    let snapshot = rkyv::from_bytes::<CorpusSnapshot>(&aligned)
        .map_err(|e| LoadError::Snapshot(format!("{e:?}")))?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(LoadError::UnsupportedSnapshot {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    Ok(Corpus::from_snapshot(snapshot))
}

pub fn write_snapshot(corpus: &Corpus, path: &Path) -> Result<usize, LoadError> {
    let bytes = snapshot_bytes(corpus)?;
    fs::write(path, &bytes)?;
    Ok(bytes.len())
}

pub fn read_snapshot(path: &Path) -> Result<Corpus, LoadError> {
    tracing::info!(snapshot = %path.display(), "loading corpus snapshot");
    corpus_from_bytes(&fs::read(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolver;

    const BOOKS: &str = "28 1Kor\n28 1kor\n\n66 Ap\n";
    const TEXT: &str = "028001001 Paweł, z woli Bożej powołany\n028001002 do Kościoła Bożego\r\n028002001 I ja, bracia\n";

    #[test]
    fn test_read_books() {
        let books = read_books(BOOKS.as_bytes()).unwrap();
        assert_eq!(books.number("1kor").unwrap(), BookNumber::new(28));
        assert_eq!(books.display_name(BookNumber::new(28)).unwrap(), "1Kor");
        assert_eq!(books.number("Ap").unwrap(), BookNumber::new(66));
    }

    #[test]
    fn test_read_books_rejects_bad_number() {
        let err = read_books("x1 1kor\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Format { line: 1, .. }), "{err}");
    }

    #[test]
    fn test_read_books_rejects_missing_name() {
        let err = read_books("28\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Format { .. }), "{err}");
    }

    #[test]
    fn test_read_verses() {
        let verses = read_verses(TEXT.as_bytes()).unwrap();
        assert_eq!(verses.len(), 3);
        assert_eq!(verses[0].label, Label::from("028001001"));
        assert_eq!(verses[0].text, "Paweł, z woli Bożej powołany");
        assert_eq!(verses[1].text, "do Kościoła Bożego");
    }

    #[test]
    fn test_read_verses_rejects_line_without_text() {
        let err = read_verses("028001001 ok\n028001002\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Format { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_read_plan() {
        let days = read_plan("1kor 1; 1kor 2,1-3\nap 3,20\n".as_bytes()).unwrap();
        assert_eq!(days, vec![vec!["1kor 1".to_string(), "1kor 2,1-3".to_string()], vec!["ap 3,20".to_string()]]);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let books = read_books(BOOKS.as_bytes()).unwrap();
        let corpus = Corpus::new(books, read_verses(TEXT.as_bytes()).unwrap());

        let bytes = snapshot_bytes(&corpus).unwrap();
        let restored = corpus_from_bytes(&bytes).unwrap();

        assert_eq!(restored.len(), 3);
        assert_eq!(restored.text(2).unwrap(), "I ja, bracia");
        assert_eq!(restored.book_number("1kor").unwrap(), BookNumber::new(28));
        assert_eq!(
            restored.verse_from_single_label(&Label::from("028001")).unwrap(),
            corpus.verse_from_single_label(&Label::from("028001")).unwrap()
        );
    }

    #[test]
    fn test_snapshot_rejects_other_versions() {
        let snapshot = CorpusSnapshot { version: SNAPSHOT_VERSION + 1, books: vec![], verses: vec![] };
        let bytes = rkyv::to_bytes::<_, 256>(&snapshot).unwrap();
        assert!(matches!(
            corpus_from_bytes(&bytes),
            Err(LoadError::UnsupportedSnapshot { found, .. }) if found == SNAPSHOT_VERSION + 1
        ));
    }
}
