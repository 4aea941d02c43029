#![no_std] // Resolver types stay usable from embedded/WASM front-ends

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod label;
pub mod verse;

pub use ids::{BookNumber, FIELD_WIDTH};
pub use label::{pad_field, Label, LabelKind, CHAPTER_LABEL_LEN, DEFAULT_FIELD, VERSE_LABEL_LEN};
pub use verse::Verse;

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_label_fields() {
        let label = Label::from("028002013");
        assert_eq!(label.kind(), LabelKind::Verse);
        assert_eq!(label.book(), "028");
        assert_eq!(label.chapter(), "002");
        assert_eq!(label.verse(), "013");
    }

    #[test]
    fn test_short_label_defaults() {
        // Missing fields read back as "001", never "000"
        let chapter = Label::from("028002");
        assert_eq!(chapter.kind(), LabelKind::Chapter);
        assert_eq!(chapter.verse(), DEFAULT_FIELD);

        let empty = Label::from("");
        assert_eq!(empty.kind(), LabelKind::Invalid);
        assert_eq!(empty.book(), DEFAULT_FIELD);
        assert_eq!(empty.chapter(), DEFAULT_FIELD);

        assert_eq!(Label::from("0280").kind(), LabelKind::Invalid);
    }

    #[test]
    fn test_pad_field() {
        assert_eq!(pad_field(""), "000");
        assert_eq!(pad_field("7"), "007");
        assert_eq!(pad_field("31"), "031");
        assert_eq!(pad_field("150"), "150");
        assert_eq!(pad_field("1000"), "1000");
    }

    #[test]
    fn test_book_number_field() {
        assert_eq!(BookNumber::new(28).field(), "028");
        assert_eq!(BookNumber::new(1000).field(), "1000");
    }

    #[test]
    fn test_verse_shape() {
        let single = Verse::single(28701);
        assert!(single.is_single());
        assert!(!single.is_range());
        assert_eq!(single.end(), 0);
        assert_eq!(single.last(), 28701);

        let range = Verse::new(28701, 28731);
        assert!(range.is_range());
        assert_eq!(range.last(), 28731);

        // An end at or before the start is not a range
        assert_eq!(Verse::new(10, 10), Verse::single(10));
        assert_eq!(Verse::new(10, 3), Verse::single(10));
    }

    #[test]
    fn test_passage_render() {
        let passage = Passage {
            header: "Ap 3,20".to_string(),
            segments: vec![("20".to_string(), "Oto stoję".to_string())],
        };
        assert_eq!(passage.render(), "Ap 3,20\n 20 Oto stoję");
    }

    #[test]
    fn test_snapshot_serialization() {
        let original = CorpusSnapshot {
            version: SNAPSHOT_VERSION,
            books: vec![BookAlias { number: BookNumber::new(28), name: "1kor".to_string() }],
            verses: vec![VerseRecord { label: Label::from("028001001"), text: "Paweł".to_string() }],
        };

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize CorpusSnapshot");
        let restored: CorpusSnapshot = from_bytes(&bytes).expect("Failed to deserialize CorpusSnapshot");

        assert_eq!(original, restored);
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<BookNumber>(), 4);
    }
}
