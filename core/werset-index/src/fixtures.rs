//! Synthetic corpus laid out like the full Polish corpus around 1 Corinthians.
//!
//! * book 27 (`Dz`/`dz`): 287 chapters of 100 verses plus chapter 288 verse 1,
//!   indexes `0..=28700`
//! * book 28 (`1Kor`/`1kor`): chapter 1 has 31 verses starting at 28701,
//!   chapter 2 has 16 verses starting at 28732
//! * book 66 (`Ap`/`ap`): chapter 3 with 22 verses closes the corpus
//!
//! Verse text is the label in angle brackets, e.g. `<028001001>`.

use werset_protocol::{BookNumber, Label, VerseRecord};

use crate::books::BookTable;
use crate::corpus::Corpus;

pub const FIRST_COR_1_1: usize = 28701;
pub const FIRST_COR_1_31: usize = 28731;
pub const FIRST_COR_2_1: usize = 28732;
pub const FIRST_COR_2_16: usize = 28747;
pub const APOCALYPSE_3_1: usize = 28748;
pub const APOCALYPSE_3_22: usize = 28769;

pub fn books() -> BookTable {
    let mut books = BookTable::new();
    for (number, name) in [(27, "Dz"), (27, "dz"), (28, "1Kor"), (28, "1kor"), (66, "Ap"), (66, "ap")] {
        books.insert(BookNumber::new(number), name);
    }
    books
}

fn chapter(book: u32, chapter: u32, verses: u32) -> impl Iterator<Item = VerseRecord> {
    (1..=verses).map(move |verse| {
        let label = Label::new(format!("{book:03}{chapter:03}{verse:03}"));
        VerseRecord {
            text: format!("<{label}>"),
            label,
        }
    })
}

pub fn first_corinthians() -> Corpus {
    let acts = (1..=287).flat_map(|c| chapter(27, c, 100)).chain(chapter(27, 288, 1));
    let corinthians = chapter(28, 1, 31).chain(chapter(28, 2, 16));
    let apocalypse = chapter(66, 3, 22);

    Corpus::new(books(), acts.chain(corinthians).chain(apocalypse))
}
