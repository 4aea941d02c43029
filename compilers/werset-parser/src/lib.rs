pub mod error;
pub mod parser;
pub mod plan;
pub mod scanner;
pub mod token;

use werset_index::{Corpus, Resolver};
use werset_protocol::{Passage, Verse};

pub use crate::error::{ParseError, PlanError, Result};
pub use crate::parser::{next_state, Parser, State};
pub use crate::plan::ReadingPlan;
pub use crate::scanner::Scanner;
pub use crate::token::{Span, Token, TokenKind};

/// Primary entry point: reference text -> verse range.
pub fn parse<R: Resolver + ?Sized>(reference: &str, resolver: &R) -> Result<Verse> {
    Parser::new(reference, resolver).parse()
}

/// Reference text -> headed passage text.
pub fn lookup(corpus: &Corpus, reference: &str) -> Result<Passage> {
    let verse = parse(reference, corpus)?;
    Ok(corpus.passage(&verse)?)
}

/// Every token before end of input.
pub fn tokenize(reference: &str) -> Vec<Token<'_>> {
    Scanner::new(reference).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use werset_index::fixtures::*;

    #[test]
    fn test_lookup_integration() {
        let corpus = first_corinthians();

        let passage = lookup(&corpus, "ap 3,20").unwrap();
        assert_eq!(passage.render(), "Ap 3,20\n 20 <066003020>");

        let passage = lookup(&corpus, "1kor 1,31-2,1").unwrap();
        assert_eq!(passage.header, "1Kor 1,31-2,1");
        assert_eq!(passage.render(), "1Kor 1,31-2,1\n 31 <028001031> 2,1 <028002001>");
    }

    #[test]
    fn test_parse_through_trait_object() {
        let corpus = first_corinthians();
        let resolver: &dyn Resolver = &corpus;
        assert_eq!(parse("1kor 1,1", resolver).unwrap(), Verse::single(FIRST_COR_1_1));
    }

    #[test]
    fn test_tokenize() {
        let kinds: Vec<_> = tokenize("1kor 1,1").iter().map(|t| t.kind).collect();
        assert_eq!(kinds, [TokenKind::Book, TokenKind::Whitespace, TokenKind::NextNum, TokenKind::Comma, TokenKind::NextNum]);
    }

    #[test]
    fn test_lookup_unknown_book() {
        let corpus = first_corinthians();
        assert!(matches!(lookup(&corpus, "abc 1"), Err(ParseError::Resolve(_))));
    }
}
