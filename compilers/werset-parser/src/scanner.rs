use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, satisfy},
    combinator::{map, recognize},
    sequence::tuple,
    IResult,
};

use crate::token::{Span, Token, TokenKind};

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Book names are matched verbatim, so any alphabetic character counts.
fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_book_char(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

fn is_dash(c: char) -> bool {
    c == '-' || c == '\u{2014}'
}

/// Classifies the longest token at the head of `input`, in priority order.
fn token_kind(input: &str) -> IResult<&str, TokenKind> {
    alt((
        map(take_while1(is_whitespace), |_| TokenKind::Whitespace),
        map(
            recognize(tuple((satisfy(is_letter), take_while(is_book_char)))),
            |_| TokenKind::Book,
        ),
        // Numbered books: "1kor", "2tes"
        map(
            recognize(tuple((satisfy(is_digit), satisfy(is_letter), take_while(is_book_char)))),
            |_| TokenKind::Book,
        ),
        map(take_while1(is_digit), |_| TokenKind::NextNum),
        map(char(','), |_| TokenKind::Comma),
        map(satisfy(is_dash), |_| TokenKind::Dash),
    ))(input)
}

/// Pull-based tokenizer over a reference string.
///
/// The only state is the byte position; scanning past the end keeps
/// returning [`TokenKind::EndOfInput`].
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn next_token(&mut self) -> Token<'a> {
        let rest = &self.input[self.pos..];
        let start = self.pos;

        let kind = match token_kind(rest) {
            Ok((next, kind)) => {
                self.pos += rest.len() - next.len();
                kind
            }
            Err(_) => match rest.chars().next() {
                None => TokenKind::EndOfInput,
                Some(c) => {
                    self.pos += c.len_utf8();
                    TokenKind::Illegal
                }
            },
        };

        let token = Token {
            span: Span::new(start, self.pos),
            text: &self.input[start..self.pos],
            kind,
        };
        tracing::trace!(%token, "scanned");
        token
    }
}

/// Yields every token before [`TokenKind::EndOfInput`].
impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is(TokenKind::EndOfInput)).then_some(token)
    }
}
