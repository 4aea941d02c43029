use werset_index::Resolver;
use werset_protocol::{pad_field, Label, Verse, FIELD_WIDTH};

use crate::error::{ParseError, Result};
use crate::scanner::Scanner;
use crate::token::{Span, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    Book,
    Chapter,
    Verse,
    /// After "verse-DASH": the number is either a verse or a chapter
    NextNum,
    End,
}

/// Transition table. Anything unmatched ends the reference with whatever has
/// been accumulated so far.
pub fn next_state(state: State, token: TokenKind) -> State {
    match (state, token) {
        (State::Start, TokenKind::Book) => State::Book,
        // BOOK is always followed by the chapter digits
        (State::Book, _) => State::Chapter,
        (State::Chapter, TokenKind::Comma) => State::Verse,
        (State::Chapter, TokenKind::Dash) => State::Chapter,
        (State::Verse, TokenKind::Dash) => State::NextNum,
        (State::NextNum, TokenKind::Comma) => State::Verse,
        _ => State::End,
    }
}

/// One-shot reference parser: builds at most two labels and hands them to
/// the resolver.
pub struct Parser<'a, R: ?Sized> {
    scanner: Scanner<'a>,
    resolver: &'a R,
    /// Single token of pushback
    pushback: Option<Token<'a>>,
    labels: Vec<String>,
    /// Padded fields reused by the second label of a range
    book: String,
    chapter: String,
}

impl<'a, R: Resolver + ?Sized> Parser<'a, R> {
    pub fn new(input: &'a str, resolver: &'a R) -> Self {
        Self {
            scanner: Scanner::new(input),
            resolver,
            pushback: None,
            labels: Vec::with_capacity(2),
            book: String::new(),
            chapter: String::new(),
        }
    }

    fn scan(&mut self) -> Token<'a> {
        match self.pushback.take() {
            Some(token) => token,
            None => self.scanner.next_token(),
        }
    }

    fn unscan(&mut self, token: Token<'a>) {
        self.pushback = Some(token);
    }

    fn scan_ignore_whitespace(&mut self) -> Token<'a> {
        let token = self.scan();
        if token.is(TokenKind::Whitespace) {
            self.scan()
        } else {
            token
        }
    }

    fn next_label(&mut self) {
        self.labels.push(String::new());
    }

    /// Appends a padded field to the label being built.
    fn append(labels: &mut [String], field: &str) {
        if let Some(label) = labels.last_mut() {
            label.push_str(&pad_field(field));
        }
    }

    fn book_field(&self, name: &str) -> Result<String> {
        let field = self.resolver.book_number(name)?.field();
        if field.len() != FIELD_WIDTH {
            return Err(ParseError::BookNumberWidth(field));
        }
        Ok(field)
    }

    pub fn parse(mut self) -> Result<Verse> {
        let mut state = State::Start;
        let mut last_state = State::Start;
        let mut token = Token {
            span: Span::new(0, 0),
            text: "",
            kind: TokenKind::Illegal,
        };

        loop {
            if let Some(verse) = self.enter(state, last_state, token)? {
                return Ok(verse);
            }

            token = self.scan_ignore_whitespace();
            last_state = state;
            state = next_state(state, token.kind);
            tracing::trace!(?last_state, ?state, %token, "transition");
        }
    }

    /// State action, run once on entry. `token` is the token that caused
    /// the transition.
    fn enter(&mut self, state: State, last_state: State, token: Token<'a>) -> Result<Option<Verse>> {
        match state {
            State::Start => self.next_label(),
            State::Book => {
                let field = self.book_field(token.text)?;
                Self::append(&mut self.labels, &field);
                self.book = field;
            }
            // Chapter range ("9-10"): second label, same book
            State::Chapter if last_state == State::Chapter && token.is(TokenKind::Dash) => {
                self.next_label();
                let chapter = self.scan_ignore_whitespace();
                Self::append(&mut self.labels, &self.book);
                Self::append(&mut self.labels, chapter.text);
            }
            State::Chapter => {
                Self::append(&mut self.labels, token.text);
                self.chapter = pad_field(token.text);
            }
            State::Verse => {
                let verse = if token.is(TokenKind::NextNum) {
                    token
                } else {
                    self.scan_ignore_whitespace()
                };
                Self::append(&mut self.labels, verse.text);
            }
            State::NextNum if last_state == State::Verse && token.is(TokenKind::Dash) => {
                self.next_label();
                let number = self.scan_ignore_whitespace();
                Self::append(&mut self.labels, &self.book);

                let lookahead = self.scan_ignore_whitespace();
                match lookahead.kind {
                    // "1,1-2,1": the number is a chapter, a verse follows
                    TokenKind::Comma => {
                        self.unscan(lookahead);
                        Self::append(&mut self.labels, number.text);
                    }
                    // "1,1-31": the number is a verse in the current chapter
                    TokenKind::EndOfInput => {
                        Self::append(&mut self.labels, &self.chapter);
                        Self::append(&mut self.labels, number.text);
                    }
                    _ => {}
                }
            }
            State::NextNum => {}
            State::End => return self.finish().map(Some),
        }
        Ok(None)
    }

    fn finish(&self) -> Result<Verse> {
        match self.labels.as_slice() {
            [single] => Ok(self.resolver.verse_from_single_label(&Label::new(single.as_str()))?),
            [start, end] => Ok(self
                .resolver
                .verse_from_dual_label(&Label::new(start.as_str()), &Label::new(end.as_str()))?),
            labels => Err(ParseError::MalformedReference {
                labels: labels.len(),
            }),
        }
    }
}
