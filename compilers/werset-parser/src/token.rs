use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letters, or one digit followed by letters ("1kor")
    Book,
    /// Run of digits
    NextNum,
    Comma,
    /// ASCII hyphen or em-dash
    Dash,
    Whitespace,
    EndOfInput,
    /// Any other single character
    Illegal,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Book => "BOOK",
            TokenKind::NextNum => "NEXT_NUM",
            TokenKind::Comma => "COMMA",
            TokenKind::Dash => "DASH",
            TokenKind::Whitespace => "WS",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Illegal => "ILLEGAL",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub span: Span,
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "{}", self.kind),
            _ => write!(f, "{}({:?})", self.kind, self.text),
        }
    }
}
