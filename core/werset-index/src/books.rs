use std::collections::{BTreeMap, HashMap};

use werset_protocol::{BookAlias, BookNumber};

use crate::error::{ResolveError, Result};

/// Bidirectional book alias table.
///
/// Every alias resolves to its canonical number; the first alias added for a
/// number is its display name.
#[derive(Debug, Clone, Default)]
pub struct BookTable {
    names: BTreeMap<BookNumber, Vec<String>>,
    numbers: HashMap<String, BookNumber>,
}

impl BookTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, number: BookNumber, name: impl Into<String>) {
        let name = name.into();
        if let Some(previous) = self.numbers.insert(name.clone(), number) {
            if previous != number {
                tracing::warn!(%name, %previous, %number, "book alias reassigned");
                if let Some(aliases) = self.names.get_mut(&previous) {
                    aliases.retain(|alias| alias != &name);
                }
            } else {
                return;
            }
        }
        self.names.entry(number).or_default().push(name);
    }

    /// Canonical number for any registered alias.
    pub fn number(&self, name: &str) -> Result<BookNumber> {
        self.numbers
            .get(name)
            .copied()
            .ok_or_else(|| ResolveError::UnknownBook(name.to_string()))
    }

    pub fn names(&self, number: BookNumber) -> Result<&[String]> {
        self.names
            .get(&number)
            .map(Vec::as_slice)
            .filter(|aliases| !aliases.is_empty())
            .ok_or(ResolveError::UnknownBookNumber(number))
    }

    pub fn display_name(&self, number: BookNumber) -> Result<&str> {
        self.names(number).map(|aliases| aliases[0].as_str())
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Aliases in book-number order, suitable for a snapshot.
    pub fn aliases(&self) -> Vec<BookAlias> {
        self.names
            .iter()
            .flat_map(|(number, names)| {
                names.iter().map(move |name| BookAlias {
                    number: *number,
                    name: name.clone(),
                })
            })
            .collect()
    }
}

impl FromIterator<BookAlias> for BookTable {
    fn from_iter<I: IntoIterator<Item = BookAlias>>(iter: I) -> Self {
        let mut table = Self::new();
        for alias in iter {
            table.insert(alias.number, alias.name);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_lookup() {
        let mut books = BookTable::new();
        books.insert(BookNumber::new(28), "1Kor");
        books.insert(BookNumber::new(28), "1kor");
        books.insert(BookNumber::new(66), "Ap");

        assert_eq!(books.number("1kor").unwrap(), BookNumber::new(28));
        assert_eq!(books.number("1Kor").unwrap(), BookNumber::new(28));
        assert_eq!(books.display_name(BookNumber::new(28)).unwrap(), "1Kor");
        assert_eq!(books.names(BookNumber::new(28)).unwrap().len(), 2);
        assert_eq!(books.len(), 3);
    }

    #[test]
    fn test_unknown_book() {
        let books = BookTable::new();
        assert_eq!(
            books.number("xyz"),
            Err(ResolveError::UnknownBook("xyz".to_string()))
        );
        assert_eq!(
            books.names(BookNumber::new(3)),
            Err(ResolveError::UnknownBookNumber(BookNumber::new(3)))
        );
    }

    #[test]
    fn test_duplicate_alias_is_ignored() {
        let mut books = BookTable::new();
        books.insert(BookNumber::new(1), "rdz");
        books.insert(BookNumber::new(1), "rdz");
        assert_eq!(books.names(BookNumber::new(1)).unwrap(), ["rdz".to_string()]);
    }

    #[test]
    fn test_reassigned_alias_moves() {
        let mut books = BookTable::new();
        books.insert(BookNumber::new(1), "x");
        books.insert(BookNumber::new(2), "x");
        assert_eq!(books.number("x").unwrap(), BookNumber::new(2));
        assert!(books.names(BookNumber::new(1)).is_err());
        assert_eq!(books.aliases().len(), 1);
    }
}
