//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A catalog entry. The identifier (usually an ISBN) never changes once the
/// book is created; availability is the only mutable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    identifier: String,
    available: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            identifier: identifier.into(),
            available: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Case-sensitive substring match on title or author
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query) || self.author.contains(query)
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, ISBN: {}, Available: {}",
            self.title,
            self.author,
            self.identifier,
            if self.available { "Yes" } else { "No" }
        )
    }
}

/// Add book request, as collected by the menu
#[derive(Debug, Clone, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title must not be blank"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be blank"))]
    pub author: String,
    #[validate(length(min = 1, message = "ISBN must not be blank"))]
    pub identifier: String,
}

impl NewBook {
    /// Build a request from raw input, trimming surrounding whitespace
    pub fn new(title: &str, author: &str, identifier: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            identifier: identifier.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_is_available() {
        let book = Book::new("Dune", "Herbert", "ISBN1");
        assert!(book.is_available());
        assert_eq!(book.identifier(), "ISBN1");
    }

    #[test]
    fn matches_title_or_author_case_sensitively() {
        let book = Book::new("Dune", "Frank Herbert", "ISBN1");
        assert!(book.matches("Dun"));
        assert!(book.matches("Herb"));
        assert!(!book.matches("dune"));
        assert!(book.matches(""));
    }

    #[test]
    fn display_line() {
        let mut book = Book::new("Dune", "Herbert", "ISBN1");
        assert_eq!(
            book.to_string(),
            "Title: Dune, Author: Herbert, ISBN: ISBN1, Available: Yes"
        );
        book.set_available(false);
        assert!(book.to_string().ends_with("Available: No"));
    }

    #[test]
    fn blank_fields_fail_validation() {
        assert!(NewBook::new("Dune", "Herbert", "ISBN1").validate().is_ok());
        let errors = NewBook::new("  ", "Herbert", "ISBN1").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }
}
