//! Catalog: the in-memory book store

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Ordered list of books. Lookups scan in insertion order and resolve to the
/// first match, so a duplicated identifier shadows later entries.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book, available by default
    pub fn add_book(&mut self, title: &str, author: &str, identifier: &str) {
        self.books.push(Book::new(title, author, identifier));
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.books.iter().any(|b| b.identifier() == identifier)
    }

    /// Get book by identifier
    pub fn get_by_identifier(&self, identifier: &str) -> AppResult<&Book> {
        self.books
            .iter()
            .find(|b| b.identifier() == identifier)
            .ok_or_else(|| AppError::BookNotFound(identifier.to_string()))
    }

    fn get_mut(&mut self, identifier: &str) -> AppResult<&mut Book> {
        self.books
            .iter_mut()
            .find(|b| b.identifier() == identifier)
            .ok_or_else(|| AppError::BookNotFound(identifier.to_string()))
    }

    pub fn mark_borrowed(&mut self, identifier: &str) -> AppResult<()> {
        self.get_mut(identifier)?.set_available(false);
        Ok(())
    }

    pub fn mark_available(&mut self, identifier: &str) -> AppResult<()> {
        self.get_mut(identifier)?.set_available(true);
        Ok(())
    }

    /// Books whose title or author contains `query`, in catalog order
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Book> + Clone + 'a {
        self.books.iter().filter(move |b| b.matches(query))
    }

    pub fn list_all(&self) -> &[Book] {
        &self.books
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_book("Dune", "Frank Herbert", "ISBN1");
        catalog.add_book("Children of Dune", "Frank Herbert", "ISBN2");
        catalog.add_book("Neuromancer", "William Gibson", "ISBN3");
        catalog
    }

    #[test]
    fn lookup_by_identifier() {
        let catalog = sample();
        assert_eq!(catalog.get_by_identifier("ISBN3").unwrap().title(), "Neuromancer");
        assert!(matches!(
            catalog.get_by_identifier("nope"),
            Err(AppError::BookNotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn duplicate_identifier_resolves_to_first() {
        let mut catalog = sample();
        catalog.add_book("Dune (reprint)", "Frank Herbert", "ISBN1");
        assert_eq!(catalog.list_all().len(), 4);
        assert_eq!(catalog.get_by_identifier("ISBN1").unwrap().title(), "Dune");

        catalog.mark_borrowed("ISBN1").unwrap();
        assert!(!catalog.list_all()[0].is_available());
        assert!(catalog.list_all()[3].is_available());
    }

    #[test]
    fn search_is_ordered_and_restartable() {
        let catalog = sample();
        let results = catalog.search("Dune");
        let first: Vec<_> = results.clone().map(Book::identifier).collect();
        let second: Vec<_> = results.map(Book::identifier).collect();
        assert_eq!(first, ["ISBN1", "ISBN2"]);
        assert_eq!(first, second);

        assert_eq!(catalog.search("Gibson").count(), 1);
        assert_eq!(catalog.search("gibson").count(), 0);
    }

    #[test]
    fn availability_flag_round_trip() {
        let mut catalog = sample();
        catalog.mark_borrowed("ISBN2").unwrap();
        assert!(!catalog.get_by_identifier("ISBN2").unwrap().is_available());
        catalog.mark_available("ISBN2").unwrap();
        assert!(catalog.get_by_identifier("ISBN2").unwrap().is_available());
        assert!(catalog.mark_borrowed("missing").is_err());
    }
}
