//! Catalog management service

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    repository::Catalog,
};

pub struct CatalogService<'a> {
    catalog: &'a mut Catalog,
    config: &'a CatalogConfig,
}

impl<'a> CatalogService<'a> {
    pub fn new(catalog: &'a mut Catalog, config: &'a CatalogConfig) -> Self {
        Self { catalog, config }
    }

    /// Add a book. Rejects a repeated identifier unless duplicates are allowed.
    pub fn add_book(&mut self, title: &str, author: &str, identifier: &str) -> AppResult<()> {
        if !self.config.allow_duplicate_identifiers && self.catalog.contains(identifier) {
            tracing::info!(identifier, "Catalog add: identifier already present");
            return Err(AppError::DuplicateIdentifier(identifier.to_string()));
        }

        self.catalog.add_book(title, author, identifier);
        tracing::info!(identifier, title, "Catalog add: book added");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_identifier_rejected_by_default() {
        let mut catalog = Catalog::new();
        let config = CatalogConfig::default();
        let mut service = CatalogService::new(&mut catalog, &config);

        service.add_book("Dune", "Herbert", "ISBN1").unwrap();
        let err = service.add_book("Other", "Someone", "ISBN1").unwrap_err();
        assert!(matches!(err, AppError::DuplicateIdentifier(ref id) if id == "ISBN1"));
        drop(service);
        assert_eq!(catalog.get_by_identifier("ISBN1").unwrap().title(), "Dune");
        assert_eq!(catalog.list_all().len(), 1);
    }

    #[test]
    fn duplicate_identifier_allowed_when_configured() {
        let mut catalog = Catalog::new();
        let config = CatalogConfig {
            allow_duplicate_identifiers: true,
        };
        let mut service = CatalogService::new(&mut catalog, &config);

        service.add_book("Dune", "Herbert", "ISBN1").unwrap();
        service.add_book("Other", "Someone", "ISBN1").unwrap();
        drop(service);
        assert_eq!(catalog.get_by_identifier("ISBN1").unwrap().title(), "Dune");
        assert_eq!(catalog.list_all().len(), 2);
    }
}
