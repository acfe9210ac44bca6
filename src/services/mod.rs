//! Business logic services

pub mod catalog;
pub mod loans;
pub mod users;

use crate::{
    config::AppConfig,
    error::AppResult,
    models::{book::Book, loan::LoanReceipt, user::{User, UserId, UserRole}},
    repository::Repository,
};

/// Owns the library state and the policies that govern it.
///
/// The service views borrow the state for the duration of one call; the
/// methods below are the operations offered to the menu.
#[derive(Debug, Clone)]
pub struct Services {
    repository: Repository,
    config: AppConfig,
}

impl Services {
    pub fn new(config: AppConfig) -> Self {
        Self {
            repository: Repository::new(),
            config,
        }
    }

    pub fn catalog(&mut self) -> catalog::CatalogService<'_> {
        catalog::CatalogService::new(&mut self.repository.catalog, &self.config.catalog)
    }

    pub fn users(&mut self) -> users::UsersService<'_> {
        users::UsersService::new(&mut self.repository.membership)
    }

    pub fn loans(&mut self) -> loans::LoansService<'_> {
        loans::LoansService::new(&mut self.repository, &self.config.lending)
    }

    pub fn add_book(&mut self, title: &str, author: &str, identifier: &str) -> AppResult<()> {
        self.catalog().add_book(title, author, identifier)
    }

    pub fn register_user(&mut self, name: &str, role: UserRole) -> UserId {
        self.users().register(name, role)
    }

    /// Books whose title or author contains `query`; empty when nothing matches
    pub fn search(&self, query: &str) -> Vec<Book> {
        let results: Vec<Book> = self.repository.catalog.search(query).cloned().collect();
        tracing::debug!(query, matches = results.len(), "Catalog search");
        results
    }

    pub fn borrow(&mut self, user_id: UserId, identifier: &str) -> AppResult<LoanReceipt> {
        self.loans().borrow(user_id, identifier)
    }

    pub fn return_book(&mut self, user_id: UserId, identifier: &str) -> AppResult<LoanReceipt> {
        self.loans().return_book(user_id, identifier)
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.repository.catalog.list_all().to_vec()
    }

    /// Registered users; the order is not part of the contract
    pub fn list_users(&self) -> Vec<User> {
        self.repository.membership.list_all().cloned().collect()
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
