//! Loan management service: borrow and return

use crate::{
    config::{LendingConfig, ReturnPolicy},
    error::{AppError, AppResult},
    models::{loan::LoanReceipt, user::UserId},
    repository::Repository,
};

/// Borrow/return orchestration over the catalog and the membership registry.
///
/// Every check that can fail runs before any state changes, and the catalog
/// flag is flipped only once the membership update went through, so a book is
/// unavailable exactly when one user's borrowed set lists it.
pub struct LoansService<'a> {
    repository: &'a mut Repository,
    config: &'a LendingConfig,
}

impl<'a> LoansService<'a> {
    pub fn new(repository: &'a mut Repository, config: &'a LendingConfig) -> Self {
        Self { repository, config }
    }

    /// Borrow a book
    pub fn borrow(&mut self, user_id: UserId, identifier: &str) -> AppResult<LoanReceipt> {
        let result = self.try_borrow(user_id, identifier);
        log_outcome("borrow", user_id, identifier, &result);
        result
    }

    /// Return a borrowed book
    pub fn return_book(&mut self, user_id: UserId, identifier: &str) -> AppResult<LoanReceipt> {
        let result = self.try_return(user_id, identifier);
        log_outcome("return", user_id, identifier, &result);
        result
    }

    fn try_borrow(&mut self, user_id: UserId, identifier: &str) -> AppResult<LoanReceipt> {
        let user_name = self
            .repository
            .membership
            .get_by_id(user_id)?
            .name()
            .to_string();

        let book = self.repository.catalog.get_by_identifier(identifier)?;
        if !book.is_available() {
            return Err(AppError::AlreadyBorrowed {
                title: book.title().to_string(),
            });
        }
        let title = book.title().to_string();

        self.repository.membership.record_borrow(user_id, identifier)?;
        self.repository.catalog.mark_borrowed(identifier)?;

        Ok(LoanReceipt { user_name, title })
    }

    fn try_return(&mut self, user_id: UserId, identifier: &str) -> AppResult<LoanReceipt> {
        let user_name = self
            .repository
            .membership
            .get_by_id(user_id)?
            .name()
            .to_string();

        let book = self.repository.catalog.get_by_identifier(identifier)?;
        if book.is_available() {
            return Err(AppError::NeverBorrowed {
                title: book.title().to_string(),
            });
        }
        let title = book.title().to_string();

        let holder = match self.config.return_policy {
            ReturnPolicy::BorrowerOnly => user_id,
            ReturnPolicy::Permissive => self
                .repository
                .membership
                .holder_of(identifier)
                .unwrap_or(user_id),
        };
        if holder != user_id {
            tracing::info!(
                user_id,
                holder,
                identifier,
                "Return on behalf of the borrowing user"
            );
        }

        self.repository.membership.record_return(holder, identifier)?;
        self.repository.catalog.mark_available(identifier)?;

        Ok(LoanReceipt { user_name, title })
    }
}

fn log_outcome(action: &str, user_id: UserId, identifier: &str, result: &AppResult<LoanReceipt>) {
    match result {
        Ok(receipt) => {
            tracing::info!(action, user_id, identifier, title = %receipt.title, "Loan {} completed", action)
        }
        Err(e) if e.is_bookkeeping_fault() => {
            tracing::error!(action, user_id, identifier, error = %e, "Borrowed set disagrees with catalog")
        }
        Err(e) => {
            tracing::info!(action, user_id, identifier, error = %e, code = e.code() as u32, "Loan {} rejected", action)
        }
    }
}
