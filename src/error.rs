//! Error types for the library catalog

use thiserror::Error;

use crate::models::user::UserId;

/// Numeric error codes reported alongside each error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchUser = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
    NotBorrowed = 12,
    NothingBorrowed = 13,
    NotBorrowedByUser = 14,
    BadValue = 18,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("User not found")]
    UserNotFound(UserId),

    #[error("Book with ISBN {0} not found")]
    BookNotFound(String),

    #[error("Book \"{title}\" is already borrowed")]
    AlreadyBorrowed { title: String },

    #[error("Book \"{title}\" was never borrowed")]
    NeverBorrowed { title: String },

    #[error("No borrowed books to return")]
    NothingBorrowed(UserId),

    #[error("Book with ISBN {identifier} not found in borrowed books")]
    NotBorrowedByUser { user_id: UserId, identifier: String },

    #[error("A book with ISBN {0} already exists")]
    DuplicateIdentifier(String),

    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::UserNotFound(_) => ErrorCode::NoSuchUser,
            AppError::BookNotFound(_) => ErrorCode::NoSuchItem,
            AppError::AlreadyBorrowed { .. } => ErrorCode::ItemNotAvailable,
            AppError::NeverBorrowed { .. } => ErrorCode::NotBorrowed,
            AppError::NothingBorrowed(_) => ErrorCode::NothingBorrowed,
            AppError::NotBorrowedByUser { .. } => ErrorCode::NotBorrowedByUser,
            AppError::DuplicateIdentifier(_) => ErrorCode::Duplicate,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Config(_) | AppError::Io(_) => ErrorCode::Failure,
        }
    }

    /// Membership bookkeeping disagreed with the catalog; the lending invariant is broken
    pub fn is_bookkeeping_fault(&self) -> bool {
        matches!(
            self,
            AppError::NothingBorrowed(_) | AppError::NotBorrowedByUser { .. }
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect::<Vec<_>>()
            .join("; ");
        AppError::Validation(message)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
