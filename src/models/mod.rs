//! Data models for the library catalog

pub mod book;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::{Book, NewBook};
pub use loan::LoanReceipt;
pub use user::{NewUser, User, UserId, UserRole, UNASSIGNED_USER_ID};
