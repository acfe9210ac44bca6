//! Library catalog
//!
//! An in-memory catalog of books and registry of users, with borrow/return
//! bookkeeping that keeps a book's availability flag and its borrower's
//! record in step, driven from a terminal menu.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::Services;
