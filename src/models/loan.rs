//! Loan (borrow/return) outcome

use serde::{Deserialize, Serialize};

/// Outcome of a successful borrow or return
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanReceipt {
    pub user_name: String,
    pub title: String,
}
