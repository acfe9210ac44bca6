//! Repository layer: in-memory stores for books and users

pub mod catalog;
pub mod membership;

pub use catalog::Catalog;
pub use membership::Membership;

/// Owns every piece of library state for the lifetime of the process
#[derive(Debug, Default, Clone)]
pub struct Repository {
    pub catalog: Catalog,
    pub membership: Membership,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}
