//! Membership: the in-memory user registry

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserId, UserRole, UNASSIGNED_USER_ID},
};

/// Users keyed by ID. IDs come from a per-registry counter starting at 1 and
/// are never reused.
#[derive(Debug, Clone)]
pub struct Membership {
    users: IndexMap<UserId, User>,
    next_id: UserId,
}

impl Default for Membership {
    fn default() -> Self {
        Self {
            users: IndexMap::new(),
            next_id: UNASSIGNED_USER_ID + 1,
        }
    }
}

impl Membership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user and return the assigned ID
    pub fn register(&mut self, name: &str, role: UserRole) -> UserId {
        let id = self.next_id;
        self.next_id += 1;
        self.users.insert(id, User::new(id, name, role));
        id
    }

    /// Get user by ID
    pub fn get_by_id(&self, id: UserId) -> AppResult<&User> {
        self.users.get(&id).ok_or(AppError::UserNotFound(id))
    }

    fn get_mut(&mut self, id: UserId) -> AppResult<&mut User> {
        self.users.get_mut(&id).ok_or(AppError::UserNotFound(id))
    }

    pub fn record_borrow(&mut self, id: UserId, identifier: &str) -> AppResult<()> {
        self.get_mut(id)?.push_borrowed(identifier.to_string());
        Ok(())
    }

    /// Remove `identifier` (every occurrence) from the user's borrowed set
    pub fn record_return(&mut self, id: UserId, identifier: &str) -> AppResult<()> {
        let user = self.get_mut(id)?;
        if user.borrowed().is_empty() {
            return Err(AppError::NothingBorrowed(id));
        }
        if user.remove_borrowed(identifier) == 0 {
            return Err(AppError::NotBorrowedByUser {
                user_id: id,
                identifier: identifier.to_string(),
            });
        }
        Ok(())
    }

    /// The user currently holding `identifier`, if any
    pub fn holder_of(&self, identifier: &str) -> Option<UserId> {
        self.users
            .values()
            .find(|u| u.has_borrowed(identifier))
            .map(User::id)
    }

    /// All users. Callers must not rely on the iteration order.
    pub fn list_all(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }
}
