//! User registration service

use crate::{
    models::user::{UserId, UserRole},
    repository::Membership,
};

pub struct UsersService<'a> {
    membership: &'a mut Membership,
}

impl<'a> UsersService<'a> {
    pub fn new(membership: &'a mut Membership) -> Self {
        Self { membership }
    }

    /// Register a user and return the new ID
    pub fn register(&mut self, name: &str, role: UserRole) -> UserId {
        let id = self.membership.register(name, role);
        tracing::info!(user_id = id, user_name = name, role = role.as_str(), "User registered");
        id
    }
}
