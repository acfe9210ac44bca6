//! User model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sequential user identifier, starting at 1
pub type UserId = u64;

/// Never handed out by registration, which starts counting at 1
pub const UNASSIGNED_USER_ID: UserId = 0;

/// User role. Only affects how the user is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Faculty,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Faculty => "Faculty",
        }
    }

    /// Menu selection code: 1 = Student, 2 = Faculty
    pub fn from_menu_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(UserRole::Student),
            2 => Some(UserRole::Faculty),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(UserRole::Student),
            "faculty" => Ok(UserRole::Faculty),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// Registered library user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    role: UserRole,
    borrowed: Vec<String>,
}

impl User {
    pub(crate) fn new(id: UserId, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            borrowed: Vec::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Identifiers currently checked out, in borrow order
    pub fn borrowed(&self) -> &[String] {
        &self.borrowed
    }

    pub fn has_borrowed(&self, identifier: &str) -> bool {
        self.borrowed.iter().any(|b| b == identifier)
    }

    pub(crate) fn push_borrowed(&mut self, identifier: String) {
        self.borrowed.push(identifier);
    }

    /// Remove every occurrence of `identifier`; returns how many were removed
    pub(crate) fn remove_borrowed(&mut self, identifier: &str) -> usize {
        let before = self.borrowed.len();
        self.borrowed.retain(|b| b != identifier);
        before - self.borrowed.len()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - Name: {}, ID: {}, Borrowed Books: ",
            self.role, self.name, self.id
        )?;
        for identifier in &self.borrowed {
            write!(f, "{} ", identifier)?;
        }
        Ok(())
    }
}

/// Register user request
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Name must not be blank"))]
    pub name: String,
    pub role: UserRole,
}

impl NewUser {
    pub fn new(name: &str, role: UserRole) -> Self {
        Self {
            name: name.trim().to_string(),
            role,
        }
    }
}
