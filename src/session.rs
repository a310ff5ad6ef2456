//! Mock sign-in and the stored current user.
//!
//! Credentials are compared in plain text against a fixed directory. This
//! is a demo gate, not an authentication system.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SESSION_FILE: &str = "etrack-user.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// A signed-in user. Never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

struct Account {
    user: User,
    password: String,
}

pub struct UserDirectory {
    accounts: Vec<Account>,
}

impl Default for UserDirectory {
    fn default() -> Self {
        let account = |id: &str, name: &str, email: &str, role, password: &str| Account {
            user: User {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                role,
            },
            password: password.to_string(),
        };

        Self {
            accounts: vec![
                account("1", "Admin User", "admin@example.com", Role::Admin, "admin123"),
                account("2", "Regular User", "user@example.com", Role::User, "user123"),
            ],
        }
    }
}

impl UserDirectory {
    /// Returns the matching user, or `None` when the credentials are wrong.
    #[must_use]
    pub fn login(&self, email: &str, password: &str) -> Option<User> {
        let user = self
            .accounts
            .iter()
            .find(|a| a.user.email == email && a.password == password)
            .map(|a| a.user.clone());

        match &user {
            Some(u) => tracing::info!(user = %u.email, "signed in"),
            None => tracing::warn!(email, "rejected sign-in"),
        }
        user
    }
}

/// Persists the single signed-in user as JSON.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored user. A missing file means nobody is signed in.
    pub fn load(&self) -> Result<Option<User>, SessionError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SessionError::FileRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn save(&self, user: &User) -> Result<(), SessionError> {
        let json = serde_json::to_string(user)?;
        std::fs::write(&self.path, json).map_err(|source| SessionError::FileWrite {
            path: self.path.clone(),
            source,
        })
    }

    /// Signs out. Clearing an empty store is not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::FileWrite {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
