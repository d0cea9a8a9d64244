//! Signed-up user registry with JSON file persistence.

mod store;

pub use store::{JsonStore, MemoryStore, Store};

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A signed-up user.
///
/// Keyed externally by phone number exactly as the client submitted it at
/// signup (the '+' is only stripped when talking to the provider).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

/// In-memory user registry.
///
/// Serializes transparently as the bare `phone -> {name, email}` object,
/// which is also the on-disk document format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    users: HashMap<String, UserRecord>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Look up a user by phone number.
    pub fn get(&self, phone: &str) -> Option<&UserRecord> {
        self.users.get(phone)
    }

    /// Whether a phone number is already signed up.
    pub fn contains(&self, phone: &str) -> bool {
        self.users.contains_key(phone)
    }

    /// Insert a new user. Phone numbers are unique; inserting an existing
    /// key fails and leaves the stored record untouched.
    pub fn create(&mut self, phone: String, record: UserRecord) -> Result<(), ApiError> {
        if self.users.contains_key(&phone) {
            return Err(ApiError::UserAlreadyExists);
        }
        self.users.insert(phone, record);
        Ok(())
    }

    /// Number of signed-up users.
    pub fn count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserRecord {
        UserRecord {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        }
    }

    #[test]
    fn test_create_and_get() {
        let mut registry = Registry::new();
        registry.create("+919876543210".into(), alice()).unwrap();

        let user = registry.get("+919876543210").unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert!(registry.contains("+919876543210"));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_duplicate_create_keeps_first_record() {
        let mut registry = Registry::new();
        registry.create("+919876543210".into(), alice()).unwrap();

        let second = UserRecord {
            name: "Mallory".into(),
            email: "mallory@example.com".into(),
        };
        let err = registry.create("+919876543210".into(), second);
        assert!(matches!(err, Err(ApiError::UserAlreadyExists)));

        assert_eq!(registry.get("+919876543210").unwrap(), &alice());
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_lookup_miss() {
        let registry = Registry::new();
        assert!(registry.get("+911111111111").is_none());
        assert!(!registry.contains("+911111111111"));
    }

    #[test]
    fn test_serializes_as_bare_object() {
        let mut registry = Registry::new();
        registry.create("+919876543210".into(), alice()).unwrap();

        let json = serde_json::to_value(&registry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "+919876543210": { "name": "Alice", "email": "alice@example.com" }
            })
        );

        let restored: Registry = serde_json::from_value(json).unwrap();
        assert_eq!(restored.get("+919876543210"), Some(&alice()));
    }
}
