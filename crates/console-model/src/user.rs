//! Organisation members
//!
//! Membership is implied by the organisation the user list was fetched for;
//! a `User` carries no organisation id of its own.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of the selected organisation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: Uuid,

    /// Given name
    pub first_name: String,

    /// Family name
    #[serde(default)]
    pub last_name: String,

    /// Contact and login email
    pub email: String,

    /// Whether the user owns the organisation
    #[serde(default)]
    pub is_owner: bool,
}

impl User {
    /// Create a non-owner member.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            is_owner: false,
        }
    }

    /// Full display name, falling back to the email when no name is set.
    ///
    /// ```
    /// use console_model::User;
    ///
    /// let user = User::new("Ada", "Lovelace", "ada@acme.io");
    /// assert_eq!(user.full_name(), "Ada Lovelace");
    ///
    /// let anonymous = User::new("", "", "ops@acme.io");
    /// assert_eq!(anonymous.full_name(), "ops@acme.io");
    /// ```
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_with_missing_last_name() {
        let user = User::new("Grace", "", "grace@acme.io");
        assert_eq!(user.full_name(), "Grace");
    }

    #[test]
    fn test_user_wire_format() {
        let json = r#"{
            "id": "0190c1d2-0000-7000-8000-0000000000b1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@acme.io",
            "isOwner": true
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_owner);
        assert_eq!(user.full_name(), "Ada Lovelace");
    }
}
