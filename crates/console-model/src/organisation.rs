//! Organisation domain models
//!
//! This module provides the Organisation entity, the tenant that scopes every
//! resource fetch in the console, and the account status reported for the
//! signed-in user within it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An organisation is a tenant in the multi-tenant console.
///
/// The currently selected organisation is the scoping key for all
/// organisation-bound resources (roles, users, products, subscriptions).
///
/// # Examples
///
/// ```
/// use console_model::Organisation;
///
/// let org = Organisation::new("Acme Sensors");
/// assert_eq!(org.name, "Acme Sensors");
/// assert!(org.is_active);
/// assert!(!org.needs_upgrade());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    /// Unique identifier for the organisation
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// Whether the signed-in user owns this organisation
    #[serde(default)]
    pub is_owner: bool,

    /// Whether the organisation currently has an active plan
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Organisation {
    /// Creates a new active organisation with a fresh UUID v7 id.
    ///
    /// The signed-in user is not marked as owner; use
    /// [`Organisation::owned`] for that.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            is_owner: false,
            is_active: true,
        }
    }

    /// Creates a new active organisation owned by the signed-in user.
    pub fn owned(name: impl Into<String>) -> Self {
        Self {
            is_owner: true,
            ..Self::new(name)
        }
    }

    /// Mark the organisation as inactive.
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Check if the organisation must upgrade before it can be used.
    ///
    /// # Returns
    ///
    /// `true` when the organisation is flagged inactive
    pub fn needs_upgrade(&self) -> bool {
        !self.is_active
    }
}

fn default_active() -> bool {
    true
}

/// Status of the signed-in account within an organisation.
///
/// The backend reports this as a free-form string; anything the console does
/// not recognise maps to [`AccountStatus::Unknown`]. Decoding goes through
/// [`AccountStatus::parse`], so JSON and plain strings agree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String")]
pub enum AccountStatus {
    /// Account in good standing
    #[default]
    Active,

    /// Access temporarily suspended
    Suspended,

    /// Account removed from the organisation
    Removed,

    /// Any status the console does not know about
    Unknown,
}

impl AccountStatus {
    /// Parse an account status from its string representation.
    ///
    /// Matching is case-insensitive and never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_model::AccountStatus;
    ///
    /// assert_eq!(AccountStatus::parse("Suspended"), AccountStatus::Suspended);
    /// assert_eq!(AccountStatus::parse("removed"), AccountStatus::Removed);
    /// assert_eq!(AccountStatus::parse("Pending"), AccountStatus::Unknown);
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "active" => AccountStatus::Active,
            "suspended" => AccountStatus::Suspended,
            "removed" => AccountStatus::Removed,
            _ => AccountStatus::Unknown,
        }
    }

    /// Get string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Suspended => "Suspended",
            AccountStatus::Removed => "Removed",
            AccountStatus::Unknown => "Unknown",
        }
    }

    /// Check if the account is blocked from using the organisation.
    pub fn is_restricted(&self) -> bool {
        matches!(self, AccountStatus::Suspended | AccountStatus::Removed)
    }
}

impl From<String> for AccountStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}
