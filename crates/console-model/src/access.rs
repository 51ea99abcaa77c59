//! Access control contracts
//!
//! Permissions form a global catalog shared by every organisation; roles are
//! owned by a single organisation and group permissions for its members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A permission from the global catalog.
///
/// Permissions are not organisation-scoped. The `scope` names what the
/// permission grants (e.g. `"device:write"`) and the `domain` groups related
/// permissions for display (e.g. `"Devices"`).
///
/// # Examples
///
/// ```
/// use console_model::Permission;
///
/// let perm = Permission::new("Write devices", "device:write", "Devices");
/// assert_eq!(perm.scope, "device:write");
/// assert!(perm.applies_to("device"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Longer explanation shown next to the name
    #[serde(default)]
    pub description: String,

    /// Scope string in `resource:action` form
    pub scope: String,

    /// Functional domain used to group permissions
    pub domain: String,
}

impl Permission {
    /// Create a new permission with an empty description.
    pub fn new(name: impl Into<String>, scope: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: String::new(),
            scope: scope.into(),
            domain: domain.into(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The resource part of the scope (before the first `:`).
    pub fn resource(&self) -> &str {
        self.scope.split(':').next().unwrap_or_default()
    }

    /// The action part of the scope (after the first `:`), if any.
    pub fn action(&self) -> Option<&str> {
        self.scope.split_once(':').map(|(_, action)| action)
    }

    /// Check whether this permission targets the given resource.
    pub fn applies_to(&self, resource: &str) -> bool {
        self.resource().eq_ignore_ascii_case(resource)
    }
}

/// A role defined inside one organisation.
///
/// # Examples
///
/// ```
/// use console_model::Role;
/// use uuid::Uuid;
///
/// let org_id = Uuid::now_v7();
/// let role = Role::new(org_id, "Operator", "jane@acme.io");
/// assert!(role.belongs_to(org_id));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Owning organisation
    pub organisation_id: Uuid,

    /// Who created the role
    pub created_by: String,

    /// When the role was created
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Create a new role owned by `organisation_id`, stamped with the current time.
    pub fn new(organisation_id: Uuid, name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: String::new(),
            organisation_id,
            created_by: created_by.into(),
            created_at: Utc::now(),
        }
    }

    /// Check whether the role is owned by the given organisation.
    pub fn belongs_to(&self, organisation_id: Uuid) -> bool {
        self.organisation_id == organisation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_scope_parts() {
        let perm = Permission::new("Read telemetry", "telemetry:read", "Data");

        assert_eq!(perm.resource(), "telemetry");
        assert_eq!(perm.action(), Some("read"));
        assert!(perm.applies_to("Telemetry"));
        assert!(!perm.applies_to("device"));
    }

    #[test]
    fn test_permission_without_action() {
        let perm = Permission::new("Billing", "billing", "Billing");
        assert_eq!(perm.resource(), "billing");
        assert_eq!(perm.action(), None);
    }

    #[test]
    fn test_role_wire_format() {
        let json = r#"{
            "id": "0190c1d2-0000-7000-8000-0000000000a1",
            "name": "Operator",
            "organisationId": "0190c1d2-0000-7000-8000-000000000001",
            "createdBy": "jane@acme.io",
            "createdAt": "2024-03-01T10:00:00Z"
        }"#;
        let role: Role = serde_json::from_str(json).unwrap();

        assert_eq!(role.name, "Operator");
        assert!(role.description.is_empty());
        assert_eq!(role.created_by, "jane@acme.io");
    }
}
