//! Permissions screen data
//!
//! Loads the permission catalog together with the organisation's roles and
//! members, and offers the groupings the permissions screen renders.

use async_trait::async_trait;
use console_model::{Organisation, Permission, Role, User};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::DataResult;
use crate::notify::Notifier;
use crate::resource::{Loader, Resource};
use crate::source::ConsoleDataSource;

/// Everything the permissions screen shows for one organisation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionsData {
    /// Global permission catalog
    pub permissions: Vec<Permission>,

    /// Roles owned by the organisation
    pub roles: Vec<Role>,

    /// Organisation members
    pub users: Vec<User>,
}

impl PermissionsData {
    /// Permissions grouped by domain, domains in alphabetical order.
    ///
    /// Within a domain, catalog order is kept.
    pub fn permissions_by_domain(&self) -> BTreeMap<&str, Vec<&Permission>> {
        let mut grouped: BTreeMap<&str, Vec<&Permission>> = BTreeMap::new();
        for permission in &self.permissions {
            grouped
                .entry(permission.domain.as_str())
                .or_default()
                .push(permission);
        }
        grouped
    }

    /// Look up a role by id.
    pub fn role(&self, id: Uuid) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == id)
    }

    /// Members who own the organisation.
    pub fn owners(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|user| user.is_owner)
    }
}

/// Loads [`PermissionsData`] from a data source.
pub struct PermissionsLoader {
    source: Arc<dyn ConsoleDataSource>,
}

impl PermissionsLoader {
    /// Create a loader reading from `source`.
    pub fn new(source: Arc<dyn ConsoleDataSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Loader for PermissionsLoader {
    type Data = PermissionsData;

    fn name(&self) -> &'static str {
        "permissions"
    }

    fn failure_message(&self) -> &'static str {
        "Failed to load permissions. Please try again."
    }

    async fn load(&self, organisation: &Organisation) -> DataResult<PermissionsData> {
        let (permissions, roles, users) = tokio::try_join!(
            self.source.permissions(organisation),
            self.source.roles(organisation),
            self.source.users(organisation),
        )?;

        Ok(PermissionsData {
            permissions,
            roles,
            users,
        })
    }
}

/// Store backing the permissions screen.
pub type PermissionsResource = Resource<PermissionsLoader>;

impl Resource<PermissionsLoader> {
    /// Create a permissions store reading from `source`.
    pub fn from_source(source: Arc<dyn ConsoleDataSource>, notifier: Arc<dyn Notifier>) -> Self {
        Resource::new(PermissionsLoader::new(source), notifier)
    }
}
