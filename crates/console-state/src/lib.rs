//! # Console State
//!
//! This crate provides the organisation-scoped resource stores behind the
//! IoT Console's permissions and products screens, the data sources they
//! read from, and the account/organisation banner decisions.
//!
//! ## Overview
//!
//! The console-state crate handles:
//! - **Resource stores**: Fetch per organisation, hold data, expose a busy flag and `refetch`
//! - **Data sources**: An injectable capability; a mock implementation ships by default
//! - **Notifications**: An injectable notifier for user-visible failure messages
//! - **Banners**: Suspended/removed account and inactive-organisation banners
//!
//! ## Architecture
//!
//! ```text
//! selected Organisation
//!         │
//!         ▼
//! Resource<L: Loader> ──► L::load(org) ──► ConsoleDataSource (mock | backend)
//!   │  data, loading, generation
//!   │
//!   └─ on failure ──► Notifier (tracing | memory | UI toast)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use console_state::{MockDataSource, PermissionsResource, TracingNotifier};
//! use std::sync::Arc;
//!
//! async fn show_permissions() {
//!     let source = Arc::new(MockDataSource::default());
//!     let store = PermissionsResource::from_source(source, Arc::new(TracingNotifier));
//!
//!     let org = MockDataSource::organisations().remove(0);
//!     store.set_organisation(Some(org)).await;
//!
//!     let snapshot = store.snapshot().await;
//!     println!("{} roles, loading = {}", snapshot.data.roles.len(), snapshot.loading);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `mock` (default): The in-memory mock data source

pub mod banners;
pub mod error;
#[cfg(feature = "mock")]
pub mod mock;
pub mod notify;
pub mod permissions;
pub mod products;
pub mod resource;
pub mod source;

// Re-export main types
pub use banners::{AccessBanner, UpgradeBanner};
pub use error::{DataError, DataResult};
#[cfg(feature = "mock")]
pub use mock::MockDataSource;
pub use notify::{MemoryNotifier, Notification, NotificationLevel, Notifier, TracingNotifier};
pub use permissions::{PermissionsData, PermissionsLoader, PermissionsResource};
pub use products::{
    ProductsData, ProductsLoader, ProductsResource, SubscriptionFilter, PLATFORM_PRODUCT_TYPE,
};
pub use resource::{Loader, Resource, Snapshot};
pub use source::{select_source, ConsoleDataSource};
