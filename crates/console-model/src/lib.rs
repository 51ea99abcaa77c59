//! # Console Domain Model
//!
//! This crate provides the typed contracts shared by the IoT Console's
//! endpoint wrappers and resource stores. The shapes mirror the backend's
//! JSON payloads (camelCase field names, decimals as numbers, RFC 3339
//! timestamps).
//!
//! ## Overview
//!
//! The console-model crate covers:
//! - **Organisations**: The tenant that scopes every resource fetch
//! - **Access**: Global permission catalog and organisation-owned roles
//! - **Users**: Members of the selected organisation
//! - **Subscriptions**: Purchased products and their lifecycle status
//! - **Plans**: Purchasable tiers with features and support terms
//! - **Products**: Product bundles and platform offerings (tagged attributes)
//! - **Payments**: Charges against subscriptions
//!
//! ## Architecture
//!
//! ```text
//! Organisation (selected context)
//!   ├─ Role ───────────── Permission (global catalog)
//!   ├─ User
//!   └─ Subscription ──── Payment
//!
//! Plan
//!   └─ Product { Products(features, limits) | Platform(sla, support) }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use console_model::{Organisation, Role, User};
//!
//! let org = Organisation::owned("Acme Sensors");
//! let role = Role::new(org.id, "Operator", "ada@acme.io");
//! let user = User::new("Ada", "Lovelace", "ada@acme.io");
//!
//! assert!(role.belongs_to(org.id));
//! assert_eq!(user.full_name(), "Ada Lovelace");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support (enabled by default)

pub mod access;
pub mod organisation;
pub mod payment;
pub mod plan;
pub mod product;
pub mod subscription;
pub mod user;

// Re-export main types for convenience
pub use access::{Permission, Role};
pub use organisation::{AccountStatus, Organisation};
pub use payment::{Payment, PaymentStatus};
pub use plan::{Plan, PlanType, SupportInfo, SupportLevel};
pub use product::{
    BundleAttributes, PlatformAttributes, Product, ProductAttributes, ProductLimits, ProductType,
};
pub use subscription::{BillingCycle, ProviderRef, Subscription, SubscriptionStatus};
pub use user::User;
