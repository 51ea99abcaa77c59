//! In-memory mock data source
//!
//! Static datasets standing in for backend responses during development.
//! Every call sleeps for the configured latency before answering so loading
//! states are visible.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use console_api::ConsoleConfig;
use console_model::{
    BillingCycle, BundleAttributes, Organisation, Permission, PlatformAttributes, Product,
    ProductAttributes, ProductLimits, ProviderRef, Role, Subscription, SubscriptionStatus,
    SupportInfo, SupportLevel, User,
};
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DataError, DataResult};
use crate::source::ConsoleDataSource;

/// Id of the first demo organisation.
pub const DEMO_ORG_ACME: Uuid = Uuid::from_u128(0x0190_c1d2_0000_7000_8000_0000_0000_0001);

/// Id of the second demo organisation.
pub const DEMO_ORG_FLEET: Uuid = Uuid::from_u128(0x0190_c1d2_0000_7000_8000_0000_0000_0002);

const PLAN_STARTER: Uuid = Uuid::from_u128(0x0190_c1d2_0000_7000_8000_0000_0000_00d1);
const PLAN_PRO: Uuid = Uuid::from_u128(0x0190_c1d2_0000_7000_8000_0000_0000_00d2);

/// Mock data source serving static datasets.
#[derive(Debug)]
pub struct MockDataSource {
    /// Simulated network latency
    latency: Duration,
    /// When set, every call fails
    failing: AtomicBool,
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl MockDataSource {
    /// Create a mock source with the given simulated latency.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failing: AtomicBool::new(false),
        }
    }

    /// Create a mock source using the configured latency.
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new(config.mock_latency())
    }

    /// Create a mock source that answers immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// The demo organisations the datasets are keyed on.
    pub fn organisations() -> Vec<Organisation> {
        vec![
            Organisation {
                id: DEMO_ORG_ACME,
                name: "Acme Sensors".to_string(),
                is_owner: true,
                is_active: true,
            },
            Organisation {
                id: DEMO_ORG_FLEET,
                name: "Fleet Ops".to_string(),
                is_owner: false,
                is_active: false,
            },
        ]
    }

    async fn respond<T>(&self, what: &str, data: T) -> DataResult<T> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(DataError::Unavailable(format!("mock {} unavailable", what)));
        }
        debug!("Serving mock {}", what);
        Ok(data)
    }
}

#[async_trait]
impl ConsoleDataSource for MockDataSource {
    async fn permissions(&self, _organisation: &Organisation) -> DataResult<Vec<Permission>> {
        self.respond("permissions", permission_catalog()).await
    }

    async fn roles(&self, organisation: &Organisation) -> DataResult<Vec<Role>> {
        let roles = all_roles()
            .into_iter()
            .filter(|role| role.belongs_to(organisation.id))
            .collect();
        self.respond("roles", roles).await
    }

    async fn users(&self, _organisation: &Organisation) -> DataResult<Vec<User>> {
        self.respond("users", members()).await
    }

    async fn products(&self, _organisation: &Organisation) -> DataResult<Vec<Product>> {
        self.respond("products", products()).await
    }

    async fn subscriptions(&self, _organisation: &Organisation) -> DataResult<Vec<Subscription>> {
        self.respond("subscriptions", subscriptions()).await
    }
}

fn at(unix_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_secs, 0).unwrap_or_default()
}

fn id(n: u128) -> Uuid {
    Uuid::from_u128(0x0190_c1d2_0000_7000_8000_0000_0000_0000 | n)
}

fn permission(n: u128, name: &str, description: &str, scope: &str, domain: &str) -> Permission {
    Permission {
        id: id(0x100 + n),
        name: name.to_string(),
        description: description.to_string(),
        scope: scope.to_string(),
        domain: domain.to_string(),
    }
}

fn permission_catalog() -> Vec<Permission> {
    vec![
        permission(1, "View devices", "See registered devices and their status", "device:read", "Devices"),
        permission(2, "Manage devices", "Register, rename and retire devices", "device:write", "Devices"),
        permission(3, "View telemetry", "Read dashboards and raw telemetry", "telemetry:read", "Data"),
        permission(4, "Export telemetry", "Download telemetry as CSV", "telemetry:export", "Data"),
        permission(5, "Manage members", "Invite and remove organisation members", "member:write", "Organisation"),
        permission(6, "Manage roles", "Create roles and assign permissions", "role:write", "Organisation"),
        permission(7, "View billing", "See plans, subscriptions and invoices", "billing:read", "Billing"),
    ]
}

fn role(n: u128, organisation_id: Uuid, name: &str, description: &str, created_at: i64) -> Role {
    Role {
        id: id(0x200 + n),
        name: name.to_string(),
        description: description.to_string(),
        organisation_id,
        created_by: "owner@acme.io".to_string(),
        created_at: at(created_at),
    }
}

fn all_roles() -> Vec<Role> {
    vec![
        role(1, DEMO_ORG_ACME, "Administrator", "Full access", 1_704_067_200),
        role(2, DEMO_ORG_ACME, "Operator", "Manage devices and read telemetry", 1_706_745_600),
        role(3, DEMO_ORG_ACME, "Viewer", "Read-only dashboards", 1_709_251_200),
        role(4, DEMO_ORG_FLEET, "Dispatcher", "Track vehicles", 1_711_929_600),
    ]
}

fn members() -> Vec<User> {
    let member = |n: u128, first: &str, last: &str, email: &str, owner: bool| User {
        id: id(0x300 + n),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        is_owner: owner,
    };
    vec![
        member(1, "Ada", "Lovelace", "ada@acme.io", true),
        member(2, "Grace", "Hopper", "grace@acme.io", false),
        member(3, "Alan", "Turing", "alan@acme.io", false),
    ]
}

fn products() -> Vec<Product> {
    vec![
        Product {
            id: id(0x400 + 1),
            plan_id: PLAN_STARTER,
            name: "Sensor Pack".to_string(),
            price: dec!(19.00),
            description: "Connect up to 50 devices".to_string(),
            attributes: ProductAttributes::Products(BundleAttributes {
                features: vec![
                    "Live device map".to_string(),
                    "Threshold alerts".to_string(),
                ],
                limits: ProductLimits {
                    max_devices: Some(50),
                    data_retention_days: Some(30),
                    api_requests_per_day: Some(10_000),
                },
            }),
        },
        Product {
            id: id(0x400 + 2),
            plan_id: PLAN_PRO,
            name: "Fleet Pack".to_string(),
            price: dec!(99.00),
            description: "Unlimited devices with long retention".to_string(),
            attributes: ProductAttributes::Products(BundleAttributes {
                features: vec![
                    "Live device map".to_string(),
                    "Threshold alerts".to_string(),
                    "OTA updates".to_string(),
                ],
                limits: ProductLimits {
                    max_devices: None,
                    data_retention_days: Some(365),
                    api_requests_per_day: None,
                },
            }),
        },
        Product {
            id: id(0x400 + 3),
            plan_id: PLAN_PRO,
            name: "Managed Cloud".to_string(),
            price: dec!(250.00),
            description: "Hosted ingestion and storage".to_string(),
            attributes: ProductAttributes::Platform(PlatformAttributes {
                uptime_percent: dec!(99.9),
                support: SupportInfo {
                    level: SupportLevel::Dedicated,
                    response_time_hours: Some(1),
                },
            }),
        },
    ]
}

fn subscriptions() -> Vec<Subscription> {
    let subscription = |n: u128, name: &str, product_type: u32, status: SubscriptionStatus| Subscription {
        id: id(0x500 + n),
        product_name: name.to_string(),
        product_type,
        status,
        billing_cycle: BillingCycle::Monthly,
        price: dec!(19.00),
        currency: "USD".to_string(),
        started_at: at(1_704_067_200),
        next_billing_at: Some(at(1_735_689_600)),
        cancelled_at: None,
        legacy_provider_id: None,
        provider: None,
    };

    let mut legacy = subscription(2, "Fleet Pack", 0, SubscriptionStatus::NonRenewing);
    legacy.billing_cycle = BillingCycle::Yearly;
    legacy.price = dec!(990.00);
    legacy.legacy_provider_id = Some("sub_1Legacy".to_string());

    let mut migrated = subscription(1, "Sensor Pack", 0, SubscriptionStatus::Active);
    migrated.provider = Some(ProviderRef {
        provider: "paystack".to_string(),
        customer_id: Some("CUS_acme".to_string()),
        subscription_id: "SUB_sensor".to_string(),
    });

    let mut cancelled = subscription(3, "Sensor Pack", 0, SubscriptionStatus::Cancelled);
    cancelled.next_billing_at = None;
    cancelled.cancelled_at = Some(at(1_717_200_000));

    vec![
        migrated,
        legacy,
        cancelled,
        subscription(4, "Managed Cloud", 1, SubscriptionStatus::Active),
        subscription(5, "Sensor Pack", 0, SubscriptionStatus::Attention),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Organisation {
        MockDataSource::organisations().remove(0)
    }

    #[tokio::test]
    async fn test_roles_are_scoped_to_organisation() {
        let source = MockDataSource::instant();
        let orgs = MockDataSource::organisations();

        let acme_roles = source.roles(&orgs[0]).await.unwrap();
        let fleet_roles = source.roles(&orgs[1]).await.unwrap();

        assert_eq!(acme_roles.len(), 3);
        assert_eq!(fleet_roles.len(), 1);
        assert!(acme_roles.iter().all(|r| r.belongs_to(DEMO_ORG_ACME)));
    }

    #[tokio::test]
    async fn test_failing_mode() {
        let source = MockDataSource::instant();
        source.set_failing(true);
        assert!(source.users(&acme()).await.is_err());

        source.set_failing(false);
        assert_eq!(source.users(&acme()).await.unwrap().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency() {
        let source = MockDataSource::new(Duration::from_millis(500));
        let started = tokio::time::Instant::now();

        source.permissions(&acme()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[test]
    fn test_product_dataset_covers_both_shapes() {
        let products = products();
        assert!(products.iter().any(|p| p.limits().is_some()));
        assert!(products.iter().any(|p| p.support().is_some()));
    }

    #[test]
    fn test_subscription_dataset_mixes_types_and_statuses() {
        let subs = subscriptions();
        assert!(subs.iter().any(|s| s.product_type != 0));
        assert!(subs.iter().any(|s| !s.is_live()));
        assert!(subs.iter().any(|s| s.legacy_provider_id.is_some()));
    }
}
