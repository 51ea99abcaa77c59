//! Products and subscriptions screen data
//!
//! Loads the organisation's products and subscriptions. Subscriptions are
//! narrowed to one product line and to statuses that still grant access;
//! cancelled or completed subscriptions never reach the screen.

use async_trait::async_trait;
use console_model::{Organisation, Product, ProductType, Subscription, SubscriptionStatus};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::error::DataResult;
use crate::notify::Notifier;
use crate::resource::{Loader, Resource};
use crate::source::ConsoleDataSource;

/// Product-type code of the IoT platform product line.
pub const PLATFORM_PRODUCT_TYPE: u32 = 0;

/// Which subscriptions the products screen keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionFilter {
    /// Product-type code a subscription must have
    pub product_type: u32,

    /// Statuses a subscription may have
    pub statuses: Vec<SubscriptionStatus>,
}

impl Default for SubscriptionFilter {
    fn default() -> Self {
        Self {
            product_type: PLATFORM_PRODUCT_TYPE,
            statuses: SubscriptionStatus::LIVE.to_vec(),
        }
    }
}

impl SubscriptionFilter {
    /// Keep live subscriptions of another product line.
    pub fn for_product_type(product_type: u32) -> Self {
        Self {
            product_type,
            ..Self::default()
        }
    }

    /// Check whether a subscription passes the filter.
    pub fn matches(&self, subscription: &Subscription) -> bool {
        subscription.product_type == self.product_type
            && self.statuses.contains(&subscription.status)
    }

    /// Keep matching subscriptions, preserving order.
    pub fn apply(&self, subscriptions: Vec<Subscription>) -> Vec<Subscription> {
        subscriptions
            .into_iter()
            .filter(|subscription| self.matches(subscription))
            .collect()
    }
}

/// Everything the products screen shows for one organisation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsData {
    /// Available products
    pub products: Vec<Product>,

    /// Filtered subscriptions
    pub subscriptions: Vec<Subscription>,
}

impl ProductsData {
    /// Products carrying the given type tag.
    pub fn products_of_type(&self, product_type: ProductType) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.product_type() == product_type)
    }

    /// Remove the subscription with `id`, keeping the others in order.
    ///
    /// # Returns
    ///
    /// `true` if a subscription was removed
    pub fn remove_subscription(&mut self, id: Uuid) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|subscription| subscription.id != id);
        self.subscriptions.len() != before
    }
}

/// Loads [`ProductsData`] from a data source.
pub struct ProductsLoader {
    source: Arc<dyn ConsoleDataSource>,
    filter: SubscriptionFilter,
}

impl ProductsLoader {
    /// Create a loader reading from `source` with the default filter.
    pub fn new(source: Arc<dyn ConsoleDataSource>) -> Self {
        Self::with_filter(source, SubscriptionFilter::default())
    }

    /// Create a loader with a custom subscription filter.
    pub fn with_filter(source: Arc<dyn ConsoleDataSource>, filter: SubscriptionFilter) -> Self {
        Self { source, filter }
    }
}

#[async_trait]
impl Loader for ProductsLoader {
    type Data = ProductsData;

    fn name(&self) -> &'static str {
        "products"
    }

    fn failure_message(&self) -> &'static str {
        "Failed to load products and subscriptions. Please try again."
    }

    async fn load(&self, organisation: &Organisation) -> DataResult<ProductsData> {
        let (products, subscriptions) = tokio::try_join!(
            self.source.products(organisation),
            self.source.subscriptions(organisation),
        )?;

        let total = subscriptions.len();
        let subscriptions = self.filter.apply(subscriptions);
        debug!(
            kept = subscriptions.len(),
            total,
            product_type = self.filter.product_type,
            "Filtered subscriptions"
        );

        Ok(ProductsData {
            products,
            subscriptions,
        })
    }
}

/// Store backing the products screen.
pub type ProductsResource = Resource<ProductsLoader>;

impl Resource<ProductsLoader> {
    /// Create a products store reading from `source`.
    pub fn from_source(source: Arc<dyn ConsoleDataSource>, notifier: Arc<dyn Notifier>) -> Self {
        Resource::new(ProductsLoader::new(source), notifier)
    }

    /// Evict one subscription from the held data without contacting the backend.
    ///
    /// Unknown ids are ignored.
    pub async fn remove_subscription(&self, id: Uuid) -> bool {
        let removed = self.update(|data| data.remove_subscription(id)).await;
        debug!(subscription_id = %id, removed, "Removed subscription locally");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use console_model::BillingCycle;
    use rust_decimal_macros::dec;

    fn subscription(product_type: u32, status: SubscriptionStatus) -> Subscription {
        Subscription {
            id: Uuid::now_v7(),
            product_name: "Sensor Pack".to_string(),
            product_type,
            status,
            billing_cycle: BillingCycle::Monthly,
            price: dec!(19),
            currency: "USD".to_string(),
            started_at: Utc::now(),
            next_billing_at: None,
            cancelled_at: None,
            legacy_provider_id: None,
            provider: None,
        }
    }

    #[test]
    fn test_filter_keeps_target_type_and_live_statuses() {
        let kept = subscription(0, SubscriptionStatus::Active);
        let input = vec![
            kept.clone(),
            subscription(1, SubscriptionStatus::Active),
            subscription(0, SubscriptionStatus::Cancelled),
        ];

        let filtered = SubscriptionFilter::default().apply(input);

        assert_eq!(filtered, vec![kept]);
    }

    #[test]
    fn test_filter_allows_non_renewing_only_among_inactive_states() {
        let filter = SubscriptionFilter::default();

        assert!(filter.matches(&subscription(0, SubscriptionStatus::NonRenewing)));
        assert!(!filter.matches(&subscription(0, SubscriptionStatus::Attention)));
        assert!(!filter.matches(&subscription(0, SubscriptionStatus::Completed)));
    }

    #[test]
    fn test_filter_for_other_product_line() {
        let filter = SubscriptionFilter::for_product_type(1);
        assert!(filter.matches(&subscription(1, SubscriptionStatus::Active)));
        assert!(!filter.matches(&subscription(0, SubscriptionStatus::Active)));
    }

    #[test]
    fn test_remove_subscription_keeps_order() {
        let subs: Vec<Subscription> = (0..4)
            .map(|_| subscription(0, SubscriptionStatus::Active))
            .collect();
        let mut data = ProductsData {
            products: Vec::new(),
            subscriptions: subs.clone(),
        };

        assert!(data.remove_subscription(subs[1].id));
        assert_eq!(data.subscriptions, vec![subs[0].clone(), subs[2].clone(), subs[3].clone()]);

        assert!(!data.remove_subscription(Uuid::now_v7()));
        assert_eq!(data.subscriptions.len(), 3);
    }
}
