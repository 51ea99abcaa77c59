//! Subscription contracts
//!
//! A subscription ties an organisation to a purchased product. Records created
//! before the payment-provider migration still carry the legacy provider id;
//! newer ones carry a [`ProviderRef`]. Both may be present on the same record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a subscription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SubscriptionStatus {
    /// Paid up and renewing
    Active,

    /// Paid up but will not renew at the end of the cycle
    NonRenewing,

    /// Payment problem that needs the customer's attention
    Attention,

    /// Ran to the end of its term
    Completed,

    /// Cancelled by the customer or the provider
    Cancelled,
}

impl SubscriptionStatus {
    /// Statuses under which the subscription still grants access.
    pub const LIVE: [SubscriptionStatus; 2] =
        [SubscriptionStatus::Active, SubscriptionStatus::NonRenewing];

    /// Check if the subscription still grants access.
    pub fn is_live(&self) -> bool {
        Self::LIVE.contains(self)
    }

    /// Get string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::NonRenewing => "NonRenewing",
            SubscriptionStatus::Attention => "Attention",
            SubscriptionStatus::Completed => "Completed",
            SubscriptionStatus::Cancelled => "Cancelled",
        }
    }
}

/// How often a subscription is billed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum BillingCycle {
    /// Billed every month
    #[default]
    Monthly,

    /// Billed once a year
    Yearly,
}

impl BillingCycle {
    /// Number of billing periods in a year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            BillingCycle::Monthly => 12,
            BillingCycle::Yearly => 1,
        }
    }
}

/// Reference to the subscription at the current payment provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRef {
    /// Provider name (e.g. `"paystack"`)
    pub provider: String,

    /// Customer id at the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Subscription id at the provider
    pub subscription_id: String,
}

/// A subscription held by the selected organisation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Unique identifier
    pub id: Uuid,

    /// Name of the subscribed product
    pub product_name: String,

    /// Numeric product-type code used to separate product lines
    pub product_type: u32,

    /// Current status
    pub status: SubscriptionStatus,

    /// Billing cycle
    #[serde(default)]
    pub billing_cycle: BillingCycle,

    /// Price per cycle
    pub price: Decimal,

    /// ISO 4217 currency code
    pub currency: String,

    /// When the subscription started
    pub started_at: DateTime<Utc>,

    /// Next renewal, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_billing_at: Option<DateTime<Utc>>,

    /// When the subscription was cancelled, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,

    /// Subscription id at the previous payment provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_provider_id: Option<String>,

    /// Subscription reference at the current payment provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderRef>,
}

impl Subscription {
    /// Check if the subscription still grants access.
    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }

    /// The provider-side subscription id, preferring the current provider.
    ///
    /// # Returns
    ///
    /// The current provider's id, else the legacy id, else `None`
    pub fn provider_subscription_id(&self) -> Option<&str> {
        self.provider
            .as_ref()
            .map(|p| p.subscription_id.as_str())
            .or(self.legacy_provider_id.as_deref())
    }

    /// Price normalised to one year.
    pub fn annual_price(&self) -> Decimal {
        self.price * Decimal::from(self.billing_cycle.periods_per_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn subscription(status: SubscriptionStatus) -> Subscription {
        Subscription {
            id: Uuid::now_v7(),
            product_name: "Fleet Monitor".to_string(),
            product_type: 0,
            status,
            billing_cycle: BillingCycle::Monthly,
            price: dec!(49.50),
            currency: "USD".to_string(),
            started_at: Utc::now(),
            next_billing_at: None,
            cancelled_at: None,
            legacy_provider_id: None,
            provider: None,
        }
    }

    #[test]
    fn test_live_statuses() {
        assert!(subscription(SubscriptionStatus::Active).is_live());
        assert!(subscription(SubscriptionStatus::NonRenewing).is_live());
        assert!(!subscription(SubscriptionStatus::Attention).is_live());
        assert!(!subscription(SubscriptionStatus::Completed).is_live());
        assert!(!subscription(SubscriptionStatus::Cancelled).is_live());
    }

    #[test]
    fn test_provider_id_prefers_current_provider() {
        let mut sub = subscription(SubscriptionStatus::Active);
        assert_eq!(sub.provider_subscription_id(), None);

        sub.legacy_provider_id = Some("sub_legacy_1".to_string());
        assert_eq!(sub.provider_subscription_id(), Some("sub_legacy_1"));

        sub.provider = Some(ProviderRef {
            provider: "paystack".to_string(),
            customer_id: None,
            subscription_id: "SUB_new_1".to_string(),
        });
        assert_eq!(sub.provider_subscription_id(), Some("SUB_new_1"));
    }

    #[test]
    fn test_annual_price() {
        let mut sub = subscription(SubscriptionStatus::Active);
        assert_eq!(sub.annual_price(), dec!(594.00));

        sub.billing_cycle = BillingCycle::Yearly;
        assert_eq!(sub.annual_price(), dec!(49.50));
    }

    #[test]
    fn test_subscription_wire_format() {
        let json = r#"{
            "id": "0190c1d2-0000-7000-8000-0000000000c1",
            "productName": "Fleet Monitor",
            "productType": 1,
            "status": "NonRenewing",
            "billingCycle": "Yearly",
            "price": 499.0,
            "currency": "EUR",
            "startedAt": "2024-01-01T00:00:00Z",
            "legacyProviderId": "sub_123"
        }"#;
        let sub: Subscription = serde_json::from_str(json).unwrap();

        assert_eq!(sub.status, SubscriptionStatus::NonRenewing);
        assert_eq!(sub.billing_cycle, BillingCycle::Yearly);
        assert_eq!(sub.product_type, 1);
        assert_eq!(sub.price, dec!(499));
        assert_eq!(sub.provider_subscription_id(), Some("sub_123"));
    }
}
