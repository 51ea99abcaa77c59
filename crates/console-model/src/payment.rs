//! Payment records for subscriptions

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Settlement status of a payment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    /// Awaiting confirmation from the provider
    Pending,

    /// Funds captured
    Succeeded,

    /// Charge declined or errored
    Failed,

    /// Funds returned to the customer
    Refunded,
}

impl PaymentStatus {
    /// Check if the payment has reached a final state.
    pub fn is_settled(&self) -> bool {
        !matches!(self, PaymentStatus::Pending)
    }
}

/// A single charge against a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique identifier
    pub id: Uuid,

    /// Subscription charged
    pub subscription_id: Uuid,

    /// Amount charged
    pub amount: Decimal,

    /// ISO 4217 currency code
    pub currency: String,

    /// Settlement status
    pub status: PaymentStatus,

    /// When the charge settled, if it has
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}
