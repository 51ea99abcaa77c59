//! Subscription plans and support levels
//!
//! Plans are the purchasable tiers listed on the pricing screen. They are
//! global, not organisation-scoped, and come from `GET /plan/getAllPlans`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Plan tier.
///
/// Tiers are ordered: `Free < Starter < Professional < Enterprise`.
///
/// # Examples
///
/// ```
/// use console_model::PlanType;
///
/// assert!(PlanType::Professional > PlanType::Starter);
/// assert_eq!(PlanType::parse("pro"), Some(PlanType::Professional));
/// assert!(!PlanType::Free.is_paid());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum PlanType {
    /// Free tier for evaluation
    #[default]
    Free,

    /// Small deployments
    Starter,

    /// Production fleets
    Professional,

    /// Custom contracts
    Enterprise,
}

impl PlanType {
    /// Parse tier from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(PlanType)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "free" => Some(PlanType::Free),
            "starter" | "basic" => Some(PlanType::Starter),
            "professional" | "pro" => Some(PlanType::Professional),
            "enterprise" => Some(PlanType::Enterprise),
            _ => None,
        }
    }

    /// Get string representation of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Free => "Free",
            PlanType::Starter => "Starter",
            PlanType::Professional => "Professional",
            PlanType::Enterprise => "Enterprise",
        }
    }

    /// Get a human-readable display name for the tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanType::Free => "Free",
            PlanType::Starter => "Starter",
            PlanType::Professional => "Pro",
            PlanType::Enterprise => "Enterprise",
        }
    }

    /// Check if this is a paid tier.
    pub fn is_paid(&self) -> bool {
        !matches!(self, PlanType::Free)
    }
}

/// Support level attached to a plan or platform product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SupportLevel {
    /// Community support (forums, docs)
    Community,

    /// Email support
    Email,

    /// Priority support with faster response
    Priority,

    /// Dedicated support representative
    Dedicated,
}

/// Support terms for a plan or platform product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupportInfo {
    /// Support level
    pub level: SupportLevel,

    /// Guaranteed first-response time in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_hours: Option<u32>,
}

/// A purchasable plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique identifier
    pub id: Uuid,

    /// Tier
    #[serde(rename = "type")]
    pub plan_type: PlanType,

    /// Display name
    pub name: String,

    /// Marketing description
    #[serde(default)]
    pub description: String,

    /// Monthly price
    pub price: Decimal,

    /// Feature bullet points
    #[serde(default)]
    pub features: Vec<String>,

    /// Optional support terms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<SupportInfo>,

    /// When the plan was created
    pub created_at: DateTime<Utc>,

    /// When the plan was last updated
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    /// Check whether the plan advertises the given feature (case-insensitive).
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f.eq_ignore_ascii_case(feature))
    }

    /// Support level, defaulting to community support.
    pub fn support_level(&self) -> SupportLevel {
        self.support
            .as_ref()
            .map(|s| s.level)
            .unwrap_or(SupportLevel::Community)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plan_type_parsing() {
        assert_eq!(PlanType::parse("free"), Some(PlanType::Free));
        assert_eq!(PlanType::parse("Basic"), Some(PlanType::Starter));
        assert_eq!(PlanType::parse("PRO"), Some(PlanType::Professional));
        assert_eq!(PlanType::parse("enterprise"), Some(PlanType::Enterprise));
        assert_eq!(PlanType::parse("platinum"), None);
    }

    #[test]
    fn test_plan_type_hierarchy() {
        assert!(PlanType::Starter > PlanType::Free);
        assert!(PlanType::Enterprise > PlanType::Professional);
    }

    #[test]
    fn test_plan_wire_format() {
        let json = r#"{
            "id": "0190c1d2-0000-7000-8000-0000000000d1",
            "type": "Professional",
            "name": "Pro",
            "price": 99,
            "features": ["Unlimited dashboards", "OTA updates"],
            "support": {"level": "Priority", "responseTimeHours": 8},
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-02-01T00:00:00Z"
        }"#;
        let plan: Plan = serde_json::from_str(json).unwrap();

        assert_eq!(plan.plan_type, PlanType::Professional);
        assert_eq!(plan.price, dec!(99));
        assert!(plan.has_feature("ota updates"));
        assert_eq!(plan.support_level(), SupportLevel::Priority);
    }

    #[test]
    fn test_plan_without_support_defaults_to_community() {
        let json = r#"{
            "id": "0190c1d2-0000-7000-8000-0000000000d2",
            "type": "Free",
            "name": "Free",
            "price": 0,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        let plan: Plan = serde_json::from_str(json).unwrap();

        assert!(plan.features.is_empty());
        assert_eq!(plan.support_level(), SupportLevel::Community);
    }
}
