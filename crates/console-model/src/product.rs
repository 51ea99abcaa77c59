//! Products and their type-discriminated attributes
//!
//! A product is either a device-facing bundle (`"Products"`) carrying a
//! feature list and usage limits, or a hosted platform offering
//! (`"Platform"`) carrying SLA and support terms. The two attribute shapes
//! never mix: the `type` tag selects exactly one of them.
//!
//! ```text
//! {
//!   "id": "...", "planId": "...", "name": "...", "price": 19.0,
//!   "type": "Products",
//!   "attributes": { "features": [...], "limits": { "maxDevices": 50 } }
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::plan::SupportInfo;

/// Tag naming which attribute shape a product carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// Device-facing product bundle
    Products,

    /// Hosted platform offering
    Platform,
}

impl ProductType {
    /// Get string representation of the type tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Products => "Products",
            ProductType::Platform => "Platform",
        }
    }
}

/// Usage limits for a product bundle.
///
/// Values of `None` indicate unlimited.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductLimits {
    /// Maximum connected devices (None = unlimited)
    #[serde(default)]
    pub max_devices: Option<u32>,

    /// Telemetry retention in days (None = unlimited)
    #[serde(default)]
    pub data_retention_days: Option<u32>,

    /// API requests per day (None = unlimited)
    #[serde(default)]
    pub api_requests_per_day: Option<u32>,
}

/// Attributes of a `"Products"` product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BundleAttributes {
    /// Feature bullet points
    pub features: Vec<String>,

    /// Usage limits
    pub limits: ProductLimits,
}

/// Attributes of a `"Platform"` product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlatformAttributes {
    /// Guaranteed monthly uptime, in percent
    pub uptime_percent: Decimal,

    /// Support terms
    pub support: SupportInfo,
}

/// Type-discriminated attribute bag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "attributes")]
pub enum ProductAttributes {
    /// Feature list and limits
    Products(BundleAttributes),

    /// SLA and support terms
    Platform(PlatformAttributes),
}

impl ProductAttributes {
    /// The tag matching this attribute shape.
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductAttributes::Products(_) => ProductType::Products,
            ProductAttributes::Platform(_) => ProductType::Platform,
        }
    }
}

/// A product that can be attached to a plan.
///
/// # Examples
///
/// ```
/// use console_model::{Product, ProductAttributes, ProductType, BundleAttributes, ProductLimits};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let product = Product::new(
///     Uuid::now_v7(),
///     "Sensor Pack",
///     Decimal::new(1900, 2),
///     ProductAttributes::Products(BundleAttributes {
///         features: vec!["Live map".to_string()],
///         limits: ProductLimits { max_devices: Some(50), ..Default::default() },
///     }),
/// );
/// assert_eq!(product.product_type(), ProductType::Products);
/// assert_eq!(product.features(), ["Live map".to_string()]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier
    pub id: Uuid,

    /// Plan this product belongs to
    pub plan_id: Uuid,

    /// Display name
    pub name: String,

    /// Price per month
    pub price: Decimal,

    /// Marketing description
    #[serde(default)]
    pub description: String,

    /// Type tag and matching attributes
    #[serde(flatten)]
    pub attributes: ProductAttributes,
}

impl Product {
    /// Create a product with an empty description.
    pub fn new(
        plan_id: Uuid,
        name: impl Into<String>,
        price: Decimal,
        attributes: ProductAttributes,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            plan_id,
            name: name.into(),
            price,
            description: String::new(),
            attributes,
        }
    }

    /// The product's type tag, derived from its attributes.
    pub fn product_type(&self) -> ProductType {
        self.attributes.product_type()
    }

    /// Feature list; empty for platform products.
    pub fn features(&self) -> &[String] {
        match &self.attributes {
            ProductAttributes::Products(bundle) => &bundle.features,
            ProductAttributes::Platform(_) => &[],
        }
    }

    /// Usage limits; `None` for platform products.
    pub fn limits(&self) -> Option<&ProductLimits> {
        match &self.attributes {
            ProductAttributes::Products(bundle) => Some(&bundle.limits),
            ProductAttributes::Platform(_) => None,
        }
    }

    /// Support terms; `None` for product bundles.
    pub fn support(&self) -> Option<&SupportInfo> {
        match &self.attributes {
            ProductAttributes::Platform(platform) => Some(&platform.support),
            ProductAttributes::Products(_) => None,
        }
    }
}
