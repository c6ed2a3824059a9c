use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemType {
    Truck,
    Parcel,
}

/// Per-unit price table for one item type.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct PricingRule {
    pub base_price: f64,
    pub weight_limit: f64,
    pub surcharge: f64,
}

pub const TRUCK_RULE: PricingRule = PricingRule {
    base_price: 100.0,
    weight_limit: 100.0,
    surcharge: 50.0,
};

pub const PARCEL_RULE: PricingRule = PricingRule {
    base_price: 25.0,
    weight_limit: 10.0,
    surcharge: 25.0,
};

impl ItemType {
    pub const ALL: [ItemType; 2] = [ItemType::Truck, ItemType::Parcel];

    pub fn rule(self) -> PricingRule {
        match self {
            ItemType::Truck => TRUCK_RULE,
            ItemType::Parcel => PARCEL_RULE,
        }
    }
}

impl FromStr for ItemType {
    type Err = PricingError;

    /// Case-insensitive. The error carries the string exactly as given.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRUCK" => Ok(ItemType::Truck),
            "PARCEL" => Ok(ItemType::Parcel),
            _ => Err(PricingError::InvalidItemType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemType::Truck => write!(f, "TRUCK"),
            ItemType::Parcel => write!(f, "PARCEL"),
        }
    }
}

impl PricingRule {
    /// Unknown weight counts as over the limit.
    pub fn exceeds_limit(&self, weight: Option<f64>) -> bool {
        match weight {
            Some(weight) => weight > self.weight_limit,
            None => true,
        }
    }

    pub fn unit_price(&self, weight: Option<f64>) -> f64 {
        if self.exceeds_limit(weight) {
            self.base_price + self.surcharge
        } else {
            self.base_price
        }
    }
}

/// A shipped item as handed over by the caller.
///
/// `item_type` keeps the raw string so pricing errors can echo it back.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, Validate)]
pub struct Item {
    #[serde(default)]
    #[validate(length(max = 64, message = "Item id must be at most 64 characters"))]
    pub id: String,

    #[serde(rename = "type")]
    pub item_type: String,

    #[serde(default)]
    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Weight must not be negative"))]
    pub weight: Option<f64>,
}

impl Item {
    pub fn new(id: impl Into<String>, item_type: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            item_type: item_type.into(),
            quantity,
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Zero means the caller left it unset.
    pub fn effective_quantity(&self) -> u32 {
        self.quantity.max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("invalid item type: {0}")]
    InvalidItemType(String),
}
