use serde::{Deserialize, Serialize};

/// Category, country and offer-tag references are UUIDs.
pub type EntityId = uuid::Uuid;

/// How a store charges shipping for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingFeeMethod {
    Item,
    Weight,
    Fixed,
}

impl ShippingFeeMethod {
    pub const ALL: [ShippingFeeMethod; 3] = [Self::Item, Self::Weight, Self::Fixed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Item => "ITEM",
            Self::Weight => "WEIGHT",
            Self::Fixed => "FIXED",
        }
    }
}
