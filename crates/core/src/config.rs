use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::ShippingFeeMethod;

/// Inputs that shape the form schemas.
///
/// The host application owns where this comes from; the defaults match the
/// shipping-fee methods the data model defines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Values accepted for `shippingFeeMethod` on the product form.
    pub shipping_fee_methods: Vec<String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            shipping_fee_methods: ShippingFeeMethod::ALL
                .iter()
                .map(|m| m.as_str().to_string())
                .collect(),
        }
    }
}

impl SchemaConfig {
    pub fn with_shipping_fee_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shipping_fee_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Reject configurations no submission could satisfy.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.shipping_fee_methods.is_empty() {
            return Err(CoreError::InvalidConfig(
                "shipping_fee_methods must not be empty".to_string(),
            ));
        }
        if let Some(blank) = self.shipping_fee_methods.iter().find(|m| m.trim().is_empty()) {
            return Err(CoreError::InvalidConfig(format!(
                "shipping_fee_methods contains a blank entry: {blank:?}"
            )));
        }
        Ok(())
    }
}
