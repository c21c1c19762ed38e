//! Lookup of the five form schemas by name.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde_json::Value;

use super::category::{category_schema, sub_category_schema};
use super::product::product_schema;
use super::shipping_address::shipping_address_schema;
use super::store::store_schema;
use super::FormSchema;
use crate::config::SchemaConfig;
use crate::error::CoreError;
use crate::validation::evaluator::json_type;
use crate::validation::{validate, Record, Schema};

static STANDARD: LazyLock<FormSchemas> =
    LazyLock::new(|| FormSchemas::build(&SchemaConfig::default()));

/// Identifies one of the form schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaName {
    Category,
    SubCategory,
    Store,
    Product,
    ShippingAddress,
}

impl SchemaName {
    pub const ALL: [SchemaName; 5] = [
        Self::Category,
        Self::SubCategory,
        Self::Store,
        Self::Product,
        Self::ShippingAddress,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "CategoryFormSchema",
            Self::SubCategory => "SubCategoryFormSchema",
            Self::Store => "StoreFormSchema",
            Self::Product => "ProductFormSchema",
            Self::ShippingAddress => "ShippingAddressSchema",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::SubCategory => "sub_category",
            Self::Store => "store",
            Self::Product => "product",
            Self::ShippingAddress => "shipping_address",
        }
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaName {
    type Err = CoreError;

    /// Accepts `"ProductFormSchema"` or `"product"`, ignoring case, `_` and `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = loose_name(s);
        Self::ALL
            .into_iter()
            .find(|name| {
                loose_name(name.as_str()) == wanted || loose_name(name.short_name()) == wanted
            })
            .ok_or_else(|| CoreError::UnknownSchema(s.to_string()))
    }
}

/// All form schemas, built once from a [`SchemaConfig`].
#[derive(Debug, Clone)]
pub struct FormSchemas {
    category: Schema,
    sub_category: Schema,
    store: Schema,
    product: Schema,
    shipping_address: Schema,
}

impl FormSchemas {
    pub fn new(config: &SchemaConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Schemas built from the default configuration.
    pub fn standard() -> &'static FormSchemas {
        &STANDARD
    }

    fn build(config: &SchemaConfig) -> Self {
        Self {
            category: category_schema(),
            sub_category: sub_category_schema(),
            store: store_schema(),
            product: product_schema(&config.shipping_fee_methods),
            shipping_address: shipping_address_schema(),
        }
    }

    pub fn get(&self, name: SchemaName) -> &Schema {
        match name {
            SchemaName::Category => &self.category,
            SchemaName::SubCategory => &self.sub_category,
            SchemaName::Store => &self.store,
            SchemaName::Product => &self.product,
            SchemaName::ShippingAddress => &self.shipping_address,
        }
    }

    /// Validate raw submitted JSON against the named schema.
    pub fn validate(&self, name: SchemaName, input: &Value) -> Result<Record, CoreError> {
        let record = input
            .as_object()
            .ok_or_else(|| CoreError::NotAnObject(json_type(input)))?;
        Ok(validate(self.get(name), record)?)
    }

    /// Validate `input` against this registry's schema for `T`, then decode.
    ///
    /// Typed forms decode into fixed Rust types, so a `ProductForm` can only
    /// carry shipping-fee methods that [`ShippingFeeMethod`] knows; a custom
    /// method outside that enum fails with [`CoreError::Decode`].
    ///
    /// [`ShippingFeeMethod`]: crate::types::ShippingFeeMethod
    pub fn parse<T: FormSchema>(&self, input: &Value) -> Result<T, CoreError> {
        let record = self.validate(T::NAME, input)?;
        Ok(serde_json::from_value(Value::Object(record))?)
    }
}

/// Lowercased with `_` and `-` removed, so `SubCategory`, `sub-category`
/// and `sub_category` compare equal.
fn loose_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
