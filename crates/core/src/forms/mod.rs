//! The marketplace's form schemas and their typed values.
//!
//! Each form has a `validate_*` function returning the normalized record,
//! and a typed struct implementing [`FormSchema`] for callers that want the
//! decoded values instead.

mod patterns;

pub mod category;
pub mod product;
pub mod registry;
pub mod shipping_address;
pub mod store;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

pub use category::{validate_category, validate_sub_category, CategoryForm, SubCategoryForm};
pub use product::{validate_product, ProductForm};
pub use registry::{FormSchemas, SchemaName};
pub use shipping_address::{validate_shipping_address, ShippingAddressForm};
pub use store::{validate_store, StoreForm};

/// An uploaded image, referenced by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
}

/// A typed form backed by one of the standard schemas.
pub trait FormSchema: DeserializeOwned {
    const NAME: SchemaName;

    /// Validate `input` against the standard schema, then decode it. Use
    /// [`FormSchemas::parse`] for schemas built from a custom config.
    fn parse(input: &Value) -> Result<Self, CoreError> {
        FormSchemas::standard().parse(input)
    }
}
