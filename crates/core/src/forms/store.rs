//! Store application form.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::patterns::{
    PHONE_RE, STORE_NAME_RE, STORE_NAME_SEPARATORS, URL_SEPARATORS, URL_SLUG_RE,
};
use super::registry::{FormSchemas, SchemaName};
use super::{FormSchema, ImageRef};
use crate::validation::rules::{FieldDef, FieldKind, Schema};
use crate::validation::{validate, FieldErrors, Record};

/// Review state a new store starts in.
pub const DEFAULT_STORE_STATUS: &str = "PENDING";

pub fn store_schema() -> Schema {
    Schema::new(
        SchemaName::Store.as_str(),
        vec![
            FieldDef::string("name")
                .min_len(2, "Store name must be at least 2 characters long.")
                .max_len(50, "Store name cannot exceed 50 characters.")
                .slug(
                    &STORE_NAME_RE,
                    STORE_NAME_SEPARATORS,
                    "Only letters, numbers, space, hyphen, and underscore are allowed in the store name, and consecutive occurrences of hyphens, underscores, or spaces are not permitted.",
                ),
            FieldDef::string("description")
                .min_len(30, "Store description must be at least 30 characters long.")
                .max_len(500, "Store description cannot exceed 500 characters."),
            FieldDef::string("email").email("Invalid email format."),
            FieldDef::string("phone").pattern(&PHONE_RE, "Invalid phone number format."),
            FieldDef::new("logo", FieldKind::images()).items(1, "Choose a logo image."),
            FieldDef::new("cover", FieldKind::images()).items(1, "Choose a cover image."),
            FieldDef::string("url")
                .min_len(2, "Store url must be at least 2 characters long.")
                .max_len(50, "Store url cannot exceed 50 characters.")
                .slug(
                    &URL_SLUG_RE,
                    URL_SEPARATORS,
                    "Only letters, numbers, hyphen, and underscore are allowed in the store url, and consecutive occurrences of hyphens, underscores, or spaces are not permitted.",
                ),
            FieldDef::boolean("featured")
                .default_value(json!(false))
                .optional(),
            FieldDef::string("status")
                .default_value(json!(DEFAULT_STORE_STATUS))
                .optional(),
        ],
    )
}

pub fn validate_store(record: &Record) -> Result<Record, FieldErrors> {
    validate(FormSchemas::standard().get(SchemaName::Store), record)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreForm {
    pub name: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub logo: Vec<ImageRef>,
    pub cover: Vec<ImageRef>,
    pub url: String,
    pub featured: bool,
    pub status: String,
}

impl FormSchema for StoreForm {
    const NAME: SchemaName = SchemaName::Store;
}
