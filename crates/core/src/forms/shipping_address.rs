//! Checkout shipping address form.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::patterns::{PERSON_NAME_RE, PHONE_RE};
use super::registry::{FormSchemas, SchemaName};
use super::FormSchema;
use crate::types::EntityId;
use crate::validation::rules::{FieldDef, Schema};
use crate::validation::{validate, FieldErrors, Record};

pub fn shipping_address_schema() -> Schema {
    Schema::new(
        SchemaName::ShippingAddress.as_str(),
        vec![
            FieldDef::uuid("countryId").type_message("Country must be a valid string."),
            FieldDef::string("firstName")
                .type_message("First name must be a valid string.")
                .min_len(2, "First name should be at least 2 characters long.")
                .max_len(50, "First name cannot exceed 50 characters.")
                .pattern(&PERSON_NAME_RE, "No special characters are allowed in name."),
            FieldDef::string("lastName")
                .type_message("Last name must be a valid string.")
                .min_len(2, "Last name should be at least 2 characters long.")
                .max_len(50, "Last name cannot exceed 50 characters.")
                .pattern(&PERSON_NAME_RE, "No special characters are allowed in name."),
            FieldDef::string("phone")
                .type_message("Phone number must be a string.")
                .pattern(&PHONE_RE, "Invalid phone number format."),
            FieldDef::string("address1")
                .type_message("Address line 1 must be a valid string.")
                .min_len(5, "Address line 1 should be at least 5 characters long.")
                .max_len(100, "Address line 1 cannot exceed 100 characters."),
            FieldDef::string("address2")
                .type_message("Address line 2 must be a valid string.")
                .max_len(100, "Address line 2 cannot exceed 100 characters.")
                .optional(),
            FieldDef::string("state")
                .type_message("State must be a valid string.")
                .min_len(2, "State should be at least 2 characters long.")
                .max_len(50, "State cannot exceed 50 characters."),
            FieldDef::string("city")
                .type_message("City must be a valid string.")
                .min_len(2, "City should be at least 2 characters long.")
                .max_len(50, "City cannot exceed 50 characters."),
            FieldDef::string("zip_code")
                .type_message("Zip code must be a valid string.")
                .min_len(2, "Zip code should be at least 2 characters long.")
                .max_len(10, "Zip code cannot exceed 10 characters."),
            FieldDef::boolean("default").default_value(json!(false)),
        ],
    )
}

pub fn validate_shipping_address(record: &Record) -> Result<Record, FieldErrors> {
    validate(FormSchemas::standard().get(SchemaName::ShippingAddress), record)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddressForm {
    pub country_id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address1: String,
    #[serde(default)]
    pub address2: Option<String>,
    pub state: String,
    pub city: String,
    #[serde(rename = "zip_code")]
    pub zip_code: String,
    pub default: bool,
}

impl FormSchema for ShippingAddressForm {
    const NAME: SchemaName = SchemaName::ShippingAddress;
}
