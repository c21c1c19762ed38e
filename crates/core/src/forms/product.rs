//! Product (with its first variant) form.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::registry::{FormSchemas, SchemaName};
use super::{FormSchema, ImageRef};
use crate::types::{EntityId, ShippingFeeMethod};
use crate::validation::rules::{ElementCheck, FieldDef, FieldKind, Schema};
use crate::validation::{validate, FieldErrors, Record};

/// Build the product schema; `shipping_fee_methods` is the allowed set for
/// `shippingFeeMethod`.
pub fn product_schema(shipping_fee_methods: &[String]) -> Schema {
    Schema::new(
        SchemaName::Product.as_str(),
        vec![
            FieldDef::string("name")
                .min_len(2, "Product name should be at least 2 characters long.")
                .max_len(200, "Product name cannot exceed 200 characters."),
            FieldDef::string("description").min_len(
                200,
                "Product description should be at least 200 characters long.",
            ),
            FieldDef::string("variantName")
                .min_len(2, "Product variant name should be at least 2 characters long.")
                .max_len(100, "Product variant name cannot exceed 100 characters."),
            FieldDef::string("variantDescription").optional(),
            FieldDef::new("images", FieldKind::images())
                .min_items(3, "Please upload at least 3 images for the product.")
                .max_items(6, "You can upload up to 6 images for the product."),
            FieldDef::new("variantImage", FieldKind::images())
                .items(1, "Choose a product variant image."),
            FieldDef::uuid("categoryId"),
            FieldDef::uuid("subCategoryId"),
            FieldDef::uuid("offerTagId").optional(),
            FieldDef::string("brand")
                .min_len(2, "Product brand should be at least 2 characters long.")
                .max_len(50, "Product brand cannot exceed 50 characters."),
            FieldDef::string("sku")
                .min_len(6, "Product SKU should be at least 6 characters long.")
                .max_len(50, "Product SKU cannot exceed 50 characters."),
            FieldDef::number("weight").min(0.01, "Please provide a valid product weight."),
            FieldDef::array("keywords", FieldKind::String)
                .min_items(5, "Please provide at least 5 keywords.")
                .max_items(10, "You can provide up to 10 keywords."),
            FieldDef::array("colors", FieldKind::Object(vec![FieldDef::string("color")]))
                .min_items(1, "Please provide at least one color.")
                .every(
                    ElementCheck::NonEmpty(&["color"]),
                    "All color inputs must be filled.",
                ),
            FieldDef::array("sizes", size_kind())
                .min_items(1, "Please provide at least one size.")
                .every(
                    ElementCheck::Predicate(size_filled),
                    "All size inputs must be filled correctly.",
                ),
            FieldDef::array("product_specs", spec_kind())
                .min_items(1, "Please provide at least one product spec.")
                .every(
                    ElementCheck::NonEmpty(&["name", "value"]),
                    "All product specs inputs must be filled correctly.",
                ),
            FieldDef::array("variant_specs", spec_kind())
                .min_items(1, "Please provide at least one product variant spec.")
                .every(
                    ElementCheck::NonEmpty(&["name", "value"]),
                    "All product variant specs inputs must be filled correctly.",
                ),
            FieldDef::array(
                "questions",
                FieldKind::Object(vec![
                    FieldDef::string("question"),
                    FieldDef::string("answer"),
                ]),
            )
            .min_items(1, "Please provide at least one product question.")
            .every(
                ElementCheck::NonEmpty(&["question", "answer"]),
                "All product question inputs must be filled correctly.",
            ),
            FieldDef::boolean("isSale").default_value(json!(false)),
            FieldDef::string("saleEndDate").optional(),
            FieldDef::boolean("freeShippingForAllCountries").default_value(json!(false)),
            FieldDef::array(
                "freeShippingCountriesIds",
                FieldKind::Object(vec![
                    FieldDef::string("id").optional(),
                    FieldDef::string("label"),
                    FieldDef::string("value"),
                ]),
            )
            .every(
                ElementCheck::NonEmpty(&["label", "value"]),
                "Each country must have a valid name and ID.",
            )
            .default_value(json!([])),
            FieldDef::string("shippingFeeMethod").one_of(shipping_fee_methods.iter().cloned()),
        ],
    )
}

fn size_kind() -> FieldKind {
    FieldKind::Object(vec![
        FieldDef::string("size"),
        FieldDef::number("quantity").min(1.0, "Quantity must be greater than 0."),
        FieldDef::number("price").min(0.01, "Price must be greater than 0."),
        FieldDef::number("discount")
            .min(0.0, "Number must be greater than or equal to 0")
            .default_value(json!(0)),
    ])
}

fn spec_kind() -> FieldKind {
    FieldKind::Object(vec![FieldDef::string("name"), FieldDef::string("value")])
}

/// A size row is usable once it is named, priced and in stock.
fn size_filled(size: &Value) -> bool {
    let named = size
        .get("size")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty());
    let priced = size
        .get("price")
        .and_then(Value::as_f64)
        .is_some_and(|p| p > 0.0);
    let stocked = size
        .get("quantity")
        .and_then(Value::as_f64)
        .is_some_and(|q| q > 0.0);
    named && priced && stocked
}

pub fn validate_product(record: &Record) -> Result<Record, FieldErrors> {
    validate(FormSchemas::standard().get(SchemaName::Product), record)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub size: String,
    pub quantity: f64,
    pub price: f64,
    pub discount: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub answer: String,
}

/// A selectable country in the free-shipping picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub variant_name: String,
    #[serde(default)]
    pub variant_description: Option<String>,
    pub images: Vec<ImageRef>,
    pub variant_image: Vec<ImageRef>,
    pub category_id: EntityId,
    pub sub_category_id: EntityId,
    #[serde(default)]
    pub offer_tag_id: Option<EntityId>,
    pub brand: String,
    pub sku: String,
    pub weight: f64,
    pub keywords: Vec<String>,
    pub colors: Vec<Color>,
    pub sizes: Vec<Size>,
    #[serde(rename = "product_specs")]
    pub product_specs: Vec<Spec>,
    #[serde(rename = "variant_specs")]
    pub variant_specs: Vec<Spec>,
    pub questions: Vec<Question>,
    pub is_sale: bool,
    #[serde(default)]
    pub sale_end_date: Option<String>,
    pub free_shipping_for_all_countries: bool,
    pub free_shipping_countries_ids: Vec<CountryOption>,
    pub shipping_fee_method: ShippingFeeMethod,
}

impl FormSchema for ProductForm {
    const NAME: SchemaName = SchemaName::Product;
}
