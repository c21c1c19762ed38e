//! Category and subcategory forms.
//!
//! Both share one shape; only the copy differs, and a subcategory also
//! points at its parent category.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::patterns::{LISTING_NAME_RE, URL_SEPARATORS, URL_SLUG_RE};
use super::registry::{FormSchemas, SchemaName};
use super::{FormSchema, ImageRef};
use crate::types::EntityId;
use crate::validation::rules::{FieldDef, FieldKind, Schema};
use crate::validation::{validate, FieldErrors, Record};

/// User-facing text for one listing form.
struct ListingCopy {
    name_min: &'static str,
    name_max: &'static str,
    name_pattern: &'static str,
    image: &'static str,
    url_min: &'static str,
    url_max: &'static str,
    url_pattern: &'static str,
}

const CATEGORY_COPY: ListingCopy = ListingCopy {
    name_min: "Category name must be at least 2 characters long.",
    name_max: "Category name cannot exceed 50 characters.",
    name_pattern: "Only letters, numbers, and spaces are allowed in the category name.",
    image: "Choose a category image.",
    url_min: "Category url must be at least 2 characters long.",
    url_max: "Category url cannot exceed 50 characters.",
    url_pattern: "Only letters, numbers, hyphen, and underscore are allowed in the category url, and consecutive occurrences of hyphens, underscores, or spaces are not permitted.",
};

const SUB_CATEGORY_COPY: ListingCopy = ListingCopy {
    name_min: "SubCategory name must be at least 2 characters long.",
    name_max: "SubCategory name cannot exceed 50 characters.",
    name_pattern: "Only letters, numbers, and spaces are allowed in the subCategory name.",
    image: "Choose only one subCategory image",
    url_min: "SubCategory url must be at least 2 characters long.",
    url_max: "SubCategory url cannot exceed 50 characters.",
    url_pattern: "Only letters, numbers, hyphen, and underscore are allowed in the subCategory url, and consecutive occurrences of hyphens, underscores, or spaces are not permitted.",
};

fn listing_fields(copy: &ListingCopy) -> (Vec<FieldDef>, FieldDef) {
    let fields = vec![
        FieldDef::string("name")
            .min_len(2, copy.name_min)
            .max_len(50, copy.name_max)
            .pattern(&LISTING_NAME_RE, copy.name_pattern),
        FieldDef::new("image", FieldKind::images()).items(1, copy.image),
        FieldDef::string("url")
            .min_len(2, copy.url_min)
            .max_len(50, copy.url_max)
            .slug(&URL_SLUG_RE, URL_SEPARATORS, copy.url_pattern),
    ];
    let featured = FieldDef::boolean("featured").default_value(json!(false));
    (fields, featured)
}

pub fn category_schema() -> Schema {
    let (mut fields, featured) = listing_fields(&CATEGORY_COPY);
    fields.push(featured);
    Schema::new(SchemaName::Category.as_str(), fields)
}

pub fn sub_category_schema() -> Schema {
    let (mut fields, featured) = listing_fields(&SUB_CATEGORY_COPY);
    fields.push(FieldDef::uuid("categoryId"));
    fields.push(featured);
    Schema::new(SchemaName::SubCategory.as_str(), fields)
}

pub fn validate_category(record: &Record) -> Result<Record, FieldErrors> {
    validate(FormSchemas::standard().get(SchemaName::Category), record)
}

pub fn validate_sub_category(record: &Record) -> Result<Record, FieldErrors> {
    validate(FormSchemas::standard().get(SchemaName::SubCategory), record)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryForm {
    pub name: String,
    pub image: Vec<ImageRef>,
    pub url: String,
    pub featured: bool,
}

impl FormSchema for CategoryForm {
    const NAME: SchemaName = SchemaName::Category;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryForm {
    pub name: String,
    pub image: Vec<ImageRef>,
    pub url: String,
    pub category_id: EntityId,
    pub featured: bool,
}

impl FormSchema for SubCategoryForm {
    const NAME: SchemaName = SchemaName::SubCategory;
}
