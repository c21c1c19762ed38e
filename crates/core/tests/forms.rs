//! End-to-end checks of the form schemas through the public API.

use assert_matches::assert_matches;
use marketplace_core::config::SchemaConfig;
use marketplace_core::error::CoreError;
use marketplace_core::forms::{
    validate_category, validate_product, validate_shipping_address, validate_store,
    validate_sub_category, CategoryForm, FormSchema, FormSchemas, ProductForm, SchemaName,
};
use marketplace_core::types::ShippingFeeMethod;
use marketplace_core::validation::{Record, ViolationKind};
use serde_json::{json, Value};

fn record(value: Value) -> Record {
    value.as_object().cloned().expect("fixture is an object")
}

fn category() -> Value {
    json!({
        "name": "Electronics",
        "image": [{"url": "http://x/a.png"}],
        "url": "electronics",
    })
}

fn product() -> Value {
    json!({
        "name": "Trail Running Shoe",
        "description": "Lightweight trail shoe with a grippy outsole. ".repeat(5),
        "variantName": "Blue / 42",
        "images": [
            {"url": "https://cdn.example.com/shoe-1.png"},
            {"url": "https://cdn.example.com/shoe-2.png"},
            {"url": "https://cdn.example.com/shoe-3.png"},
        ],
        "variantImage": [{"url": "https://cdn.example.com/shoe-blue.png"}],
        "categoryId": "0f8fad5b-d9cb-469f-a165-70867728950e",
        "subCategoryId": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
        "brand": "Ridge",
        "sku": "RDG-TR-42",
        "weight": 0.8,
        "keywords": ["shoe", "trail", "running", "outdoor", "sport"],
        "colors": [{"color": "blue"}],
        "sizes": [{"size": "42", "quantity": 5, "price": 120, "discount": 10}],
        "product_specs": [{"name": "Drop", "value": "6mm"}],
        "variant_specs": [{"name": "Color", "value": "Blue"}],
        "questions": [{"question": "True to size?", "answer": "Yes."}],
        "shippingFeeMethod": "WEIGHT",
    })
}

fn store() -> Value {
    json!({
        "name": "Ridge Outfitters",
        "description": "Outdoor gear tested on real mountain trails.",
        "email": "sales@ridge.example",
        "phone": "+15551234567",
        "logo": [{"url": "https://cdn.example.com/ridge-logo.png"}],
        "cover": [{"url": "https://cdn.example.com/ridge-cover.png"}],
        "url": "ridge-outfitters",
    })
}

fn shipping_address() -> Value {
    json!({
        "countryId": "9b2f1c4e-3d5a-4e7b-8c6d-1a2b3c4d5e6f",
        "firstName": "Jonas",
        "lastName": "Berg",
        "phone": "+4798765432",
        "address1": "Storgata 1",
        "state": "Oslo",
        "city": "Oslo",
        "zip_code": "0155",
    })
}

fn sub_category() -> Value {
    let mut value = category();
    value["name"] = json!("Phones");
    value["url"] = json!("phones");
    value["categoryId"] = json!("0f8fad5b-d9cb-469f-a165-70867728950e");
    value
}

fn valid_fixtures() -> Vec<(SchemaName, Value)> {
    vec![
        (SchemaName::Category, category()),
        (SchemaName::SubCategory, sub_category()),
        (SchemaName::Store, store()),
        (SchemaName::Product, product()),
        (SchemaName::ShippingAddress, shipping_address()),
    ]
}

#[test]
fn category_example_normalizes_featured() {
    let normalized = validate_category(&record(category())).unwrap();
    assert_eq!(normalized["featured"], json!(false));
    assert_eq!(normalized["name"], json!("Electronics"));
}

#[test]
fn category_double_hyphen_url_is_pattern_mismatch() {
    let mut input = record(category());
    input.insert("url".into(), json!("electro--nics"));
    let errors = validate_category(&input).unwrap_err();
    assert_eq!(errors.fields(), vec!["url"]);
    assert!(errors.has("url", ViolationKind::PatternMismatch));
}

#[test]
fn product_with_two_images_is_cardinality_violation() {
    let mut input = record(product());
    input.insert(
        "images".into(),
        json!([{"url": "https://a/1.png"}, {"url": "https://a/2.png"}]),
    );
    let errors = validate_product(&input).unwrap_err();
    assert!(errors.has("images", ViolationKind::ArrayCardinalityViolation));
    assert!(errors.messages("images")[0].contains("at least 3 images"));
}

#[test]
fn product_size_with_zero_quantity_fails() {
    let mut input = record(product());
    input.insert(
        "sizes".into(),
        json!([{"size": "M", "quantity": 0, "price": 10, "discount": 0}]),
    );
    let errors = validate_product(&input).unwrap_err();
    assert_eq!(errors.fields(), vec!["sizes"]);
    assert!(errors
        .messages("sizes")
        .contains(&"Quantity must be greater than 0."));
    assert!(errors.has("sizes", ViolationKind::ElementRefinementFailed));
}

#[test]
fn shipping_address_bad_phone_is_pattern_mismatch() {
    let mut input = record(shipping_address());
    input.insert("phone".into(), json!("abc"));
    let errors = validate_shipping_address(&input).unwrap_err();
    assert_eq!(errors.fields(), vec!["phone"]);
    assert!(errors.has("phone", ViolationKind::PatternMismatch));
}

#[test]
fn every_schema_accepts_its_valid_fixture() {
    let schemas = FormSchemas::standard();
    for (name, input) in valid_fixtures() {
        assert!(schemas.validate(name, &input).is_ok(), "{name} rejected its fixture");
    }
}

#[test]
fn per_schema_functions_agree_with_registry() {
    assert!(validate_sub_category(&record(sub_category())).is_ok());
    assert!(validate_store(&record(store())).is_ok());
}

#[test]
fn dropping_a_required_field_reports_exactly_that_field() {
    let schemas = FormSchemas::standard();
    for (name, input) in valid_fixtures() {
        let schema = schemas.get(name);
        let required = schema
            .fields
            .iter()
            .filter(|f| f.default.is_none() && !f.optional);
        for field in required {
            let mut missing = record(input.clone());
            missing.remove(field.name);
            let err = schemas.validate(name, &Value::Object(missing)).unwrap_err();
            let errors = err.field_errors().expect("field errors");
            assert_eq!(errors.fields(), vec![field.name], "{name}.{}", field.name);
            assert!(
                errors.has(field.name, ViolationKind::RequiredFieldMissing),
                "{name}.{}",
                field.name
            );
        }
    }
}

#[test]
fn validating_normalized_output_is_idempotent() {
    let schemas = FormSchemas::standard();
    for (name, input) in valid_fixtures() {
        let first = schemas.validate(name, &input).unwrap();
        let second = schemas.validate(name, &Value::Object(first.clone())).unwrap();
        assert_eq!(first, second, "{name}");
    }
}

#[test]
fn typed_forms_decode_normalized_values() {
    let category = CategoryForm::parse(&category()).unwrap();
    assert_eq!(category.url, "electronics");

    let product = ProductForm::parse(&product()).unwrap();
    assert_eq!(product.sizes[0].discount, 10.0);
    assert!(!product.is_sale);
}

#[test]
fn typed_parse_surfaces_field_errors() {
    let mut input = category();
    input["url"] = json!("a");
    let err = CategoryForm::parse(&input).unwrap_err();
    assert_matches!(err, CoreError::Validation(ref errors) if errors.has("url", ViolationKind::LengthOutOfRange));
}

#[test]
fn custom_shipping_fee_methods() {
    let config = SchemaConfig::default().with_shipping_fee_methods(["FIXED"]);
    let schemas = FormSchemas::new(&config).unwrap();

    let err = schemas.validate(SchemaName::Product, &product()).unwrap_err();
    let errors = err.field_errors().unwrap();
    assert_eq!(
        errors.messages("shippingFeeMethod"),
        vec!["Invalid enum value. Expected 'FIXED', received 'WEIGHT'"]
    );
}

#[test]
fn schema_names_round_trip_through_strings() {
    for name in SchemaName::ALL {
        assert_eq!(name.to_string().parse::<SchemaName>().unwrap(), name);
    }
}

#[test]
fn store_status_defaults_to_pending() {
    let schema = FormSchemas::standard().get(SchemaName::Store);
    let status = schema.field("status").expect("status field");
    assert_eq!(status.default, Some(json!("PENDING")));
    assert!(schema.field("owner").is_none());
}

#[test]
fn typed_parse_with_custom_registry() {
    let config = SchemaConfig::default().with_shipping_fee_methods(["FIXED"]);
    let schemas = FormSchemas::new(&config).unwrap();
    let mut input = product();
    input["shippingFeeMethod"] = json!("FIXED");

    let form: ProductForm = schemas.parse(&input).unwrap();
    assert_eq!(form.shipping_fee_method, ShippingFeeMethod::Fixed);

    // The standard registry would accept WEIGHT; this one does not.
    input["shippingFeeMethod"] = json!("WEIGHT");
    assert_matches!(schemas.parse::<ProductForm>(&input), Err(CoreError::Validation(_)));
}

#[test]
fn typed_parse_rejects_methods_outside_the_enum() {
    let config = SchemaConfig::default().with_shipping_fee_methods(["FLAT"]);
    let schemas = FormSchemas::new(&config).unwrap();
    let mut input = product();
    input["shippingFeeMethod"] = json!("FLAT");

    assert!(schemas.validate(SchemaName::Product, &input).is_ok());
    assert_matches!(schemas.parse::<ProductForm>(&input), Err(CoreError::Decode(_)));
}

#[test]
fn store_rejects_hostless_emails() {
    for email in ["owner@localhost", "a@[127.0.0.1]", "a@b.c"] {
        let mut input = record(store());
        input.insert("email".into(), json!(email));
        let errors = validate_store(&input).unwrap_err();
        assert_eq!(errors.messages("email"), vec!["Invalid email format."], "{email}");
    }
}

// ---------------------------------------------------------------------------
// Upper bounds: the limit passes, one past it fails
// ---------------------------------------------------------------------------

fn assert_ceiling(name: SchemaName, base: Value, field: &str, at_limit: Value, over: Value) {
    let schemas = FormSchemas::standard();

    let mut ok = base.clone();
    ok[field] = at_limit;
    assert!(schemas.validate(name, &ok).is_ok(), "{name}.{field} at limit");

    let mut too_long = base;
    too_long[field] = over;
    let err = schemas.validate(name, &too_long).unwrap_err();
    let errors = err.field_errors().expect("field errors");
    assert_eq!(errors.fields(), vec![field], "{name}.{field} over limit");
    let expected = if field == "images" {
        ViolationKind::ArrayCardinalityViolation
    } else {
        ViolationKind::LengthOutOfRange
    };
    assert!(errors.has(field, expected), "{name}.{field} over limit");
}

#[test]
fn category_name_and_url_ceiling() {
    assert_ceiling(SchemaName::Category, category(), "name", json!("a".repeat(50)), json!("a".repeat(51)));
    assert_ceiling(SchemaName::Category, category(), "url", json!("u".repeat(50)), json!("u".repeat(51)));
}

#[test]
fn store_ceilings() {
    assert_ceiling(SchemaName::Store, store(), "name", json!("s".repeat(50)), json!("s".repeat(51)));
    assert_ceiling(SchemaName::Store, store(), "url", json!("s".repeat(50)), json!("s".repeat(51)));
    assert_ceiling(
        SchemaName::Store,
        store(),
        "description",
        json!("d".repeat(500)),
        json!("d".repeat(501)),
    );
}

#[test]
fn store_description_counts_characters_not_bytes() {
    // 500 two-byte characters are 1000 bytes but still within the limit.
    assert_ceiling(
        SchemaName::Store,
        store(),
        "description",
        json!("é".repeat(500)),
        json!("é".repeat(501)),
    );
}

#[test]
fn product_ceilings() {
    assert_ceiling(SchemaName::Product, product(), "name", json!("p".repeat(200)), json!("p".repeat(201)));
    assert_ceiling(SchemaName::Product, product(), "sku", json!("k".repeat(50)), json!("k".repeat(51)));

    let images = |n: usize| {
        json!((0..n)
            .map(|i| json!({"url": format!("https://cdn.example.com/{i}.png")}))
            .collect::<Vec<_>>())
    };
    assert_ceiling(SchemaName::Product, product(), "images", images(6), images(7));
}

#[test]
fn product_image_ceiling_message() {
    let mut input = record(product());
    input.insert("images".into(), json!(vec![json!({"url": "https://a/x.png"}); 7]));
    let errors = validate_product(&input).unwrap_err();
    assert_eq!(
        errors.messages("images"),
        vec!["You can upload up to 6 images for the product."]
    );
}

#[test]
fn zip_code_ceiling() {
    assert_ceiling(
        SchemaName::ShippingAddress,
        shipping_address(),
        "zip_code",
        json!("1".repeat(10)),
        json!("1".repeat(11)),
    );
}
