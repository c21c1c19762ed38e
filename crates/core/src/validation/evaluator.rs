//! Schema evaluator — pure logic, no I/O.

use serde_json::Value;

use super::format::{char_count, is_email, is_slug, is_uuid};
use super::rules::{
    Constraint, FieldDef, FieldErrors, FieldKind, FieldViolation, Record, Schema, ViolationKind,
};

/// Validate one record against a schema.
///
/// Fields are evaluated in declaration order. Every failing constraint of
/// every field is collected; on success the returned record has defaults
/// filled in and undeclared keys removed.
pub fn validate(schema: &Schema, record: &Record) -> Result<Record, FieldErrors> {
    let mut errors = FieldErrors::default();
    let normalized = validate_fields(&schema.fields, record, None, &mut errors);

    match normalized {
        Some(normalized) if errors.is_empty() => {
            tracing::debug!(
                schema = schema.name,
                fields = normalized.len(),
                "Form record accepted"
            );
            Ok(normalized)
        }
        _ => {
            tracing::debug!(
                schema = schema.name,
                violations = errors.len(),
                fields = ?errors.fields(),
                "Form record rejected"
            );
            Err(errors)
        }
    }
}

/// Where a value sits: the top-level field it reports under, and its path.
struct Scope {
    field: &'static str,
    path: String,
}

impl Scope {
    fn root(field: &'static str) -> Self {
        Self {
            field,
            path: field.to_string(),
        }
    }

    fn child(&self, name: &str) -> Self {
        Self {
            field: self.field,
            path: format!("{}.{name}", self.path),
        }
    }

    fn index(&self, i: usize) -> Self {
        Self {
            field: self.field,
            path: format!("{}[{i}]", self.path),
        }
    }

    fn violation(&self, kind: ViolationKind, message: impl Into<String>) -> FieldViolation {
        FieldViolation {
            field: self.field.to_string(),
            path: self.path.clone(),
            kind,
            message: message.into(),
        }
    }
}

/// Returns `None` when some field is missing or of the wrong type, in which
/// case the violation has already been recorded.
fn validate_fields(
    fields: &[FieldDef],
    record: &Record,
    parent: Option<&Scope>,
    errors: &mut FieldErrors,
) -> Option<Record> {
    let mut normalized = Record::new();
    let mut intact = true;

    for def in fields {
        let scope = match parent {
            Some(parent) => parent.child(def.name),
            None => Scope::root(def.name),
        };

        let value = match (record.get(def.name), &def.default) {
            (Some(value), _) => value,
            (None, Some(default)) => default,
            (None, None) if def.optional => continue,
            (None, None) => {
                let message = def.type_message.unwrap_or("Required");
                errors.push(scope.violation(ViolationKind::RequiredFieldMissing, message));
                intact = false;
                continue;
            }
        };

        match validate_value(def, value, &scope, errors) {
            Some(value) => {
                normalized.insert(def.name.to_string(), value);
            }
            None => intact = false,
        }
    }

    intact.then_some(normalized)
}

fn validate_value(
    def: &FieldDef,
    value: &Value,
    scope: &Scope,
    errors: &mut FieldErrors,
) -> Option<Value> {
    if let FieldKind::Array(element) = &def.kind {
        return validate_array(
            element,
            &def.constraints,
            value,
            scope,
            def.type_message,
            errors,
        );
    }

    let normalized = normalize(&def.kind, value, scope, def.type_message, errors)?;
    apply_constraints(&def.constraints, &normalized, scope, errors);
    Some(normalized)
}

/// Cardinality first, then each element, then per-element refinements.
/// Refinements are skipped if any element is structurally broken.
fn validate_array(
    element: &FieldKind,
    constraints: &[Constraint],
    value: &Value,
    scope: &Scope,
    type_message: Option<&'static str>,
    errors: &mut FieldErrors,
) -> Option<Value> {
    let Some(items) = value.as_array() else {
        errors.push(type_mismatch("array", value, scope, type_message));
        return None;
    };

    let (cardinality, refinements): (Vec<&Constraint>, Vec<&Constraint>) =
        constraints.iter().partition(|c| c.is_cardinality());

    apply_constraints(cardinality, value, scope, errors);

    let mut normalized = Vec::with_capacity(items.len());
    let mut intact = true;
    for (i, item) in items.iter().enumerate() {
        match normalize(element, item, &scope.index(i), None, errors) {
            Some(item) => normalized.push(item),
            None => intact = false,
        }
    }
    if !intact {
        return None;
    }

    let normalized = Value::Array(normalized);
    apply_constraints(refinements, &normalized, scope, errors);
    Some(normalized)
}

/// Check the value's kind and rebuild it in normalized form.
fn normalize(
    kind: &FieldKind,
    value: &Value,
    scope: &Scope,
    type_message: Option<&'static str>,
    errors: &mut FieldErrors,
) -> Option<Value> {
    let matches = match kind {
        FieldKind::String | FieldKind::Uuid => value.is_string(),
        FieldKind::Number => value.is_number(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Array(element) => {
            return validate_array(element, &[], value, scope, type_message, errors);
        }
        FieldKind::Object(fields) => {
            let Some(object) = value.as_object() else {
                errors.push(type_mismatch("object", value, scope, type_message));
                return None;
            };
            return validate_fields(fields, object, Some(scope), errors).map(Value::Object);
        }
    };

    if !matches {
        errors.push(type_mismatch(kind.expected(), value, scope, type_message));
        return None;
    }

    if let (FieldKind::Uuid, Some(s)) = (kind, value.as_str()) {
        if !is_uuid(s) {
            errors.push(scope.violation(ViolationKind::InvalidFormat, "Invalid uuid"));
        }
    }

    Some(value.clone())
}

fn apply_constraints<'a>(
    constraints: impl IntoIterator<Item = &'a Constraint>,
    value: &Value,
    scope: &Scope,
    errors: &mut FieldErrors,
) {
    for constraint in constraints {
        if let Some(message) = evaluate_constraint(constraint, value) {
            errors.push(scope.violation(constraint.kind(), message));
        }
    }
}

/// Returns the failure message, or `None` if the constraint holds or does
/// not apply to this kind of value.
fn evaluate_constraint(constraint: &Constraint, value: &Value) -> Option<String> {
    let failed = match constraint {
        Constraint::MinLength { min, .. } => char_count(value.as_str()?) < *min,
        Constraint::MaxLength { max, .. } => char_count(value.as_str()?) > *max,
        Constraint::Pattern { regex, .. } => !regex.is_match(value.as_str()?),
        Constraint::Slug {
            allowed,
            separators,
            ..
        } => !is_slug(value.as_str()?, allowed, separators),
        Constraint::Min {
            bound, inclusive, ..
        } => {
            let n = value.as_f64()?;
            if *inclusive {
                n < *bound
            } else {
                n <= *bound
            }
        }
        Constraint::MinItems { min, .. } => value.as_array()?.len() < *min,
        Constraint::MaxItems { max, .. } => value.as_array()?.len() > *max,
        Constraint::Items { len, .. } => value.as_array()?.len() != *len,
        Constraint::Email { .. } => !is_email(value.as_str()?),
        Constraint::OneOf { allowed } => {
            let s = value.as_str()?;
            if allowed.iter().any(|a| a == s) {
                return None;
            }
            return Some(enum_message(allowed, s));
        }
        Constraint::Every { check, .. } => !value.as_array()?.iter().all(|e| check.holds(e)),
    };

    if failed {
        message_of(constraint).map(str::to_string)
    } else {
        None
    }
}

fn message_of(constraint: &Constraint) -> Option<&'static str> {
    match constraint {
        Constraint::MinLength { message, .. }
        | Constraint::MaxLength { message, .. }
        | Constraint::Pattern { message, .. }
        | Constraint::Slug { message, .. }
        | Constraint::Min { message, .. }
        | Constraint::MinItems { message, .. }
        | Constraint::MaxItems { message, .. }
        | Constraint::Items { message, .. }
        | Constraint::Email { message }
        | Constraint::Every { message, .. } => Some(*message),
        Constraint::OneOf { .. } => None,
    }
}

fn enum_message(allowed: &[String], received: &str) -> String {
    let expected = allowed
        .iter()
        .map(|a| format!("'{a}'"))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("Invalid enum value. Expected {expected}, received '{received}'")
}

fn type_mismatch(
    expected: &str,
    value: &Value,
    scope: &Scope,
    type_message: Option<&'static str>,
) -> FieldViolation {
    let message = match type_message {
        Some(message) => message.to_string(),
        None => format!("Expected {expected}, received {}", json_type(value)),
    };
    scope.violation(ViolationKind::TypeMismatch, message)
}

/// JSON type name as it appears in messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
