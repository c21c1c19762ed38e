//! Validation rule and result types.
//!
//! A [`Schema`] is an ordered list of [`FieldDef`]s, each carrying a
//! [`FieldKind`] and a chain of [`Constraint`] descriptors. The builder
//! methods on [`FieldDef`] read like the form copy they encode:
//!
//! ```
//! use marketplace_core::validation::rules::FieldDef;
//!
//! let sku = FieldDef::string("sku")
//!     .min_len(6, "Product SKU should be at least 6 characters long.")
//!     .max_len(50, "Product SKU cannot exceed 50 characters.");
//! assert_eq!(sku.constraints.len(), 2);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A candidate or normalized form record, keyed by field name.
pub type Record = serde_json::Map<String, Value>;

/// A named, ordered set of field definitions.
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: &'static str,
    pub fields: Vec<FieldDef>,
}

impl Schema {
    pub fn new(name: &'static str, fields: Vec<FieldDef>) -> Self {
        Self { name, fields }
    }

    /// Look up a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The JSON shape a field value must have.
#[derive(Debug, Clone)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    /// A string holding a hyphenated UUID.
    Uuid,
    Array(Box<FieldKind>),
    /// A nested object, validated with the same engine.
    Object(Vec<FieldDef>),
}

impl FieldKind {
    /// Name used in type-mismatch messages.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::String | FieldKind::Uuid => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Array(_) => "array",
            FieldKind::Object(_) => "object",
        }
    }

    /// Shorthand for an array of `{ url }` objects (uploaded images).
    pub fn images() -> Self {
        FieldKind::Array(Box::new(FieldKind::Object(vec![FieldDef::string("url")])))
    }
}

/// One named slot in a record.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub constraints: Vec<Constraint>,
    /// Substituted when the field is absent, before any constraint runs.
    pub default: Option<Value>,
    /// Absence is accepted when no default is declared.
    pub optional: bool,
    /// Replaces the generic text for missing or wrongly typed values.
    pub type_message: Option<&'static str>,
}

impl FieldDef {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            constraints: Vec::new(),
            default: None,
            optional: false,
            type_message: None,
        }
    }

    pub fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub fn uuid(name: &'static str) -> Self {
        Self::new(name, FieldKind::Uuid)
    }

    pub fn array(name: &'static str, element: FieldKind) -> Self {
        Self::new(name, FieldKind::Array(Box::new(element)))
    }

    pub fn object(name: &'static str, fields: Vec<FieldDef>) -> Self {
        Self::new(name, FieldKind::Object(fields))
    }

    pub fn min_len(self, min: usize, message: &'static str) -> Self {
        self.with(Constraint::MinLength { min, message })
    }

    pub fn max_len(self, max: usize, message: &'static str) -> Self {
        self.with(Constraint::MaxLength { max, message })
    }

    /// Full-string match; the regex must carry its own `^...$` anchors.
    pub fn pattern(self, regex: &Regex, message: &'static str) -> Self {
        self.with(Constraint::Pattern {
            regex: regex.clone(),
            message,
        })
    }

    pub fn slug(
        self,
        allowed: &Regex,
        separators: &'static [char],
        message: &'static str,
    ) -> Self {
        self.with(Constraint::Slug {
            allowed: allowed.clone(),
            separators,
            message,
        })
    }

    /// Inclusive numeric lower bound.
    pub fn min(self, bound: f64, message: &'static str) -> Self {
        self.with(Constraint::Min {
            bound,
            inclusive: true,
            message,
        })
    }

    /// Exclusive numeric lower bound.
    pub fn greater_than(self, bound: f64, message: &'static str) -> Self {
        self.with(Constraint::Min {
            bound,
            inclusive: false,
            message,
        })
    }

    pub fn min_items(self, min: usize, message: &'static str) -> Self {
        self.with(Constraint::MinItems { min, message })
    }

    pub fn max_items(self, max: usize, message: &'static str) -> Self {
        self.with(Constraint::MaxItems { max, message })
    }

    pub fn items(self, len: usize, message: &'static str) -> Self {
        self.with(Constraint::Items { len, message })
    }

    pub fn email(self, message: &'static str) -> Self {
        self.with(Constraint::Email { message })
    }

    pub fn one_of<I, S>(self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(Constraint::OneOf {
            allowed: allowed.into_iter().map(Into::into).collect(),
        })
    }

    pub fn every(self, check: ElementCheck, message: &'static str) -> Self {
        self.with(Constraint::Every { check, message })
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn type_message(mut self, message: &'static str) -> Self {
        self.type_message = Some(message);
        self
    }

    fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// A predicate over a field value paired with its failure message.
#[derive(Debug, Clone)]
pub enum Constraint {
    MinLength {
        min: usize,
        message: &'static str,
    },
    MaxLength {
        max: usize,
        message: &'static str,
    },
    Pattern {
        regex: Regex,
        message: &'static str,
    },
    /// Allowed characters plus no two consecutive separators.
    Slug {
        allowed: Regex,
        separators: &'static [char],
        message: &'static str,
    },
    Min {
        bound: f64,
        inclusive: bool,
        message: &'static str,
    },
    MinItems {
        min: usize,
        message: &'static str,
    },
    MaxItems {
        max: usize,
        message: &'static str,
    },
    Items {
        len: usize,
        message: &'static str,
    },
    Email {
        message: &'static str,
    },
    OneOf {
        allowed: Vec<String>,
    },
    /// Fails once, with a single message, if any array element fails.
    Every {
        check: ElementCheck,
        message: &'static str,
    },
}

impl Constraint {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Constraint::MinLength { .. } | Constraint::MaxLength { .. } => {
                ViolationKind::LengthOutOfRange
            }
            Constraint::Pattern { .. } | Constraint::Slug { .. } => ViolationKind::PatternMismatch,
            Constraint::Min { .. } => ViolationKind::NumericBoundViolation,
            Constraint::MinItems { .. } | Constraint::MaxItems { .. } | Constraint::Items { .. } => {
                ViolationKind::ArrayCardinalityViolation
            }
            Constraint::Email { .. } => ViolationKind::InvalidFormat,
            Constraint::OneOf { .. } => ViolationKind::InvalidEnumMember,
            Constraint::Every { .. } => ViolationKind::ElementRefinementFailed,
        }
    }

    /// Cardinality checks run before array elements are inspected.
    pub fn is_cardinality(&self) -> bool {
        self.kind() == ViolationKind::ArrayCardinalityViolation
    }
}

/// Per-element predicate used by [`Constraint::Every`].
#[derive(Clone, Copy)]
pub enum ElementCheck {
    /// Each listed key holds a non-empty string. With no keys, the element
    /// itself must be a non-empty string.
    NonEmpty(&'static [&'static str]),
    Predicate(fn(&Value) -> bool),
}

impl ElementCheck {
    pub fn holds(&self, element: &Value) -> bool {
        match self {
            ElementCheck::NonEmpty(keys) if keys.is_empty() => {
                element.as_str().is_some_and(|s| !s.is_empty())
            }
            ElementCheck::NonEmpty(keys) => keys.iter().all(|key| {
                element
                    .get(*key)
                    .and_then(Value::as_str)
                    .is_some_and(|s| !s.is_empty())
            }),
            ElementCheck::Predicate(predicate) => predicate(element),
        }
    }
}

impl fmt::Debug for ElementCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementCheck::NonEmpty(keys) => f.debug_tuple("NonEmpty").field(keys).finish(),
            ElementCheck::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Error taxonomy for field-level violations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    RequiredFieldMissing,
    TypeMismatch,
    LengthOutOfRange,
    PatternMismatch,
    NumericBoundViolation,
    ArrayCardinalityViolation,
    ElementRefinementFailed,
    InvalidEnumMember,
    InvalidFormat,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldViolation {
    /// Top-level field the violation belongs to.
    pub field: String,
    /// Full location, e.g. `sizes[0].quantity`. Equal to `field` at top level.
    pub path: String,
    pub kind: ViolationKind,
    pub message: String,
}

/// Every violation found in one record, in evaluation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FieldErrors {
    violations: Vec<FieldViolation>,
}

impl FieldErrors {
    pub fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter()
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldViolation> {
        self.violations.iter().filter(move |v| v.field == field)
    }

    /// Messages for one field, in the order its constraints were declared.
    pub fn messages<'a>(&'a self, field: &str) -> Vec<&'a str> {
        self.violations
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.message.as_str())
            .collect()
    }

    pub fn has(&self, field: &str, kind: ViolationKind) -> bool {
        self.for_field(field).any(|v| v.kind == kind)
    }

    /// Distinct field names with at least one violation, first-seen order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for v in &self.violations {
            if !fields.contains(&v.field.as_str()) {
                fields.push(&v.field);
            }
        }
        fields
    }

    /// Field name to ordered messages, the shape form UIs display.
    pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for v in &self.violations {
            map.entry(v.field.clone()).or_default().push(v.message.clone());
        }
        map
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} violation(s) in: {}",
            self.violations.len(),
            self.fields().join(", ")
        )
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldViolation;
    type IntoIter = std::vec::IntoIter<FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}
