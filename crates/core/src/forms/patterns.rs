//! Compiled patterns shared by the form schemas.

use std::sync::LazyLock;

use regex::Regex;

/// Category and subcategory display names.
pub(crate) static LISTING_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s'&-]+$").expect("valid regex"));

/// Characters allowed in a url segment.
pub(crate) static URL_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid regex"));

pub(crate) const URL_SEPARATORS: &[char] = &['-', '_', ' '];

pub(crate) static STORE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_ &-]+$").expect("valid regex"));

pub(crate) const STORE_NAME_SEPARATORS: &[char] = &['-', '_', '&', ' '];

/// Optional leading `+`, then ASCII digits only.
pub(crate) static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]+$").expect("valid regex"));

pub(crate) static PERSON_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("valid regex"));
