//! String format predicates: email, UUID, slug.

use std::sync::LazyLock;

use regex::Regex;
use uuid::{Uuid, Variant};
use validator::ValidateEmail;

/// Dot-separated labels ending in an alphabetic TLD of two or more letters.
static EMAIL_DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$").expect("valid regex")
});

/// Length as users count it: Unicode scalar values, not bytes.
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Syntactically valid, and addressed to a named host: IP literals and
/// single-label domains such as `localhost` are rejected.
pub fn is_email(s: &str) -> bool {
    let domain_ok = s
        .rsplit_once('@')
        .is_some_and(|(_, domain)| EMAIL_DOMAIN_RE.is_match(domain));
    domain_ok && s.validate_email()
}

/// Canonical hyphenated form (`8-4-4-4-12`) with version 1-8 and the RFC 4122
/// variant, or the nil and max UUIDs.
pub fn is_uuid(s: &str) -> bool {
    if s.len() != 36 {
        return false;
    }
    let Ok(uuid) = Uuid::try_parse(s) else {
        return false;
    };
    if uuid.is_nil() || uuid == Uuid::from_u128(u128::MAX) {
        return true;
    }
    (1..=8).contains(&uuid.get_version_num()) && uuid.get_variant() == Variant::RFC4122
}

/// True when two separator characters appear next to each other, in any
/// combination (`--`, `-_`, `_ `, ...).
pub fn has_repeated_separator(s: &str, separators: &[char]) -> bool {
    s.chars()
        .zip(s.chars().skip(1))
        .any(|(a, b)| separators.contains(&a) && separators.contains(&b))
}

pub fn is_slug(s: &str, allowed: &Regex, separators: &[char]) -> bool {
    allowed.is_match(s) && !has_repeated_separator(s, separators)
}
