//! Placeholder substitution for custom templates.
//!
//! Tokens are matched in a single left-to-right pass. Replacement text is
//! never re-scanned, so a value that itself looks like `{{heading}}` is
//! emitted literally and the order tokens are considered in cannot matter.

use crate::placeholder::Placeholder;
use mailcraft_core::TemplateData;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| Regex::new(r"\{\{(\w+)\}\}").expect("valid regex"))
}

/// Replace every recognised token in `text` with its value from `data`.
///
/// Unrecognised tokens are left byte-identical.
#[must_use]
pub fn substitute_str<'a>(text: &'a str, data: &TemplateData) -> Cow<'a, str> {
    token_regex().replace_all(text, |caps: &Captures<'_>| {
        match Placeholder::from_name(&caps[1]) {
            Some(placeholder) => placeholder.value(data).to_string(),
            None => caps[0].to_string(),
        }
    })
}

/// Resolve the placeholders of an HTML/CSS pair against `data`.
///
/// Pure and total: never fails, and empty values substitute to the empty
/// string.
#[must_use]
pub fn substitute(html: &str, css: &str, data: &TemplateData) -> (String, String) {
    (
        substitute_str(html, data).into_owned(),
        substitute_str(css, data).into_owned(),
    )
}
