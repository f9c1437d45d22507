// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queue state reported by the build service and its text rendering.
//!
//! The summary prints one value per line so it can be piped into other
//! text tools. Opaque 9-character hex identifiers are replaced by `---`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// Fields rendered for each queue item, in output order.
pub const QUEUE_FIELDS: [&str; 6] = ["id", "product", "docset", "lang", "open", "building"];

/// Placeholder for obfuscated identifiers.
pub const OBFUSCATED: &str = "---";

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static OPAQUE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-f0-9]{9}$").expect("constant regex pattern is valid"));

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("queue response is not a JSON array")]
    NotAnArray,
}

/// One in-progress or pending build reported by the service.
///
/// Fields keep their JSON values; absent fields are `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueItem {
    pub id: Value,
    pub product: Value,
    pub docset: Value,
    pub lang: Value,
    pub open: Value,
    pub building: Value,
}

impl QueueItem {
    /// Build an item from a raw JSON entry; non-objects become an empty item.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).cloned().unwrap_or(Value::Null);
        Self {
            id: field("id"),
            product: field("product"),
            docset: field("docset"),
            lang: field("lang"),
            open: field("open"),
            building: field("building"),
        }
    }

    /// Field values in [`QUEUE_FIELDS`] order.
    pub fn values(&self) -> [&Value; 6] {
        [
            &self.id,
            &self.product,
            &self.docset,
            &self.lang,
            &self.open,
            &self.building,
        ]
    }

    /// Rendered lines for this item, one per field.
    pub fn render(&self) -> Vec<String> {
        self.values()
            .into_iter()
            .map(|value| obfuscate(&display_value(value)).to_string())
            .collect()
    }
}

/// Render a JSON value the way a shell pipeline would see it.
///
/// Strings are printed raw, `null` as an empty line, anything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Replace a bare 9-character lowercase hex token with [`OBFUSCATED`].
pub fn obfuscate(rendered: &str) -> &str {
    if OPAQUE_ID.is_match(rendered) {
        OBFUSCATED
    } else {
        rendered
    }
}

/// Render every item of a queue response, six lines per item.
pub fn render_summary(queue: &Value) -> Result<Vec<String>, QueueError> {
    let items = queue.as_array().ok_or(QueueError::NotAnArray)?;
    Ok(items
        .iter()
        .map(QueueItem::from_value)
        .flat_map(|item| item.render())
        .collect())
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
