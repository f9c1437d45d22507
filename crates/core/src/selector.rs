// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Selector list parsing.
//!
//! A selector is the raw value of `--targets`, `--products`, `--docsets` or
//! `--langs`: one string holding several tokens separated by commas,
//! semicolons or spaces.

/// Characters that separate tokens inside a selector string.
pub const SEPARATORS: [char; 3] = [',', ';', ' '];

/// Split a raw selector string into its ordered tokens.
///
/// Absent or empty input yields an empty list. Runs of separators never
/// produce empty tokens. Duplicates are kept in order.
pub fn parse_selector(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(SEPARATORS)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
