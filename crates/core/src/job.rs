// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job matrix construction and validation.
//!
//! A [`JobMatrix`] is the Cartesian product of the four selector lists,
//! iterated with the target outermost and the language innermost. The
//! matrix is sent to the build service as one JSON array.

use serde::Serialize;
use thiserror::Error;

use crate::operation::Submission;

/// Language used by metadata rebuilds when none is requested.
pub const DEFAULT_LANG: &str = "en-us";

/// Reasons a selector combination is refused before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid target '{target}', must be one of {valid_targets}")]
    InvalidTarget {
        target: String,
        valid_targets: String,
    },

    #[error("no targets given, at least one target is required")]
    MissingTargets,

    #[error("no {selector} given, at least one is required")]
    EmptySelector { selector: &'static str },

    #[error("docsets require at least one product")]
    DocsetsWithoutProduct,
}

/// The four parsed selector lists of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selectors {
    pub targets: Vec<String>,
    pub products: Vec<String>,
    pub docsets: Vec<String>,
    pub langs: Vec<String>,
}

impl Selectors {
    /// Requested languages, or [`DEFAULT_LANG`] alone when none were given.
    pub fn langs_or_default(&self) -> Vec<String> {
        if self.langs.is_empty() {
            vec![DEFAULT_LANG.to_string()]
        } else {
            self.langs.clone()
        }
    }
}

/// One unit of work for the build service.
///
/// `product` and `docset` are `None` only in metadata rebuilds that cover
/// every product (or every docset of a product); they serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub target: String,
    pub product: Option<String>,
    pub docset: Option<String>,
    pub lang: String,
}

/// Ordered job list for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JobMatrix(Vec<Job>);

impl JobMatrix {
    /// Validate `selectors` for `submission` and expand them into jobs.
    ///
    /// `valid_targets` is the raw `validtargets` configuration value. It is
    /// only consulted for [`Submission::Trigger`].
    pub fn build(
        selectors: &Selectors,
        valid_targets: &str,
        submission: Submission,
    ) -> Result<Self, ValidationError> {
        match submission {
            Submission::Trigger => Self::for_trigger(selectors, valid_targets),
            Submission::Metadata => Self::for_metadata(selectors),
        }
    }

    /// All four lists must be non-empty. Every target must be found in
    /// `valid_targets`; the first one that is not aborts the build.
    ///
    /// Membership is a substring test against the raw configuration value,
    /// so `"a"` passes against `"alpha"`.
    pub fn for_trigger(selectors: &Selectors, valid_targets: &str) -> Result<Self, ValidationError> {
        let lists = [
            ("targets", &selectors.targets),
            ("products", &selectors.products),
            ("docsets", &selectors.docsets),
            ("langs", &selectors.langs),
        ];
        if let Some((selector, _)) = lists.iter().find(|(_, values)| values.is_empty()) {
            return Err(ValidationError::EmptySelector {
                selector: *selector,
            });
        }

        if let Some(target) = selectors
            .targets
            .iter()
            .find(|target| !valid_targets.contains(target.as_str()))
        {
            return Err(ValidationError::InvalidTarget {
                target: target.clone(),
                valid_targets: valid_targets.to_string(),
            });
        }

        Ok(Self::product(
            &selectors.targets,
            &wrap(&selectors.products),
            &wrap(&selectors.docsets),
            &selectors.langs,
        ))
    }

    /// Targets are required, docsets need a product, and languages default
    /// to [`DEFAULT_LANG`].
    ///
    /// An empty product or docset list stands for "all of them" and
    /// contributes a single `None` slot instead of collapsing the matrix.
    pub fn for_metadata(selectors: &Selectors) -> Result<Self, ValidationError> {
        if selectors.targets.is_empty() {
            return Err(ValidationError::MissingTargets);
        }
        if selectors.products.is_empty() && !selectors.docsets.is_empty() {
            return Err(ValidationError::DocsetsWithoutProduct);
        }

        let langs = selectors.langs_or_default();

        Ok(Self::product(
            &selectors.targets,
            &wrap_or_all(&selectors.products),
            &wrap_or_all(&selectors.docsets),
            &langs,
        ))
    }

    fn product(
        targets: &[String],
        products: &[Option<String>],
        docsets: &[Option<String>],
        langs: &[String],
    ) -> Self {
        let mut jobs =
            Vec::with_capacity(targets.len() * products.len() * docsets.len() * langs.len());
        for target in targets {
            for product in products {
                for docset in docsets {
                    for lang in langs {
                        jobs.push(Job {
                            target: target.clone(),
                            product: product.clone(),
                            docset: docset.clone(),
                            lang: lang.clone(),
                        });
                    }
                }
            }
        }
        Self(jobs)
    }

    pub fn jobs(&self) -> &[Job] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Request body for the build service.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn wrap(values: &[String]) -> Vec<Option<String>> {
    values.iter().cloned().map(Some).collect()
}

fn wrap_or_all(values: &[String]) -> Vec<Option<String>> {
    if values.is_empty() {
        vec![None]
    } else {
        wrap(values)
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
