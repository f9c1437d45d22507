// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes for failed commands.

use dscmd_adapters::ServiceError;
use dscmd_core::ValidationError;

/// Generic failure: configuration, transport, malformed responses.
pub const EXIT_FAILURE: i32 = 1;
/// Command-line usage error, matching clap's own exit status.
pub const EXIT_USAGE: i32 = 2;
/// A trigger target is not listed in `validtargets`.
pub const EXIT_INVALID_TARGET: i32 = 20;
/// A metadata request is incomplete (no targets, or docsets without product).
pub const EXIT_INVALID_REQUEST: i32 = 100;

/// Exit code for an error returned by a command handler.
///
/// Server rejections exit with the HTTP status code. Statuses that would
/// wrap to 0 in an 8-bit exit status fall back to [`EXIT_FAILURE`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ValidationError>() {
            return match e {
                ValidationError::InvalidTarget { .. } => EXIT_INVALID_TARGET,
                ValidationError::EmptySelector { .. } => EXIT_USAGE,
                ValidationError::MissingTargets | ValidationError::DocsetsWithoutProduct => {
                    EXIT_INVALID_REQUEST
                }
            };
        }
        if let Some(e) = cause.downcast_ref::<ServiceError>() {
            return match e.status() {
                Some(status) if status % 256 != 0 => i32::from(status),
                _ => EXIT_FAILURE,
            };
        }
    }
    EXIT_FAILURE
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
