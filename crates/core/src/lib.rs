// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dscmd-core: request orchestration for the Docserv² build client

pub mod config;
pub mod endpoint;
pub mod job;
pub mod operation;
pub mod queue;
pub mod selector;

pub use config::{ConfigError, ServerConfig};
pub use endpoint::Endpoint;
pub use job::{Job, JobMatrix, Selectors, ValidationError, DEFAULT_LANG};
pub use operation::{Operation, Submission};
pub use queue::{obfuscate, render_summary, QueueError, QueueItem, QUEUE_FIELDS};
pub use selector::{parse_selector, SEPARATORS};
