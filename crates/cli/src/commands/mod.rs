// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command handlers

pub mod metadata;
pub mod queue;
pub mod submit;
pub mod trigger;
