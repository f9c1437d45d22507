// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operations the client can ask of a Docserv² instance.

use std::fmt;

/// Any request the client sends to the build service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `GET` the current build queue.
    Queue,
    /// `POST` a job matrix for a documentation build.
    Trigger,
    /// `POST` a job matrix for a metadata rebuild.
    Metadata,
}

/// The operations that submit a job matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    Trigger,
    Metadata,
}

impl From<Submission> for Operation {
    fn from(submission: Submission) -> Self {
        match submission {
            Submission::Trigger => Operation::Trigger,
            Submission::Metadata => Operation::Metadata,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Queue => "queue",
            Operation::Trigger => "trigger",
            Operation::Metadata => "metadata",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Operation::from(*self).fmt(f)
    }
}
