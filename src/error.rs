// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Errors surfaced by a tuning session.

use pm_table::DecodeError;
use smu_mailbox::{RequestError, TopologyError, TransportError};
use thiserror::Error;

/// Failures while driving a session.
///
/// Unsupported operations are not errors; they come back as
/// [`smu_mailbox::CommandOutcome::Unsupported`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The driver could not service a table read or register access.
    #[error("driver access failed: {0}")]
    Transport(#[from] TransportError),
    /// The table could not be decoded with any registered layout.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// A command argument could not be encoded.
    #[error(transparent)]
    Request(#[from] RequestError),
    /// A logical core index has no physical counterpart.
    #[error(transparent)]
    Topology(#[from] TopologyError),
    /// A core-scoped operation was requested before a topology was attached.
    #[error("no core topology attached to the session")]
    NoTopology,
}
