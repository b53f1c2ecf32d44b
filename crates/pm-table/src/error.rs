// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Error types surfaced by the PM table decoder.
// Author: Lukas Bower

/// Compatibility errors returned when a buffer cannot be decoded.
///
/// Both variants are terminal for the attempt; retrying with the same inputs
/// cannot succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// No layout is registered for the version identifier.
    #[error("PM table version 0x{0:06X} is not supported")]
    UnknownVersion(u32),
    /// The buffer is shorter than the layout requires.
    #[error("PM table buffer holds {got} bytes but version layout needs {needed}")]
    BufferTooSmall {
        /// Bytes the layout requires.
        needed: usize,
        /// Bytes supplied.
        got: usize,
    },
}
