// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Route Ryzen SMU tuning operations to per-family mailbox endpoints.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

//! SMU mailbox command dispatch.
//!
//! Tuning operations reach the firmware through up to three mailbox channels
//! whose opcode numbering differs per silicon family. A [`CapabilityMap`]
//! records which channels carry which [`Operation`] for each [`Family`]; the
//! [`Executor`] encodes a request, walks the channels in priority order and
//! decodes the firmware's reply into a [`CommandOutcome`].

extern crate alloc;

mod capability;
mod channel;
mod encoding;
mod executor;
mod family;
mod operation;
mod topology;
mod transport;

pub use capability::{
    CapabilityError, CapabilityMap, Endpoint, RouteSpec, BUILTIN_ROUTES, MAX_ENDPOINTS,
};
pub use channel::Channel;
pub use encoding::{
    CoreAddress, CoreLayout, EncodeError, Encoding, MAX_CORE_OFFSET, MIN_CORE_OFFSET,
};
pub use executor::{
    Argument, Attempt, Attempts, CommandOutcome, Executor, ProbeMode, Request, RequestError,
    TEST_MESSAGE, THROTTLE_MS,
};
pub use family::{Family, UnknownFamily};
pub use operation::{Operation, Scope, UnknownOperation};
pub use topology::{locate, Topology, TopologyError, CORES_PER_DIE};
#[cfg(feature = "std")]
pub use transport::ThreadSleep;
pub use transport::{Delay, Mailbox, RegisterRead, TransportError, STATUS_OK};
