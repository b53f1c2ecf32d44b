// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Encode, dispatch and decode tuning requests with ordered channel fallback.
// Author: Lukas Bower

//! The executor owns the mailbox and walks a route's endpoints in order.
//!
//! Every transmission is followed by [`THROTTLE_MS`] of delay whether it
//! succeeded or not. The first endpoint that succeeds ends the walk; later
//! channels are never tried because the firmware may apply a setting once per
//! channel.

use heapless::Vec;
use log::{debug, trace, warn};

use crate::capability::{CapabilityMap, MAX_ENDPOINTS};
use crate::channel::Channel;
use crate::encoding::{CoreAddress, EncodeError};
use crate::family::Family;
use crate::operation::Operation;
use crate::transport::{Delay, Mailbox, TransportError};

/// Minimum gap after each mailbox transmission.
pub const THROTTLE_MS: u32 = 25;
/// Firmware test message acknowledged on every channel without side effects.
pub const TEST_MESSAGE: u32 = 0x01;

/// How [`Executor::probe`] decides support.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProbeMode {
    /// Resolve the route, then send the test message on its channels.
    #[default]
    Handshake,
    /// Resolve the route only; no mailbox traffic.
    RouteOnly,
}

/// Payload of a request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Argument {
    /// A setpoint or, for queries, an ignored placeholder.
    Value(f64),
    /// Support check; never scaled or sent as a setpoint.
    Probe,
}

/// One logical command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Request {
    /// Operation to perform.
    pub operation: Operation,
    /// Value or probe marker.
    pub argument: Argument,
    /// Target core for core-scoped operations.
    pub core: Option<CoreAddress>,
}

impl Request {
    /// Request applying `value` through `operation`.
    #[must_use]
    pub const fn set(operation: Operation, value: f64) -> Self {
        Self {
            operation,
            argument: Argument::Value(value),
            core: None,
        }
    }

    /// Request for an operation that takes no value.
    #[must_use]
    pub const fn query(operation: Operation) -> Self {
        Self::set(operation, 0.0)
    }

    /// Support check for `operation`.
    #[must_use]
    pub const fn probe(operation: Operation) -> Self {
        Self {
            operation,
            argument: Argument::Probe,
            core: None,
        }
    }

    /// Targets `core`.
    #[must_use]
    pub const fn on_core(mut self, core: CoreAddress) -> Self {
        self.core = Some(core);
        self
    }
}

/// A transmission the firmware did not accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt {
    /// Channel used.
    pub channel: Channel,
    /// Opcode sent.
    pub opcode: u32,
    /// Failure reported by the transport.
    pub error: TransportError,
}

/// Failed attempts in the order they were made.
pub type Attempts = Vec<Attempt, MAX_ENDPOINTS>;

/// Result of running one command against the hardware.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    /// The firmware accepted the command and reported this value back.
    Applied(f64),
    /// No endpoint exists for the operation on this family.
    Unsupported,
    /// Every endpoint was tried and each one failed.
    DeviceError(Attempts),
}

impl CommandOutcome {
    /// Accepted value, if any.
    #[must_use]
    pub fn applied(&self) -> Option<f64> {
        match self {
            Self::Applied(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true for [`CommandOutcome::Unsupported`].
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}

/// A request the caller built incorrectly; nothing was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot encode {operation}: {source}")]
pub struct RequestError {
    /// Operation being encoded.
    pub operation: Operation,
    /// Encoding failure.
    pub source: EncodeError,
}

/// Runs commands over a mailbox using a capability map.
#[derive(Debug)]
pub struct Executor<M, D> {
    mailbox: M,
    delay: D,
    capabilities: CapabilityMap,
    probe_mode: ProbeMode,
}

impl<M: Mailbox, D: Delay> Executor<M, D> {
    /// Executor over `mailbox` using `capabilities`.
    #[must_use]
    pub fn new(mailbox: M, delay: D, capabilities: CapabilityMap) -> Self {
        Self {
            mailbox,
            delay,
            capabilities,
            probe_mode: ProbeMode::default(),
        }
    }

    /// Selects how probes decide support.
    #[must_use]
    pub fn with_probe_mode(mut self, mode: ProbeMode) -> Self {
        self.probe_mode = mode;
        self
    }

    /// Routing table in use.
    #[must_use]
    pub fn capabilities(&self) -> &CapabilityMap {
        &self.capabilities
    }

    /// Probe mode in use.
    #[must_use]
    pub fn probe_mode(&self) -> ProbeMode {
        self.probe_mode
    }

    /// Underlying mailbox.
    pub fn mailbox(&self) -> &M {
        &self.mailbox
    }

    /// Underlying mailbox, mutably.
    pub fn mailbox_mut(&mut self) -> &mut M {
        &mut self.mailbox
    }

    /// Delay source shared with other driver accesses.
    pub fn delay_mut(&mut self) -> &mut D {
        &mut self.delay
    }

    /// Releases the mailbox and delay source.
    pub fn into_parts(self) -> (M, D) {
        (self.mailbox, self.delay)
    }

    /// Applies `value` through a package-scoped `operation`.
    pub fn execute(
        &mut self,
        family: Family,
        operation: Operation,
        value: f64,
    ) -> Result<CommandOutcome, RequestError> {
        self.submit(family, &Request::set(operation, value))
    }

    /// Applies `value` through a core-scoped `operation` on `core`.
    pub fn execute_core(
        &mut self,
        family: Family,
        operation: Operation,
        core: CoreAddress,
        value: f64,
    ) -> Result<CommandOutcome, RequestError> {
        self.submit(family, &Request::set(operation, value).on_core(core))
    }

    /// Runs an operation that takes no value.
    pub fn query(
        &mut self,
        family: Family,
        operation: Operation,
    ) -> Result<CommandOutcome, RequestError> {
        self.submit(family, &Request::query(operation))
    }

    /// Runs `request` for `family`.
    ///
    /// Returns [`CommandOutcome::Unsupported`] without touching the mailbox
    /// when the route is missing or empty.
    pub fn submit(
        &mut self,
        family: Family,
        request: &Request,
    ) -> Result<CommandOutcome, RequestError> {
        let Self {
            mailbox,
            delay,
            capabilities,
            probe_mode,
        } = self;
        let value = match request.argument {
            Argument::Probe => {
                return Ok(handshake(
                    mailbox,
                    delay,
                    *probe_mode,
                    capabilities,
                    family,
                    request.operation,
                ))
            }
            Argument::Value(value) => value,
        };
        let route = capabilities.route(family, request.operation);
        let Some(first) = route.first() else {
            debug!("{} unsupported on {family}", request.operation);
            return Ok(CommandOutcome::Unsupported);
        };
        // Routes share one encoding; see `CapabilityMap::with_route`.
        let encoding = first.encoding;
        let arg = encoding
            .encode(value, request.core.as_ref())
            .map_err(|source| RequestError {
                operation: request.operation,
                source,
            })?;

        let mut failures = Attempts::new();
        for endpoint in route {
            trace!(
                "{} on {family}: {} opcode 0x{:X} arg 0x{arg:08X}",
                request.operation,
                endpoint.channel,
                endpoint.opcode
            );
            let result = mailbox.send(endpoint.opcode, endpoint.channel, arg);
            delay.delay_ms(THROTTLE_MS);
            match result {
                Ok(response) => {
                    let accepted = encoding.decode(response);
                    debug!(
                        "{} on {family} applied via {}: {accepted}",
                        request.operation, endpoint.channel
                    );
                    return Ok(CommandOutcome::Applied(accepted));
                }
                Err(error) => {
                    warn!(
                        "{} on {family}: {} opcode 0x{:X} failed: {error}",
                        request.operation, endpoint.channel, endpoint.opcode
                    );
                    let attempt = Attempt {
                        channel: endpoint.channel,
                        opcode: endpoint.opcode,
                        error,
                    };
                    if failures.push(attempt).is_err() {
                        break;
                    }
                }
            }
        }
        Ok(CommandOutcome::DeviceError(failures))
    }

    /// Checks whether `operation` is reachable on `family` without changing
    /// device state.
    ///
    /// In [`ProbeMode::Handshake`] the outcome carries the test message reply.
    pub fn probe(&mut self, family: Family, operation: Operation) -> CommandOutcome {
        handshake(
            &mut self.mailbox,
            &mut self.delay,
            self.probe_mode,
            &self.capabilities,
            family,
            operation,
        )
    }

    /// Returns true when a probe of `operation` succeeds.
    pub fn is_supported(&mut self, family: Family, operation: Operation) -> bool {
        matches!(self.probe(family, operation), CommandOutcome::Applied(_))
    }
}

fn handshake<M: Mailbox, D: Delay>(
    mailbox: &mut M,
    delay: &mut D,
    mode: ProbeMode,
    capabilities: &CapabilityMap,
    family: Family,
    operation: Operation,
) -> CommandOutcome {
    let route = capabilities.route(family, operation);
    if route.is_empty() {
        debug!("{operation} unsupported on {family}");
        return CommandOutcome::Unsupported;
    }
    if mode == ProbeMode::RouteOnly {
        return CommandOutcome::Applied(0.0);
    }
    let mut failures = Attempts::new();
    for endpoint in route {
        let result = mailbox.send(TEST_MESSAGE, endpoint.channel, 0);
        delay.delay_ms(THROTTLE_MS);
        match result {
            Ok(reply) => return CommandOutcome::Applied(f64::from(reply)),
            Err(error) => {
                debug!("{} did not answer the test message: {error}", endpoint.channel);
                let attempt = Attempt {
                    channel: endpoint.channel,
                    opcode: TEST_MESSAGE,
                    error,
                };
                if failures.push(attempt).is_err() {
                    break;
                }
            }
        }
    }
    CommandOutcome::DeviceError(failures)
}
