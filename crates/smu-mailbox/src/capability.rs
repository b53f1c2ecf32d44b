// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Per-family routing of logical operations to mailbox endpoints.
// Author: Lukas Bower

//! The capability map answers "which channels and opcodes implement this
//! operation on this family". Built-in routes are declared once as data in
//! [`BUILTIN_ROUTES`]; each declaration covers a group of families that share
//! opcode numbering.

use alloc::collections::BTreeMap;

use heapless::Vec;

use crate::channel::Channel;
use crate::encoding::{CoreLayout, Encoding};
use crate::family::Family;
use crate::operation::Operation;

use Family::*;
use Operation::*;

/// Most endpoints a single route may list, one per channel.
pub const MAX_ENDPOINTS: usize = 3;

/// One physical way of issuing an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Mailbox channel.
    pub channel: Channel,
    /// Opcode in the channel's numbering.
    pub opcode: u32,
    /// Argument scaling rule.
    pub encoding: Encoding,
}

impl Endpoint {
    /// Builds an endpoint.
    #[must_use]
    pub const fn new(channel: Channel, opcode: u32, encoding: Encoding) -> Self {
        Self {
            channel,
            opcode,
            encoding,
        }
    }
}

/// Errors raised while editing a capability map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    /// More endpoints than channels were supplied for one route.
    #[error("{operation} on {family} lists more than one endpoint per channel")]
    TooManyEndpoints {
        /// Family of the route.
        family: Family,
        /// Operation of the route.
        operation: Operation,
    },
    /// Endpoints of one route disagree on the argument encoding.
    #[error("{operation} on {family} mixes argument encodings across endpoints")]
    MixedEncodings {
        /// Family of the route.
        family: Family,
        /// Operation of the route.
        operation: Operation,
    },
}

/// Declaration of one operation for a group of families.
///
/// A zero opcode leaves the channel out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    /// Families sharing the opcodes.
    pub families: &'static [Family],
    /// Operation being routed.
    pub operation: Operation,
    /// Argument scaling rule shared by every channel.
    pub encoding: Encoding,
    /// Opcode per channel, indexed by [`Channel::rank`].
    pub opcodes: [u32; MAX_ENDPOINTS],
}

impl RouteSpec {
    /// Starts a declaration with no channels.
    #[must_use]
    pub const fn new(families: &'static [Family], operation: Operation, encoding: Encoding) -> Self {
        Self {
            families,
            operation,
            encoding,
            opcodes: [0; MAX_ENDPOINTS],
        }
    }

    /// Adds the RSMU opcode.
    #[must_use]
    pub const fn rsmu(self, opcode: u32) -> Self {
        self.on(Channel::Rsmu, opcode)
    }

    /// Adds the MP1 opcode.
    #[must_use]
    pub const fn mp1(self, opcode: u32) -> Self {
        self.on(Channel::Mp1, opcode)
    }

    /// Adds the HSMP opcode.
    #[must_use]
    pub const fn hsmp(self, opcode: u32) -> Self {
        self.on(Channel::Hsmp, opcode)
    }

    const fn on(mut self, channel: Channel, opcode: u32) -> Self {
        self.opcodes[channel.rank()] = opcode;
        self
    }

    /// Endpoints in channel priority order.
    #[must_use]
    pub fn endpoints(&self) -> Vec<Endpoint, MAX_ENDPOINTS> {
        Channel::PRIORITY
            .iter()
            .zip(self.opcodes)
            .filter(|(_, opcode)| *opcode != 0)
            .map(|(&channel, opcode)| Endpoint::new(channel, opcode, self.encoding))
            .collect()
    }
}

const ZEN2_DESKTOP: &[Family] = &[Matisse, CastlePeak, Vermeer, Milan];
const ZEN3_DESKTOP: &[Family] = &[Vermeer, Milan];
const RAVEN: &[Family] = &[Picasso, Dali, RavenRidge, RavenRidge2];
const RAVEN_NO_PICASSO: &[Family] = &[Dali, RavenRidge, RavenRidge2];
const RENOIR_LINE: &[Family] = &[Rembrandt, VanGogh, Renoir, Lucienne, Cezanne];
const RENOIR_LINE_NO_VANGOGH: &[Family] = &[Rembrandt, Renoir, Lucienne, Cezanne];
const RENOIR_LINE_NO_CEZANNE: &[Family] = &[Rembrandt, VanGogh, Renoir, Lucienne];
const APU_LIMIT_23: &[Family] = &[Rembrandt, VanGogh];
const APU_LIMIT_21: &[Family] = &[Renoir, Lucienne, Cezanne];
const ZEN_PLUS: &[Family] = &[PinnacleRidge];
const ZEN: &[Family] = &[SummitRidge];
const SERVER_COLFAX: &[Family] = &[Colfax];
const TDC_6B: &[Family] = &[PinnacleRidge, SummitRidge, Colfax];

const fn route(families: &'static [Family], operation: Operation, encoding: Encoding) -> RouteSpec {
    RouteSpec::new(families, operation, encoding)
}

const COMPLEX_OFFSET: Encoding = Encoding::CoreOffset(CoreLayout::Complex);
const COMPLEX_QUERY: Encoding = Encoding::CoreQuery(CoreLayout::Complex);
const FLAT_OFFSET: Encoding = Encoding::CoreOffset(CoreLayout::Flat);
const FLAT_QUERY: Encoding = Encoding::CoreQuery(CoreLayout::Flat);

/// Routes shipped with the crate.
///
/// Families or operations that appear nowhere here are unsupported.
pub const BUILTIN_ROUTES: &[RouteSpec] = &[
    // Matisse, Castle Peak, Vermeer, Milan.
    route(ZEN2_DESKTOP, SetPpt, Encoding::Milli).rsmu(0x53).mp1(0x3D),
    route(ZEN2_DESKTOP, SetTdc, Encoding::Milli).rsmu(0x54).mp1(0x3B),
    route(ZEN2_DESKTOP, SetEdc, Encoding::Milli).rsmu(0x55).mp1(0x3C),
    route(ZEN2_DESKTOP, SetThm, Encoding::Unit).rsmu(0x56).mp1(0x3E),
    route(ZEN2_DESKTOP, GetScalar, Encoding::Float).rsmu(0x6C),
    route(ZEN2_DESKTOP, SetScalar, Encoding::Centi).rsmu(0x58).mp1(0x2F),
    route(ZEN2_DESKTOP, EnableOc, Encoding::Flag).rsmu(0x5A).mp1(0x24),
    route(ZEN2_DESKTOP, DisableOc, Encoding::Flag).rsmu(0x5B).mp1(0x25),
    route(ZEN3_DESKTOP, GetCoreOffset, COMPLEX_QUERY).mp1(0x48),
    route(ZEN3_DESKTOP, SetCoreOffset, COMPLEX_OFFSET).rsmu(0x0A).mp1(0x35),
    route(ZEN3_DESKTOP, SetAllCoreOffset, Encoding::SignedOffset).rsmu(0x0B).mp1(0x36),
    // Raven Ridge, Picasso, Dali.
    route(RAVEN, SetPpt, Encoding::Milli).mp1(0x1C),
    route(RAVEN, SetPptFast, Encoding::Milli).mp1(0x1B),
    route(RAVEN, SetTdc, Encoding::Milli).mp1(0x20),
    route(RAVEN, SetTdcSoc, Encoding::Milli).mp1(0x21),
    route(RAVEN, SetEdc, Encoding::Milli).mp1(0x20),
    route(RAVEN, SetEdcSoc, Encoding::Milli).mp1(0x23),
    route(RAVEN, SetStapm, Encoding::Milli).mp1(0x1A),
    route(RAVEN, SetPptTime, Encoding::Unit).mp1(0x1D),
    route(RAVEN, SetStapmTime, Encoding::Unit).mp1(0x1E),
    route(RAVEN, SetThm, Encoding::Unit).mp1(0x1A),
    route(RAVEN_NO_PICASSO, GetScalar, Encoding::Float).rsmu(0x68),
    route(&[Picasso], GetScalar, Encoding::Float).rsmu(0x62),
    route(RAVEN, EnableOc, Encoding::Flag).rsmu(0x69),
    route(RAVEN, DisableOc, Encoding::Flag).rsmu(0x6A),
    route(RAVEN, EnableEco, Encoding::Flag).mp1(0x19),
    route(RAVEN, EnableMaxPerf, Encoding::Flag).mp1(0x18),
    // Renoir, Lucienne, Cezanne, Rembrandt, Van Gogh.
    route(RENOIR_LINE, SetPpt, Encoding::Milli).rsmu(0x33).mp1(0x16),
    route(RENOIR_LINE, SetPptFast, Encoding::Milli).mp1(0x15),
    route(APU_LIMIT_23, SetPptApu, Encoding::Milli).mp1(0x23),
    route(APU_LIMIT_21, SetPptApu, Encoding::Milli).mp1(0x21),
    route(RENOIR_LINE, SetTdc, Encoding::Milli).mp1(0x1A),
    route(RENOIR_LINE, SetTdcSoc, Encoding::Milli).rsmu(0x39).mp1(0x1B),
    route(RENOIR_LINE_NO_VANGOGH, SetEdc, Encoding::Milli).rsmu(0x3A).mp1(0x1C),
    route(&[VanGogh], SetEdc, Encoding::Milli).mp1(0x1E),
    route(RENOIR_LINE, SetEdcSoc, Encoding::Milli).rsmu(0x3B).mp1(0x1D),
    route(RENOIR_LINE, SetStapm, Encoding::Milli).rsmu(0x31).mp1(0x14),
    route(RENOIR_LINE, SetPptTime, Encoding::Unit).mp1(0x17),
    route(RENOIR_LINE, SetStapmTime, Encoding::Unit).mp1(0x18),
    route(RENOIR_LINE, SetThm, Encoding::Unit).rsmu(0x37).mp1(0x3E),
    route(RENOIR_LINE, GetScalar, Encoding::Float).rsmu(0x0F),
    route(RENOIR_LINE, SetScalar, Encoding::Centi).rsmu(0x3F).mp1(0x49),
    route(RENOIR_LINE, EnableOc, Encoding::Flag).rsmu(0x17).mp1(0x2F),
    route(RENOIR_LINE_NO_CEZANNE, DisableOc, Encoding::Flag).rsmu(0x1D).mp1(0x30),
    route(&[Cezanne], DisableOc, Encoding::Flag).mp1(0x30),
    route(RENOIR_LINE_NO_CEZANNE, EnableEco, Encoding::Flag).mp1(0x12),
    route(RENOIR_LINE_NO_CEZANNE, EnableMaxPerf, Encoding::Flag).mp1(0x11),
    route(RENOIR_LINE, GetCoreOffset, FLAT_QUERY).rsmu(0xC3),
    route(RENOIR_LINE_NO_CEZANNE, SetCoreOffset, FLAT_OFFSET).rsmu(0x52).mp1(0x53),
    route(&[Cezanne], SetCoreOffset, FLAT_OFFSET).rsmu(0x52),
    route(&[Rembrandt], SetAllCoreOffset, Encoding::SignedOffset).mp1(0x4C),
    route(&[Renoir, Lucienne, VanGogh], SetAllCoreOffset, Encoding::SignedOffset).mp1(0x5D),
    route(&[Cezanne], SetAllCoreOffset, Encoding::SignedOffset).rsmu(0xB1).mp1(0x55),
    // Summit Ridge, Pinnacle Ridge, Colfax.
    route(TDC_6B, SetTdc, Encoding::Milli).rsmu(0x6B),
    route(ZEN_PLUS, SetEdc, Encoding::Milli).rsmu(0x66),
    route(ZEN_PLUS, GetScalar, Encoding::Float).rsmu(0x6A),
    route(ZEN_PLUS, SetScalar, Encoding::Centi).rsmu(0x6A),
    route(ZEN_PLUS, EnableOc, Encoding::Flag).rsmu(0x6A),
    route(ZEN_PLUS, DisableOc, Encoding::Flag).rsmu(0x6A),
    route(ZEN, EnableOc, Encoding::Flag).mp1(0x23),
    route(ZEN, DisableOc, Encoding::Flag).mp1(0x24),
    route(SERVER_COLFAX, SetEdc, Encoding::Milli).rsmu(0x6C),
    route(SERVER_COLFAX, SetThm, Encoding::Unit).rsmu(0x6E),
    route(SERVER_COLFAX, GetScalar, Encoding::Float).rsmu(0x70),
    route(SERVER_COLFAX, SetScalar, Encoding::Centi).rsmu(0x6F),
    route(SERVER_COLFAX, EnableOc, Encoding::Flag).rsmu(0x63),
    route(SERVER_COLFAX, DisableOc, Encoding::Flag).rsmu(0x64),
];

type Route = Vec<Endpoint, MAX_ENDPOINTS>;

/// Lookup table from (family, operation) to ordered endpoints.
///
/// A missing key and a key with no endpoints both mean "unsupported".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapabilityMap {
    routes: BTreeMap<(Family, Operation), Route>,
}

impl CapabilityMap {
    /// Map with no routes at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Map built from [`BUILTIN_ROUTES`].
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_specs(BUILTIN_ROUTES)
    }

    /// Map built from declarations; a later declaration for the same
    /// family and operation replaces an earlier one.
    #[must_use]
    pub fn from_specs(specs: &[RouteSpec]) -> Self {
        let mut map = Self::empty();
        for spec in specs {
            let endpoints = spec.endpoints();
            for &family in spec.families {
                map.routes
                    .insert((family, spec.operation), endpoints.clone());
            }
        }
        map
    }

    /// Replaces the route for `family` and `operation` with `endpoints`, in
    /// the order given.
    ///
    /// An empty slice records the operation as explicitly unsupported. All
    /// endpoints must share one encoding, since the argument is encoded once
    /// and every response is decoded with it.
    pub fn with_route(
        mut self,
        family: Family,
        operation: Operation,
        endpoints: &[Endpoint],
    ) -> Result<Self, CapabilityError> {
        let route = Route::from_slice(endpoints)
            .map_err(|_| CapabilityError::TooManyEndpoints { family, operation })?;
        if let Some(first) = endpoints.first() {
            if endpoints.iter().any(|endpoint| endpoint.encoding != first.encoding) {
                return Err(CapabilityError::MixedEncodings { family, operation });
            }
        }
        self.routes.insert((family, operation), route);
        Ok(self)
    }

    /// Endpoints for `family` and `operation` in attempt order; empty when
    /// unsupported.
    #[must_use]
    pub fn route(&self, family: Family, operation: Operation) -> &[Endpoint] {
        self.routes
            .get(&(family, operation))
            .map(|route| route.as_slice())
            .unwrap_or(&[])
    }

    /// Returns true when at least one endpoint is mapped.
    #[must_use]
    pub fn supports(&self, family: Family, operation: Operation) -> bool {
        !self.route(family, operation).is_empty()
    }

    /// Operations with at least one endpoint on `family`.
    pub fn operations(&self, family: Family) -> impl Iterator<Item = Operation> + '_ {
        self.routes
            .iter()
            .filter(move |((owner, _), route)| *owner == family && !route.is_empty())
            .map(|((_, operation), _)| *operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_declarations_do_not_overlap() {
        let mut seen = alloc::collections::BTreeSet::new();
        for spec in BUILTIN_ROUTES {
            assert!(!spec.endpoints().is_empty(), "{} has no channel", spec.operation);
            for &family in spec.families {
                assert!(
                    seen.insert((family, spec.operation)),
                    "{} declared twice for {}",
                    spec.operation,
                    family
                );
            }
        }
    }

    #[test]
    fn declaration_orders_channels_by_priority() {
        let spec = route(&[Matisse], SetPpt, Encoding::Milli)
            .mp1(0x3D)
            .rsmu(0x53);
        let endpoints = spec.endpoints();
        assert_eq!(
            endpoints.as_slice(),
            &[
                Endpoint::new(Channel::Rsmu, 0x53, Encoding::Milli),
                Endpoint::new(Channel::Mp1, 0x3D, Encoding::Milli),
            ]
        );
    }

    #[test]
    fn core_offset_routes_only_exist_on_zen3_and_renoir_line() {
        let map = CapabilityMap::builtin();
        for family in Family::ALL {
            let expected = ZEN3_DESKTOP.contains(family) || RENOIR_LINE.contains(family);
            assert_eq!(map.supports(*family, SetCoreOffset), expected, "{family}");
        }
    }

    #[test]
    fn undefined_and_threadripper_have_no_routes() {
        let map = CapabilityMap::builtin();
        assert_eq!(map.operations(Undefined).count(), 0);
        assert_eq!(map.operations(Threadripper).count(), 0);
    }

    #[test]
    fn oversized_route_is_rejected() {
        let endpoint = Endpoint::new(Channel::Rsmu, 1, Encoding::Flag);
        let err = CapabilityMap::empty()
            .with_route(Matisse, EnableOc, &[endpoint; 4])
            .unwrap_err();
        assert_eq!(
            err,
            CapabilityError::TooManyEndpoints {
                family: Matisse,
                operation: EnableOc
            }
        );
    }

    #[test]
    fn route_with_mixed_encodings_is_rejected() {
        let endpoints = [
            Endpoint::new(Channel::Rsmu, 0x53, Encoding::Milli),
            Endpoint::new(Channel::Mp1, 0x3D, Encoding::Unit),
        ];
        let err = CapabilityMap::builtin()
            .with_route(Vermeer, SetPpt, &endpoints)
            .unwrap_err();
        assert_eq!(
            err,
            CapabilityError::MixedEncodings {
                family: Vermeer,
                operation: SetPpt
            }
        );
    }

    #[test]
    fn route_with_one_encoding_replaces_the_builtin() {
        let endpoints = [
            Endpoint::new(Channel::Mp1, 0x3D, Encoding::Milli),
            Endpoint::new(Channel::Rsmu, 0x53, Encoding::Milli),
        ];
        let map = CapabilityMap::builtin()
            .with_route(Vermeer, SetPpt, &endpoints)
            .expect("uniform encoding");
        assert_eq!(map.route(Vermeer, SetPpt), &endpoints);
    }
}
