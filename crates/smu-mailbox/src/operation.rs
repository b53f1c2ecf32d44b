// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Logical tuning operations independent of opcode numbering.
// Author: Lukas Bower

use core::fmt;
use core::str::FromStr;

/// Operation name that matched no known command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation")]
pub struct UnknownOperation;

/// What an operation addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Applies to the whole package.
    Package,
    /// Applies to a single core and needs a core address.
    Core,
}

macro_rules! operations {
    ($($variant:ident => $label:literal, $scope:ident, $doc:literal;)+) => {
        /// Logical tuning operation.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Operation {
            $(
                #[doc = $doc]
                $variant,
            )+
        }

        impl Operation {
            /// Every operation in declaration order.
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)+];

            /// Command name, e.g. `set-ppt`.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Whether the operation targets the package or one core.
            #[must_use]
            pub const fn scope(self) -> Scope {
                match self {
                    $(Self::$variant => Scope::$scope,)+
                }
            }
        }
    };
}

operations! {
    SetPpt => "set-ppt", Package, "Sustained package power limit in watts.";
    SetPptFast => "set-pptfast", Package, "Fast package power limit in watts.";
    SetPptApu => "set-pptapu", Package, "APU power limit in watts.";
    SetTdc => "set-tdc", Package, "Core rail thermal design current in amps.";
    SetTdcSoc => "set-tdcsoc", Package, "SoC rail thermal design current in amps.";
    SetEdc => "set-edc", Package, "Core rail electrical design current in amps.";
    SetEdcSoc => "set-edcsoc", Package, "SoC rail electrical design current in amps.";
    SetStapm => "set-stapm", Package, "Skin temperature aware power limit in watts.";
    SetPptTime => "set-ppt-time", Package, "Slow PPT time constant in seconds.";
    SetStapmTime => "set-stapm-time", Package, "STAPM time constant in seconds.";
    SetThm => "set-thm", Package, "Thermal limit in degrees Celsius.";
    GetScalar => "get-scalar", Package, "Reads the precision boost overdrive scalar.";
    SetScalar => "set-scalar", Package, "Precision boost overdrive scalar.";
    EnableOc => "set-enable-oc", Package, "Switches the part into manual overclocking mode.";
    DisableOc => "set-disable-oc", Package, "Leaves manual overclocking mode.";
    GetCoreOffset => "get-cocount", Core, "Reads one core's curve optimizer count.";
    SetCoreOffset => "set-cocount", Core, "Curve optimizer count for one core.";
    SetAllCoreOffset => "set-cocountall", Package, "Curve optimizer count for every core.";
    EnableEco => "set-enable-eco", Package, "Selects the power saving profile.";
    EnableMaxPerf => "set-enable-maxperf", Package, "Selects the maximum performance profile.";
}

impl Operation {
    /// Returns true when the operation only reads state.
    #[must_use]
    pub const fn is_query(self) -> bool {
        matches!(self, Self::GetScalar | Self::GetCoreOffset)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|operation| operation.label().eq_ignore_ascii_case(wanted))
            .ok_or(UnknownOperation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_single_core_operations_need_an_address() {
        let core: heapless::Vec<Operation, 4> = Operation::ALL
            .iter()
            .copied()
            .filter(|op| op.scope() == Scope::Core)
            .collect();
        assert_eq!(
            core.as_slice(),
            &[Operation::GetCoreOffset, Operation::SetCoreOffset]
        );
    }

    #[test]
    fn labels_parse_back() {
        for op in Operation::ALL {
            assert_eq!(op.label().parse::<Operation>(), Ok(*op));
        }
        assert_eq!("SET-PPT".parse::<Operation>(), Ok(Operation::SetPpt));
        assert_eq!("set-fan".parse::<Operation>(), Err(UnknownOperation));
    }
}
