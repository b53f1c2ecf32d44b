// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Silicon family codenames reported by the SMU driver.
// Author: Lukas Bower

use core::fmt;
use core::str::FromStr;

/// Family name that matched no known codename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown silicon family")]
pub struct UnknownFamily;

macro_rules! families {
    ($($variant:ident = $code:literal => $name:literal,)+) => {
        /// Silicon family codename.
        ///
        /// Discriminants are the codes the driver reports.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u32)]
        pub enum Family {
            $(
                #[doc = $name]
                $variant = $code,
            )+
        }

        impl Family {
            /// Every family in code order.
            pub const ALL: &'static [Family] = &[$(Family::$variant,)+];

            /// Family for a driver-reported code; unrecognised codes map to
            /// [`Family::Undefined`].
            #[must_use]
            pub const fn from_code(code: u32) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    _ => Self::Undefined,
                }
            }

            /// Human-readable codename.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

families! {
    Undefined = 0 => "Undefined",
    Colfax = 1 => "Colfax",
    Renoir = 2 => "Renoir",
    Picasso = 3 => "Picasso",
    Matisse = 4 => "Matisse",
    Threadripper = 5 => "Threadripper",
    CastlePeak = 6 => "CastlePeak",
    RavenRidge = 7 => "RavenRidge",
    RavenRidge2 = 8 => "RavenRidge2",
    SummitRidge = 9 => "SummitRidge",
    PinnacleRidge = 10 => "PinnacleRidge",
    Rembrandt = 11 => "Rembrandt",
    Vermeer = 12 => "Vermeer",
    VanGogh = 13 => "VanGogh",
    Cezanne = 14 => "Cezanne",
    Milan = 15 => "Milan",
    Dali = 16 => "Dali",
    Lucienne = 17 => "Lucienne",
}

impl Family {
    /// Code the driver reports for this family.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Returns true for parts with integrated graphics.
    #[must_use]
    pub const fn is_apu(self) -> bool {
        matches!(
            self,
            Self::Renoir
                | Self::Picasso
                | Self::RavenRidge
                | Self::RavenRidge2
                | Self::Rembrandt
                | Self::VanGogh
                | Self::Cezanne
                | Self::Dali
                | Self::Lucienne
        )
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|family| family.name().eq_ignore_ascii_case(wanted))
            .ok_or(UnknownFamily)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for family in Family::ALL {
            assert_eq!(Family::from_code(family.code()), *family);
        }
        assert_eq!(Family::from_code(99), Family::Undefined);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("vermeer".parse::<Family>(), Ok(Family::Vermeer));
        assert_eq!(" RavenRidge2 ".parse::<Family>(), Ok(Family::RavenRidge2));
        assert_eq!("zen9".parse::<Family>(), Err(UnknownFamily));
    }
}
