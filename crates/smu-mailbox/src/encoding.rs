// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Argument scaling rules and their inverse for mailbox responses.
// Author: Lukas Bower

//! Mailbox arguments are single 32-bit words. Each endpoint carries an
//! [`Encoding`] that turns a caller value into that word and a response word
//! back into the value the firmware accepted.

/// Lowest curve optimizer count accepted by the firmware.
pub const MIN_CORE_OFFSET: f64 = -30.0;
/// Highest curve optimizer count accepted by the firmware.
pub const MAX_CORE_OFFSET: f64 = 30.0;

/// Reasons a value cannot be placed in a mailbox argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// NaN, infinite, negative where unsigned, or too large for the field.
    #[error("value does not fit the argument field")]
    OutOfRange,
    /// The encoding addresses a single core but none was given.
    #[error("core address required")]
    MissingCore,
}

/// How a per-core selector is packed above the 16-bit payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoreLayout {
    /// Die, complex and local core nibbles at bits 28, 24 and 20.
    Complex,
    /// Physical core id at bit 20; queries send the bare id.
    Flat,
}

/// Firmware coordinate of one core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoreAddress {
    /// Physical core id.
    pub physical: u32,
    /// Die (CCD) holding the core.
    pub die: u32,
    /// Complex (CCX) within the die.
    pub complex: u32,
    /// Core within the complex.
    pub local: u32,
}

impl CoreAddress {
    /// Packed die/complex/core selector.
    #[must_use]
    pub const fn mask(&self) -> u32 {
        ((((self.die & 0xF) << 4) | (self.complex & 0xF)) << 4 | (self.local & 0xF)) << 20
    }

    /// Selector for `layout`.
    #[must_use]
    pub const fn selector(&self, layout: CoreLayout) -> u32 {
        match layout {
            CoreLayout::Complex => self.mask(),
            CoreLayout::Flat => (self.physical & 0xFFF) << 20,
        }
    }
}

/// Argument scaling rule of one endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Value times 1000, unsigned.
    Milli,
    /// Value times 100, unsigned.
    Centi,
    /// Unscaled unsigned integer.
    Unit,
    /// Zero argument; the response is returned as is.
    Flag,
    /// Zero argument; the response carries an `f32` bit pattern.
    Float,
    /// Two's complement count in the low 16 bits.
    SignedOffset,
    /// Core selector plus a signed 16-bit count.
    CoreOffset(CoreLayout),
    /// Core selector only; the response is a signed count.
    CoreQuery(CoreLayout),
}

impl Encoding {
    /// Returns true when the argument needs a core address.
    #[must_use]
    pub const fn needs_core(self) -> bool {
        matches!(self, Self::CoreOffset(_) | Self::CoreQuery(_))
    }

    /// Packs `value` into an argument word.
    pub fn encode(self, value: f64, core: Option<&CoreAddress>) -> Result<u32, EncodeError> {
        match self {
            Self::Milli => scale(value, 1000.0),
            Self::Centi => scale(value, 100.0),
            Self::Unit => scale(value, 1.0),
            Self::Flag | Self::Float => Ok(0),
            Self::SignedOffset => offset_bits(value),
            Self::CoreOffset(layout) => {
                let core = core.ok_or(EncodeError::MissingCore)?;
                Ok(core.selector(layout) | offset_bits(value)?)
            }
            Self::CoreQuery(layout) => {
                let core = core.ok_or(EncodeError::MissingCore)?;
                Ok(match layout {
                    CoreLayout::Complex => core.mask(),
                    CoreLayout::Flat => core.physical,
                })
            }
        }
    }

    /// Value the firmware reports back in `response`.
    #[must_use]
    pub fn decode(self, response: u32) -> f64 {
        match self {
            Self::Milli => f64::from(response) / 1000.0,
            Self::Centi => f64::from(response) / 100.0,
            Self::Unit | Self::Flag => f64::from(response),
            Self::Float => f64::from(f32::from_bits(response)),
            Self::SignedOffset | Self::CoreOffset(_) => f64::from(response as u16 as i16),
            Self::CoreQuery(_) => f64::from(response as i32),
        }
    }
}

fn scale(value: f64, factor: f64) -> Result<u32, EncodeError> {
    let scaled = value * factor;
    if !scaled.is_finite() || scaled < 0.0 || scaled > f64::from(u32::MAX) {
        return Err(EncodeError::OutOfRange);
    }
    Ok((scaled + 0.5) as u32)
}

fn offset_bits(value: f64) -> Result<u32, EncodeError> {
    if !(MIN_CORE_OFFSET..=MAX_CORE_OFFSET).contains(&value) {
        return Err(EncodeError::OutOfRange);
    }
    let rounded = (if value < 0.0 { value - 0.5 } else { value + 0.5 }) as i32;
    Ok(rounded as u32 & 0xFFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORE_5: CoreAddress = CoreAddress {
        physical: 5,
        die: 0,
        complex: 0,
        local: 5,
    };

    #[test]
    fn milli_scaling_round_trips_through_the_firmware_word() {
        assert_eq!(Encoding::Milli.encode(75.0, None), Ok(75_000));
        assert_eq!(Encoding::Milli.encode(142.5, None), Ok(142_500));
        assert_eq!(Encoding::Milli.decode(75_000), 75.0);
        assert_eq!(Encoding::Centi.encode(3.0, None), Ok(300));
        assert_eq!(Encoding::Centi.decode(250), 2.5);
    }

    #[test]
    fn unsigned_encodings_reject_unusable_values() {
        assert_eq!(
            Encoding::Milli.encode(-1.0, None),
            Err(EncodeError::OutOfRange)
        );
        assert_eq!(
            Encoding::Unit.encode(f64::NAN, None),
            Err(EncodeError::OutOfRange)
        );
        assert_eq!(
            Encoding::Milli.encode(5_000_000.0, None),
            Err(EncodeError::OutOfRange)
        );
    }

    #[test]
    fn flags_ignore_the_value() {
        assert_eq!(Encoding::Flag.encode(12.0, None), Ok(0));
        assert_eq!(Encoding::Float.encode(12.0, None), Ok(0));
        assert_eq!(Encoding::Float.decode(1.5f32.to_bits()), 1.5);
    }

    #[test]
    fn negative_offsets_use_the_low_sixteen_bits() {
        assert_eq!(Encoding::SignedOffset.encode(-10.0, None), Ok(0xFFF6));
        assert_eq!(Encoding::SignedOffset.decode(0xFFF6), -10.0);
        assert_eq!(
            Encoding::SignedOffset.encode(-31.0, None),
            Err(EncodeError::OutOfRange)
        );
    }

    #[test]
    fn core_offsets_carry_the_selector() {
        let flat = Encoding::CoreOffset(CoreLayout::Flat);
        assert_eq!(flat.encode(-5.0, Some(&CORE_5)), Ok(5 << 20 | 0xFFFB));
        assert_eq!(flat.encode(-5.0, None), Err(EncodeError::MissingCore));

        let query = Encoding::CoreQuery(CoreLayout::Flat);
        assert_eq!(query.encode(0.0, Some(&CORE_5)), Ok(5));
        assert_eq!(query.decode(-12i32 as u32), -12.0);
    }

    #[test]
    fn complex_mask_packs_nibbles() {
        let core = CoreAddress {
            physical: 13,
            die: 1,
            complex: 0,
            local: 5,
        };
        assert_eq!(core.mask(), 0x1050_0000);
        let offset = Encoding::CoreOffset(CoreLayout::Complex);
        assert_eq!(offset.encode(3.0, Some(&core)), Ok(0x1050_0003));
    }
}
