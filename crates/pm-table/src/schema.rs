// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Declarative PM table layouts and their consistency checks.
// Author: Lukas Bower

//! A [`Schema`] is pure data: an ordered list of [`Binding`]s plus metadata.
//! Layouts are declared as `const` items and checked at compile time through
//! [`Schema::self_check`].

use bitflags::bitflags;

use crate::field::{ArrayField, Field};
use crate::slot::ELEMENT_WIDTH;

/// CPU microarchitecture generation a layout belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Generation {
    /// Zen and Zen+ parts.
    Zen1,
    /// Zen 2 parts.
    Zen2,
    /// Zen 3 and Zen 3+ parts.
    Zen3,
}

impl Generation {
    /// Numeric generation (1, 2 or 3).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Zen1 => 1,
            Self::Zen2 => 2,
            Self::Zen3 => 3,
        }
    }
}

bitflags! {
    /// Schema-level facts consumers need when interpreting a decoded table.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SchemaFlags: u8 {
        /// The table carries integrated graphics telemetry.
        const HAS_GRAPHICS = 1 << 0;
        /// Summing rail powers does not give a trustworthy package total.
        const POWER_SUM_UNRELIABLE = 1 << 1;
        /// The layout is a guess and values may be misattributed.
        const EXPERIMENTAL = 1 << 2;
    }
}

/// Assignment of a quantity to element offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// A scalar quantity at a single element.
    Scalar {
        /// Bound quantity.
        field: Field,
        /// Element offset.
        offset: u16,
    },
    /// `count` consecutive indices of an array quantity.
    Array {
        /// Bound quantity.
        field: ArrayField,
        /// Array index of the first bound element.
        first: u8,
        /// Element offset of the first bound element.
        start: u16,
        /// Number of bound elements.
        count: u8,
        /// Distance in elements between successive indices.
        stride: u8,
    },
}

impl Binding {
    /// Highest element offset the binding references.
    #[must_use]
    pub const fn last_offset(&self) -> usize {
        match *self {
            Self::Scalar { offset, .. } => offset as usize,
            Self::Array {
                start,
                count,
                stride,
                ..
            } => {
                let steps = if count == 0 { 0 } else { count as usize - 1 };
                start as usize + steps * stride as usize
            }
        }
    }
}

/// Binds a scalar quantity to element `offset`.
#[must_use]
pub const fn at(field: Field, offset: u16) -> Binding {
    Binding::Scalar { field, offset }
}

/// Binds indices `0..count` of `field` to consecutive elements from `start`.
#[must_use]
pub const fn run(field: ArrayField, start: u16, count: u8) -> Binding {
    strided(field, start, count, 1)
}

/// Binds indices `0..count` of `field` to every `stride`-th element from `start`.
#[must_use]
pub const fn strided(field: ArrayField, start: u16, count: u8, stride: u8) -> Binding {
    Binding::Array {
        field,
        first: 0,
        start,
        count,
        stride,
    }
}

/// Binds a single array index to element `offset`.
#[must_use]
pub const fn element(field: ArrayField, index: u8, offset: u16) -> Binding {
    Binding::Array {
        field,
        first: index,
        start: offset,
        count: 1,
        stride: 1,
    }
}

/// Reasons a layout is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The layout binds nothing.
    #[error("schema 0x{version:06X} has no bindings")]
    Empty {
        /// Offending layout.
        version: u32,
    },
    /// The declared minimum size disagrees with the highest bound element.
    #[error("schema 0x{version:06X} declares {declared} bytes but its bindings span {required}")]
    SizeMismatch {
        /// Offending layout.
        version: u32,
        /// Size recorded in the layout.
        declared: usize,
        /// Size implied by the bindings.
        required: usize,
    },
    /// A quantity (or array index) is bound more than once.
    #[error("schema 0x{version:06X} binds {label} more than once")]
    DuplicateBinding {
        /// Offending layout.
        version: u32,
        /// Label of the quantity.
        label: &'static str,
    },
    /// An array binding is empty or runs past the quantity's capacity.
    #[error("schema 0x{version:06X} binds {label} outside 0..{capacity}")]
    IndexOutOfRange {
        /// Offending layout.
        version: u32,
        /// Label of the quantity.
        label: &'static str,
        /// Capacity of the quantity.
        capacity: usize,
    },
    /// Two layouts in one registry share a version identifier.
    #[error("schema 0x{version:06X} is registered more than once")]
    DuplicateVersion {
        /// Repeated version identifier.
        version: u32,
    },
}

/// Field layout of one PM table revision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema {
    /// Version identifier reported by the driver.
    pub version: u32,
    /// Microarchitecture generation.
    pub generation: Generation,
    /// Number of per-core slots the layout carries.
    pub core_capacity: u8,
    /// Number of L3 cache domains the layout carries.
    pub cache_capacity: u8,
    /// Smallest buffer, in bytes, the layout can be decoded from.
    pub min_size: usize,
    /// Interpretation flags.
    pub flags: SchemaFlags,
    /// Ordered quantity assignments.
    pub bindings: &'static [Binding],
}

impl Schema {
    /// Returns true when the table carries integrated graphics telemetry.
    #[must_use]
    pub const fn has_graphics(&self) -> bool {
        self.flags.contains(SchemaFlags::HAS_GRAPHICS)
    }

    /// Returns true when a rail-power sum should not be presented as a total.
    #[must_use]
    pub const fn power_sum_unreliable(&self) -> bool {
        self.flags.contains(SchemaFlags::POWER_SUM_UNRELIABLE)
    }

    /// Returns true when the layout is a guess.
    #[must_use]
    pub const fn is_experimental(&self) -> bool {
        self.flags.contains(SchemaFlags::EXPERIMENTAL)
    }

    /// Buffer size implied by the highest bound element.
    #[must_use]
    pub const fn required_size(&self) -> usize {
        let mut highest = 0;
        let mut i = 0;
        while i < self.bindings.len() {
            let last = self.bindings[i].last_offset();
            if last > highest {
                highest = last;
            }
            i += 1;
        }
        (highest + 1) * ELEMENT_WIDTH
    }

    /// Verifies the layout is internally consistent.
    ///
    /// Usable in const context so registered layouts are checked at build time.
    pub const fn self_check(&self) -> Result<(), SchemaError> {
        let version = self.version;
        if self.bindings.is_empty() {
            return Err(SchemaError::Empty { version });
        }
        let required = self.required_size();
        if required != self.min_size {
            return Err(SchemaError::SizeMismatch {
                version,
                declared: self.min_size,
                required,
            });
        }
        let mut i = 0;
        while i < self.bindings.len() {
            if let Binding::Array {
                field,
                first,
                count,
                ..
            } = self.bindings[i]
            {
                if count == 0 || first as usize + count as usize > field.capacity() {
                    return Err(SchemaError::IndexOutOfRange {
                        version,
                        label: field.label(),
                        capacity: field.capacity(),
                    });
                }
            }
            let mut j = i + 1;
            while j < self.bindings.len() {
                if let Some(label) = overlap(&self.bindings[i], &self.bindings[j]) {
                    return Err(SchemaError::DuplicateBinding { version, label });
                }
                j += 1;
            }
            i += 1;
        }
        Ok(())
    }
}

const fn overlap(a: &Binding, b: &Binding) -> Option<&'static str> {
    match (*a, *b) {
        (Binding::Scalar { field: x, .. }, Binding::Scalar { field: y, .. }) => {
            if x as usize == y as usize {
                Some(x.label())
            } else {
                None
            }
        }
        (
            Binding::Array {
                field: x,
                first: x_first,
                count: x_count,
                ..
            },
            Binding::Array {
                field: y,
                first: y_first,
                count: y_count,
                ..
            },
        ) => {
            let x_end = x_first as usize + x_count as usize;
            let y_end = y_first as usize + y_count as usize;
            if x as usize == y as usize
                && (x_first as usize) < y_end
                && (y_first as usize) < x_end
            {
                Some(x.label())
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Checks every layout and rejects repeated version identifiers.
pub const fn check_all(schemas: &[&Schema]) -> Result<(), SchemaError> {
    let mut i = 0;
    while i < schemas.len() {
        if let Err(err) = schemas[i].self_check() {
            return Err(err);
        }
        let mut j = i + 1;
        while j < schemas.len() {
            if schemas[i].version == schemas[j].version {
                return Err(SchemaError::DuplicateVersion {
                    version: schemas[i].version,
                });
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PPT_ONLY: Schema = Schema {
        version: 0x00AB_0001,
        generation: Generation::Zen2,
        core_capacity: 1,
        cache_capacity: 1,
        min_size: 8,
        flags: SchemaFlags::empty(),
        bindings: &[at(Field::PptLimit, 0), at(Field::PptValue, 1)],
    };

    #[test]
    fn consistent_layout_passes() {
        assert_eq!(PPT_ONLY.self_check(), Ok(()));
    }

    #[test]
    fn size_must_cover_highest_binding() {
        let short = Schema {
            min_size: 4,
            ..PPT_ONLY
        };
        assert_eq!(
            short.self_check(),
            Err(SchemaError::SizeMismatch {
                version: 0x00AB_0001,
                declared: 4,
                required: 8
            })
        );
    }

    #[test]
    fn strided_run_spans_last_element() {
        let binding = strided(ArrayField::LclkBusy, 91, 4, 8);
        assert_eq!(binding.last_offset(), 115);
    }

    #[test]
    fn overlapping_array_indices_are_rejected() {
        let schema = Schema {
            min_size: 20,
            bindings: const {
                &[
                    run(ArrayField::CorePower, 0, 4),
                    element(ArrayField::CorePower, 3, 4),
                ]
            },
            ..PPT_ONLY
        };
        assert!(matches!(
            schema.self_check(),
            Err(SchemaError::DuplicateBinding {
                label: "CORE_POWER",
                ..
            })
        ));
    }

    #[test]
    fn run_past_capacity_is_rejected() {
        let schema = Schema {
            min_size: 36,
            bindings: const { &[run(ArrayField::L3Temp, 0, 9)] },
            ..PPT_ONLY
        };
        assert!(matches!(
            schema.self_check(),
            Err(SchemaError::IndexOutOfRange { capacity: 4, .. })
        ));
    }
}
