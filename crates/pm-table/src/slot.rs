// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Optional offset references into a raw PM table buffer.
// Author: Lukas Bower

/// Width in bytes of every PM table element.
pub const ELEMENT_WIDTH: usize = 4;

/// Reference to one element of a decoded buffer.
///
/// A present slot always carries a byte offset whose full element lies inside
/// the buffer it was built against. Offset zero is a legitimate location and is
/// not used to signal absence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The quantity does not exist on this hardware revision.
    #[default]
    Absent,
    /// The quantity lives at `offset` bytes from the buffer start.
    Present {
        /// Byte offset of the element.
        offset: u32,
    },
}

impl Slot {
    /// Builds a slot for element `index`, or an absent slot when the element
    /// would not fit inside a buffer of `buffer_len` bytes.
    #[must_use]
    pub const fn for_element(index: usize, buffer_len: usize) -> Self {
        let offset = index * ELEMENT_WIDTH;
        if offset + ELEMENT_WIDTH > buffer_len || offset > u32::MAX as usize {
            return Self::Absent;
        }
        Self::Present {
            offset: offset as u32,
        }
    }

    /// Returns true when the slot references an element.
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present { .. })
    }

    /// Byte offset of the element, if present.
    #[must_use]
    pub const fn offset(self) -> Option<usize> {
        match self {
            Self::Absent => None,
            Self::Present { offset } => Some(offset as usize),
        }
    }

    /// Reads the referenced little-endian `f32` from `buffer`.
    ///
    /// Absence is checked before the buffer is touched.
    #[must_use]
    pub fn read(self, buffer: &[u8]) -> Option<f32> {
        let start = self.offset()?;
        let bytes = buffer.get(start..start + ELEMENT_WIDTH)?;
        let raw: [u8; ELEMENT_WIDTH] = bytes.try_into().ok()?;
        Some(f32::from_le_bytes(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_zero_is_present() {
        let slot = Slot::for_element(0, 4);
        assert_eq!(slot, Slot::Present { offset: 0 });
        assert_eq!(slot.read(&1.5f32.to_le_bytes()), Some(1.5));
    }

    #[test]
    fn element_past_end_is_absent() {
        assert_eq!(Slot::for_element(1, 7), Slot::Absent);
        assert_eq!(Slot::Absent.read(&[0u8; 16]), None);
    }

    #[test]
    fn short_buffer_read_yields_none() {
        let slot = Slot::for_element(2, 12);
        assert_eq!(slot.read(&[0u8; 8]), None);
    }
}
