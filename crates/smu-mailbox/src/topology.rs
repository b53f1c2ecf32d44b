// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Translate logical core indices into firmware core coordinates.
// Author: Lukas Bower

use alloc::vec::Vec;

use crate::encoding::CoreAddress;

/// Physical core slots per die.
pub const CORES_PER_DIE: u32 = 8;

/// Errors raised while addressing a core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// The logical index is not in the core map.
    #[error("core {index} is outside the {count} enabled cores")]
    IndexOutOfRange {
        /// Requested logical index.
        index: usize,
        /// Enabled cores in the map.
        count: usize,
    },
}

/// Enabled-core layout reported by the platform.
///
/// Addresses are derived on every call so a replaced topology never leaves a
/// stale coordinate behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Topology {
    core_map: Vec<u32>,
    complexes: u32,
    dies: u32,
}

impl Topology {
    /// Topology from an explicit logical-to-physical core map.
    #[must_use]
    pub fn new(core_map: Vec<u32>, complexes: u32, dies: u32) -> Self {
        Self {
            core_map,
            complexes,
            dies,
        }
    }

    /// Topology from per-die fuse data.
    ///
    /// Walks physical slots in order, skips those set in `disabled`, and stops
    /// once `cores` logical cores are mapped.
    #[must_use]
    pub fn from_disabled_mask(
        disabled: u32,
        dies: u32,
        complexes_per_die: u32,
        cores: usize,
    ) -> Self {
        let slots = (CORES_PER_DIE * dies.max(1)).min(u32::BITS);
        let core_map = (0..slots)
            .filter(|slot| (disabled >> slot) & 1 == 0)
            .take(cores)
            .collect();
        Self::new(core_map, dies * complexes_per_die, dies)
    }

    /// Logical-to-physical core map.
    #[must_use]
    pub fn core_map(&self) -> &[u32] {
        &self.core_map
    }

    /// Enabled cores.
    #[must_use]
    pub fn core_count(&self) -> usize {
        self.core_map.len()
    }

    /// Core complexes across all dies.
    #[must_use]
    pub fn complexes(&self) -> u32 {
        self.complexes
    }

    /// Dies in the package.
    #[must_use]
    pub fn dies(&self) -> u32 {
        self.dies
    }

    /// Firmware coordinate of logical core `index`.
    pub fn address(&self, index: usize) -> Result<CoreAddress, TopologyError> {
        let physical = *self
            .core_map
            .get(index)
            .ok_or(TopologyError::IndexOutOfRange {
                index,
                count: self.core_map.len(),
            })?;
        Ok(locate(physical, self.complexes, self.dies))
    }

    /// Coordinates of every enabled core in logical order.
    pub fn addresses(&self) -> impl Iterator<Item = CoreAddress> + '_ {
        self.core_map
            .iter()
            .map(move |&physical| locate(physical, self.complexes, self.dies))
    }
}

/// Coordinate of `physical` in a package with `complexes` complexes spread
/// over `dies` dies.
#[must_use]
pub const fn locate(physical: u32, complexes: u32, dies: u32) -> CoreAddress {
    let dies = if dies == 0 { 1 } else { dies };
    let per_die = if complexes / dies == 0 { 1 } else { complexes / dies };
    let per_complex = if CORES_PER_DIE / per_die == 0 {
        1
    } else {
        CORES_PER_DIE / per_die
    };
    let slot = physical % CORES_PER_DIE;
    CoreAddress {
        physical,
        die: physical / CORES_PER_DIE,
        complex: slot / per_complex,
        local: slot % per_complex,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn zen3_dies_hold_one_complex() {
        let address = locate(13, 2, 2);
        assert_eq!(
            address,
            CoreAddress {
                physical: 13,
                die: 1,
                complex: 0,
                local: 5
            }
        );
    }

    #[test]
    fn zen2_dies_hold_two_complexes() {
        let address = locate(6, 2, 1);
        assert_eq!((address.die, address.complex, address.local), (0, 1, 2));
    }

    #[test]
    fn disabled_slots_are_skipped() {
        let topology = Topology::from_disabled_mask(0b0000_0110, 1, 1, 6);
        assert_eq!(topology.core_map(), &[0, 3, 4, 5, 6, 7]);
        assert_eq!(topology.address(1).map(|a| a.physical), Ok(3));
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let topology = Topology::new(vec![0, 1], 1, 1);
        assert_eq!(
            topology.address(2),
            Err(TopologyError::IndexOutOfRange { index: 2, count: 2 })
        );
    }
}
