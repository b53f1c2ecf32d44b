// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Populate field slots from a PM table buffer and read them back.
// Author: Lukas Bower

use crate::error::DecodeError;
use crate::field::{ArrayField, Domain, Field, MAX_ARRAY_LEN};
use crate::schema::{Binding, Schema};
use crate::slot::Slot;

/// Per-core slots kept after clamping.
pub const MAX_CORES: usize = 16;
/// Per-cache-domain slots kept after clamping.
pub const MAX_CACHE_DOMAINS: usize = 4;

/// How firmly an alias is backed by hardware evidence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Certainty {
    /// Both names have been observed carrying the same reading.
    Established,
    /// Believed equivalent from reverse engineering; unconfirmed.
    Presumed,
}

/// Two names firmware uses for the same physical quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alias {
    /// Quantity filled in when the layout lacks it.
    pub field: Field,
    /// Quantity whose location is borrowed.
    pub source: Field,
    /// Evidence behind the equivalence.
    pub certainty: Certainty,
}

/// Fixups applied after a layout has populated its own slots.
pub const ALIASES: &[Alias] = &[
    Alias {
        field: Field::PackagePower,
        source: Field::ApmlPower,
        certainty: Certainty::Presumed,
    },
    Alias {
        field: Field::Vdd18Power,
        source: Field::IoVdd18Power,
        certainty: Certainty::Established,
    },
];

/// Field slots of one buffer, resolved against one layout.
///
/// Borrows the buffer; values are read on demand and never copied out at
/// decode time.
#[derive(Clone, Debug)]
pub struct DecodedTable<'buf> {
    schema: &'static Schema,
    buffer: &'buf [u8],
    cores: usize,
    cache_domains: usize,
    scalars: [Slot; Field::COUNT],
    arrays: [[Slot; MAX_ARRAY_LEN]; ArrayField::COUNT],
    aliased: [bool; ALIASES.len()],
}

impl<'buf> DecodedTable<'buf> {
    pub(crate) fn new(schema: &'static Schema, buffer: &'buf [u8]) -> Result<Self, DecodeError> {
        if buffer.len() < schema.min_size {
            return Err(DecodeError::BufferTooSmall {
                needed: schema.min_size,
                got: buffer.len(),
            });
        }

        let mut table = Self {
            schema,
            buffer,
            cores: usize::from(schema.core_capacity).min(MAX_CORES),
            cache_domains: usize::from(schema.cache_capacity).min(MAX_CACHE_DOMAINS),
            scalars: [Slot::Absent; Field::COUNT],
            arrays: [[Slot::Absent; MAX_ARRAY_LEN]; ArrayField::COUNT],
            aliased: [false; ALIASES.len()],
        };
        table.populate();
        table.apply_aliases();
        Ok(table)
    }

    fn populate(&mut self) {
        let len = self.buffer.len();
        let schema = self.schema;
        for binding in schema.bindings {
            match *binding {
                Binding::Scalar { field, offset } => {
                    self.scalars[field.index()] = Slot::for_element(usize::from(offset), len);
                }
                Binding::Array {
                    field,
                    first,
                    start,
                    count,
                    stride,
                } => {
                    let limit = self.limit(field);
                    for step in 0..usize::from(count) {
                        let index = usize::from(first) + step;
                        if index >= limit {
                            break;
                        }
                        let offset = usize::from(start) + step * usize::from(stride);
                        self.arrays[field.index()][index] = Slot::for_element(offset, len);
                    }
                }
            }
        }
    }

    fn apply_aliases(&mut self) {
        for (applied, alias) in self.aliased.iter_mut().zip(ALIASES) {
            let target = self.scalars[alias.field.index()];
            let source = self.scalars[alias.source.index()];
            if !target.is_present() && source.is_present() {
                self.scalars[alias.field.index()] = source;
                *applied = true;
            }
        }
    }

    fn limit(&self, field: ArrayField) -> usize {
        let bound = match field.domain() {
            Domain::Core => self.cores,
            Domain::Cache => self.cache_domains,
            Domain::Table => MAX_ARRAY_LEN,
        };
        bound.min(field.capacity())
    }

    /// Layout the buffer was decoded with.
    #[must_use]
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Version identifier of the layout.
    #[must_use]
    pub fn version(&self) -> u32 {
        self.schema.version
    }

    /// Raw buffer the slots point into.
    #[must_use]
    pub fn buffer(&self) -> &'buf [u8] {
        self.buffer
    }

    /// Per-core slots available after clamping.
    #[must_use]
    pub fn core_count(&self) -> usize {
        self.cores
    }

    /// Cache-domain slots available after clamping.
    #[must_use]
    pub fn cache_domain_count(&self) -> usize {
        self.cache_domains
    }

    /// Slot for a scalar quantity.
    #[must_use]
    pub fn slot(&self, field: Field) -> Slot {
        self.scalars[field.index()]
    }

    /// Slot for one element of an array quantity; absent past the clamp.
    #[must_use]
    pub fn element_slot(&self, field: ArrayField, index: usize) -> Slot {
        if index >= self.limit(field) {
            return Slot::Absent;
        }
        self.arrays[field.index()][index]
    }

    /// Returns true when the layout provides `field`.
    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.slot(field).is_present()
    }

    /// Returns true when the layout provides element `index` of `field`.
    #[must_use]
    pub fn has_element(&self, field: ArrayField, index: usize) -> bool {
        self.element_slot(field, index).is_present()
    }

    /// Reads a scalar quantity, `None` when absent.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<f32> {
        self.slot(field).read(self.buffer)
    }

    /// Reads a scalar quantity, NaN when absent.
    #[must_use]
    pub fn value(&self, field: Field) -> f32 {
        self.get(field).unwrap_or(f32::NAN)
    }

    /// Reads a scalar quantity, zero when absent.
    #[must_use]
    pub fn value_or_zero(&self, field: Field) -> f32 {
        self.get(field).unwrap_or(0.0)
    }

    /// Reads one element of an array quantity, `None` when absent.
    #[must_use]
    pub fn get_element(&self, field: ArrayField, index: usize) -> Option<f32> {
        self.element_slot(field, index).read(self.buffer)
    }

    /// Reads one element of an array quantity, NaN when absent.
    #[must_use]
    pub fn element(&self, field: ArrayField, index: usize) -> f32 {
        self.get_element(field, index).unwrap_or(f32::NAN)
    }

    /// Reads one element of an array quantity, zero when absent.
    #[must_use]
    pub fn element_or_zero(&self, field: ArrayField, index: usize) -> f32 {
        self.get_element(field, index).unwrap_or(0.0)
    }

    /// Elements of `field` up to its clamped length.
    pub fn elements(&self, field: ArrayField) -> impl Iterator<Item = Option<f32>> + 'buf {
        let slots = self.arrays[field.index()];
        let buffer = self.buffer;
        slots
            .into_iter()
            .take(self.limit(field))
            .map(move |slot| slot.read(buffer))
    }

    /// Alias that supplied `field`, if its slot was borrowed from another name.
    #[must_use]
    pub fn alias_for(&self, field: Field) -> Option<&'static Alias> {
        ALIASES
            .iter()
            .zip(self.aliased.iter())
            .find(|(alias, applied)| **applied && alias.field == field)
            .map(|(alias, _)| alias)
    }
}
