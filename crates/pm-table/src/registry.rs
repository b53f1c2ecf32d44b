// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Version lookup over a set of checked PM table layouts.
// Author: Lukas Bower

use crate::decode::DecodedTable;
use crate::error::DecodeError;
use crate::schema::{check_all, Schema, SchemaError};
use crate::schemas::BUILTIN;

/// Set of layouts addressable by version identifier.
#[derive(Clone, Copy, Debug)]
pub struct Registry {
    schemas: &'static [&'static Schema],
}

impl Registry {
    /// Registry holding the layouts shipped with the crate.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { schemas: BUILTIN }
    }

    /// Builds a registry from caller-supplied layouts after checking each one.
    pub fn new(schemas: &'static [&'static Schema]) -> Result<Self, SchemaError> {
        check_all(schemas)?;
        Ok(Self { schemas })
    }

    /// Resolves a version identifier to its layout.
    #[must_use]
    pub fn lookup(&self, version: u32) -> Option<&'static Schema> {
        self.schemas
            .iter()
            .copied()
            .find(|schema| schema.version == version)
    }

    /// Returns true when a layout is registered for `version`.
    #[must_use]
    pub fn supports(&self, version: u32) -> bool {
        self.lookup(version).is_some()
    }

    /// Registered version identifiers in registration order.
    pub fn versions(&self) -> impl Iterator<Item = u32> + '_ {
        self.schemas.iter().map(|schema| schema.version)
    }

    /// Decodes `buffer` with the layout registered for `version`.
    pub fn decode<'buf>(
        &self,
        version: u32,
        buffer: &'buf [u8],
    ) -> Result<DecodedTable<'buf>, DecodeError> {
        let schema = self
            .lookup(version)
            .ok_or(DecodeError::UnknownVersion(version))?;
        DecodedTable::new(schema, buffer)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Decodes `buffer` against the built-in layouts.
pub fn decode(version: u32, buffer: &[u8]) -> Result<DecodedTable<'_>, DecodeError> {
    Registry::builtin().decode(version, buffer)
}
