// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Decode versioned Ryzen SMU PM table telemetry into optional field slots.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![no_std]

//! Versioned PM table decoding.
//!
//! The power-management firmware exposes a flat array of `f32` telemetry whose
//! layout changes with every firmware revision. Each known revision is a
//! declarative [`Schema`]; [`decode`] pairs a driver buffer with the schema for
//! its version identifier and hands back a [`DecodedTable`] whose fields are
//! either present at a byte offset or explicitly absent.
//!
//! ```
//! use pm_table::{decode, Field};
//!
//! let buffer = vec![0u8; 2212];
//! let table = decode(0x0038_0804, &buffer).expect("registered layout");
//! assert_eq!(table.value(Field::PptLimit), 0.0);
//! assert!(table.value(Field::GfxTemp).is_nan());
//! ```

#[cfg(test)]
extern crate std;

pub mod analysis;
mod decode;
mod error;
mod field;
mod registry;
mod schema;
mod schemas;
mod slot;

pub use decode::{Alias, Certainty, DecodedTable, ALIASES, MAX_CACHE_DOMAINS, MAX_CORES};
pub use error::DecodeError;
pub use field::{ArrayField, Domain, Field, UnknownField, MAX_ARRAY_LEN};
pub use registry::{decode, Registry};
pub use schema::{
    at, check_all, element, run, strided, Binding, Generation, Schema, SchemaError, SchemaFlags,
};
pub use schemas::{
    BUILTIN, PM_TABLE_1E0004, PM_TABLE_240803, PM_TABLE_240903, PM_TABLE_370003, PM_TABLE_370005,
    PM_TABLE_380804, PM_TABLE_380805, PM_TABLE_380904, PM_TABLE_380905, PM_TABLE_400005,
};
pub use slot::{Slot, ELEMENT_WIDTH};
