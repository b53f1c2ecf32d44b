// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Built-in PM table layouts known to the decoder.
// Author: Lukas Bower

mod zen1;
mod zen2;
mod zen3;

use static_assertions::const_assert;

use crate::schema::{check_all, Schema};

pub use zen1::PM_TABLE_1E0004;
pub use zen2::{PM_TABLE_240803, PM_TABLE_240903, PM_TABLE_370003, PM_TABLE_370005};
pub use zen3::{PM_TABLE_380804, PM_TABLE_380805, PM_TABLE_380904, PM_TABLE_380905, PM_TABLE_400005};

/// Every layout shipped with the crate.
pub const BUILTIN: &[&Schema] = &[
    &PM_TABLE_380804,
    &PM_TABLE_380805,
    &PM_TABLE_380904,
    &PM_TABLE_380905,
    &PM_TABLE_400005,
    &PM_TABLE_240903,
    &PM_TABLE_240803,
    &PM_TABLE_370003,
    &PM_TABLE_370005,
    &PM_TABLE_1E0004,
];

const_assert!(check_all(BUILTIN).is_ok());
