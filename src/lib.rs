// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! Ryzen SMU telemetry and tuning sessions.
//!
//! [`pm_table`] decodes the versioned telemetry buffer and [`smu_mailbox`]
//! routes tuning commands to the right firmware mailbox. A [`Session`] binds
//! both to one driver: it owns the table buffer, paces driver access, and
//! reports before and after values for each tune.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod session;
pub mod sysfs;
pub mod timings;
pub mod tuning;

pub use pm_table;
pub use smu_mailbox;

pub use config::{load_active, Config, ConfigError};
pub use error::SessionError;
pub use session::{Session, SmuDriver, TABLE_THROTTLE_MS};
pub use sysfs::{SysfsDriver, SysfsError};
pub use timings::{CommandRate, MemoryTimings};
pub use tuning::{Readback, TuneReport};
