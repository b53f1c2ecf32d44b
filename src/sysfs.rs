// CLASSIFICATION: COMMUNITY
// Filename: sysfs.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Driver backed by the `ryzen_smu` kernel module's sysfs interface.
//!
//! Every mailbox transaction goes through shared files: the argument block is
//! written to `smu_args`, the opcode to the channel's command file, and the
//! status is read back from that same file before the response is collected
//! from `smu_args`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use smu_mailbox::{Channel, Family, Mailbox, RegisterRead, TransportError};
use thiserror::Error;

use crate::session::SmuDriver;

/// Default mount point of the driver attributes.
pub const DRIVER_ROOT: &str = "/sys/kernel/ryzen_smu_drv";

/// Number of 32-bit words in the argument block.
const ARG_WORDS: usize = 6;

/// Failures while attaching to the driver.
#[derive(Debug, Error)]
pub enum SysfsError {
    /// A driver attribute could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Attribute path.
        path: PathBuf,
        /// Underlying failure.
        source: io::Error,
    },
    /// The driver reported a codename this crate does not recognise.
    #[error("unrecognised codename {0:?}")]
    Codename(String),
}

/// Handle on a loaded `ryzen_smu` driver.
#[derive(Debug, Clone)]
pub struct SysfsDriver {
    root: PathBuf,
    family: Family,
}

impl SysfsDriver {
    /// Attaches to the driver at [`DRIVER_ROOT`].
    pub fn open() -> Result<Self, SysfsError> {
        Self::open_at(DRIVER_ROOT)
    }

    /// Attaches to a driver whose attributes live under `root`.
    pub fn open_at(root: impl Into<PathBuf>) -> Result<Self, SysfsError> {
        let root = root.into();
        let path = root.join("codename");
        let text = fs::read_to_string(&path).map_err(|source| SysfsError::Io {
            path: path.clone(),
            source,
        })?;
        let code: u32 = text
            .trim()
            .parse()
            .map_err(|_| SysfsError::Codename(text.trim().to_owned()))?;
        let family = Family::from_code(code);
        if family == Family::Undefined {
            warn!("driver reports codename {code}; no commands will be routed");
        }
        debug!("attached to {} ({family})", root.display());
        Ok(Self { root, family })
    }

    /// Directory holding the driver attributes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Kernel module version string.
    pub fn driver_version(&self) -> io::Result<String> {
        self.read_text("drv_version")
    }

    /// SMU firmware version string.
    pub fn firmware_version(&self) -> io::Result<String> {
        self.read_text("version")
    }

    fn attribute(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn read_text(&self, name: &str) -> io::Result<String> {
        Ok(fs::read_to_string(self.attribute(name))?.trim().to_owned())
    }

    fn read_bytes<const N: usize>(&self, name: &str) -> io::Result<[u8; N]> {
        let mut bytes = [0u8; N];
        File::open(self.attribute(name))?.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    fn write_bytes(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(self.attribute(name))?
            .write_all(bytes)
    }

    fn transact(&self, command: &str, opcode: u32, arg: u32) -> Result<u32, TransportError> {
        let mut block = [0u8; ARG_WORDS * 4];
        block[..4].copy_from_slice(&arg.to_le_bytes());
        self.write_bytes("smu_args", &block).map_err(io_error)?;
        self.write_bytes(command, &opcode.to_le_bytes())
            .map_err(io_error)?;
        let status = u32::from_le_bytes(self.read_bytes(command).map_err(io_error)?);
        if let Some(error) = TransportError::from_status(status) {
            return Err(error);
        }
        let reply: [u8; ARG_WORDS * 4] = self.read_bytes("smu_args").map_err(io_error)?;
        Ok(u32::from_le_bytes([reply[0], reply[1], reply[2], reply[3]]))
    }
}

const fn command_file(channel: Channel) -> &'static str {
    match channel {
        Channel::Rsmu => "rsmu_cmd",
        Channel::Mp1 => "mp1_smu_cmd",
        Channel::Hsmp => "hsmp_smu_cmd",
    }
}

fn io_error(error: io::Error) -> TransportError {
    debug!("driver attribute access failed: {error}");
    TransportError::Io
}

impl Mailbox for SysfsDriver {
    fn send(&mut self, opcode: u32, channel: Channel, arg: u32) -> Result<u32, TransportError> {
        let command = command_file(channel);
        if !self.attribute(command).exists() {
            return Err(TransportError::ChannelUnavailable);
        }
        self.transact(command, opcode, arg)
    }
}

impl RegisterRead for SysfsDriver {
    fn read_indexed(&mut self, address: u32) -> Result<u32, TransportError> {
        self.write_bytes("smn", &address.to_le_bytes())
            .map_err(io_error)?;
        Ok(u32::from_le_bytes(self.read_bytes("smn").map_err(io_error)?))
    }
}

impl SmuDriver for SysfsDriver {
    fn family(&self) -> Family {
        self.family
    }

    fn pm_table_version(&mut self) -> Result<u32, TransportError> {
        Ok(u32::from_le_bytes(
            self.read_bytes("pm_table_version").map_err(io_error)?,
        ))
    }

    fn pm_table_size(&mut self) -> Result<usize, TransportError> {
        let size = u64::from_le_bytes(self.read_bytes("pm_table_size").map_err(io_error)?);
        usize::try_from(size).map_err(|_| TransportError::Io)
    }

    fn read_pm_table(&mut self, buffer: &mut [u8]) -> Result<(), TransportError> {
        File::open(self.attribute("pm_table"))
            .and_then(|mut file| file.read_exact(buffer))
            .map_err(io_error)
    }
}
