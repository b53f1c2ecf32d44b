// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Driver-facing traits for mailbox sends, indexed register reads and delays.
// Author: Lukas Bower

use crate::channel::Channel;

/// Status word the firmware writes back on success.
pub const STATUS_OK: u32 = 0x01;

/// Failure reported by the driver for a single mailbox or register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Firmware reported a generic failure.
    #[error("firmware reported failure")]
    Failed,
    /// Firmware does not implement the opcode on this channel.
    #[error("unknown command")]
    UnknownCommand,
    /// Firmware refused the command because a prerequisite was not met.
    #[error("command rejected")]
    Rejected,
    /// Firmware refused the argument.
    #[error("invalid argument")]
    InvalidArgument,
    /// Mailbox still processing an earlier command.
    #[error("mailbox busy")]
    Busy,
    /// No response within the driver's deadline.
    #[error("mailbox timed out")]
    Timeout,
    /// The channel is not exposed by the driver on this host.
    #[error("channel unavailable")]
    ChannelUnavailable,
    /// Reading or writing the driver interface failed.
    #[error("driver I/O failed")]
    Io,
}

impl TransportError {
    /// Maps a firmware status word to an error, `None` for [`STATUS_OK`].
    #[must_use]
    pub const fn from_status(status: u32) -> Option<Self> {
        match status {
            STATUS_OK => None,
            0xFE => Some(Self::UnknownCommand),
            0xFD => Some(Self::Rejected),
            0xFC => Some(Self::InvalidArgument),
            0xFB => Some(Self::Busy),
            _ => Some(Self::Failed),
        }
    }
}

/// Mailbox primitive exposed by the driver.
///
/// A single 32-bit register carries the argument in and the response out.
pub trait Mailbox {
    /// Sends `opcode` with `arg` on `channel` and returns the response word.
    fn send(&mut self, opcode: u32, channel: Channel, arg: u32) -> Result<u32, TransportError>;
}

impl<T: Mailbox + ?Sized> Mailbox for &mut T {
    fn send(&mut self, opcode: u32, channel: Channel, arg: u32) -> Result<u32, TransportError> {
        (**self).send(opcode, channel, arg)
    }
}

/// Indexed register read exposed by the driver.
pub trait RegisterRead {
    /// Reads the 32-bit register at `address`.
    fn read_indexed(&mut self, address: u32) -> Result<u32, TransportError>;
}

impl<T: RegisterRead + ?Sized> RegisterRead for &mut T {
    fn read_indexed(&mut self, address: u32) -> Result<u32, TransportError> {
        (**self).read_indexed(address)
    }
}

/// Blocking delay source.
pub trait Delay {
    /// Blocks for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}

/// Delay backed by `std::thread::sleep`.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

#[cfg(feature = "std")]
impl Delay for ThreadSleep {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_words_map_to_errors() {
        assert_eq!(TransportError::from_status(STATUS_OK), None);
        assert_eq!(
            TransportError::from_status(0xFE),
            Some(TransportError::UnknownCommand)
        );
        assert_eq!(TransportError::from_status(0xFB), Some(TransportError::Busy));
        assert_eq!(TransportError::from_status(0x42), Some(TransportError::Failed));
    }
}
