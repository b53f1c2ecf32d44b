// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Mailbox channel identifiers and their fallback order.
// Author: Lukas Bower

use core::fmt;

/// Physical mailbox path into the system management unit.
///
/// Each channel has its own opcode numbering. The declaration order is the
/// order endpoints are attempted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    /// Remote SMU mailbox.
    Rsmu,
    /// MP1 firmware mailbox.
    Mp1,
    /// Host system management port.
    Hsmp,
}

impl Channel {
    /// Channels in attempt order.
    pub const PRIORITY: [Channel; 3] = [Channel::Rsmu, Channel::Mp1, Channel::Hsmp];

    /// Position of the channel in [`Channel::PRIORITY`].
    #[must_use]
    pub const fn rank(self) -> usize {
        match self {
            Self::Rsmu => 0,
            Self::Mp1 => 1,
            Self::Hsmp => 2,
        }
    }

    /// Short uppercase name used in logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rsmu => "RSMU",
            Self::Mp1 => "MP1",
            Self::Hsmp => "HSMP",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_matches_rank() {
        for (position, channel) in Channel::PRIORITY.iter().enumerate() {
            assert_eq!(channel.rank(), position);
        }
        assert!(Channel::Rsmu < Channel::Mp1 && Channel::Mp1 < Channel::Hsmp);
    }
}
