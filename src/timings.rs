// CLASSIFICATION: COMMUNITY
// Filename: timings.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! DRAM controller timings read through the indexed register window.

use std::fmt;

use smu_mailbox::{RegisterRead, TransportError};

/// Register reading 0x300 at the primary bank means the controller lives at
/// the secondary bank.
const SECONDARY_BANK_MARKER: u32 = 0x300;
const SECONDARY_BANK_OFFSET: u32 = 0x10_0000;
/// Swap registers holding this pattern mean bank group swap is off.
const BGS_DISABLED_PATTERN: u32 = 0x8765_4321;
/// Refresh register value left behind when the alternate copy is live.
const STALE_REFRESH_PATTERN: u32 = 0x2106_0138;

/// Command rate of the memory controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandRate {
    /// One clock per command.
    OneT,
    /// Two clocks per command.
    TwoT,
}

impl fmt::Display for CommandRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OneT => "1T",
            Self::TwoT => "2T",
        })
    }
}

/// Decoded DRAM timing set, in memory clock cycles unless noted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemoryTimings {
    /// Bank group swap.
    pub bank_group_swap: bool,
    /// Alternate bank group swap.
    pub bank_group_swap_alt: bool,
    /// Memory clock in MHz.
    pub memory_clock_mhz: f32,
    /// Gear-down mode.
    pub gear_down: bool,
    /// Command rate.
    pub command_rate: CommandRate,
    pub tcl: u32,
    pub tras: u32,
    pub trcdrd: u32,
    pub trcdwr: u32,
    pub trc: u32,
    pub trp: u32,
    pub trrds: u32,
    pub trrdl: u32,
    pub trtp: u32,
    pub tfaw: u32,
    pub tcwl: u32,
    pub twtrs: u32,
    pub twtrl: u32,
    pub twr: u32,
    pub trdrddd: u32,
    pub trdrdsd: u32,
    pub trdrdsc: u32,
    pub trdrdscl: u32,
    pub twrwrdd: u32,
    pub twrwrsd: u32,
    pub twrwrsc: u32,
    pub twrwrscl: u32,
    pub twrrd: u32,
    pub trdwr: u32,
    pub tcke: u32,
    pub trfc: u32,
    pub trfc2: u32,
    pub trfc4: u32,
}

#[inline]
const fn bits(value: u32, shift: u32, mask: u32) -> u32 {
    (value >> shift) & mask
}

impl MemoryTimings {
    /// Reads the timing registers.
    pub fn read<R: RegisterRead + ?Sized>(registers: &mut R) -> Result<Self, TransportError> {
        let base = if registers.read_indexed(0x50200)? == SECONDARY_BANK_MARKER {
            SECONDARY_BANK_OFFSET
        } else {
            0
        };
        let mut reg = |address: u32| registers.read_indexed(address + base);

        let bgs = (reg(0x50050)?, reg(0x50058)?);
        let bgs_alt = (reg(0x500D0)?, reg(0x500D4)?);
        let clock = reg(0x50200)?;
        let primary = reg(0x50204)?;
        let row = reg(0x50208)?;
        let activate = reg(0x5020C)?;
        let faw = reg(0x50210)?;
        let write = reg(0x50214)?;
        let recovery = reg(0x50218)?;
        let read_read = reg(0x50220)?;
        let write_write = reg(0x50224)?;
        let turnaround = reg(0x50228)?;
        let power = reg(0x50254)?;
        let refresh = match (reg(0x50260)?, reg(0x50264)?) {
            (first, second) if first != second && first == STALE_REFRESH_PATTERN => second,
            (first, _) => first,
        };

        Ok(Self {
            bank_group_swap: !(bgs.0 == bgs.1 && bgs.0 == BGS_DISABLED_PATTERN),
            bank_group_swap_alt: bits(bgs_alt.0, 4, 0x7F) != 0 || bits(bgs_alt.1, 4, 0x7F) != 0,
            memory_clock_mhz: (clock & 0x7F) as f32 / 3.0 * 100.0,
            gear_down: bits(clock, 11, 1) == 1,
            command_rate: if bits(clock, 10, 1) != 0 {
                CommandRate::TwoT
            } else {
                CommandRate::OneT
            },
            tcl: bits(primary, 0, 0x3F),
            tras: bits(primary, 8, 0x7F),
            trcdrd: bits(primary, 16, 0x3F),
            trcdwr: bits(primary, 24, 0x3F),
            trc: bits(row, 0, 0xFF),
            trp: bits(row, 16, 0x3F),
            trrds: bits(activate, 0, 0x1F),
            trrdl: bits(activate, 8, 0x1F),
            trtp: bits(activate, 24, 0x1F),
            tfaw: bits(faw, 0, 0xFF),
            tcwl: bits(write, 0, 0x3F),
            twtrs: bits(write, 8, 0x1F),
            twtrl: bits(write, 16, 0x3F),
            twr: bits(recovery, 0, 0xFF),
            trdrddd: bits(read_read, 0, 0xF),
            trdrdsd: bits(read_read, 8, 0xF),
            trdrdsc: bits(read_read, 16, 0xF),
            trdrdscl: bits(read_read, 24, 0x3F),
            twrwrdd: bits(write_write, 0, 0xF),
            twrwrsd: bits(write_write, 8, 0xF),
            twrwrsc: bits(write_write, 16, 0xF),
            twrwrscl: bits(write_write, 24, 0x3F),
            twrrd: bits(turnaround, 0, 0xF),
            trdwr: bits(turnaround, 8, 0x1F),
            tcke: bits(power, 24, 0x1F),
            trfc: bits(refresh, 0, 0x3FF),
            trfc2: bits(refresh, 11, 0x3FF),
            trfc4: bits(refresh, 22, 0x3FF),
        })
    }
}

impl fmt::Display for MemoryTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = |on: bool| if on { "Enabled" } else { "Disabled" };
        writeln!(f, "BankGroupSwap: {}", state(self.bank_group_swap))?;
        writeln!(f, "BankGroupSwapAlt: {}", state(self.bank_group_swap_alt))?;
        writeln!(f, "Memory Clock: {:.0} MHz", self.memory_clock_mhz)?;
        writeln!(f, "GDM: {}", state(self.gear_down))?;
        writeln!(f, "CR: {}", self.command_rate)?;
        let cycles = [
            ("Tcl", self.tcl),
            ("Tras", self.tras),
            ("Trcdrd", self.trcdrd),
            ("Trcdwr", self.trcdwr),
            ("Trc", self.trc),
            ("Trp", self.trp),
            ("Trrds", self.trrds),
            ("Trrdl", self.trrdl),
            ("Trtp", self.trtp),
            ("Tfaw", self.tfaw),
            ("Tcwl", self.tcwl),
            ("Twtrs", self.twtrs),
            ("Twtrl", self.twtrl),
            ("Twr", self.twr),
            ("Trdrddd", self.trdrddd),
            ("Trdrdsd", self.trdrdsd),
            ("Trdrdsc", self.trdrdsc),
            ("Trdrdscl", self.trdrdscl),
            ("Twrwrdd", self.twrwrdd),
            ("Twrwrsd", self.twrwrsd),
            ("Twrwrsc", self.twrwrsc),
            ("Twrwrscl", self.twrwrscl),
            ("Twrrd", self.twrrd),
            ("Trdwr", self.trdwr),
            ("Tcke", self.tcke),
            ("Trfc", self.trfc),
            ("Trfc2", self.trfc2),
            ("Trfc4", self.trfc4),
        ];
        for (label, value) in cycles {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
