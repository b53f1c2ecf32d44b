// CLASSIFICATION: COMMUNITY
// Filename: timings.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::collections::HashMap;

use zensmu::smu_mailbox::{RegisterRead, TransportError};
use zensmu::{CommandRate, MemoryTimings};

#[derive(Debug, Default)]
struct Registers {
    values: HashMap<u32, u32>,
    failing: Option<u32>,
    reads: Vec<u32>,
}

impl Registers {
    fn with(mut self, address: u32, value: u32) -> Self {
        self.values.insert(address, value);
        self
    }
}

impl RegisterRead for Registers {
    fn read_indexed(&mut self, address: u32) -> Result<u32, TransportError> {
        self.reads.push(address);
        if self.failing == Some(address) {
            return Err(TransportError::Io);
        }
        Ok(self.values.get(&address).copied().unwrap_or(0))
    }
}

#[test]
fn secondary_bank_is_used_when_primary_reads_marker() {
    const BANK: u32 = 0x10_0000;
    let mut regs = Registers::default()
        .with(0x50200, 0x300)
        .with(BANK + 0x50050, 0x8765_4321)
        .with(BANK + 0x50058, 0x8765_4321)
        .with(BANK + 0x500D0, 0x10)
        .with(BANK + 0x50200, 72 | (1 << 10) | (1 << 11))
        .with(BANK + 0x50204, 16 | (36 << 8) | (18 << 16) | (12 << 24))
        .with(BANK + 0x50208, 52 | (16 << 16))
        .with(BANK + 0x5020C, 4 | (6 << 8) | (12 << 24))
        .with(BANK + 0x50210, 24)
        .with(BANK + 0x50214, 16 | (4 << 8) | (12 << 16))
        .with(BANK + 0x50218, 26)
        .with(BANK + 0x50220, 4 | (5 << 8) | (1 << 16) | (4 << 24))
        .with(BANK + 0x50224, 6 | (7 << 8) | (1 << 16) | (4 << 24))
        .with(BANK + 0x50228, 3 | (9 << 8))
        .with(BANK + 0x50254, 1 << 24)
        .with(BANK + 0x50260, 0x2106_0138)
        .with(BANK + 0x50264, 577 | (433 << 11) | (265 << 22));

    let timings = MemoryTimings::read(&mut regs).unwrap();

    assert!(regs.reads[1..].iter().all(|address| *address >= BANK));
    assert!(!timings.bank_group_swap);
    assert!(timings.bank_group_swap_alt);
    assert_eq!(timings.memory_clock_mhz, 2400.0);
    assert!(timings.gear_down);
    assert_eq!(timings.command_rate, CommandRate::TwoT);
    assert_eq!((timings.tcl, timings.tras, timings.trcdrd, timings.trcdwr), (16, 36, 18, 12));
    assert_eq!((timings.trc, timings.trp), (52, 16));
    assert_eq!((timings.trrds, timings.trrdl, timings.trtp), (4, 6, 12));
    assert_eq!(timings.tfaw, 24);
    assert_eq!((timings.tcwl, timings.twtrs, timings.twtrl), (16, 4, 12));
    assert_eq!(timings.twr, 26);
    assert_eq!(
        (timings.trdrddd, timings.trdrdsd, timings.trdrdsc, timings.trdrdscl),
        (4, 5, 1, 4)
    );
    assert_eq!(
        (timings.twrwrdd, timings.twrwrsd, timings.twrwrsc, timings.twrwrscl),
        (6, 7, 1, 4)
    );
    assert_eq!((timings.twrrd, timings.trdwr), (3, 9));
    assert_eq!(timings.tcke, 1);
    assert_eq!((timings.trfc, timings.trfc2, timings.trfc4), (577, 433, 265));
}

#[test]
fn primary_bank_and_live_refresh_register() {
    let mut regs = Registers::default()
        .with(0x50050, 0x8765_4321)
        .with(0x50058, 0x1234_5678)
        .with(0x50200, 80)
        .with(0x50260, 0x2106_0138)
        .with(0x50264, 0x2106_0138);

    let timings = MemoryTimings::read(&mut regs).unwrap();

    assert!(regs.reads.iter().all(|address| *address < 0x10_0000));
    assert!(timings.bank_group_swap);
    assert!(!timings.bank_group_swap_alt);
    assert_eq!(timings.command_rate, CommandRate::OneT);
    assert!(!timings.gear_down);
    assert!((timings.memory_clock_mhz - 2666.6667).abs() < 0.01);
    assert_eq!(timings.trfc, 0x2106_0138 & 0x3FF);
}

#[test]
fn register_failure_aborts_the_read() {
    let mut regs = Registers {
        failing: Some(0x50228),
        ..Registers::default()
    };
    assert_eq!(MemoryTimings::read(&mut regs), Err(TransportError::Io));
    assert_eq!(regs.reads.last(), Some(&0x50228));
}

#[test]
fn report_lists_every_timing() {
    let mut regs = Registers::default().with(0x50200, 72 | (1 << 10));
    let report = MemoryTimings::read(&mut regs).unwrap().to_string();
    assert!(report.contains("Memory Clock: 2400 MHz"));
    assert!(report.contains("CR: 2T"));
    assert!(report.contains("BankGroupSwap: Enabled"));
    assert!(report.contains("Trfc4: 0"));
    assert_eq!(report.lines().count(), 33);
}
