// CLASSIFICATION: COMMUNITY
// Filename: sysfs.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::fs;
use std::path::Path;

use tempfile::tempdir;
use zensmu::pm_table::Field;
use zensmu::smu_mailbox::{
    Channel, CommandOutcome, Family, Mailbox, Operation, RegisterRead, TransportError,
    TEST_MESSAGE,
};
use zensmu::sysfs::{SysfsDriver, SysfsError};
use zensmu::{Config, Session, SmuDriver};

#[derive(Debug, Default)]
struct NoDelay;

impl zensmu::smu_mailbox::Delay for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

// Plain files echo whatever was last written, so a command file reads back
// its own opcode as the status word.
fn populate(root: &Path, codename: &str) {
    fs::write(root.join("codename"), codename).unwrap();
    fs::write(root.join("drv_version"), "0.1.5\n").unwrap();
    fs::write(root.join("version"), "56.45.0\n").unwrap();
    fs::write(root.join("smu_args"), [0u8; 24]).unwrap();
    fs::write(root.join("rsmu_cmd"), [0u8; 4]).unwrap();
    fs::write(root.join("smn"), [0u8; 4]).unwrap();
    fs::write(root.join("pm_table_version"), 0x0038_0904u32.to_le_bytes()).unwrap();
    fs::write(root.join("pm_table_size"), 1444u64.to_le_bytes()).unwrap();
    let mut table = vec![0u8; 1444];
    table[..4].copy_from_slice(&76.0f32.to_le_bytes());
    fs::write(root.join("pm_table"), table).unwrap();
}

#[test]
fn attributes_are_read_from_the_driver_root() {
    let dir = tempdir().unwrap();
    populate(dir.path(), "12\n");
    let mut driver = SysfsDriver::open_at(dir.path()).unwrap();
    assert_eq!(driver.family(), Family::Vermeer);
    assert_eq!(driver.driver_version().unwrap(), "0.1.5");
    assert_eq!(driver.firmware_version().unwrap(), "56.45.0");
    assert_eq!(driver.pm_table_version(), Ok(0x0038_0904));
    assert_eq!(driver.pm_table_size(), Ok(1444));
}

#[test]
fn unparsable_codename_is_rejected() {
    let dir = tempdir().unwrap();
    populate(dir.path(), "zen3\n");
    assert!(matches!(
        SysfsDriver::open_at(dir.path()),
        Err(SysfsError::Codename(code)) if code == "zen3"
    ));
}

#[test]
fn missing_driver_is_an_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        SysfsDriver::open_at(dir.path().join("absent")),
        Err(SysfsError::Io { .. })
    ));
}

#[test]
fn mailbox_round_trip_uses_the_argument_block() {
    let dir = tempdir().unwrap();
    populate(dir.path(), "12\n");
    let mut driver = SysfsDriver::open_at(dir.path()).unwrap();

    assert_eq!(driver.send(TEST_MESSAGE, Channel::Rsmu, 0x1234), Ok(0x1234));
    let args = fs::read(dir.path().join("smu_args")).unwrap();
    assert_eq!(&args[..4], &0x1234u32.to_le_bytes());
    assert!(args[4..].iter().all(|byte| *byte == 0));

    // 0x53 read back as a status word is not OK.
    assert_eq!(driver.send(0x53, Channel::Rsmu, 1), Err(TransportError::Failed));
    assert_eq!(
        driver.send(0x3D, Channel::Mp1, 1),
        Err(TransportError::ChannelUnavailable)
    );
}

#[test]
fn indexed_reads_go_through_the_smn_attribute() {
    let dir = tempdir().unwrap();
    populate(dir.path(), "12\n");
    let mut driver = SysfsDriver::open_at(dir.path()).unwrap();
    assert_eq!(driver.read_indexed(0x0005_0200), Ok(0x0005_0200));
}

#[test]
fn session_over_sysfs_decodes_and_falls_back() {
    let dir = tempdir().unwrap();
    populate(dir.path(), "12\n");
    let driver = SysfsDriver::open_at(dir.path()).unwrap();
    let mut session = Session::open(driver, NoDelay, &Config::default()).unwrap();
    assert_eq!(session.table().unwrap().value(Field::PptLimit), 76.0);

    assert!(session.is_supported(Operation::SetPpt));
    let outcome = session.execute(Operation::SetPpt, 90.0).unwrap();
    let CommandOutcome::DeviceError(attempts) = outcome else {
        panic!("expected a device error, got {outcome:?}");
    };
    let errors: Vec<_> = attempts.iter().map(|attempt| attempt.error).collect();
    assert_eq!(
        errors,
        vec![TransportError::Failed, TransportError::ChannelUnavailable]
    );
}
