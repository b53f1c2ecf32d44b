// CLASSIFICATION: COMMUNITY
// Filename: session.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Tuning session binding a driver, its PM table, and the command executor.

use log::{debug, info, warn};
use pm_table::analysis::disabled_core_mask;
use pm_table::{DecodedTable, Registry};
use smu_mailbox::{
    CapabilityMap, CommandOutcome, Delay, Executor, Family, Mailbox, Operation, RegisterRead,
    Topology, TransportError, CORES_PER_DIE,
};

use crate::config::Config;
use crate::error::SessionError;
use crate::timings::MemoryTimings;

/// Settle time after a PM table transfer before the next driver access.
pub const TABLE_THROTTLE_MS: u32 = 100;

/// Full driver surface needed by a session.
pub trait SmuDriver: Mailbox + RegisterRead {
    /// Silicon family reported by the driver.
    fn family(&self) -> Family;

    /// Version identifier of the PM table layout.
    fn pm_table_version(&mut self) -> Result<u32, TransportError>;

    /// Size in bytes of the PM table buffer.
    fn pm_table_size(&mut self) -> Result<usize, TransportError>;

    /// Copies the current PM table into `buffer`.
    fn read_pm_table(&mut self, buffer: &mut [u8]) -> Result<(), TransportError>;

    /// Core topology, when the driver can report it.
    fn topology(&mut self) -> Option<Topology> {
        None
    }
}

/// Open connection to one SMU.
#[derive(Debug)]
pub struct Session<T, D> {
    executor: Executor<T, D>,
    registry: Registry,
    family: Family,
    version: u32,
    buffer: Vec<u8>,
    topology: Option<Topology>,
    refresh_after_tune: bool,
}

impl<T: SmuDriver, D: Delay> Session<T, D> {
    /// Opens a session with the builtin capability map and table layouts.
    pub fn open(driver: T, delay: D, config: &Config) -> Result<Self, SessionError> {
        Self::with_capabilities(driver, delay, config, CapabilityMap::builtin())
    }

    /// Opens a session routing commands through `capabilities`.
    ///
    /// The table is transferred once. A layout the registry does not know
    /// only disables decoding; commands, dumps and timings keep working. A
    /// forced version that cannot decode the buffer fails here.
    pub fn with_capabilities(
        mut driver: T,
        delay: D,
        config: &Config,
        capabilities: CapabilityMap,
    ) -> Result<Self, SessionError> {
        let family = config.family.unwrap_or_else(|| driver.family());
        let reported = driver.pm_table_version()?;
        let version = config.force_version.unwrap_or(reported);
        if version != reported {
            info!("decoding table 0x{reported:06X} as 0x{version:06X}");
        }
        let size = driver.pm_table_size()?;
        let topology = driver.topology();
        let executor = Executor::new(driver, delay, capabilities).with_probe_mode(config.probe_mode);
        let mut session = Self {
            executor,
            registry: Registry::builtin(),
            family,
            version,
            buffer: vec![0; size],
            topology,
            refresh_after_tune: config.refresh_after_tune,
        };
        session.refresh()?;
        if let Err(error) = session.table() {
            if config.force_version.is_some() {
                return Err(error);
            }
            warn!("table 0x{version:06X} cannot be decoded: {error}");
        }
        debug!("session open: {family}, table 0x{version:06X}, {size} bytes");
        Ok(session)
    }

    /// Family commands are routed for.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Layout version used for decoding.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Whether tunes re-read the table to report the value in effect.
    pub fn refresh_after_tune(&self) -> bool {
        self.refresh_after_tune
    }

    /// Attached core topology.
    pub fn topology(&self) -> Option<&Topology> {
        self.topology.as_ref()
    }

    /// Replaces the core topology used for core-scoped operations.
    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = Some(topology);
    }

    /// Transfers a fresh PM table from the driver into the session buffer.
    pub fn refresh(&mut self) -> Result<(), SessionError> {
        let result = self.executor.mailbox_mut().read_pm_table(&mut self.buffer);
        self.executor.delay_mut().delay_ms(TABLE_THROTTLE_MS);
        Ok(result?)
    }

    /// Decodes the most recently transferred table.
    pub fn table(&self) -> Result<DecodedTable<'_>, SessionError> {
        Ok(self.registry.decode(self.version, &self.buffer)?)
    }

    /// Raw bytes of the most recently transferred table.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns true when the registry has a layout for [`Self::version`].
    pub fn has_layout(&self) -> bool {
        self.registry.supports(self.version)
    }

    /// Core topology inferred from the decoded table.
    ///
    /// Slots whose per-core metrics all read zero count as fused off. Dies
    /// follow from the layout's core slots and complexes from its L3 domains.
    pub fn table_topology(&self) -> Result<Topology, SessionError> {
        let table = self.table()?;
        let slots = table.core_count();
        let disabled = disabled_core_mask(&table);
        let cores = slots - disabled.count_ones() as usize;
        let dies = (slots as u32).div_ceil(CORES_PER_DIE).max(1);
        let complexes_per_die = (table.cache_domain_count() as u32 / dies).max(1);
        Ok(Topology::from_disabled_mask(disabled, dies, complexes_per_die, cores))
    }

    /// Applies a package-scoped operation.
    pub fn execute(
        &mut self,
        operation: Operation,
        value: f64,
    ) -> Result<CommandOutcome, SessionError> {
        Ok(self.executor.execute(self.family, operation, value)?)
    }

    /// Applies a core-scoped operation to logical core `index`.
    pub fn execute_core(
        &mut self,
        operation: Operation,
        index: usize,
        value: f64,
    ) -> Result<CommandOutcome, SessionError> {
        let core = self
            .topology
            .as_ref()
            .ok_or(SessionError::NoTopology)?
            .address(index)?;
        Ok(self.executor.execute_core(self.family, operation, core, value)?)
    }

    /// Runs an operation that takes no value.
    pub fn query(&mut self, operation: Operation) -> Result<CommandOutcome, SessionError> {
        Ok(self.executor.query(self.family, operation)?)
    }

    /// Reads the current offset of logical core `index`.
    pub fn core_offset(&mut self, index: usize) -> Result<CommandOutcome, SessionError> {
        // The value is ignored by query encodings.
        self.execute_core(Operation::GetCoreOffset, index, 0.0)
    }

    /// Reads every core offset; entries are `None` where the read failed.
    pub fn core_offsets(&mut self) -> Result<Vec<Option<f64>>, SessionError> {
        let count = self
            .topology
            .as_ref()
            .ok_or(SessionError::NoTopology)?
            .core_count();
        let mut offsets = Vec::with_capacity(count);
        for index in 0..count {
            offsets.push(self.core_offset(index)?.applied());
        }
        Ok(offsets)
    }

    /// Reports whether overclocking mode is active.
    ///
    /// `None` when the scalar cannot be read.
    pub fn oc_mode(&mut self) -> Result<Option<bool>, SessionError> {
        let scalar = self.query(Operation::GetScalar)?.applied();
        Ok(scalar.map(|value| value == 0.0))
    }

    /// Probes `operation` on this session's family.
    pub fn probe(&mut self, operation: Operation) -> CommandOutcome {
        self.executor.probe(self.family, operation)
    }

    /// Returns true when a probe of `operation` succeeds.
    pub fn is_supported(&mut self, operation: Operation) -> bool {
        self.executor.is_supported(self.family, operation)
    }

    /// Operations with a route on this session's family.
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        self.executor.capabilities().operations(self.family)
    }

    /// Reads the DRAM controller timings.
    pub fn memory_timings(&mut self) -> Result<MemoryTimings, SessionError> {
        Ok(MemoryTimings::read(self.executor.mailbox_mut())?)
    }

    /// Underlying driver.
    pub fn driver(&self) -> &T {
        self.executor.mailbox()
    }

    /// Closes the session and returns the driver and delay source.
    pub fn into_parts(self) -> (T, D) {
        self.executor.into_parts()
    }
}
