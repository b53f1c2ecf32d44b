// CLASSIFICATION: COMMUNITY
// Filename: zensmu.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Command-line front end for SMU telemetry and tuning.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use zensmu::logging::init_logging;
use zensmu::pm_table::analysis::{disabled_core_mask, summarize};
use zensmu::pm_table::{ArrayField, Field};
use zensmu::smu_mailbox::{CommandOutcome, Family, Operation, ThreadSleep, Topology};
use zensmu::{load_active, Config, Session, SysfsDriver};

type SysfsSession = Session<SysfsDriver, ThreadSleep>;

/// Ryzen SMU command-line arguments.
#[derive(Debug, Parser)]
#[command(author = "Lukas Bower", version, about = "Ryzen SMU telemetry and tuning", long_about = None)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Configuration TOML; defaults to $ZENSMU_CONFIG or /etc/zensmu.toml.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the driver attributes.
    #[arg(long, value_name = "DIR")]
    driver_root: Option<PathBuf>,

    /// Decode the table with this layout version, e.g. 0x380804.
    #[arg(long, value_parser = parse_version)]
    force_version: Option<u32>,

    /// Route commands for this family instead of the detected one.
    #[arg(long, value_parser = parse_family)]
    family: Option<Family>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the detected part and the operations routed for it.
    Info,
    /// Print the decoded PM table.
    Table {
        /// Include fields this layout does not provide.
        #[arg(long)]
        all: bool,
    },
    /// Write the raw PM table to a file.
    Dump {
        /// Output file.
        path: PathBuf,
    },
    /// Apply a tuning operation and report the value before and after.
    Tune {
        /// Operation name, e.g. set-ppt.
        #[arg(value_parser = parse_operation)]
        operation: Operation,
        /// Value in the operation's unit.
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Check which operations answer on this part.
    Probe {
        /// Single operation to probe; all when omitted.
        #[arg(value_parser = parse_operation)]
        operation: Option<Operation>,
    },
    /// Read the curve optimizer count of every core.
    CoreOffsets(TopologyArgs),
    /// Set the curve optimizer count of one core.
    SetCoreOffset {
        /// Logical core index.
        index: usize,
        /// Count, between -30 and 30.
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[command(flatten)]
        topology: TopologyArgs,
    },
    /// Print the DRAM controller timings.
    Timings,
}

#[derive(Debug, Clone, Args)]
struct TopologyArgs {
    /// Fused-off physical cores, one bit per core.
    #[arg(long, value_parser = parse_version, requires = "cores")]
    disabled_mask: Option<u32>,
    /// Core dies present.
    #[arg(long, default_value_t = 1)]
    dies: u32,
    /// Core complexes per die.
    #[arg(long, default_value_t = 1)]
    complexes_per_die: u32,
    /// Enabled cores; inferred from the PM table when omitted.
    #[arg(long)]
    cores: Option<usize>,
}

impl TopologyArgs {
    fn resolve(&self, session: &SysfsSession) -> Result<Topology> {
        let Some(cores) = self.cores else {
            return session
                .table_topology()
                .context("cannot infer the core topology, pass --cores");
        };
        Ok(Topology::from_disabled_mask(
            self.disabled_mask.unwrap_or(0),
            self.dies,
            self.complexes_per_die,
            cores,
        ))
    }
}

fn parse_version(text: &str) -> Result<u32, String> {
    let trimmed = text.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|err| format!("invalid number {text:?}: {err}"))
}

fn parse_family(text: &str) -> Result<Family, String> {
    text.parse().map_err(|_| format!("unknown family {text:?}"))
}

fn parse_operation(text: &str) -> Result<Operation, String> {
    text.parse().map_err(|_| format!("unknown operation {text:?}"))
}

fn describe(outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Applied(value) => format!("applied {value:.3}"),
        CommandOutcome::Unsupported => "unsupported".to_owned(),
        CommandOutcome::DeviceError(attempts) => {
            let failures: Vec<String> = attempts
                .iter()
                .map(|attempt| {
                    format!(
                        "{} 0x{:X}: {}",
                        attempt.channel, attempt.opcode, attempt.error
                    )
                })
                .collect();
            format!("device error ({})", failures.join(", "))
        }
    }
}

fn show(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |value| format!("{value:.3}"))
}

fn print_info(session: &mut SysfsSession) -> Result<()> {
    let driver = session.driver();
    println!("Family: {}", session.family());
    println!(
        "Driver: {}",
        driver.driver_version().unwrap_or_else(|_| "unknown".to_owned())
    );
    println!(
        "Firmware: {}",
        driver.firmware_version().unwrap_or_else(|_| "unknown".to_owned())
    );
    println!("PM table: 0x{:06X}", session.version());
    let oc = session.oc_mode()?;
    println!(
        "OC mode: {}",
        oc.map_or("unknown", |on| if on { "enabled" } else { "disabled" })
    );
    let operations: Vec<&str> = session.operations().map(Operation::label).collect();
    println!("Operations: {}", operations.join(" "));
    match session.table() {
        Ok(table) => {
            let disabled = disabled_core_mask(&table);
            let summary = summarize(&table, disabled);
            println!(
                "Cores: {} enabled (disabled mask 0x{disabled:X})",
                summary.enabled
            );
            println!(
                "Peak: {:.0} MHz, {:.1} C, {:.4} V",
                summary.peak_frequency_mhz, summary.peak_temperature, summary.peak_voltage
            );
            println!(
                "Core power: {:.3} W, average {:.4} V",
                summary.total_power, summary.average_voltage
            );
        }
        Err(err) => println!("Cores: unavailable ({err})"),
    }
    Ok(())
}

fn print_table(session: &SysfsSession, all: bool) -> Result<()> {
    let table = session.table()?;
    for field in Field::ALL {
        match table.get(*field) {
            Some(value) => println!("{:<32} {value:>12.4}", field.label()),
            None if all => println!("{:<32} {:>12}", field.label(), "n/a"),
            None => {}
        }
    }
    for field in ArrayField::ALL {
        for (index, value) in table.elements(*field).enumerate() {
            let label = format!("{}[{index}]", field.label());
            match value {
                Some(value) => println!("{label:<32} {value:>12.4}"),
                None if all => println!("{label:<32} {:>12}", "n/a"),
                None => {}
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config: Config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => load_active(),
    };
    if cli.force_version.is_some() {
        config.force_version = cli.force_version;
    }
    if cli.family.is_some() {
        config.family = cli.family;
    }

    let driver = match &cli.driver_root {
        Some(root) => SysfsDriver::open_at(root),
        None => SysfsDriver::open(),
    }
    .context("failed to attach to the ryzen_smu driver")?;
    let mut session =
        Session::open(driver, ThreadSleep, &config).context("failed to open SMU session")?;

    match cli.command {
        Command::Info => print_info(&mut session)?,
        Command::Table { all } => print_table(&session, all)?,
        Command::Dump { path } => {
            let bytes = session.buffer();
            fs::write(&path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "Wrote {} bytes of table 0x{:06X} to {}",
                bytes.len(),
                session.version(),
                path.display()
            );
        }
        Command::Tune { operation, value } => {
            let report = session.tune(operation, value)?;
            println!(
                "{operation}: {} -> {} [{}]",
                show(report.before),
                show(report.after),
                describe(&report.outcome)
            );
            if !report.applied() {
                bail!("{operation} was not applied on {}", session.family());
            }
        }
        Command::Probe { operation } => {
            let operations = match operation {
                Some(operation) => vec![operation],
                None => Operation::ALL.to_vec(),
            };
            for operation in operations {
                let outcome = session.probe(operation);
                let state = match outcome {
                    CommandOutcome::Applied(_) => "supported".to_owned(),
                    other => describe(&other),
                };
                println!("{:<20} {state}", operation.label());
            }
        }
        Command::CoreOffsets(topology) => {
            let topology = topology.resolve(&session)?;
            session.set_topology(topology);
            for (index, offset) in session.core_offsets()?.into_iter().enumerate() {
                println!("Core {index}: {}", show(offset));
            }
        }
        Command::SetCoreOffset {
            index,
            value,
            topology,
        } => {
            let topology = topology.resolve(&session)?;
            session.set_topology(topology);
            let outcome = session.execute_core(Operation::SetCoreOffset, index, value)?;
            println!("Core {index}: {}", describe(&outcome));
            if outcome.applied().is_none() {
                bail!("core offset was not applied");
            }
        }
        Command::Timings => print!("{}", session.memory_timings()?),
    }
    Ok(())
}
