// CLASSIFICATION: COMMUNITY
// Filename: tuning.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Read-modify-read tuning with before and after values.

use log::{debug, info, warn};
use pm_table::Field;
use smu_mailbox::{CommandOutcome, Delay, Operation};

use crate::error::SessionError;
use crate::session::{Session, SmuDriver};

/// Where the value governed by an operation can be read back from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readback {
    /// A PM table field.
    Table(Field),
    /// The boost scalar query.
    Scalar,
    /// Overclocking mode, `1.0` when active.
    OcMode,
    /// Not observable.
    Unobservable,
}

impl Readback {
    /// Readback source for `operation`.
    pub const fn for_operation(operation: Operation) -> Self {
        match operation {
            Operation::SetPpt => Self::Table(Field::PptLimit),
            Operation::SetPptFast => Self::Table(Field::PptLimitFast),
            Operation::SetPptApu => Self::Table(Field::PptLimitApu),
            Operation::SetTdc => Self::Table(Field::TdcLimit),
            Operation::SetTdcSoc => Self::Table(Field::TdcLimitSoc),
            Operation::SetEdc => Self::Table(Field::EdcLimit),
            Operation::SetEdcSoc => Self::Table(Field::EdcLimitSoc),
            Operation::SetStapm => Self::Table(Field::StapmLimit),
            Operation::SetPptTime => Self::Table(Field::SlowPptTimeConstant),
            Operation::SetStapmTime => Self::Table(Field::StapmTimeConstant),
            Operation::SetThm => Self::Table(Field::ThmLimit),
            Operation::SetScalar => Self::Scalar,
            Operation::EnableOc | Operation::DisableOc => Self::OcMode,
            _ => Self::Unobservable,
        }
    }
}

/// Result of one tuning request.
#[derive(Clone, Debug, PartialEq)]
pub struct TuneReport {
    /// Operation that was requested.
    pub operation: Operation,
    /// Value before the command; `None` when it could not be observed.
    pub before: Option<f64>,
    /// Command outcome. A failed probe is reported here without the command
    /// being sent.
    pub outcome: CommandOutcome,
    /// Value after the command; `None` when it could not be observed.
    pub after: Option<f64>,
}

impl TuneReport {
    /// Returns true when the firmware accepted the command.
    pub fn applied(&self) -> bool {
        matches!(self.outcome, CommandOutcome::Applied(_))
    }
}

impl<T: SmuDriver, D: Delay> Session<T, D> {
    /// Applies a package-scoped operation, reporting the governed value on
    /// either side of it.
    ///
    /// The operation is probed first; when the probe fails nothing is read or
    /// written and the probe outcome is returned. Table readbacks are `None`
    /// when the layout is unknown, and a failed readback after an applied
    /// command leaves `after` as `None` instead of failing the tune.
    pub fn tune(&mut self, operation: Operation, value: f64) -> Result<TuneReport, SessionError> {
        let probe = self.probe(operation);
        if !matches!(probe, CommandOutcome::Applied(_)) {
            debug!("{operation} not reachable on {}", self.family());
            return Ok(TuneReport {
                operation,
                before: None,
                outcome: probe,
                after: None,
            });
        }

        let readback = Readback::for_operation(operation);
        let before = self.observe(readback)?;
        let outcome = self.execute(operation, value)?;
        let after = if self.refresh_after_tune() && outcome.applied().is_some() {
            // The command already took effect; a failed readback only loses
            // the after value.
            self.observe(readback).unwrap_or_else(|error| {
                warn!("{operation} applied but readback failed: {error}");
                None
            })
        } else {
            None
        };
        info!(
            "{operation}: {} -> {} ({outcome:?})",
            display_value(before),
            display_value(after)
        );
        Ok(TuneReport {
            operation,
            before,
            outcome,
            after,
        })
    }

    fn observe(&mut self, readback: Readback) -> Result<Option<f64>, SessionError> {
        match readback {
            Readback::Table(field) => {
                self.refresh()?;
                Ok(self.table().ok().and_then(|table| table.get(field)).map(f64::from))
            }
            Readback::Scalar => Ok(self.query(Operation::GetScalar)?.applied()),
            Readback::OcMode => Ok(self.oc_mode()?.map(|on| if on { 1.0 } else { 0.0 })),
            Readback::Unobservable => Ok(None),
        }
    }
}

fn display_value(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |value| format!("{value:.2}"))
}
