// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Derive per-core states and package figures from a decoded table.
// Author: Lukas Bower

//! Figures that the firmware does not report directly but monitoring front
//! ends show anyway: core activity, corrected voltages, peaks, and power sums.
//!
//! Every routine here tolerates absent fields. Sums use the zero accessor and
//! single readings keep NaN so "unknown" stays visible.

use crate::decode::DecodedTable;
use crate::field::{ArrayField, Field};

/// A core is sleeping when it spent less C0 residency than this, in percent.
pub const SLEEP_C0_PERCENT: f32 = 6.0;
/// Voltage a core is assumed to sit at while in CC6.
pub const CC6_VOLTAGE: f32 = 0.2;
/// Package voltages at or above this are treated as bogus telemetry.
pub const MAX_PLAUSIBLE_VOLTAGE: f32 = 2.0;

/// Activity classification of one core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoreState {
    /// Fused off or reported as all-zero.
    Disabled,
    /// Below [`SLEEP_C0_PERCENT`] C0 residency.
    Sleeping,
    /// Running at the given effective frequency.
    Active {
        /// Effective clock in MHz.
        frequency_mhz: f32,
    },
}

/// Per-core snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoreActivity {
    /// Core slot index in the table.
    pub index: usize,
    /// Activity classification.
    pub state: CoreState,
    /// Core power in watts.
    pub power: f32,
    /// Core voltage, CC6-corrected when possible.
    pub voltage: f32,
    /// Core temperature in degrees Celsius.
    pub temperature: f32,
    /// C0 residency in percent.
    pub c0: f32,
    /// CC1 residency in percent.
    pub cc1: f32,
    /// CC6 residency in percent.
    pub cc6: f32,
}

/// Aggregates over enabled cores.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoreSummary {
    /// Enabled cores included in the figures.
    pub enabled: usize,
    /// Highest effective clock in MHz.
    pub peak_frequency_mhz: f32,
    /// Highest core temperature.
    pub peak_temperature: f32,
    /// Highest (corrected) core voltage.
    pub peak_voltage: f32,
    /// Mean (corrected) core voltage.
    pub average_voltage: f32,
    /// Mean CC6 residency in percent.
    pub average_cc6: f32,
    /// Sum of core powers in watts.
    pub total_power: f32,
    /// Sum of C0 residencies in percent.
    pub total_usage: f32,
}

/// Core slots whose every per-core metric reads zero.
///
/// Bit `i` is set for core slot `i`. Cores fused off by the vendor show up
/// this way on parts with fewer enabled cores than the layout carries.
#[must_use]
pub fn disabled_core_mask(table: &DecodedTable<'_>) -> u32 {
    const PROBES: [ArrayField; 9] = [
        ArrayField::CorePower,
        ArrayField::CoreVoltage,
        ArrayField::CoreFit,
        ArrayField::CoreIddmax,
        ArrayField::CoreFreq,
        ArrayField::CoreFreqeff,
        ArrayField::CoreC0,
        ArrayField::CoreCc1,
        ArrayField::CoreIrm,
    ];
    (0..table.core_count())
        .filter(|&core| {
            PROBES
                .iter()
                .all(|&field| table.element_or_zero(field, core) == 0.0)
        })
        .fold(0, |mask, core| mask | (1 << core))
}

/// Package-level core voltage estimate.
///
/// Averages present core voltages of enabled cores, falls back to the SVI2
/// telemetry rail, and removes the package C6 share when it is reported.
#[must_use]
pub fn package_voltage(table: &DecodedTable<'_>, disabled: u32) -> f32 {
    let (sum, count) = enabled_cores(table, disabled)
        .filter_map(|core| table.get_element(ArrayField::CoreVoltage, core))
        .fold((0.0f32, 0u32), |(sum, count), v| (sum + v, count + 1));
    let mut average = if count > 0 { sum / count as f32 } else { f32::NAN };
    if average.is_nan() || average <= 0.0 {
        average = table.value(Field::CpuTelemetryVoltage);
    }
    if let Some(pc6) = table.get(Field::Pc6) {
        let sleep = pc6 / 100.0;
        if sleep < 1.0 {
            average = (average - CC6_VOLTAGE * sleep) / (1.0 - sleep);
        }
    }
    average
}

/// Voltage of one core, blended with the CC6 floor when the core slept.
#[must_use]
pub fn core_voltage(table: &DecodedTable<'_>, core: usize, package_voltage: f32) -> f32 {
    let sleep = table.element_or_zero(ArrayField::CoreCc6, core) / 100.0;
    if sleep > 0.0 && package_voltage < MAX_PLAUSIBLE_VOLTAGE {
        (1.0 - sleep) * package_voltage + CC6_VOLTAGE * sleep
    } else {
        table.element(ArrayField::CoreVoltage, core)
    }
}

/// Snapshot of every core slot in the table.
pub fn cores<'t>(
    table: &'t DecodedTable<'t>,
    disabled: u32,
) -> impl Iterator<Item = CoreActivity> + 't {
    let package = package_voltage(table, disabled);
    (0..table.core_count()).map(move |index| {
        let c0 = table.element(ArrayField::CoreC0, index);
        let state = if is_disabled(disabled, index) {
            CoreState::Disabled
        } else if c0 >= SLEEP_C0_PERCENT {
            CoreState::Active {
                frequency_mhz: table.element(ArrayField::CoreFreqeff, index) * 1000.0,
            }
        } else {
            CoreState::Sleeping
        };
        CoreActivity {
            index,
            state,
            power: table.element(ArrayField::CorePower, index),
            voltage: core_voltage(table, index, package),
            temperature: table.element(ArrayField::CoreTemp, index),
            c0,
            cc1: table.element(ArrayField::CoreCc1, index),
            cc6: table.element(ArrayField::CoreCc6, index),
        }
    })
}

/// Peaks, means and sums over enabled cores.
#[must_use]
pub fn summarize(table: &DecodedTable<'_>, disabled: u32) -> CoreSummary {
    let package = package_voltage(table, disabled);
    let mut summary = CoreSummary::default();
    let mut voltage_sum = 0.0;
    let mut cc6_sum = 0.0;
    for core in enabled_cores(table, disabled) {
        let frequency = table.element_or_zero(ArrayField::CoreFreqeff, core) * 1000.0;
        let voltage = core_voltage(table, core, package);
        summary.enabled += 1;
        summary.peak_frequency_mhz = summary.peak_frequency_mhz.max(frequency);
        summary.peak_temperature = summary
            .peak_temperature
            .max(table.element_or_zero(ArrayField::CoreTemp, core));
        summary.peak_voltage = summary.peak_voltage.max(voltage);
        summary.total_power += table.element_or_zero(ArrayField::CorePower, core);
        summary.total_usage += table.element_or_zero(ArrayField::CoreC0, core);
        if !voltage.is_nan() {
            voltage_sum += voltage;
        }
        cc6_sum += table.element_or_zero(ArrayField::CoreCc6, core);
    }
    if summary.enabled > 0 {
        summary.average_voltage = voltage_sum / summary.enabled as f32;
        summary.average_cc6 = cc6_sum / summary.enabled as f32;
    }
    summary
}

/// Peak core voltage as the firmware would report it.
///
/// Prefers the SVI2 telemetry rail unless it is lower than the per-core peak
/// or implausibly high.
#[must_use]
pub fn reported_peak_voltage(table: &DecodedTable<'_>, summary: &CoreSummary) -> f32 {
    let telemetry = table.value_or_zero(Field::CpuTelemetryVoltage);
    if telemetry < summary.peak_voltage || telemetry >= MAX_PLAUSIBLE_VOLTAGE {
        summary.peak_voltage
    } else {
        telemetry
    }
}

/// Thermal reading used against `THM_LIMIT`.
///
/// Uses `THM_VALUE` when present, otherwise the hottest positive per-core
/// thermal value.
#[must_use]
pub fn thermal_value(table: &DecodedTable<'_>) -> f32 {
    if let Some(value) = table.get(Field::ThmValue) {
        return value;
    }
    table
        .elements(ArrayField::ThmValueCores)
        .flatten()
        .filter(|value| *value > 0.0)
        .fold(0.0, f32::max)
}

/// EDC current estimate scaled by average core usage, floored at TDC.
#[must_use]
pub fn edc_estimate(table: &DecodedTable<'_>, summary: &CoreSummary) -> f32 {
    let cores = summary.enabled.max(1) as f32;
    let estimate = table.value_or_zero(Field::EdcValue) * (summary.total_usage / cores / 100.0);
    let tdc = table.value(Field::TdcValue);
    if estimate < tdc {
        tdc
    } else {
        estimate
    }
}

/// APU power limit, falling back to the package PPT limit.
#[must_use]
pub fn apu_ppt_limit(table: &DecodedTable<'_>) -> f32 {
    match table.get(Field::PptLimitApu) {
        Some(limit) if limit > 0.0 => limit,
        _ => table.value(Field::PptLimit),
    }
}

/// Share of `limit` consumed by `value`, in percent.
#[must_use]
pub fn usage_percent(value: f32, limit: f32) -> f32 {
    value / limit * 100.0
}

/// Sum of L3 logic and VDDM power over the cache domains.
#[must_use]
pub fn l3_power(table: &DecodedTable<'_>) -> (f32, f32) {
    (0..table.cache_domain_count()).fold((0.0, 0.0), |(logic, vddm), domain| {
        (
            logic + table.element_or_zero(ArrayField::L3LogicPower, domain),
            vddm + table.element_or_zero(ArrayField::L3VddmPower, domain),
        )
    })
}

/// Whole-package thermal output from summing rail powers.
///
/// `None` when the layout flags the sum as unreliable.
#[must_use]
pub fn thermal_output(table: &DecodedTable<'_>, summary: &CoreSummary) -> Option<f32> {
    if table.schema().power_sum_unreliable() {
        return None;
    }
    let (logic, vddm) = l3_power(table);
    let rails = [
        Field::VddcrSocPower,
        Field::Gmi2VddgPower,
        Field::VddioMemPower,
        Field::IodVddioMemPower,
        Field::DdrVddpPower,
        Field::Vdd18Power,
    ]
    .iter()
    .map(|&field| table.value_or_zero(field))
    .sum::<f32>();
    Some(summary.total_power + logic + vddm + rails)
}

/// Whether the memory controller runs 1:1 with the memory clock.
#[must_use]
pub fn coupled_mode(table: &DecodedTable<'_>) -> Option<bool> {
    let uclk = table.get(Field::UclkFreq)?;
    let memclk = table.get(Field::MemclkFreq)?;
    Some(uclk == memclk)
}

fn is_disabled(mask: u32, core: usize) -> bool {
    core < 32 && (mask >> core) & 1 == 1
}

fn enabled_cores(table: &DecodedTable<'_>, disabled: u32) -> impl Iterator<Item = usize> {
    (0..table.core_count()).filter(move |&core| !is_disabled(disabled, core))
}
