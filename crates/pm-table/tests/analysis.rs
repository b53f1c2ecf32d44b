// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Check derived core and package figures on a synthetic four-core table.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use pm_table::analysis::{self, CoreState};
use pm_table::{at, run, ArrayField, Field, Generation, Registry, Schema, SchemaFlags};

const QUAD: Schema = Schema {
    version: 0x00FC_0004,
    generation: Generation::Zen3,
    core_capacity: 4,
    cache_capacity: 1,
    min_size: 140,
    flags: SchemaFlags::empty(),
    bindings: &[
        run(ArrayField::CorePower, 0, 4),
        run(ArrayField::CoreVoltage, 4, 4),
        run(ArrayField::CoreTemp, 8, 4),
        run(ArrayField::CoreFreqeff, 12, 4),
        run(ArrayField::CoreC0, 16, 4),
        run(ArrayField::CoreCc6, 20, 4),
        at(Field::TdcValue, 24),
        at(Field::EdcValue, 25),
        at(Field::PptLimit, 26),
        at(Field::PptValue, 27),
        at(Field::UclkFreq, 28),
        at(Field::MemclkFreq, 29),
        run(ArrayField::ThmValueCores, 30, 4),
        at(Field::Pc6, 34),
    ],
};

fn quad_buffer() -> Vec<u8> {
    let values: [f32; 35] = [
        10.0, 8.0, 1.0, 0.0, // power
        1.2, 1.1, 1.0, 0.0, // voltage
        70.0, 65.0, 50.0, 0.0, // temperature
        4.5, 4.25, 0.5, 0.0, // effective clock, GHz
        90.0, 50.0, 3.0, 0.0, // C0
        0.0, 50.0, 0.0, 0.0, // CC6
        40.0, 100.0, 142.0, 71.0, 1800.0, 1800.0, // TDC EDC PPT UCLK MEMCLK
        60.0, 72.0, 55.0, 0.0, // THM per core
        25.0, // PC6
    ];
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn close(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 1e-4
}

#[test]
fn all_zero_core_is_disabled() {
    let buffer = quad_buffer();
    let registry = Registry::new(&[&QUAD]).expect("layout");
    let table = registry.decode(QUAD.version, &buffer).expect("decode");
    assert_eq!(analysis::disabled_core_mask(&table), 0b1000);
}

#[test]
fn core_states_follow_c0_residency() {
    let buffer = quad_buffer();
    let registry = Registry::new(&[&QUAD]).expect("layout");
    let table = registry.decode(QUAD.version, &buffer).expect("decode");
    let mask = analysis::disabled_core_mask(&table);
    let states: Vec<CoreState> = analysis::cores(&table, mask).map(|core| core.state).collect();
    assert_eq!(
        states,
        vec![
            CoreState::Active {
                frequency_mhz: 4500.0
            },
            CoreState::Active {
                frequency_mhz: 4250.0
            },
            CoreState::Sleeping,
            CoreState::Disabled,
        ]
    );
}

#[test]
fn voltages_are_corrected_for_sleep() {
    let buffer = quad_buffer();
    let registry = Registry::new(&[&QUAD]).expect("layout");
    let table = registry.decode(QUAD.version, &buffer).expect("decode");
    let package = analysis::package_voltage(&table, 0b1000);
    assert!(close(package, 1.4), "package voltage {package}");
    assert!(close(analysis::core_voltage(&table, 0, package), 1.2));
    assert!(close(analysis::core_voltage(&table, 1, package), 0.8));
}

#[test]
fn summary_covers_enabled_cores_only() {
    let buffer = quad_buffer();
    let registry = Registry::new(&[&QUAD]).expect("layout");
    let table = registry.decode(QUAD.version, &buffer).expect("decode");
    let summary = analysis::summarize(&table, 0b1000);
    assert_eq!(summary.enabled, 3);
    assert!(close(summary.peak_frequency_mhz, 4500.0));
    assert!(close(summary.peak_temperature, 70.0));
    assert!(close(summary.peak_voltage, 1.2));
    assert!(close(summary.average_voltage, 1.0));
    assert!(close(summary.total_power, 19.0));
    assert!(close(summary.total_usage, 143.0));
    assert!(close(summary.average_cc6, 50.0 / 3.0));
    assert_eq!(analysis::thermal_output(&table, &summary), Some(summary.total_power));
}

#[test]
fn limits_fall_back_when_fields_are_missing() {
    let buffer = quad_buffer();
    let registry = Registry::new(&[&QUAD]).expect("layout");
    let table = registry.decode(QUAD.version, &buffer).expect("decode");
    let summary = analysis::summarize(&table, 0b1000);
    assert!(close(analysis::thermal_value(&table), 72.0));
    assert!(close(analysis::edc_estimate(&table, &summary), 100.0 * 143.0 / 3.0 / 100.0));
    assert!(close(analysis::apu_ppt_limit(&table), 142.0));
    assert!(close(
        analysis::usage_percent(table.value(Field::PptValue), table.value(Field::PptLimit)),
        50.0
    ));
    assert_eq!(analysis::coupled_mode(&table), Some(true));
    assert!(close(analysis::reported_peak_voltage(&table, &summary), 1.2));
}

#[test]
fn unreliable_power_sum_is_withheld() {
    const APU: Schema = Schema {
        version: 0x00FC_0005,
        flags: SchemaFlags::POWER_SUM_UNRELIABLE,
        ..QUAD
    };
    let buffer = quad_buffer();
    let registry = Registry::new(&[&APU]).expect("layout");
    let table = registry.decode(APU.version, &buffer).expect("decode");
    let summary = analysis::summarize(&table, 0);
    assert_eq!(analysis::thermal_output(&table, &summary), None);
}
