// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Exercise PM table decoding against built-in and ad-hoc layouts.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use pm_table::{
    at, decode, run, ArrayField, Certainty, DecodeError, Field, Generation, Registry, Schema,
    SchemaFlags, Slot, BUILTIN, MAX_CORES, PM_TABLE_370003, PM_TABLE_380804,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PPT_PAIR: Schema = Schema {
    version: 0x00FE_0001,
    generation: Generation::Zen3,
    core_capacity: 1,
    cache_capacity: 1,
    min_size: 8,
    flags: SchemaFlags::empty(),
    bindings: &[at(Field::PptLimit, 0), at(Field::PptValue, 1)],
};

const OVERSIZED: Schema = Schema {
    version: 0x00FE_0002,
    generation: Generation::Zen2,
    core_capacity: 32,
    cache_capacity: 8,
    min_size: 96,
    flags: SchemaFlags::empty(),
    bindings: &[
        run(ArrayField::CorePower, 0, 16),
        run(ArrayField::L3Temp, 16, 4),
        at(Field::PptLimit, 23),
    ],
};

const NARROW: Schema = Schema {
    version: 0x00FE_0003,
    generation: Generation::Zen2,
    core_capacity: 4,
    cache_capacity: 1,
    min_size: 32,
    flags: SchemaFlags::empty(),
    bindings: &[run(ArrayField::CoreTemp, 0, 8)],
};

fn floats(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn test_registry() -> Registry {
    Registry::new(&[&PPT_PAIR, &OVERSIZED, &NARROW]).expect("test layouts are consistent")
}

#[test]
fn ppt_pair_reads_both_fields() {
    let buffer = floats(&[65.0, 42.5]);
    let table = test_registry()
        .decode(PPT_PAIR.version, &buffer)
        .expect("decode");
    assert_eq!(table.value(Field::PptLimit), 65.0);
    assert_eq!(table.value(Field::PptValue), 42.5);
}

#[test]
fn ppt_pair_rejects_half_buffer() {
    let buffer = floats(&[65.0]);
    let err = test_registry()
        .decode(PPT_PAIR.version, &buffer)
        .expect_err("buffer is too short");
    assert_eq!(err, DecodeError::BufferTooSmall { needed: 8, got: 4 });
}

#[test]
fn unknown_version_is_rejected() {
    let buffer = vec![0u8; 4096];
    assert_eq!(
        decode(0x0012_3456, &buffer).map(|table| table.version()),
        Err(DecodeError::UnknownVersion(0x0012_3456))
    );
}

#[test]
fn every_builtin_layout_rejects_one_byte_short() {
    for schema in BUILTIN {
        let buffer = vec![0u8; schema.min_size - 1];
        assert_eq!(
            decode(schema.version, &buffer).map(|table| table.version()),
            Err(DecodeError::BufferTooSmall {
                needed: schema.min_size,
                got: schema.min_size - 1
            })
        );
    }
}

#[test]
fn absent_fields_ignore_buffer_contents() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0001);
    for schema in BUILTIN {
        let mut buffer = vec![0u8; schema.min_size + 64];
        for _ in 0..8 {
            rng.fill(&mut buffer[..]);
            let table = decode(schema.version, &buffer).expect("decode");
            for &field in Field::ALL {
                if table.slot(field) == Slot::Absent {
                    assert!(table.value(field).is_nan(), "{field} in {:06X}", schema.version);
                    assert_eq!(table.value_or_zero(field), 0.0);
                    assert_eq!(table.get(field), None);
                }
            }
        }
    }
}

#[test]
fn present_fields_read_back_what_was_written() {
    for schema in BUILTIN {
        let mut buffer = vec![0u8; schema.min_size];
        let elements = schema.min_size / 4;
        for index in 0..elements {
            let marker = index as f32 + 0.25;
            buffer[index * 4..index * 4 + 4].copy_from_slice(&marker.to_le_bytes());
        }
        let table = decode(schema.version, &buffer).expect("decode");
        for &field in Field::ALL {
            if let Some(offset) = table.slot(field).offset() {
                assert_eq!(table.value(field), (offset / 4) as f32 + 0.25, "{field}");
            }
        }
        for &field in ArrayField::ALL {
            for index in 0..field.capacity() {
                if let Some(offset) = table.element_slot(field, index).offset() {
                    assert_eq!(table.element(field, index), (offset / 4) as f32 + 0.25);
                }
            }
        }
    }
}

#[test]
fn capacities_are_clamped() {
    let buffer = vec![0u8; OVERSIZED.min_size];
    let table = test_registry()
        .decode(OVERSIZED.version, &buffer)
        .expect("decode");
    assert_eq!(table.core_count(), MAX_CORES);
    assert_eq!(table.cache_domain_count(), 4);
    assert!(table.has_element(ArrayField::CorePower, 15));
    assert!(!table.has_element(ArrayField::CorePower, 16));
    assert!(table.has_element(ArrayField::L3Temp, 3));
}

#[test]
fn core_elements_past_schema_capacity_are_absent() {
    let buffer = floats(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let table = test_registry()
        .decode(NARROW.version, &buffer)
        .expect("decode");
    assert_eq!(table.element(ArrayField::CoreTemp, 3), 4.0);
    assert!(table.element(ArrayField::CoreTemp, 4).is_nan());
    assert_eq!(table.element_or_zero(ArrayField::CoreTemp, 7), 0.0);
    assert_eq!(table.elements(ArrayField::CoreTemp).count(), 4);
}

#[test]
fn package_power_borrows_apml_power() {
    let mut buffer = vec![0u8; PM_TABLE_380804.min_size];
    buffer[147 * 4..148 * 4].copy_from_slice(&88.5f32.to_le_bytes());
    let table = decode(PM_TABLE_380804.version, &buffer).expect("decode");
    assert_eq!(table.value(Field::PackagePower), 88.5);
    let alias = table.alias_for(Field::PackagePower).expect("aliased");
    assert_eq!(alias.source, Field::ApmlPower);
    assert_eq!(alias.certainty, Certainty::Presumed);
}

#[test]
fn vdd18_power_borrows_io_rail() {
    let buffer = vec![0u8; PM_TABLE_370003.min_size];
    let table = decode(PM_TABLE_370003.version, &buffer).expect("decode");
    assert_eq!(
        table.slot(Field::Vdd18Power),
        table.slot(Field::IoVdd18Power)
    );
    assert!(table.alias_for(Field::Vdd18Power).is_some());
    assert!(table.alias_for(Field::PackagePower).is_none());
}

#[test]
fn native_fields_are_not_aliased() {
    let buffer = vec![0u8; PM_TABLE_380804.min_size];
    let table = decode(PM_TABLE_380804.version, &buffer).expect("decode");
    assert_eq!(table.slot(Field::Vdd18Power).offset(), Some(27 * 4));
    assert!(table.alias_for(Field::Vdd18Power).is_none());
}

#[test]
fn cezanne_gfx_and_vcn_busy_offsets() {
    let buffer = vec![0u8; pm_table::PM_TABLE_400005.min_size];
    let table = decode(pm_table::PM_TABLE_400005.version, &buffer).expect("decode");
    assert_eq!(table.slot(Field::GfxBusy).offset(), Some(404 * 4));
    assert_eq!(table.slot(Field::VcnBusy).offset(), Some(193 * 4));
}
