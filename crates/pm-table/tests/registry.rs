// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Validate the built-in layout registry and custom registries.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use pm_table::{
    at, check_all, Field, Generation, Registry, Schema, SchemaError, SchemaFlags, BUILTIN,
    ELEMENT_WIDTH,
};

const SINGLE: Schema = Schema {
    version: 0x00FD_0001,
    generation: Generation::Zen1,
    core_capacity: 1,
    cache_capacity: 1,
    min_size: 4,
    flags: SchemaFlags::empty(),
    bindings: &[at(Field::SocketPower, 0)],
};

#[test]
fn builtin_layouts_pass_self_check() {
    for schema in BUILTIN {
        assert_eq!(schema.self_check(), Ok(()), "{:06X}", schema.version);
        assert_eq!(schema.min_size % ELEMENT_WIDTH, 0);
        assert_eq!(schema.min_size, schema.required_size());
    }
    assert_eq!(check_all(BUILTIN), Ok(()));
}

#[test]
fn builtin_versions_are_known() {
    let registry = Registry::builtin();
    let versions: Vec<u32> = registry.versions().collect();
    assert_eq!(
        versions,
        vec![
            0x0038_0804,
            0x0038_0805,
            0x0038_0904,
            0x0038_0905,
            0x0040_0005,
            0x0024_0903,
            0x0024_0803,
            0x0037_0003,
            0x0037_0005,
            0x001E_0004,
        ]
    );
    assert!(registry.supports(0x0037_0003));
    assert!(!registry.supports(0x0037_0004));
}

#[test]
fn corrected_layout_size_matches_bindings() {
    let schema = Registry::builtin().lookup(0x0037_0003).expect("registered");
    assert_eq!(schema.min_size, 2184);
}

#[test]
fn graphics_layouts_are_flagged() {
    let registry = Registry::builtin();
    let apu = registry.lookup(0x0040_0005).expect("registered");
    assert!(apu.has_graphics());
    assert!(apu.power_sum_unreliable());
    let desktop = registry.lookup(0x0038_0804).expect("registered");
    assert!(!desktop.has_graphics());
    assert_eq!(desktop.generation.number(), 3);
}

#[test]
fn repeated_version_is_rejected() {
    assert_eq!(
        Registry::new(&[&SINGLE, &SINGLE]).map(|_| ()),
        Err(SchemaError::DuplicateVersion {
            version: 0x00FD_0001
        })
    );
}

#[test]
fn inconsistent_layout_is_rejected() {
    const LOOSE: Schema = Schema {
        version: 0x00FD_0002,
        min_size: 16,
        ..SINGLE
    };
    assert!(matches!(
        Registry::new(&[&LOOSE]),
        Err(SchemaError::SizeMismatch {
            declared: 16,
            required: 4,
            ..
        })
    ));
}

#[test]
fn duplicate_scalar_is_rejected() {
    const TWICE: Schema = Schema {
        version: 0x00FD_0003,
        min_size: 8,
        bindings: &[at(Field::SocketPower, 0), at(Field::SocketPower, 1)],
        ..SINGLE
    };
    assert_eq!(
        TWICE.self_check(),
        Err(SchemaError::DuplicateBinding {
            version: 0x00FD_0003,
            label: "SOCKET_POWER"
        })
    );
}
