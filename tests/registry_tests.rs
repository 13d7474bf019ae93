//! Integration tests for the configuration registry
//!
//! Tests the complete registry contract:
//! - Every default lies inside its own valid range
//! - Choice parameters label every in-range value
//! - Lookup determinism and idempotence
//! - Storage-restore fallback behavior

use morse_practice_config::{
    find_param, get_default, get_valid_range, param_names, validate, KeyerMode, Param, Registry,
    RegistryError, CONFIG, PARAMS, SIDETONE_NOTES,
};

#[test]
fn test_every_default_validates() {
    for p in Param::ALL {
        assert!(
            p.validate(p.default_value()),
            "{:?}: default {} outside range {:?}",
            p,
            p.default_value(),
            p.valid_range()
        );
    }
}

#[test]
fn test_default_lookup_is_idempotent() {
    for p in Param::ALL {
        let first = p.default_value();
        for _ in 0..3 {
            assert_eq!(p.default_value(), first);
        }
    }
}

#[test]
fn test_every_choice_value_has_a_label() {
    for d in PARAMS.iter() {
        if !d.param_type.is_choice() {
            continue;
        }
        let (min, max) = d.param.valid_range();
        for v in min..=max {
            let label = d.param.label_for_choice(v).unwrap();
            assert!(!label.is_empty(), "{:?} value {} has empty label", d.param, v);
        }
    }
}

#[test]
fn test_keyer_mode_scenario() {
    // Valid range {1..5}, value 2 is Curtis B
    assert_eq!(Param::KeyerMode.valid_range(), (1, 5));
    assert_eq!(Param::KeyerMode.label_for_choice(2).unwrap(), "Curtis B");
    assert_eq!(KeyerMode::from_value(2), Some(KeyerMode::CurtisB));
}

#[test]
fn test_wpm_scenario() {
    assert_eq!(Param::Wpm.default_value(), 15);
    assert_eq!(Param::Wpm.valid_range(), (5, 60));
    assert!(Param::Wpm.validate(60));
    assert!(!Param::Wpm.validate(61));
}

#[test]
fn test_corrupt_storage_falls_back_to_default() {
    let reg = Registry::new();
    // wpm=200 cannot have been written by this firmware: validate
    // rejects it and restore installs the default instead
    assert!(!Param::Wpm.validate(200));
    assert_eq!(reg.restore(Param::Wpm, 200), Param::Wpm.default_value());
    assert_eq!(reg.get(Param::Wpm), 15);

    // an in-range stored value survives the round trip untouched
    assert_eq!(reg.restore(Param::Wpm, 24), 24);
    assert_eq!(reg.get(Param::Wpm), 24);
}

#[test]
fn test_config_static_boots_with_defaults() {
    // read-only: CONFIG is shared across the test binary
    assert_eq!(CONFIG.get(Param::Pitch), 4);
    assert_eq!(CONFIG.get(Param::KeyerMode), 2);
    assert!(CONFIG.get_bool(Param::Polarity));
}

#[test]
fn test_name_keyed_surface_matches_typed_surface() {
    for d in PARAMS.iter() {
        assert_eq!(get_default(d.nvs_key), Ok(d.default));
        assert_eq!(get_valid_range(d.nvs_key), Ok(d.param.valid_range()));
        assert_eq!(validate(d.nvs_key, d.default), Ok(true));
        assert_eq!(find_param(d.nvs_key).unwrap().param, d.param);
    }
    assert_eq!(get_default("wlanssid"), Err(RegistryError::UnknownKey));
}

#[test]
fn test_storage_slot_per_key() {
    // the persistence layer allocates one slot per name; names must be
    // complete and collision-free
    let names: Vec<&str> = param_names().collect();
    assert_eq!(names.len(), Param::COUNT);
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len(), "duplicate storage key");
}

#[test]
fn test_sentinel_values_are_in_range() {
    // 0 = off / unlimited stays a legal magnitude, for compatibility
    // with data already in the field
    assert!(Param::Volume.validate(0));
    assert!(Param::AutoCharSpace.validate(0));
    assert!(Param::WordLength.validate(0));
    assert!(Param::MaxSequence.validate(0));
    // echo repeats: 7 = forever
    assert!(Param::EchoRepeats.validate(7));
}

#[test]
fn test_pitch_index_stays_within_note_table() {
    let (min, max) = Param::Pitch.valid_range();
    assert_eq!(min, 0);
    assert_eq!(max as usize, SIDETONE_NOTES.len() - 1);
    assert_eq!(SIDETONE_NOTES[Param::Pitch.default_value() as usize], 784);
}
