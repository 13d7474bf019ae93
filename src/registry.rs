//! Live configuration values.
//!
//! One [`AtomicI16`] cell per parameter, owned by a single [`Registry`]
//! and exposed as the [`CONFIG`] static. Keyer and timer interrupt
//! handlers read cells while the main loop writes them from the settings
//! UI; every value is a single bounded scalar, so a `Relaxed` load can
//! never observe a torn write. No locks.
//!
//! Writer discipline: the settings UI (main loop) is the only writer.
//! All writes go through [`Registry::set`] / [`Registry::restore`] so
//! range validation happens in exactly one place.

use core::sync::atomic::{AtomicI16, Ordering};

use crate::error::RegistryError;
use crate::params::{default_table, find_param, Param};

const DEFAULTS: [i16; Param::COUNT] = default_table();

/// Current value of every parameter.
///
/// Born holding factory defaults; the persistence collaborator overlays
/// stored values at boot via [`Registry::restore`] and flushes changed
/// cells back periodically.
pub struct Registry {
    values: [AtomicI16; Param::COUNT],
}

/// The device configuration. Single writer (settings UI), any number of
/// interrupt-context readers.
pub static CONFIG: Registry = Registry::new();

impl Registry {
    /// New registry with every cell at its factory default.
    pub const fn new() -> Self {
        let mut values = [const { AtomicI16::new(0) }; Param::COUNT];
        let mut i = 0;
        while i < Param::COUNT {
            values[i] = AtomicI16::new(DEFAULTS[i]);
            i += 1;
        }
        Self { values }
    }

    /// Current value. Safe from interrupt context.
    #[inline]
    pub fn get(&self, p: Param) -> i16 {
        self.values[p.index()].load(Ordering::Relaxed)
    }

    /// Current value of a boolean parameter.
    #[inline]
    pub fn get_bool(&self, p: Param) -> bool {
        self.get(p) != 0
    }

    /// Set a value, rejecting anything outside the parameter's range.
    ///
    /// This is the only mutation path the settings UI uses, so bounds
    /// are enforced uniformly rather than at each call site.
    pub fn set(&self, p: Param, value: i16) -> Result<(), RegistryError> {
        if !p.validate(value) {
            return Err(RegistryError::OutOfRange);
        }
        self.values[p.index()].store(value, Ordering::Relaxed);
        Ok(())
    }

    /// Install a value restored from storage.
    ///
    /// A value that fails validation (corrupted storage, or a range
    /// narrowed by a firmware update) is replaced by the factory
    /// default; this is an expected condition, not an error. Returns
    /// the value actually installed.
    pub fn restore(&self, p: Param, value: i16) -> i16 {
        let v = if p.validate(value) { value } else { p.default_value() };
        self.values[p.index()].store(v, Ordering::Relaxed);
        v
    }

    /// Reset one parameter to its factory default, returning it.
    pub fn restore_default(&self, p: Param) -> i16 {
        let v = p.default_value();
        self.values[p.index()].store(v, Ordering::Relaxed);
        v
    }

    /// Reset every parameter to factory defaults (the "restore
    /// defaults" menu action, also used after a storage-format reset).
    pub fn restore_defaults(&self) {
        for p in Param::ALL {
            self.restore_default(p);
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// --- Name-keyed surface for the persistence and console collaborators ---

/// Factory default by storage key name.
pub fn get_default(name: &str) -> Result<i16, RegistryError> {
    find_param(name)
        .map(|d| d.default)
        .ok_or(RegistryError::UnknownKey)
}

/// Inclusive bounds by storage key name.
pub fn get_valid_range(name: &str) -> Result<(i16, i16), RegistryError> {
    find_param(name)
        .map(|d| d.param_type.bounds())
        .ok_or(RegistryError::UnknownKey)
}

/// Range check by storage key name. `Ok(false)` is an out-of-range
/// value (the caller rejects or falls back to the default);
/// `Err(UnknownKey)` is a bad key baked into the calling code.
pub fn validate(name: &str, value: i16) -> Result<bool, RegistryError> {
    find_param(name)
        .map(|d| d.param.validate(value))
        .ok_or(RegistryError::UnknownKey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_holds_defaults() {
        let reg = Registry::new();
        for p in Param::ALL {
            assert_eq!(reg.get(p), p.default_value(), "{:?}", p);
        }
    }

    #[test]
    fn test_set_and_get() {
        let reg = Registry::new();
        reg.set(Param::Wpm, 22).unwrap();
        assert_eq!(reg.get(Param::Wpm), 22);
        reg.set(Param::Polarity, 0).unwrap();
        assert!(!reg.get_bool(Param::Polarity));
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let reg = Registry::new();
        assert_eq!(reg.set(Param::Wpm, 61), Err(RegistryError::OutOfRange));
        assert_eq!(reg.set(Param::Wpm, 4), Err(RegistryError::OutOfRange));
        // rejected write leaves the cell untouched
        assert_eq!(reg.get(Param::Wpm), 15);
        assert!(reg.set(Param::Wpm, 60).is_ok());
        assert!(reg.set(Param::Wpm, 5).is_ok());
    }

    #[test]
    fn test_restore_accepts_valid_value() {
        let reg = Registry::new();
        assert_eq!(reg.restore(Param::KochLesson, 27), 27);
        assert_eq!(reg.get(Param::KochLesson), 27);
    }

    #[test]
    fn test_restore_falls_back_on_corrupt_value() {
        let reg = Registry::new();
        reg.set(Param::Volume, 8).unwrap();
        // a stored value of 99 cannot have come from this firmware
        assert_eq!(reg.restore(Param::Volume, 99), 5);
        assert_eq!(reg.get(Param::Volume), 5);
    }

    #[test]
    fn test_restore_defaults_resets_everything() {
        let reg = Registry::new();
        reg.set(Param::Wpm, 30).unwrap();
        reg.set(Param::EchoRepeats, 7).unwrap();
        reg.set(Param::SpeedAdapt, 1).unwrap();
        reg.restore_defaults();
        for p in Param::ALL {
            assert_eq!(reg.get(p), p.default_value(), "{:?}", p);
        }
    }

    #[test]
    fn test_name_keyed_lookups() {
        assert_eq!(get_default("wpm"), Ok(15));
        assert_eq!(get_valid_range("wpm"), Ok((5, 60)));
        assert_eq!(validate("wpm", 60), Ok(true));
        assert_eq!(validate("wpm", 61), Ok(false));
        assert_eq!(get_default("qrg"), Err(RegistryError::UnknownKey));
        assert_eq!(get_valid_range("qrg"), Err(RegistryError::UnknownKey));
        assert_eq!(validate("qrg", 0), Err(RegistryError::UnknownKey));
    }
}
