//! Registry error types

/// Registry error with code and message
///
/// Every variant is a misuse of the static parameter tables (bad key or
/// group name baked into calling code), not a runtime condition. None of
/// them are retried; out-of-range *persisted* values are handled by
/// falling back to the default instead (see [`crate::Registry::restore`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// E01: Key name not registered
    UnknownKey,
    /// E02: Mode-group name not registered
    UnknownGroup,
    /// E03: No label for this choice value
    InvalidChoice,
    /// E04: Parameter is not an enumerated choice
    NotEnumerated,
    /// E05: Value outside the parameter's valid range
    OutOfRange,
}

impl RegistryError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownKey => "E01",
            Self::UnknownGroup => "E02",
            Self::InvalidChoice => "E03",
            Self::NotEnumerated => "E04",
            Self::OutOfRange => "E05",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownKey => "unknown parameter key",
            Self::UnknownGroup => "unknown mode-group",
            Self::InvalidChoice => "no label for choice value",
            Self::NotEnumerated => "not an enumerated parameter",
            Self::OutOfRange => "value out of range",
        }
    }
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let all = [
            RegistryError::UnknownKey,
            RegistryError::UnknownGroup,
            RegistryError::InvalidChoice,
            RegistryError::NotEnumerated,
            RegistryError::OutOfRange,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_display_format() {
        let s = format!("{}", RegistryError::OutOfRange);
        assert_eq!(s, "E05: value out of range");
    }
}
