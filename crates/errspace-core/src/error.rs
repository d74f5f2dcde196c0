//! Error types for registry construction and installation

use core::fmt;

/// Result type for registry setup operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while building or installing an error registry.
///
/// Resolution itself never fails; only setup does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A process-wide registry was already installed (or already used)
    AlreadyInitialized,

    /// Two entries share a code (strict mode only)
    DuplicateCode {
        code: i32,
        first: &'static str,
        second: &'static str,
    },

    /// An application entry uses a code reserved for the platform (strict mode only)
    CodeOutOfRange {
        code: i32,
        name: &'static str,
        base: i32,
    },

    /// An entry has an empty message
    EmptyMessage {
        code: i32,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::AlreadyInitialized => write!(f, "error registry already initialized"),
            RegistryError::DuplicateCode { code, first, second } => {
                write!(f, "duplicate error code {}: {} and {}", code, first, second)
            }
            RegistryError::CodeOutOfRange { code, name, base } => {
                write!(f, "error code {} ({}) is below the application base {}", code, name, base)
            }
            RegistryError::EmptyMessage { code } => write!(f, "error code {} has an empty message", code),
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RegistryError::AlreadyInitialized.to_string(),
            "error registry already initialized"
        );

        let e = RegistryError::DuplicateCode { code: 2018, first: "A", second: "B" };
        assert_eq!(e.to_string(), "duplicate error code 2018: A and B");

        let e = RegistryError::CodeOutOfRange { code: 12, name: "ERR_X", base: 1000 };
        assert_eq!(e.to_string(), "error code 12 (ERR_X) is below the application base 1000");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<RegistryError>();
    }
}
