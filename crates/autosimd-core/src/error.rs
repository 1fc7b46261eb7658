//! Error types for autosimd
//!
//! Vector arithmetic itself cannot fail. Errors only come from the memory
//! layout views and from checking the build's instruction sets against the
//! running CPU.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Slice start does not satisfy the vector alignment
    #[error("Misaligned slice: address {address:#x} is not a multiple of {required}")]
    Misaligned { address: usize, required: usize },

    /// Slice length is not a whole number of vectors
    #[error("Length mismatch: {len} lanes is not a multiple of vector width {width}")]
    LengthMismatch { len: usize, width: usize },

    /// Instruction set compiled in but missing on this CPU
    #[error("Feature not available: {0}")]
    FeatureNotAvailable(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a pointer that misses the required alignment
    pub fn misaligned<T>(ptr: *const T, required: usize) -> Self {
        Self::Misaligned {
            address: ptr as usize,
            required,
        }
    }

    /// Create an error for a lane count that does not divide into vectors
    pub fn length_mismatch(len: usize, width: usize) -> Self {
        Self::LengthMismatch { len, width }
    }

    /// Create an error for an instruction set the CPU lacks
    pub fn feature_not_available(feature: &str) -> Self {
        Self::FeatureNotAvailable(format!(
            "binary was built with `{feature}` but the CPU does not support it"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Misaligned {
            address: 0x1008,
            required: 16,
        };
        assert_eq!(
            err.to_string(),
            "Misaligned slice: address 0x1008 is not a multiple of 16"
        );

        let err = Error::LengthMismatch { len: 5, width: 2 };
        assert_eq!(
            err.to_string(),
            "Length mismatch: 5 lanes is not a multiple of vector width 2"
        );

        let err = Error::FeatureNotAvailable("avx512f".to_string());
        assert_eq!(err.to_string(), "Feature not available: avx512f");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::misaligned(0x40 as *const f64, 64);
        assert_eq!(
            err,
            Error::Misaligned {
                address: 0x40,
                required: 64
            }
        );

        let err = Error::length_mismatch(7, 4);
        assert!(matches!(err, Error::LengthMismatch { len: 7, width: 4 }));

        let err = Error::feature_not_available("fma");
        assert_eq!(
            err.to_string(),
            "Feature not available: binary was built with `fma` but the CPU does not support it"
        );
    }
}
