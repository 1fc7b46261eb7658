//! Checking the build's instruction sets against the running CPU
//!
//! Specializations are chosen when the crate is compiled. A binary built with
//! `-C target-feature=+avx` still starts on a CPU without AVX and then dies on
//! the first vector instruction. [`verify_cpu_support`] lets an application
//! catch that at startup with a proper error instead. It never changes which
//! vector types are used.

use crate::error::{Error, Result};
use crate::primitives::{backend_name, native_backend_name, BackendInfo};

/// One instruction set the build depends on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Requirement {
    /// Feature name as spelled in `target_feature`
    pub feature: &'static str,
    /// Whether the build enabled it
    pub compiled: bool,
    /// Whether the running CPU reports it
    pub detected: bool,
}

impl Requirement {
    /// Compiled in but missing at runtime
    pub fn is_missing(&self) -> bool {
        self.compiled && !self.detected
    }
}

/// First requirement compiled in but not detected, as an error
pub fn check(requirements: &[Requirement]) -> Result<()> {
    match requirements.iter().find(|r| r.is_missing()) {
        Some(r) => Err(Error::feature_not_available(r.feature)),
        None => Ok(()),
    }
}

/// Instruction sets the enabled specializations rely on, with runtime status
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn requirements() -> Vec<Requirement> {
    vec![
        Requirement {
            feature: "sse2",
            compiled: cfg!(target_feature = "sse2"),
            detected: std::arch::is_x86_feature_detected!("sse2"),
        },
        Requirement {
            feature: "avx",
            compiled: cfg!(target_feature = "avx"),
            detected: std::arch::is_x86_feature_detected!("avx"),
        },
        Requirement {
            feature: "fma",
            compiled: cfg!(target_feature = "fma"),
            detected: std::arch::is_x86_feature_detected!("fma"),
        },
        Requirement {
            feature: "avx512f",
            compiled: cfg!(all(target_feature = "avx512f", feature = "avx512")),
            detected: std::arch::is_x86_feature_detected!("avx512f"),
        },
    ]
}

/// Instruction sets the enabled specializations rely on, with runtime status
#[cfg(target_arch = "aarch64")]
pub fn requirements() -> Vec<Requirement> {
    vec![Requirement {
        feature: "neon",
        compiled: cfg!(target_feature = "neon"),
        detected: std::arch::is_aarch64_feature_detected!("neon"),
    }]
}

/// Instruction sets the enabled specializations rely on, with runtime status
///
/// Other targets cannot query the CPU, so whatever the build enabled is
/// taken as present.
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
pub fn requirements() -> Vec<Requirement> {
    Vec::new()
}

/// Verify the running CPU supports every instruction set the build uses
///
/// # Errors
/// [`Error::FeatureNotAvailable`] naming the first missing feature
pub fn verify_cpu_support() -> Result<()> {
    check(&requirements())
}

/// Log the selected specializations and the CPU check outcome
///
/// Goes through the `log` facade; nothing is printed unless the application
/// installed a logger.
pub fn log_configuration() {
    log::debug!(
        "autosimd {}: f64 native {:?}, f32 native {:?}",
        crate::VERSION,
        BackendInfo::native::<f64>(),
        BackendInfo::native::<f32>()
    );
    log::debug!(
        "autosimd width 1: f64 -> {}, f32 -> {}",
        backend_name::<f64, 1>(),
        backend_name::<f32, 1>()
    );

    for r in requirements() {
        log::debug!(
            "target feature {}: compiled={} detected={}",
            r.feature,
            r.compiled,
            r.detected
        );
    }

    match verify_cpu_support() {
        Ok(()) => log::debug!(
            "CPU supports the {} backend",
            native_backend_name::<f64>()
        ),
        Err(e) => log::warn!("{e}"),
    }
}
