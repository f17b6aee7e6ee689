// src/numerics/config.rs

//! Validation configuration for the numerics kernel.
//!
//! Constructors and operations with preconditions (finite payloads, non-zero
//! length, unit length, in-range indices) report violations through a single
//! routine whose behaviour is chosen by the caller:
//!
//! - [`ValidationMode::Strict`] panics on the first violation,
//! - [`ValidationMode::Warn`] logs it with `tracing` and carries on,
//! - [`ValidationMode::Off`] skips the check entirely.
//!
//! The process-wide mode starts from the `strict-validation` cargo feature
//! and can be replaced with [`NumericsConfig::install`]. A thread can
//! temporarily override it with [`with_validation_mode`].

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::numerics::error::NumericsError;

/// Environment variable read by [`NumericsConfig::from_env`].
pub const VALIDATION_ENV_VAR: &str = "LUMEN_VALIDATION";

/// How contract violations are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValidationMode {
    /// Checks are skipped.
    Off = 0,
    /// Violations are logged at warn level.
    Warn = 1,
    /// Violations panic.
    Strict = 2,
}

static GLOBAL_MODE: AtomicU8 = AtomicU8::new(ValidationMode::compiled_default() as u8);

thread_local! {
    static THREAD_OVERRIDE: Cell<Option<ValidationMode>> = const { Cell::new(None) };
}

impl ValidationMode {
    /// Mode selected by the cargo features this crate was built with.
    pub const fn compiled_default() -> Self {
        if cfg!(feature = "strict-validation") {
            ValidationMode::Strict
        } else {
            ValidationMode::Off
        }
    }

    /// Mode in effect on the calling thread.
    pub fn current() -> Self {
        THREAD_OVERRIDE
            .with(Cell::get)
            .unwrap_or_else(Self::global)
    }

    /// Process-wide mode, ignoring any thread override.
    pub fn global() -> Self {
        Self::from_u8(GLOBAL_MODE.load(Ordering::Relaxed))
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => ValidationMode::Off,
            1 => ValidationMode::Warn,
            _ => ValidationMode::Strict,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Off => "off",
            ValidationMode::Warn => "warn",
            ValidationMode::Strict => "strict",
        }
    }
}

impl Default for ValidationMode {
    fn default() -> Self {
        Self::compiled_default()
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = NumericsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(ValidationMode::Off),
            "warn" => Ok(ValidationMode::Warn),
            "strict" => Ok(ValidationMode::Strict),
            _ => Err(NumericsError::InvalidValidationMode(s.to_string())),
        }
    }
}

/// Configuration for the numerics kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericsConfig {
    /// How contract violations are reported.
    pub validation: ValidationMode,
}

impl Default for NumericsConfig {
    /// Uses the mode selected by the `strict-validation` cargo feature.
    fn default() -> Self {
        Self {
            validation: ValidationMode::compiled_default(),
        }
    }
}

impl NumericsConfig {
    pub fn new(validation: ValidationMode) -> Self {
        Self { validation }
    }

    /// Panic on every contract violation.
    pub fn strict() -> Self {
        Self::new(ValidationMode::Strict)
    }

    /// Log contract violations and keep going.
    pub fn permissive() -> Self {
        Self::new(ValidationMode::Warn)
    }

    /// Skip contract checks, for hot loops over already validated data.
    pub fn unchecked() -> Self {
        Self::new(ValidationMode::Off)
    }

    /// Read the mode from `LUMEN_VALIDATION`, falling back to the default
    /// when the variable is unset.
    pub fn from_env() -> Result<Self, NumericsError> {
        match std::env::var(VALIDATION_ENV_VAR) {
            Ok(value) => Ok(Self::new(value.parse()?)),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Configuration currently in effect process-wide.
    pub fn current() -> Self {
        Self::new(ValidationMode::global())
    }

    /// Publish this configuration process-wide and return the previous mode.
    pub fn install(&self) -> ValidationMode {
        let previous = ValidationMode::from_u8(
            GLOBAL_MODE.swap(self.validation as u8, Ordering::Relaxed),
        );
        tracing::trace!(%previous, current = %self.validation, "validation mode installed");
        previous
    }
}

/// Restores the previous thread override when dropped.
struct OverrideGuard(Option<ValidationMode>);

impl Drop for OverrideGuard {
    fn drop(&mut self) {
        let previous = self.0;
        THREAD_OVERRIDE.with(|cell| cell.set(previous));
    }
}

/// Run `f` with `mode` in effect on the calling thread only.
pub fn with_validation_mode<R>(mode: ValidationMode, f: impl FnOnce() -> R) -> R {
    let _guard = OverrideGuard(THREAD_OVERRIDE.with(|cell| cell.replace(Some(mode))));
    f()
}

/// Report a violated contract according to the current mode.
///
/// `holds` is only evaluated when checks are enabled.
#[track_caller]
pub fn ensure(holds: impl FnOnce() -> bool, violation: fmt::Arguments<'_>) {
    let mode = ValidationMode::current();
    if mode == ValidationMode::Off || holds() {
        return;
    }

    match mode {
        ValidationMode::Strict => panic!("contract violation: {violation}"),
        ValidationMode::Warn => {
            let location = std::panic::Location::caller();
            tracing::warn!(%location, "contract violation: {}", violation);
        }
        ValidationMode::Off => {}
    }
}

macro_rules! contract {
    ($holds:expr, $($violation:tt)+) => {
        $crate::numerics::config::ensure(|| $holds, format_args!($($violation)+))
    };
}

pub(crate) use contract;
