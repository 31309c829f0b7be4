//! Errors for halo occupation models (parameter merging, model lookup,
//! configuration parsing, and mass-grid checks).
//!
//! This module defines the model error type, [`HODError`], used across the
//! Rust API and, when the `python-bindings` feature is enabled, converted to a
//! Python `ValueError` at the PyO3 boundary.
//!
//! ## Conventions
//! - Mass parameters are **log10 masses** (e.g. `M_min = 11.6222`); halo masses
//!   passed to the moment functions are linear.
//! - Configuration errors are fatal and surface at construction time. Numerical
//!   domain issues inside the occupation formulas are *not* errors; they
//!   propagate as IEEE special values.
//! - Indices are 0-based.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Crate-wide result alias for operations that may produce [`HODError`].
pub type HODResult<T> = Result<T, HODError>;

/// Unified error type for occupation modeling.
#[derive(Debug, Clone, PartialEq)]
pub enum HODError {
    // ---- Parameter management ----
    /// An override (or a lookup) names a parameter the model does not declare.
    UnknownParameter { model: &'static str, key: String },

    /// A parameter value is NaN/±inf.
    NonFiniteParameter { key: String, value: f64 },

    // ---- Model registry / configuration ----
    /// No model is registered under this name.
    UnknownModel { name: String },

    /// A configuration document could not be parsed.
    ConfigParse { reason: String },

    // ---- Mass grids ----
    /// Mass-grid bounds or size are unusable.
    InvalidMassGrid { log_min: f64, log_max: f64, n: usize, reason: &'static str },

    /// A halo mass is ≤ 0 or non-finite (checked only at API boundaries).
    NonPositiveMass { index: usize, value: f64 },
}

impl std::error::Error for HODError {}

impl std::fmt::Display for HODError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Parameter management ----
            HODError::UnknownParameter { model, key } => {
                write!(f, "Model {model} has no parameter named '{key}'.")
            }
            HODError::NonFiniteParameter { key, value } => {
                write!(f, "Parameter '{key}' must be finite; got: {value}")
            }
            // ---- Model registry / configuration ----
            HODError::UnknownModel { name } => {
                write!(f, "No occupation model is registered under the name '{name}'.")
            }
            HODError::ConfigParse { reason } => {
                write!(f, "Failed to parse occupation model configuration: {reason}")
            }
            // ---- Mass grids ----
            HODError::InvalidMassGrid { log_min, log_max, n, reason } => {
                write!(
                    f,
                    "Invalid mass grid (log_min = {log_min}, log_max = {log_max}, n = {n}): {reason}"
                )
            }
            HODError::NonPositiveMass { index, value } => {
                write!(f, "Halo mass at index {index} must be finite and > 0; got: {value}")
            }
        }
    }
}

/// Convert an [`HODError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<HODError> for PyErr {
    fn from(err: HODError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<toml::de::Error> for HODError {
    fn from(err: toml::de::Error) -> HODError {
        HODError::ConfigParse { reason: err.to_string() }
    }
}
