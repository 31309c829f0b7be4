//! Validation helpers — small reusable checks for parameters and mass inputs.
//!
//! Purpose
//! -------
//! Centralize the sanity checks applied at the edges of the occupation API:
//! parameter values entering a [`ParamSet`](crate::hod::core::params::ParamSet),
//! mass arrays crossing a language boundary, and log-mass grid requests.
//!
//! Conventions
//! -----------
//! - The moment functions themselves never validate masses; zero or negative
//!   masses there are the caller's responsibility. These helpers are called by
//!   constructors, grid builders, and the Python bindings only.
//! - Validation functions return [`HODResult`] and never panic.
//! - This module contains no I/O and no logging.
use crate::hod::errors::{HODError, HODResult};
use ndarray::ArrayView1;

/// Validate a single parameter value.
///
/// Returns
/// -------
/// - `Ok(value)` if `value` is finite.
/// - `Err(HODError::NonFiniteParameter)` otherwise.
///
/// Examples
/// --------
/// ```rust
/// # use halo_occupation::hod::core::validation::validate_parameter_value;
/// use halo_occupation::hod::errors::HODError;
///
/// assert_eq!(validate_parameter_value("alpha", 1.0), Ok(1.0));
/// assert!(matches!(
///     validate_parameter_value("alpha", f64::INFINITY),
///     Err(HODError::NonFiniteParameter { .. })
/// ));
/// ```
pub fn validate_parameter_value(key: &str, value: f64) -> HODResult<f64> {
    if !value.is_finite() {
        return Err(HODError::NonFiniteParameter { key: key.to_string(), value });
    }
    Ok(value)
}

/// Validate that every halo mass is finite and strictly positive.
///
/// Errors
/// ------
/// - [`HODError::NonPositiveMass`] for the first offending element.
pub fn validate_masses(masses: ArrayView1<f64>) -> HODResult<()> {
    for (index, &value) in masses.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(HODError::NonPositiveMass { index, value });
        }
    }
    Ok(())
}

/// Validate the bounds and size of a log10-mass grid.
///
/// Rules
/// -----
/// - `log_min` and `log_max` finite with `log_min < log_max`.
/// - `n >= 2`.
pub fn validate_grid(log_min: f64, log_max: f64, n: usize) -> HODResult<()> {
    if !log_min.is_finite() || !log_max.is_finite() {
        return Err(HODError::InvalidMassGrid {
            log_min,
            log_max,
            n,
            reason: "Grid bounds must be finite.",
        });
    }
    if log_min >= log_max {
        return Err(HODError::InvalidMassGrid {
            log_min,
            log_max,
            n,
            reason: "log_min must be strictly less than log_max.",
        });
    }
    if n < 2 {
        return Err(HODError::InvalidMassGrid {
            log_min,
            log_max,
            n,
            reason: "A grid needs at least two points.",
        });
    }
    Ok(())
}
