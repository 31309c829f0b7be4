//! Conversion helpers for the Python boundary.
//!
//! Everything here is compiled only with the `python-bindings` feature and is
//! used by the `#[pyclass]` wrappers in the crate root.
#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::{PyAny, PyDict},
};

#[cfg(feature = "python-bindings")]
use crate::hod::core::{params::ParamSet, validation::validate_masses};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Borrow or copy a 1-D float64 array from a numpy array, a pandas Series, or
/// any float sequence.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Extract halo masses and check they are finite and strictly positive.
///
/// A Python float is accepted as a one-element array.
#[cfg(feature = "python-bindings")]
pub fn extract_masses<'py>(py: Python<'py>, raw: &Bound<'py, PyAny>) -> PyResult<Array1<f64>> {
    let masses = match raw.extract::<f64>() {
        Ok(m) => Array1::from_elem(1, m),
        Err(_) => extract_f64_array(py, raw)?.as_array().to_owned(),
    };
    validate_masses(masses.view())?;
    Ok(masses)
}

/// Collect `**params` keyword arguments into a [`ParamSet`].
///
/// Values must be convertible to `float`; key validity is checked later by the
/// model constructor.
#[cfg(feature = "python-bindings")]
pub fn extract_params(kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<ParamSet> {
    let mut params = ParamSet::new();
    let Some(kwargs) = kwargs else {
        return Ok(params);
    };
    for (key, value) in kwargs.iter() {
        let key: String = key.extract()?;
        let value: f64 = value.extract().map_err(|_| {
            PyValueError::new_err(format!("parameter '{key}' must be a float"))
        })?;
        params.insert(&key, value);
    }
    Ok(params)
}
