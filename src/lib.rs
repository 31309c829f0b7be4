//! halo_occupation — halo occupation distribution models with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the occupation models to Python via the `_halo_occupation` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the [`hod`] module as the public crate surface.
//! - Define the `HOD` `#[pyclass]` wrapper and the `#[pymodule]` initializer
//!   when the `python-bindings` feature is enabled.
//! - Register the `models` submodule under `halo_occupation` so that dotted
//!   imports work from Python.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in [`hod`]; this file performs only FFI glue,
//!   input validation, and error mapping.
//! - Masses arriving from Python are checked (finite, strictly positive)
//!   before evaluation; Rust callers are trusted.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are [`hod::errors::HODError`] values and are
//!   converted to Python `ValueError`s at the boundary.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   integration and property tests under `tests/`.

pub mod hod;
pub mod utils;

#[cfg(feature = "python-bindings")]
use std::collections::BTreeMap;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{
    prelude::*,
    types::{PyAny, PyDict},
};

#[cfg(feature = "python-bindings")]
use crate::{
    hod::{
        config::HODConfig,
        core::{
            context::{Cosmology, HaloContext},
            grid::{Moment, evaluate},
            model::OccupationModel,
        },
        models::registry::ModelKind,
    },
    utils::{extract_masses, extract_params},
};

/// HOD — Python-facing wrapper for any registered occupation model.
///
/// Purpose
/// -------
/// Build an occupation model by name and evaluate its moments on arrays of
/// halo masses from Python.
///
/// Parameters
/// ----------
/// Constructed from Python via `HOD(model, central=False, **params)`:
/// - `model`: `str`
///   Registry name, case-insensitive (e.g. `"Zehavi05"`, `"zheng05"`).
/// - `central`: `bool`
///   Request the central condition.
/// - `**params`: `float`
///   Parameter overrides; unknown names raise `ValueError`.
///
/// or via `HOD.from_toml(source)` with a configuration document.
///
/// Invariants
/// ----------
/// - `inner` is fully constructed; moment methods never fail except on
///   invalid mass input.
///
/// Notes
/// -----
/// - Every moment method accepts a float, a 1-D numpy array, a pandas Series,
///   or a float sequence, and returns a 1-D numpy array of the same length.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "halo_occupation.models")]
pub struct HOD {
    inner: Box<dyn OccupationModel>,
}

#[cfg(feature = "python-bindings")]
impl HOD {
    fn moment<'py>(
        &self, py: Python<'py>, masses: &Bound<'py, PyAny>, moment: Moment,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let masses = extract_masses(py, masses)?;
        Ok(evaluate(self.inner.as_ref(), moment, masses.view()).into_pyarray(py))
    }
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl HOD {
    #[new]
    #[pyo3(
        signature = (model, central = false, **params),
        text_signature = "(model, /, central=False, **params)"
    )]
    pub fn new(model: &str, central: bool, params: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let kind: ModelKind = model.parse()?;
        let overrides = extract_params(params)?;
        let inner = kind.build(central, HaloContext::default(), &overrides)?;
        Ok(HOD { inner })
    }

    /// Build from a TOML configuration document.
    #[staticmethod]
    pub fn from_toml(source: &str) -> PyResult<Self> {
        let inner = HODConfig::from_toml_str(source)?.build()?;
        Ok(HOD { inner })
    }

    /// Names of every registered model.
    #[staticmethod]
    pub fn available_models() -> Vec<&'static str> {
        ModelKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    #[getter]
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Merged parameter values.
    #[getter]
    pub fn params(&self) -> BTreeMap<String, f64> {
        self.inner.params().iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[getter]
    pub fn central_enforced(&self) -> bool {
        self.inner.central_enforced()
    }

    #[getter]
    pub fn sharp_cut(&self) -> bool {
        self.inner.traits().sharp_cut
    }

    #[getter]
    pub fn central_condition_inherent(&self) -> bool {
        self.inner.traits().central_condition_inherent
    }

    /// Log10 mass below which the occupation can be neglected.
    #[getter]
    pub fn minimum_mass(&self) -> f64 {
        self.inner.minimum_mass()
    }

    /// Unit conversion of the total occupation at redshift `z`, using the
    /// model's cosmology unless `h0`/`omega_m` are given.
    #[pyo3(signature = (z = 0.0, h0 = None, omega_m = None))]
    pub fn unit_conversion(&self, z: f64, h0: Option<f64>, omega_m: Option<f64>) -> f64 {
        let base = &self.inner.settings().context().cosmology;
        let cosmology = Cosmology {
            name: base.name.clone(),
            h0: h0.unwrap_or(base.h0),
            omega_m: omega_m.unwrap_or(base.omega_m),
        };
        self.inner.unit_conversion(&cosmology, z)
    }

    /// Evaluate a moment by its method name (e.g. `"total_occupation"`).
    pub fn evaluate<'py>(
        &self, py: Python<'py>, moment: &str, masses: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let moment: Moment = moment.parse()?;
        self.moment(py, masses, moment)
    }

    pub fn nc<'py>(
        &self, py: Python<'py>, masses: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        self.moment(py, masses, Moment::Nc)
    }

    pub fn ns<'py>(
        &self, py: Python<'py>, masses: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        self.moment(py, masses, Moment::Ns)
    }

    pub fn central_occupation<'py>(
        &self, py: Python<'py>, masses: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        self.moment(py, masses, Moment::CentralOccupation)
    }

    pub fn satellite_occupation<'py>(
        &self, py: Python<'py>, masses: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        self.moment(py, masses, Moment::SatelliteOccupation)
    }

    pub fn total_occupation<'py>(
        &self, py: Python<'py>, masses: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        self.moment(py, masses, Moment::TotalOccupation)
    }

    pub fn ss_pairs<'py>(
        &self, py: Python<'py>, masses: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        self.moment(py, masses, Moment::SsPairs)
    }

    pub fn cs_pairs<'py>(
        &self, py: Python<'py>, masses: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        self.moment(py, masses, Moment::CsPairs)
    }

    pub fn total_pair_function<'py>(
        &self, py: Python<'py>, masses: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        self.moment(py, masses, Moment::TotalPairFunction)
    }

    pub fn sigma_central<'py>(
        &self, py: Python<'py>, masses: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        self.moment(py, masses, Moment::SigmaCentral)
    }

    pub fn sigma_satellite<'py>(
        &self, py: Python<'py>, masses: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        self.moment(py, masses, Moment::SigmaSatellite)
    }

    fn __repr__(&self) -> String {
        format!(
            "HOD(model={:?}, central={}, params={:?})",
            self.inner.name(),
            self.inner.central_enforced(),
            self.params()
        )
    }
}

/// _halo_occupation — PyO3 module initializer for the Python extension.
///
/// Creates the `models` submodule, attaches it to `_halo_occupation`, and
/// registers it in `sys.modules` so `halo_occupation.models` imports work.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _halo_occupation<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let models_mod = PyModule::new(_py, "models")?;
    models(_py, m, &models_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("halo_occupation.models", models_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn models<'py>(
    _py: Python, halo_occupation: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<HOD>()?;
    halo_occupation.add_submodule(m)?;
    Ok(())
}
