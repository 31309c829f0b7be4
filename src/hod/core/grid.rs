//! Elementwise evaluation of occupation moments over halo-mass arrays.
//!
//! Purpose
//! -------
//! Lift the scalar moments of [`OccupationModel`] to `ndarray` arrays, which is
//! how halo-model integrators and catalogue builders consume them.
//!
//! Key behaviors
//! -------------
//! - [`evaluate`] maps one [`Moment`] over a mass view, preserving length.
//! - [`MomentTable::compute`] evaluates every moment on the same masses.
//! - [`log_mass_grid`] builds a log-spaced mass grid.
//!
//! Conventions
//! -----------
//! - Masses are linear; grid bounds are log10.
//! - No validation of the masses happens here; use
//!   [`validate_masses`](crate::hod::core::validation::validate_masses) at the
//!   boundary when inputs are untrusted.
use crate::hod::{
    core::{model::OccupationModel, validation::validate_grid},
    errors::{HODError, HODResult},
};
use ndarray::{Array1, ArrayView1};
use std::str::FromStr;

/// Every mass-dependent quantity a model exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Moment {
    Nc,
    Ns,
    CentralOccupation,
    SatelliteOccupation,
    TotalOccupation,
    SsPairs,
    CsPairs,
    TotalPairFunction,
    SigmaCentral,
    SigmaSatellite,
}

impl Moment {
    pub const ALL: [Moment; 10] = [
        Moment::Nc,
        Moment::Ns,
        Moment::CentralOccupation,
        Moment::SatelliteOccupation,
        Moment::TotalOccupation,
        Moment::SsPairs,
        Moment::CsPairs,
        Moment::TotalPairFunction,
        Moment::SigmaCentral,
        Moment::SigmaSatellite,
    ];

    /// Evaluate this moment of `model` at a single mass.
    pub fn at<M: OccupationModel + ?Sized>(self, model: &M, m: f64) -> f64 {
        match self {
            Moment::Nc => model.nc(m),
            Moment::Ns => model.ns(m),
            Moment::CentralOccupation => model.central_occupation(m),
            Moment::SatelliteOccupation => model.satellite_occupation(m),
            Moment::TotalOccupation => model.total_occupation(m),
            Moment::SsPairs => model.ss_pairs(m),
            Moment::CsPairs => model.cs_pairs(m),
            Moment::TotalPairFunction => model.total_pair_function(m),
            Moment::SigmaCentral => model.sigma_central(m),
            Moment::SigmaSatellite => model.sigma_satellite(m),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Moment::Nc => "nc",
            Moment::Ns => "ns",
            Moment::CentralOccupation => "central_occupation",
            Moment::SatelliteOccupation => "satellite_occupation",
            Moment::TotalOccupation => "total_occupation",
            Moment::SsPairs => "ss_pairs",
            Moment::CsPairs => "cs_pairs",
            Moment::TotalPairFunction => "total_pair_function",
            Moment::SigmaCentral => "sigma_central",
            Moment::SigmaSatellite => "sigma_satellite",
        }
    }
}

impl FromStr for Moment {
    type Err = HODError;

    /// Parse a moment from its snake_case method name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Moment::ALL.into_iter().find(|mo| mo.name() == lowered).ok_or_else(|| {
            HODError::ConfigParse { reason: format!("'{s}' is not an occupation moment") }
        })
    }
}

/// Evaluate `moment` elementwise over `masses`.
pub fn evaluate<M: OccupationModel + ?Sized>(
    model: &M, moment: Moment, masses: ArrayView1<f64>,
) -> Array1<f64> {
    masses.mapv(|m| moment.at(model, m))
}

/// Log-spaced grid of linear masses, `10^linspace(log_min, log_max, n)`.
///
/// # Errors
/// - [`HODError::InvalidMassGrid`] for non-finite or reversed bounds or `n < 2`.
pub fn log_mass_grid(log_min: f64, log_max: f64, n: usize) -> HODResult<Array1<f64>> {
    validate_grid(log_min, log_max, n)?;
    Ok(Array1::linspace(log_min, log_max, n).mapv(|lm| 10f64.powf(lm)))
}

/// All moments of one model on one mass array.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentTable {
    pub masses: Array1<f64>,
    pub nc: Array1<f64>,
    pub ns: Array1<f64>,
    pub central_occupation: Array1<f64>,
    pub satellite_occupation: Array1<f64>,
    pub total_occupation: Array1<f64>,
    pub ss_pairs: Array1<f64>,
    pub cs_pairs: Array1<f64>,
    pub total_pair_function: Array1<f64>,
    pub sigma_central: Array1<f64>,
    pub sigma_satellite: Array1<f64>,
}

impl MomentTable {
    pub fn compute<M: OccupationModel + ?Sized>(model: &M, masses: ArrayView1<f64>) -> Self {
        let column = |moment| evaluate(model, moment, masses);
        MomentTable {
            masses: masses.to_owned(),
            nc: column(Moment::Nc),
            ns: column(Moment::Ns),
            central_occupation: column(Moment::CentralOccupation),
            satellite_occupation: column(Moment::SatelliteOccupation),
            total_occupation: column(Moment::TotalOccupation),
            ss_pairs: column(Moment::SsPairs),
            cs_pairs: column(Moment::CsPairs),
            total_pair_function: column(Moment::TotalPairFunction),
            sigma_central: column(Moment::SigmaCentral),
            sigma_satellite: column(Moment::SigmaSatellite),
        }
    }

    /// Column for `moment`.
    pub fn get(&self, moment: Moment) -> &Array1<f64> {
        match moment {
            Moment::Nc => &self.nc,
            Moment::Ns => &self.ns,
            Moment::CentralOccupation => &self.central_occupation,
            Moment::SatelliteOccupation => &self.satellite_occupation,
            Moment::TotalOccupation => &self.total_occupation,
            Moment::SsPairs => &self.ss_pairs,
            Moment::CsPairs => &self.cs_pairs,
            Moment::TotalPairFunction => &self.total_pair_function,
            Moment::SigmaCentral => &self.sigma_central,
            Moment::SigmaSatellite => &self.sigma_satellite,
        }
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}
