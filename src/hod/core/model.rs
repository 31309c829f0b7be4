//! The occupation-model contract and its composition rules.
//!
//! Purpose
//! -------
//! Define [`OccupationModel`], the interface every halo occupation model
//! implements, together with the static capability descriptor
//! [`ModelTraits`]. Concrete models supply two raw curves; everything else is
//! composed here or delegated to the model's [`TracerClass`].
//!
//! Key behaviors
//! -------------
//! - `central_occupation` is the raw central curve for tracers with centrals
//!   and zero for tracer classes without them.
//! - `satellite_occupation` applies the central condition: when it is enforced
//!   and the model does not satisfy it by construction, the raw satellite
//!   curve is multiplied by `nc`, so satellites vanish wherever centrals do.
//! - `total_occupation` and `total_pair_function` are plain sums of their
//!   components.
//!
//! Invariants & assumptions
//! ------------------------
//! - The satellite occupation is an average over *all* haloes of mass `m`,
//!   with or without a central.
//! - `central_condition_inherent` only means the raw satellite curve already
//!   vanishes with the central one. Pair moments still branch on the
//!   instance's `central_enforced` flag.
//! - Every method is a pure function of `m` and the model's fixed parameters.
//!   Masses are linear (not log10) and are not validated; non-positive masses
//!   or singular points propagate IEEE special values.
//!
//! Conventions
//! -----------
//! - Methods are scalar in `m`; see [`grid`](crate::hod::core::grid) for the
//!   elementwise array forms.
//! - The trait is object safe; `Box<dyn OccupationModel>` is the currency of
//!   the registry and the configuration layer.
use crate::hod::core::{
    context::Cosmology, params::ParamSet, settings::ModelSettings, tracer::TracerClass,
};

/// Static, per-type description of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelTraits {
    pub name: &'static str,
    /// Statistical family providing the primitive moments.
    pub tracer: TracerClass,
    /// The model has a hard low-mass cutoff at `M_min`.
    pub sharp_cut: bool,
    /// The raw satellite curve is zero wherever the central curve is zero.
    pub central_condition_inherent: bool,
}

/// Halo occupation model.
///
/// Required:
/// - [`traits`](OccupationModel::traits) and
///   [`settings`](OccupationModel::settings): descriptor and instance state.
/// - [`raw_central_occupation`](OccupationModel::raw_central_occupation) and
///   [`raw_satellite_occupation`](OccupationModel::raw_satellite_occupation):
///   the model's formulas, before any central condition is applied.
///
/// Everything else has a default; models override the tracer-amount hooks or
/// a standard deviation when their tracer needs it.
pub trait OccupationModel: Send + Sync + std::fmt::Debug {
    fn traits(&self) -> ModelTraits;

    fn settings(&self) -> &ModelSettings;

    /// Raw central occupation `<T_c>(m)`. Ignored by tracer classes without
    /// centrals.
    fn raw_central_occupation(&self, m: f64) -> f64;

    /// Raw satellite occupation `<T_s>'(m)`, before the central condition.
    fn raw_satellite_occupation(&self, m: f64) -> f64;

    /// Amount of tracer carried by one central. One for number counts.
    fn tracer_per_central(&self, _m: f64) -> f64 {
        1.0
    }

    /// Amount of tracer carried by one satellite.
    fn tracer_per_satellite(&self, m: f64) -> f64 {
        self.tracer_per_central(m)
    }

    /// Average number of centrals; used when populating catalogues.
    fn nc(&self, m: f64) -> f64 {
        self.traits().tracer.nc(self, m)
    }

    /// Average number of satellites; used when populating catalogues.
    fn ns(&self, m: f64) -> f64 {
        self.traits().tracer.ns(self, m)
    }

    /// Satellite tracer paired with itself, `<T_s T_s>`.
    fn ss_pairs(&self, m: f64) -> f64 {
        self.traits().tracer.ss_pairs(self, m)
    }

    /// Central tracer paired with satellite tracer, `<T_c T_s>`.
    fn cs_pairs(&self, m: f64) -> f64 {
        self.traits().tracer.cs_pairs(self, m)
    }

    fn sigma_central(&self, m: f64) -> f64 {
        self.traits().tracer.sigma_central(self, m)
    }

    fn sigma_satellite(&self, m: f64) -> f64 {
        self.traits().tracer.sigma_satellite(self, m)
    }

    fn central_occupation(&self, m: f64) -> f64 {
        self.traits().tracer.central_occupation(self, m)
    }

    fn satellite_occupation(&self, m: f64) -> f64 {
        let raw = self.raw_satellite_occupation(m);
        if self.central_enforced() && !self.traits().central_condition_inherent {
            self.nc(m) * raw
        } else {
            raw
        }
    }

    fn total_occupation(&self, m: f64) -> f64 {
        self.central_occupation(m) + self.satellite_occupation(m)
    }

    fn total_pair_function(&self, m: f64) -> f64 {
        self.ss_pairs(m) + self.cs_pairs(m)
    }

    /// Factor converting the total occupation into a physical unit.
    fn unit_conversion(&self, _cosmology: &Cosmology, _z: f64) -> f64 {
        1.0
    }

    /// Log10 mass below which the occupation can be neglected when integrating
    /// over the mass function.
    fn minimum_mass(&self) -> f64 {
        self.settings().m_min()
    }

    fn name(&self) -> &'static str {
        self.traits().name
    }

    fn params(&self) -> &ParamSet {
        self.settings().params()
    }

    fn central_enforced(&self) -> bool {
        self.settings().central_enforced()
    }
}
