//! Tracer classes — reusable bundles of primitive occupation moments.
//!
//! Purpose
//! -------
//! Supply the moment primitives (`nc`, `ns`, pair moments, standard
//! deviations) for whole families of tracers, so a concrete model only writes
//! its raw occupation curves and picks a [`TracerClass`].
//!
//! Key behaviors
//! -------------
//! - [`no_central`]: zero central primitives; the central condition is never
//!   enforced.
//! - [`bulk`]: continuous amounts built on the no-central rules; no satellite
//!   count, deterministic self-pairing.
//! - [`poisson`]: discrete Poisson satellites with a Bernoulli central, pair
//!   moments branching on the central condition.
//!
//! Conventions
//! -----------
//! - Rule functions are generic over `M: OccupationModel + ?Sized` so they
//!   work for concrete models and `dyn OccupationModel` alike.
//! - Models may still override any trait method; the class only provides the
//!   default.
pub mod bulk;
pub mod no_central;
pub mod poisson;

use crate::hod::core::model::OccupationModel;

/// Statistical family of a tracer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracerClass {
    /// Continuous amount assigned to haloes, no central component.
    Bulk,
    /// Discrete, Poisson-distributed satellites with a Bernoulli central.
    Poisson,
}

impl TracerClass {
    /// Whether the class has a distinct central component.
    pub fn has_central(self) -> bool {
        match self {
            TracerClass::Bulk => false,
            TracerClass::Poisson => true,
        }
    }

    /// Effective central-condition flag for a caller's request.
    pub fn central_enforced(self, requested: bool) -> bool {
        if self.has_central() { requested } else { no_central::central_enforced(requested) }
    }

    /// Central occupation: the model's raw curve when the class has centrals,
    /// zero otherwise.
    pub fn central_occupation<M: OccupationModel + ?Sized>(self, model: &M, m: f64) -> f64 {
        if self.has_central() {
            model.raw_central_occupation(m)
        } else {
            no_central::raw_central_occupation()
        }
    }

    pub fn nc<M: OccupationModel + ?Sized>(self, model: &M, m: f64) -> f64 {
        match self {
            TracerClass::Bulk => no_central::nc(),
            TracerClass::Poisson => poisson::nc(model, m),
        }
    }

    pub fn ns<M: OccupationModel + ?Sized>(self, model: &M, m: f64) -> f64 {
        match self {
            TracerClass::Bulk => bulk::ns(),
            TracerClass::Poisson => poisson::ns(model, m),
        }
    }

    pub fn ss_pairs<M: OccupationModel + ?Sized>(self, model: &M, m: f64) -> f64 {
        match self {
            TracerClass::Bulk => bulk::ss_pairs(model, m),
            TracerClass::Poisson => poisson::ss_pairs(model, m),
        }
    }

    pub fn cs_pairs<M: OccupationModel + ?Sized>(self, model: &M, m: f64) -> f64 {
        match self {
            TracerClass::Bulk => no_central::cs_pairs(),
            TracerClass::Poisson => poisson::cs_pairs(model, m),
        }
    }

    pub fn sigma_central<M: OccupationModel + ?Sized>(self, model: &M, m: f64) -> f64 {
        match self {
            TracerClass::Bulk => no_central::sigma_central(),
            TracerClass::Poisson => poisson::sigma_central(model, m),
        }
    }

    pub fn sigma_satellite<M: OccupationModel + ?Sized>(self, model: &M, m: f64) -> f64 {
        match self {
            TracerClass::Bulk => bulk::sigma_satellite(),
            TracerClass::Poisson => poisson::sigma_satellite(model, m),
        }
    }
}
