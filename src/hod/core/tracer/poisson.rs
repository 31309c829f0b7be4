//! Rules for discrete tracers with Poisson-distributed satellites.
//!
//! The tracer amount is assumed statistically independent of the number
//! counts, with its mean directly proportional to them. This covers every
//! traditional number-count HOD (where the amount per object is one).
//!
//! Pair statistics
//! ---------------
//! - `<T_s T_s>` is taken as `<T_s>²`, the Poisson identity `<N(N-1)> = <N>²`
//!   applied to the mean occupation.
//! - `<T_c T_s>` collapses to `<T_s>` (in tracer units) when the central
//!   condition is enforced. Otherwise centrals and satellites are assumed
//!   uncorrelated and `<T_c T_s> = <T_c><T_s>`.
use crate::hod::core::model::OccupationModel;

/// Central count: the (possibly tracer-weighted) central occupation divided by
/// the amount of tracer per central.
pub fn nc<M: OccupationModel + ?Sized>(model: &M, m: f64) -> f64 {
    model.central_occupation(m) / model.tracer_per_central(m)
}

/// Satellite count: the satellite occupation divided by the amount of tracer
/// per satellite.
pub fn ns<M: OccupationModel + ?Sized>(model: &M, m: f64) -> f64 {
    model.satellite_occupation(m) / model.tracer_per_satellite(m)
}

pub fn ss_pairs<M: OccupationModel + ?Sized>(model: &M, m: f64) -> f64 {
    model.satellite_occupation(m).powi(2)
}

pub fn cs_pairs<M: OccupationModel + ?Sized>(model: &M, m: f64) -> f64 {
    if model.central_enforced() {
        model.satellite_occupation(m) * model.tracer_per_central(m)
    } else {
        model.central_occupation(m) * model.satellite_occupation(m)
    }
}

/// Bernoulli scatter of a 0/1 central draw.
pub fn sigma_central<M: OccupationModel + ?Sized>(model: &M, m: f64) -> f64 {
    let co = model.central_occupation(m);
    (co * (1.0 - co)).sqrt()
}

/// Poisson scatter: variance equals the mean.
pub fn sigma_satellite<M: OccupationModel + ?Sized>(model: &M, m: f64) -> f64 {
    model.satellite_occupation(m).sqrt()
}
