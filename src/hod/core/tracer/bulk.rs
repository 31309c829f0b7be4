//! Rules for bulk (continuous) tracers.
//!
//! A bulk tracer assigns an amount of some field to each halo instead of
//! placing discrete objects. It has no central component (the
//! [`no_central`](super::no_central) rules apply), no satellite *count*, and
//! its only self-pairing is the square of the mean amount.
use crate::hod::core::model::OccupationModel;

/// No discrete satellites, so no satellite count.
pub fn ns() -> f64 {
    0.0
}

/// Deterministic self-pairing: `<T_s T_s> = <T_s>²`.
pub fn ss_pairs<M: OccupationModel + ?Sized>(model: &M, m: f64) -> f64 {
    model.satellite_occupation(m).powi(2)
}

/// Scatter of the assigned amount. Without a model-specific scatter the amount
/// is deterministic.
pub fn sigma_satellite() -> f64 {
    0.0
}
