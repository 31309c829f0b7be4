//! Rules for tracers with no central/satellite split.
//!
//! Every central-side primitive is identically zero and the central condition
//! is meaningless, so it is never enforced. The satellite-side primitives are
//! left to the tracer class that builds on these rules (see
//! [`bulk`](super::bulk)).

/// The central condition cannot be enforced without centrals; any request is
/// overridden to `false`.
pub fn central_enforced(_requested: bool) -> bool {
    false
}

pub fn nc() -> f64 {
    0.0
}

pub fn cs_pairs() -> f64 {
    0.0
}

pub fn raw_central_occupation() -> f64 {
    0.0
}

pub fn sigma_central() -> f64 {
    0.0
}
