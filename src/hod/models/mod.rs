//! models — concrete parametric halo occupation models and their registry.
//!
//! Purpose
//! -------
//! Provide the published HOD curves as [`OccupationModel`] implementations.
//! Each model writes only its raw central and satellite formulas, declares a
//! static default table and [`ModelTraits`], and inherits everything else from
//! the trait defaults and its tracer class.
//!
//! Key behaviors
//! -------------
//! - Discrete (Poisson) galaxies: [`Zehavi05`], [`Zheng05`], [`Contreras13`],
//!   [`Geach12`], [`Tinker05`], [`Zehavi05WithMax`], [`Zehavi05Marked`].
//! - Continuous (bulk) tracers: [`ContinuousPowerLaw`], [`Constant`].
//! - [`ModelKind`] maps names to constructors and returns boxed trait objects.
//!
//! Invariants & assumptions
//! ------------------------
//! - Log10 mass parameters are converted to linear thresholds once at
//!   construction; evaluation never re-reads the parameter map.
//! - Constructors are the only fallible entry points.
//!
//! Conventions
//! -----------
//! - Every model exposes `NAME`, `DEFAULTS`, `TRAITS`,
//!   `new(central, context, overrides)`, and `with_defaults(central)`.
//!
//! [`OccupationModel`]: crate::hod::core::model::OccupationModel
//! [`ModelTraits`]: crate::hod::core::model::ModelTraits

pub mod bulk;
pub mod contreras;
pub mod registry;
pub mod tinker;
pub mod zehavi;
pub mod zheng;

pub use self::bulk::{Constant, ContinuousPowerLaw};
pub use self::contreras::{Contreras13, Geach12};
pub use self::registry::ModelKind;
pub use self::tinker::Tinker05;
pub use self::zehavi::{Zehavi05, Zehavi05Marked, Zehavi05WithMax};
pub use self::zheng::Zheng05;

/// Linear mass from a log10 mass parameter.
pub(crate) fn exp10(log_value: f64) -> f64 {
    10f64.powf(log_value)
}
