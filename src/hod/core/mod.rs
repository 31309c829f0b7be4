//! core — the occupation-model contract, tracer classes, and shared plumbing.
//!
//! Purpose
//! -------
//! Collect the building blocks every halo occupation model is assembled from:
//! the [`OccupationModel`] trait with its central-condition composition rules,
//! the tracer-class strategies supplying primitive moments, parameter
//! management, the halo-model context threaded through models, and
//! elementwise evaluation over mass arrays.
//!
//! Key behaviors
//! -------------
//! - [`OccupationModel`] composes raw central/satellite curves into conditioned
//!   occupations, totals, and pair functions.
//! - [`TracerClass`] dispatches the primitive moments to the
//!   [`tracer::no_central`], [`tracer::bulk`], and [`tracer::poisson`] rule
//!   sets.
//! - [`ParamSet`] merges class defaults with caller overrides and rejects
//!   undeclared keys; [`ModelSettings`] fixes the merged parameters and the
//!   central-condition flag for an instance.
//! - [`evaluate`], [`MomentTable`], and [`log_mass_grid`] provide the array
//!   surface used by downstream integrators.
//!
//! Invariants & assumptions
//! ------------------------
//! - `satellite_occupation == 0` wherever `central_occupation == 0` whenever
//!   the central condition is enforced or inherent to the model.
//! - `total_occupation = central + satellite` and
//!   `total_pair_function = ss_pairs + cs_pairs` exactly.
//! - Models are immutable after construction; evaluation is pure and may run
//!   concurrently from any number of threads.
//!
//! Conventions
//! -----------
//! - Halo masses are linear; parameters named `M_*` are log10 masses.
//! - This module performs no I/O. Construction emits `tracing` debug events;
//!   evaluation does not log.
//!
//! Testing notes
//! -------------
//! - Unit tests cover parameter merging, tracer-class algebra on toy models,
//!   the central-condition rule, grid evaluation, and validation helpers.
//! - Property tests in `tests/` check the composition laws on the concrete
//!   models over random masses and parameters.

pub mod context;
pub mod grid;
pub mod model;
pub mod params;
pub mod settings;
pub mod tracer;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::context::{ConcentrationMass, Cosmology, HaloContext, HaloProfile, MassDefinition};
pub use self::grid::{Moment, MomentTable, evaluate, log_mass_grid};
pub use self::model::{ModelTraits, OccupationModel};
pub use self::params::{BASE_DEFAULTS, M_MIN, ParamSet};
pub use self::settings::ModelSettings;
pub use self::tracer::TracerClass;
pub use self::validation::{validate_grid, validate_masses, validate_parameter_value};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use halo_occupation::hod::core::prelude::*;
//
// to import the main core surface in a single line.

pub mod prelude {
    pub use super::context::{Cosmology, HaloContext, MassDefinition};
    pub use super::grid::{Moment, MomentTable, evaluate, log_mass_grid};
    pub use super::model::{ModelTraits, OccupationModel};
    pub use super::params::ParamSet;
    pub use super::settings::ModelSettings;
    pub use super::tracer::TracerClass;
}
