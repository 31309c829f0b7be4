//! hod — halo occupation distribution models.
//!
//! Purpose
//! -------
//! Provide parametric models for how many tracers (galaxies, or a continuous
//! amount such as neutral hydrogen) occupy a dark-matter halo of mass `m`,
//! split into central and satellite components, together with the first and
//! second moments halo-model calculations integrate over the mass function.
//!
//! Key behaviors
//! -------------
//! - [`core`] defines the [`OccupationModel`] contract, the central-condition
//!   composition rules, and the tracer-class strategies.
//! - [`models`] ships the concrete parametric models and the [`ModelKind`]
//!   registry.
//! - [`config`] builds a model from a TOML description.
//! - [`errors`] holds [`HODError`] and [`HODResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Configuration errors surface at construction; evaluating a moment never
//!   fails and never logs.
//! - Models are immutable and `Send + Sync`.
//!
//! Conventions
//! -----------
//! - Halo masses are linear; `M_*` parameters are log10 masses.
//!
//! Downstream usage
//! ----------------
//! ```
//! use halo_occupation::hod::prelude::*;
//!
//! let model = ModelKind::Zehavi05
//!     .build(true, HaloContext::default(), &ParamSet::new().with("alpha", 1.2))
//!     .unwrap();
//! let masses = log_mass_grid(10.0, 15.0, 51).unwrap();
//! let table = MomentTable::compute(model.as_ref(), masses.view());
//! assert_eq!(table.len(), 51);
//! ```

pub mod config;
pub mod core;
pub mod errors;
pub mod models;

pub use self::config::HODConfig;
pub use self::core::{HaloContext, ModelTraits, OccupationModel, ParamSet, TracerClass};
pub use self::errors::{HODError, HODResult};
pub use self::models::ModelKind;

pub mod prelude {
    pub use super::config::HODConfig;
    pub use super::core::prelude::*;
    pub use super::errors::{HODError, HODResult};
    pub use super::models::{
        Constant, ContinuousPowerLaw, Contreras13, Geach12, ModelKind, Tinker05, Zehavi05,
        Zehavi05Marked, Zehavi05WithMax, Zheng05,
    };
}
