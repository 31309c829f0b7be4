//! Name-based lookup and construction of the shipped models.
//!
//! [`ModelKind`] is the bridge between string configuration (TOML files,
//! Python keyword arguments) and the concrete model types. Parsing is
//! case-insensitive and ignores surrounding whitespace.
use crate::hod::{
    core::{context::HaloContext, model::OccupationModel, params::ParamSet},
    errors::{HODError, HODResult},
    models::{
        bulk::{Constant, ContinuousPowerLaw},
        contreras::{Contreras13, Geach12},
        tinker::Tinker05,
        zehavi::{Zehavi05, Zehavi05Marked, Zehavi05WithMax},
        zheng::Zheng05,
    },
};
use std::{fmt, str::FromStr};

/// Every concrete occupation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Zehavi05,
    Zheng05,
    Contreras13,
    Geach12,
    Tinker05,
    Zehavi05WithMax,
    Zehavi05Marked,
    ContinuousPowerLaw,
    Constant,
}

impl ModelKind {
    pub const ALL: [ModelKind; 9] = [
        ModelKind::Zehavi05,
        ModelKind::Zheng05,
        ModelKind::Contreras13,
        ModelKind::Geach12,
        ModelKind::Tinker05,
        ModelKind::Zehavi05WithMax,
        ModelKind::Zehavi05Marked,
        ModelKind::ContinuousPowerLaw,
        ModelKind::Constant,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Zehavi05 => Zehavi05::NAME,
            ModelKind::Zheng05 => Zheng05::NAME,
            ModelKind::Contreras13 => Contreras13::NAME,
            ModelKind::Geach12 => Geach12::NAME,
            ModelKind::Tinker05 => Tinker05::NAME,
            ModelKind::Zehavi05WithMax => Zehavi05WithMax::NAME,
            ModelKind::Zehavi05Marked => Zehavi05Marked::NAME,
            ModelKind::ContinuousPowerLaw => ContinuousPowerLaw::NAME,
            ModelKind::Constant => Constant::NAME,
        }
    }

    /// Class-level parameter defaults (log10 masses), excluding the base
    /// `M_min` seed.
    pub fn defaults(self) -> &'static [(&'static str, f64)] {
        match self {
            ModelKind::Zehavi05 => Zehavi05::DEFAULTS,
            ModelKind::Zheng05 => Zheng05::DEFAULTS,
            ModelKind::Contreras13 => Contreras13::DEFAULTS,
            ModelKind::Geach12 => Geach12::DEFAULTS,
            ModelKind::Tinker05 => Tinker05::DEFAULTS,
            ModelKind::Zehavi05WithMax => Zehavi05WithMax::DEFAULTS,
            ModelKind::Zehavi05Marked => Zehavi05Marked::DEFAULTS,
            ModelKind::ContinuousPowerLaw => ContinuousPowerLaw::DEFAULTS,
            ModelKind::Constant => Constant::DEFAULTS,
        }
    }

    /// Construct the model behind a trait object.
    ///
    /// # Errors
    /// Propagates parameter errors from the model's constructor
    /// ([`HODError::UnknownParameter`], [`HODError::NonFiniteParameter`]).
    pub fn build(
        self, central: bool, context: HaloContext, overrides: &ParamSet,
    ) -> HODResult<Box<dyn OccupationModel>> {
        tracing::debug!(
            model = self.name(),
            central,
            n_overrides = overrides.len(),
            "building occupation model"
        );
        let model: Box<dyn OccupationModel> = match self {
            ModelKind::Zehavi05 => Box::new(Zehavi05::new(central, context, overrides)?),
            ModelKind::Zheng05 => Box::new(Zheng05::new(central, context, overrides)?),
            ModelKind::Contreras13 => Box::new(Contreras13::new(central, context, overrides)?),
            ModelKind::Geach12 => Box::new(Geach12::new(central, context, overrides)?),
            ModelKind::Tinker05 => Box::new(Tinker05::new(central, context, overrides)?),
            ModelKind::Zehavi05WithMax => {
                Box::new(Zehavi05WithMax::new(central, context, overrides)?)
            }
            ModelKind::Zehavi05Marked => {
                Box::new(Zehavi05Marked::new(central, context, overrides)?)
            }
            ModelKind::ContinuousPowerLaw => {
                Box::new(ContinuousPowerLaw::new(central, context, overrides)?)
            }
            ModelKind::Constant => Box::new(Constant::new(central, context, overrides)?),
        };
        Ok(model)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = HODError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HODError::UnknownModel { name: s.to_string() })
    }
}
