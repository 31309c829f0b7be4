//! Error-function-smoothed HOD of Zheng et al. (2005).
use crate::hod::{
    core::{
        context::HaloContext,
        model::{ModelTraits, OccupationModel},
        params::ParamSet,
        settings::ModelSettings,
        tracer::TracerClass,
    },
    errors::HODResult,
    models::exp10,
};
use statrs::function::erf::erf;

/// Five-parameter model of Zheng et al. (2005).
///
/// Parameters
/// ----------
/// - `M_min` (11.6222): log10 mass at which half of haloes host a central.
/// - `M_1` (12.851): log10 mass scale of the satellite power law.
/// - `alpha` (1.049): satellite power-law index.
/// - `M_0` (11.5047): log10 mass below which there are no satellites.
/// - `sig_logm` (0.26): width of the central transition in log10 mass.
///
/// Notes
/// -----
/// - The central curve never reaches zero, so `minimum_mass` is placed five
///   widths below `M_min`.
#[derive(Debug, Clone)]
pub struct Zheng05 {
    settings: ModelSettings,
    log_m_min: f64,
    sig_logm: f64,
    mass_0: f64,
    mass_1: f64,
    alpha: f64,
}

impl Zheng05 {
    pub const NAME: &'static str = "Zheng05";

    pub const DEFAULTS: &'static [(&'static str, f64)] = &[
        ("M_min", 11.6222),
        ("M_1", 12.851),
        ("alpha", 1.049),
        ("M_0", 11.5047),
        ("sig_logm", 0.26),
    ];

    pub const TRAITS: ModelTraits = ModelTraits {
        name: Self::NAME,
        tracer: TracerClass::Poisson,
        sharp_cut: false,
        central_condition_inherent: false,
    };

    pub fn new(central: bool, context: HaloContext, overrides: &ParamSet) -> HODResult<Self> {
        let settings =
            ModelSettings::new(&Self::TRAITS, Self::DEFAULTS, central, context, overrides)?;
        let params = settings.params();
        let log_m_min = params.require(Self::NAME, "M_min")?;
        let sig_logm = params.require(Self::NAME, "sig_logm")?;
        let mass_0 = exp10(params.require(Self::NAME, "M_0")?);
        let mass_1 = exp10(params.require(Self::NAME, "M_1")?);
        let alpha = params.require(Self::NAME, "alpha")?;
        Ok(Zheng05 { settings, log_m_min, sig_logm, mass_0, mass_1, alpha })
    }

    pub fn with_defaults(central: bool) -> HODResult<Self> {
        Self::new(central, HaloContext::default(), &ParamSet::new())
    }
}

impl OccupationModel for Zheng05 {
    fn traits(&self) -> ModelTraits {
        Self::TRAITS
    }

    fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    fn raw_central_occupation(&self, m: f64) -> f64 {
        0.5 * (1.0 + erf((m.log10() - self.log_m_min) / self.sig_logm))
    }

    fn raw_satellite_occupation(&self, m: f64) -> f64 {
        if m > self.mass_0 { ((m - self.mass_0) / self.mass_1).powf(self.alpha) } else { 0.0 }
    }

    fn minimum_mass(&self) -> f64 {
        self.log_m_min - 5.0 * self.sig_logm
    }
}
