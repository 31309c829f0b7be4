//! Continuous-amount models: the tracer is spread over the halo rather than
//! counted in discrete objects.
//!
//! Both models use [`TracerClass::Bulk`]: no central component, no satellite
//! count, and a deterministic self-pair moment. The scatter of the amount is a
//! constant `sigma_A` parameter.
use crate::hod::{
    core::{
        context::HaloContext,
        model::{ModelTraits, OccupationModel},
        params::ParamSet,
        settings::ModelSettings,
        tracer::{TracerClass, no_central},
    },
    errors::HODResult,
    models::exp10,
};

/// Power law in mass between two truncation masses.
///
/// Parameters
/// ----------
/// - `M_min` (11.6222), `M_max` (18.0): log10 truncation masses.
/// - `M_1` (12.851): log10 mass scale of the power law.
/// - `logA` (0.0): log10 normalisation.
/// - `alpha` (1.049): power-law index.
/// - `sigma_A` (0.0): constant scatter of the amount.
///
/// The amount is `10^logA ((m / 10^M_1)^alpha + 1)` on the closed window
/// `[10^M_min, 10^M_max]` and zero elsewhere.
#[derive(Debug, Clone)]
pub struct ContinuousPowerLaw {
    settings: ModelSettings,
    mass_min: f64,
    mass_max: f64,
    mass_1: f64,
    amplitude: f64,
    alpha: f64,
    sigma_a: f64,
}

impl ContinuousPowerLaw {
    pub const NAME: &'static str = "ContinuousPowerLaw";

    pub const DEFAULTS: &'static [(&'static str, f64)] = &[
        ("M_min", 11.6222),
        ("M_1", 12.851),
        ("logA", 0.0),
        ("alpha", 1.049),
        ("M_max", 18.0),
        ("sigma_A", 0.0),
    ];

    pub const TRAITS: ModelTraits = ModelTraits {
        name: Self::NAME,
        tracer: TracerClass::Bulk,
        sharp_cut: true,
        central_condition_inherent: false,
    };

    pub fn new(central: bool, context: HaloContext, overrides: &ParamSet) -> HODResult<Self> {
        let settings =
            ModelSettings::new(&Self::TRAITS, Self::DEFAULTS, central, context, overrides)?;
        let params = settings.params();
        let mass_min = exp10(params.require(Self::NAME, "M_min")?);
        let mass_max = exp10(params.require(Self::NAME, "M_max")?);
        let mass_1 = exp10(params.require(Self::NAME, "M_1")?);
        let amplitude = exp10(params.require(Self::NAME, "logA")?);
        let alpha = params.require(Self::NAME, "alpha")?;
        let sigma_a = params.require(Self::NAME, "sigma_A")?;
        Ok(ContinuousPowerLaw { settings, mass_min, mass_max, mass_1, amplitude, alpha, sigma_a })
    }

    pub fn with_defaults(central: bool) -> HODResult<Self> {
        Self::new(central, HaloContext::default(), &ParamSet::new())
    }
}

impl OccupationModel for ContinuousPowerLaw {
    fn traits(&self) -> ModelTraits {
        Self::TRAITS
    }

    fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    fn raw_central_occupation(&self, _m: f64) -> f64 {
        no_central::raw_central_occupation()
    }

    fn raw_satellite_occupation(&self, m: f64) -> f64 {
        if m < self.mass_min || m > self.mass_max {
            return 0.0;
        }
        self.amplitude * ((m / self.mass_1).powf(self.alpha) + 1.0)
    }

    fn sigma_satellite(&self, _m: f64) -> f64 {
        self.sigma_a
    }
}

/// Constant amount in every halo above `10^M_min`.
///
/// Parameters
/// ----------
/// - `logA` (0.0): log10 amount.
/// - `M_min` (11.0): log10 cutoff mass (exclusive).
/// - `sigma_A` (0.0): constant scatter of the amount.
#[derive(Debug, Clone)]
pub struct Constant {
    settings: ModelSettings,
    mass_min: f64,
    amplitude: f64,
    sigma_a: f64,
}

impl Constant {
    pub const NAME: &'static str = "Constant";

    pub const DEFAULTS: &'static [(&'static str, f64)] =
        &[("logA", 0.0), ("M_min", 11.0), ("sigma_A", 0.0)];

    pub const TRAITS: ModelTraits = ModelTraits {
        name: Self::NAME,
        tracer: TracerClass::Bulk,
        sharp_cut: false,
        central_condition_inherent: false,
    };

    pub fn new(central: bool, context: HaloContext, overrides: &ParamSet) -> HODResult<Self> {
        let settings =
            ModelSettings::new(&Self::TRAITS, Self::DEFAULTS, central, context, overrides)?;
        let params = settings.params();
        let mass_min = exp10(params.require(Self::NAME, "M_min")?);
        let amplitude = exp10(params.require(Self::NAME, "logA")?);
        let sigma_a = params.require(Self::NAME, "sigma_A")?;
        Ok(Constant { settings, mass_min, amplitude, sigma_a })
    }

    pub fn with_defaults(central: bool) -> HODResult<Self> {
        Self::new(central, HaloContext::default(), &ParamSet::new())
    }
}

impl OccupationModel for Constant {
    fn traits(&self) -> ModelTraits {
        Self::TRAITS
    }

    fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    fn raw_central_occupation(&self, _m: f64) -> f64 {
        no_central::raw_central_occupation()
    }

    fn raw_satellite_occupation(&self, m: f64) -> f64 {
        if m > self.mass_min { self.amplitude } else { 0.0 }
    }

    fn sigma_satellite(&self, _m: f64) -> f64 {
        self.sigma_a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // The power-law amount lives on the closed truncation window and pairs
    // with itself deterministically.
    //
    // Given
    // -----
    // - ContinuousPowerLaw with M_1 = 12, alpha = 1, logA = 1, M_max = 15.
    //
    // Expect
    // ------
    // - amount(1e13) = 10 · (10 + 1) = 110, ss_pairs = 110^2;
    //   amount 0 below 10^M_min and above 10^M_max; nc = ns = 0.
    fn continuous_power_law_window_and_self_pairs() {
        // Arrange
        let overrides = ParamSet::new()
            .with("M_1", 12.0)
            .with("alpha", 1.0)
            .with("logA", 1.0)
            .with("M_max", 15.0);
        let model = ContinuousPowerLaw::new(false, HaloContext::default(), &overrides).unwrap();

        // Act
        let amount = model.satellite_occupation(1e13);

        // Assert
        assert_relative_eq!(amount, 110.0, max_relative = 1e-12);
        assert_relative_eq!(model.ss_pairs(1e13), amount * amount, max_relative = 1e-12);
        assert_eq!(model.satellite_occupation(1e11), 0.0);
        assert_eq!(model.satellite_occupation(1e16), 0.0);
        assert_eq!(model.nc(1e13), 0.0);
        assert_eq!(model.ns(1e13), 0.0);
        assert_eq!(model.central_occupation(1e13), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Bulk models report their constant scatter and never enforce the
    // central condition.
    //
    // Given
    // -----
    // - ContinuousPowerLaw and Constant with sigma_A = 0.3, built with
    //   `central = true`.
    //
    // Expect
    // ------
    // - sigma_satellite = 0.3 at any mass; central_enforced false.
    fn bulk_models_use_sigma_a_and_drop_central_condition() {
        // Arrange
        let overrides = ParamSet::new().with("sigma_A", 0.3);
        let power = ContinuousPowerLaw::new(true, HaloContext::default(), &overrides).unwrap();
        let constant = Constant::new(true, HaloContext::default(), &overrides).unwrap();

        // Act / Assert
        for m in [1e9, 1e13] {
            assert_eq!(power.sigma_satellite(m), 0.3);
            assert_eq!(constant.sigma_satellite(m), 0.3);
        }
        assert!(!power.central_enforced());
        assert!(!constant.central_enforced());
    }

    #[test]
    // Purpose
    // -------
    // The constant amount switches on strictly above 10^M_min.
    //
    // Given
    // -----
    // - Constant with logA = 2 (M_min = 11).
    //
    // Expect
    // ------
    // - amount(9e10) = 0, amount(2e11) = 100, total = amount.
    fn constant_switches_on_strictly_above_m_min() {
        // Arrange
        let overrides = ParamSet::new().with("logA", 2.0);
        let model = Constant::new(false, HaloContext::default(), &overrides).unwrap();

        // Act / Assert
        assert_eq!(model.satellite_occupation(9e10), 0.0);
        assert_relative_eq!(model.satellite_occupation(2e11), 100.0, max_relative = 1e-12);
        assert_eq!(model.total_occupation(2e11), model.satellite_occupation(2e11));
    }
}
