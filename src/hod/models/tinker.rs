//! Exponentially suppressed HOD of Tinker et al. (2005).
use crate::hod::{
    core::{
        context::HaloContext,
        model::{ModelTraits, OccupationModel},
        params::ParamSet,
        settings::ModelSettings,
        tracer::TracerClass,
    },
    errors::HODResult,
    models::{exp10, zehavi::step_central},
};

/// Step-cutoff centrals with satellites suppressed near the cutoff.
///
/// Parameters
/// ----------
/// - `M_min` (11.6222): log10 mass of the central step.
/// - `M_1` (12.851): log10 mass scale of the linear satellite term.
/// - `M_cut` (12.0): log10 suppression mass.
///
/// Notes
/// -----
/// - Satellites are `central(m) · exp(-10^M_cut / (m - 10^M_min)) · m / 10^M_1`,
///   so they vanish wherever centrals do and the model is flagged
///   `central_condition_inherent`.
/// - Below the cutoff the satellite occupation is exactly zero rather than
///   `0 · exp(+∞)`. At `m = 10^M_min` the exponent is `-∞` and the result is 0.
#[derive(Debug, Clone)]
pub struct Tinker05 {
    settings: ModelSettings,
    mass_min: f64,
    mass_1: f64,
    mass_cut: f64,
}

impl Tinker05 {
    pub const NAME: &'static str = "Tinker05";

    pub const DEFAULTS: &'static [(&'static str, f64)] =
        &[("M_min", 11.6222), ("M_1", 12.851), ("M_cut", 12.0)];

    pub const TRAITS: ModelTraits = ModelTraits {
        name: Self::NAME,
        tracer: TracerClass::Poisson,
        sharp_cut: true,
        central_condition_inherent: true,
    };

    pub fn new(central: bool, context: HaloContext, overrides: &ParamSet) -> HODResult<Self> {
        let settings =
            ModelSettings::new(&Self::TRAITS, Self::DEFAULTS, central, context, overrides)?;
        let params = settings.params();
        let mass_min = exp10(params.require(Self::NAME, "M_min")?);
        let mass_1 = exp10(params.require(Self::NAME, "M_1")?);
        let mass_cut = exp10(params.require(Self::NAME, "M_cut")?);
        Ok(Tinker05 { settings, mass_min, mass_1, mass_cut })
    }

    pub fn with_defaults(central: bool) -> HODResult<Self> {
        Self::new(central, HaloContext::default(), &ParamSet::new())
    }
}

impl OccupationModel for Tinker05 {
    fn traits(&self) -> ModelTraits {
        Self::TRAITS
    }

    fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    fn raw_central_occupation(&self, m: f64) -> f64 {
        step_central(m, self.mass_min)
    }

    fn raw_satellite_occupation(&self, m: f64) -> f64 {
        let central = self.central_occupation(m);
        if central == 0.0 {
            return 0.0;
        }
        central * (-self.mass_cut / (m - self.mass_min)).exp() * (m / self.mass_1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // Satellites are exactly zero below the cutoff, with no NaN.
    //
    // Given
    // -----
    // - Default Tinker05 at masses below and at 10^M_min.
    //
    // Expect
    // ------
    // - satellite = 0 (not NaN) at 1e10 and at exactly 10^M_min.
    fn tinker05_satellites_vanish_below_and_at_cutoff() {
        // Arrange
        let model = Tinker05::with_defaults(false).unwrap();

        // Act
        let below = model.satellite_occupation(1e10);
        let at_cut = model.satellite_occupation(10f64.powf(11.6222));

        // Assert
        assert_eq!(below, 0.0);
        assert_eq!(at_cut, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Above the cutoff the satellite curve follows the suppressed linear law.
    //
    // Given
    // -----
    // - Default Tinker05 at m = 1e14.
    //
    // Expect
    // ------
    // - satellite = exp(-1e12 / (1e14 - 10^11.6222)) · 1e14 / 10^12.851.
    fn tinker05_satellite_matches_closed_form() {
        // Arrange
        let model = Tinker05::with_defaults(false).unwrap();
        let m = 1e14;
        let expected =
            (-1e12 / (m - 10f64.powf(11.6222))).exp() * (m / 10f64.powf(12.851));

        // Act / Assert
        assert_relative_eq!(model.satellite_occupation(m), expected, max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // The inherent flag leaves the satellite curve untouched by the central
    // condition while the pair moments still switch law.
    //
    // Given
    // -----
    // - Tinker05 with and without the central condition at m = 1e14.
    //
    // Expect
    // ------
    // - Equal satellite occupations; cs_pairs = satellite · 1 when enforced
    //   and central · satellite otherwise (equal here since central = 1).
    fn tinker05_inherent_flag_keeps_satellites_unscaled() {
        // Arrange
        let enforced = Tinker05::with_defaults(true).unwrap();
        let free = Tinker05::with_defaults(false).unwrap();
        let m = 1e14;

        // Act / Assert
        assert_eq!(enforced.satellite_occupation(m), free.satellite_occupation(m));
        assert_eq!(enforced.cs_pairs(m), enforced.satellite_occupation(m));
        assert_eq!(free.cs_pairs(m), free.central_occupation(m) * free.satellite_occupation(m));
        assert!(Tinker05::TRAITS.central_condition_inherent);
    }
}
