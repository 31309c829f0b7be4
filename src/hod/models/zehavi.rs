//! Step-cutoff HODs of Zehavi et al. (2005) and their truncated and marked
//! variants.
//!
//! - [`Zehavi05`]: central step at `M_min`, satellite power law
//!   `(m / 10^M_1)^alpha`.
//! - [`Zehavi05WithMax`]: centrals only inside `[10^M_min, 10^M_max]`.
//! - [`Zehavi05Marked`]: the truncated model where each object carries
//!   `10^logA` of the tracer instead of counting one. Normalised statistics
//!   are identical to [`Zehavi05WithMax`].
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

/// 1 at and above `mass_min`, else 0.
pub(crate) fn step_central(m: f64, mass_min: f64) -> f64 {
    if m >= mass_min { 1.0 } else { 0.0 }
}

/// 1 inside the closed window `[mass_min, mass_max]`, else 0.
fn windowed_central(m: f64, mass_min: f64, mass_max: f64) -> f64 {
    if m >= mass_min && m <= mass_max { 1.0 } else { 0.0 }
}

fn power_law(m: f64, mass_1: f64, alpha: f64) -> f64 {
    (m / mass_1).powf(alpha)
}

/// Three-parameter model of Zehavi et al. (2005).
///
/// Parameters
/// ----------
/// - `M_min` (11.6222): minimum log10 mass of a halo hosting a central.
/// - `M_1` (12.851): log10 mass of a halo hosting one satellite on average.
/// - `alpha` (1.049): satellite power-law index.
#[derive(Debug, Clone)]
pub struct Zehavi05 {
    settings: ModelSettings,
    mass_min: f64,
    mass_1: f64,
    alpha: f64,
}

impl Zehavi05 {
    pub const NAME: &'static str = "Zehavi05";

    pub const DEFAULTS: &'static [(&'static str, f64)] =
        &[("M_min", 11.6222), ("M_1", 12.851), ("alpha", 1.049)];

    pub const TRAITS: ModelTraits = ModelTraits {
        name: Self::NAME,
        tracer: TracerClass::Poisson,
        sharp_cut: true,
        central_condition_inherent: false,
    };

    pub fn new(central: bool, context: HaloContext, overrides: &ParamSet) -> HODResult<Self> {
        let settings =
            ModelSettings::new(&Self::TRAITS, Self::DEFAULTS, central, context, overrides)?;
        let params = settings.params();
        let mass_min = exp10(params.require(Self::NAME, "M_min")?);
        let mass_1 = exp10(params.require(Self::NAME, "M_1")?);
        let alpha = params.require(Self::NAME, "alpha")?;
        Ok(Zehavi05 { settings, mass_min, mass_1, alpha })
    }

    /// Default parameters and a default [`HaloContext`].
    pub fn with_defaults(central: bool) -> HODResult<Self> {
        Self::new(central, HaloContext::default(), &ParamSet::new())
    }
}

impl OccupationModel for Zehavi05 {
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
        power_law(m, self.mass_1, self.alpha)
    }
}

/// [`Zehavi05`] with an upper truncation mass for centrals.
///
/// Parameters
/// ----------
/// - `M_min`, `M_1`, `alpha`: as in [`Zehavi05`].
/// - `M_max` (18.0): log10 truncation mass.
#[derive(Debug, Clone)]
pub struct Zehavi05WithMax {
    settings: ModelSettings,
    mass_min: f64,
    mass_max: f64,
    mass_1: f64,
    alpha: f64,
}

impl Zehavi05WithMax {
    pub const NAME: &'static str = "Zehavi05WithMax";

    pub const DEFAULTS: &'static [(&'static str, f64)] =
        &[("M_min", 11.6222), ("M_1", 12.851), ("alpha", 1.049), ("M_max", 18.0)];

    pub const TRAITS: ModelTraits = ModelTraits {
        name: Self::NAME,
        tracer: TracerClass::Poisson,
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
        let alpha = params.require(Self::NAME, "alpha")?;
        Ok(Zehavi05WithMax { settings, mass_min, mass_max, mass_1, alpha })
    }

    pub fn with_defaults(central: bool) -> HODResult<Self> {
        Self::new(central, HaloContext::default(), &ParamSet::new())
    }
}

impl OccupationModel for Zehavi05WithMax {
    fn traits(&self) -> ModelTraits {
        Self::TRAITS
    }

    fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    fn raw_central_occupation(&self, m: f64) -> f64 {
        windowed_central(m, self.mass_min, self.mass_max)
    }

    fn raw_satellite_occupation(&self, m: f64) -> f64 {
        power_law(m, self.mass_1, self.alpha)
    }
}

/// [`Zehavi05WithMax`] where every object carries `10^logA` of the tracer.
///
/// Parameters
/// ----------
/// - `M_min`, `M_1`, `alpha`, `M_max`: as in [`Zehavi05WithMax`].
/// - `logA` (0.0): log10 amount of tracer per central and per satellite.
///
/// Notes
/// -----
/// - Occupations and pair moments scale with the amplitude; counts (`nc`,
///   `ns`) do not.
/// - The central scatter is that of the unweighted 0/1 draw, scaled by the
///   amplitude: `sqrt(10^logA · c (1 - c))`.
#[derive(Debug, Clone)]
pub struct Zehavi05Marked {
    settings: ModelSettings,
    mass_min: f64,
    mass_max: f64,
    mass_1: f64,
    alpha: f64,
    amplitude: f64,
}

impl Zehavi05Marked {
    pub const NAME: &'static str = "Zehavi05Marked";

    pub const DEFAULTS: &'static [(&'static str, f64)] = &[
        ("M_min", 11.6222),
        ("M_1", 12.851),
        ("logA", 0.0),
        ("alpha", 1.049),
        ("M_max", 18.0),
    ];

    pub const TRAITS: ModelTraits = ModelTraits {
        name: Self::NAME,
        tracer: TracerClass::Poisson,
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
        let alpha = params.require(Self::NAME, "alpha")?;
        let amplitude = exp10(params.require(Self::NAME, "logA")?);
        Ok(Zehavi05Marked { settings, mass_min, mass_max, mass_1, alpha, amplitude })
    }

    pub fn with_defaults(central: bool) -> HODResult<Self> {
        Self::new(central, HaloContext::default(), &ParamSet::new())
    }
}

impl OccupationModel for Zehavi05Marked {
    fn traits(&self) -> ModelTraits {
        Self::TRAITS
    }

    fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    fn raw_central_occupation(&self, m: f64) -> f64 {
        windowed_central(m, self.mass_min, self.mass_max) * self.tracer_per_central(m)
    }

    fn raw_satellite_occupation(&self, m: f64) -> f64 {
        power_law(m, self.mass_1, self.alpha) * self.tracer_per_satellite(m)
    }

    fn tracer_per_central(&self, _m: f64) -> f64 {
        self.amplitude
    }

    fn sigma_central(&self, m: f64) -> f64 {
        let co = windowed_central(m, self.mass_min, self.mass_max);
        (self.tracer_per_central(m) * co * (1.0 - co)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // The step cutoff is inclusive at M_min and the satellite power law is
    // one at M_1.
    //
    // Given
    // -----
    // - Default Zehavi05 (M_min = 11.6222, M_1 = 12.851, alpha = 1.049).
    //
    // Expect
    // ------
    // - central(10^11.6222) = 1, central(10^11.6) = 0,
    //   satellite(10^12.851) ≈ 1.
    fn zehavi05_step_and_power_law_reference_points() {
        // Arrange
        let model = Zehavi05::with_defaults(false).unwrap();

        // Act
        let at_cut = model.central_occupation(10f64.powf(11.6222));
        let below_cut = model.central_occupation(10f64.powf(11.6));
        let at_m1 = model.satellite_occupation(10f64.powf(12.851));

        // Assert
        assert_eq!(at_cut, 1.0);
        assert_eq!(below_cut, 0.0);
        assert_relative_eq!(at_m1, 1.0, max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // With the central condition enforced, satellites vanish below M_min.
    //
    // Given
    // -----
    // - Zehavi05 with `central = true`.
    //
    // Expect
    // ------
    // - satellite(1e11) = 0, satellite(1e13) equals the raw power law.
    fn zehavi05_enforced_central_condition_cuts_satellites() {
        // Arrange
        let model = Zehavi05::with_defaults(true).unwrap();

        // Act / Assert
        assert_eq!(model.satellite_occupation(1e11), 0.0);
        assert_eq!(model.satellite_occupation(1e13), model.raw_satellite_occupation(1e13));
    }

    #[test]
    // Purpose
    // -------
    // Overrides reach the formulas.
    //
    // Given
    // -----
    // - Zehavi05 with M_1 = 13, alpha = 2.
    //
    // Expect
    // ------
    // - satellite(1e14) = (1e14 / 1e13)^2 = 100.
    fn zehavi05_overrides_change_satellite_curve() {
        // Arrange
        let overrides = ParamSet::new().with("M_1", 13.0).with("alpha", 2.0);
        let model = Zehavi05::new(false, HaloContext::default(), &overrides).unwrap();

        // Act
        let sat = model.satellite_occupation(1e14);

        // Assert
        assert_relative_eq!(sat, 100.0, max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Centrals of the truncated model sit inside the closed mass window.
    //
    // Given
    // -----
    // - Zehavi05WithMax with M_max = 14.
    //
    // Expect
    // ------
    // - central = 1 at 1e12 and exactly 1e14, 0 at 1e15.
    fn zehavi05_with_max_truncates_centrals() {
        // Arrange
        let overrides = ParamSet::new().with("M_max", 14.0);
        let model = Zehavi05WithMax::new(false, HaloContext::default(), &overrides).unwrap();

        // Act / Assert
        assert_eq!(model.central_occupation(1e12), 1.0);
        assert_eq!(model.central_occupation(10f64.powf(14.0)), 1.0);
        assert_eq!(model.central_occupation(1e15), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // The marked model scales occupations by the amplitude but leaves counts
    // and normalised statistics equal to the unmarked model.
    //
    // Given
    // -----
    // - Zehavi05Marked with logA = 2 and Zehavi05WithMax defaults, both with
    //   the central condition, at m = 1e13.
    //
    // Expect
    // ------
    // - total occupation ×100, nc and ns equal, total pairs ×1e4.
    fn zehavi05_marked_scales_amounts_not_counts() {
        // Arrange
        let overrides = ParamSet::new().with("logA", 2.0);
        let marked = Zehavi05Marked::new(true, HaloContext::default(), &overrides).unwrap();
        let plain = Zehavi05WithMax::with_defaults(true).unwrap();
        let m = 1e13;

        // Act / Assert
        assert_relative_eq!(
            marked.total_occupation(m),
            100.0 * plain.total_occupation(m),
            max_relative = 1e-12
        );
        assert_relative_eq!(marked.nc(m), plain.nc(m), max_relative = 1e-12);
        assert_relative_eq!(marked.ns(m), plain.ns(m), max_relative = 1e-12);
        assert_relative_eq!(
            marked.total_pair_function(m),
            1e4 * plain.total_pair_function(m),
            max_relative = 1e-12
        );
    }

    #[test]
    // Purpose
    // -------
    // The marked central scatter uses the unweighted 0/1 occupation.
    //
    // Given
    // -----
    // - Zehavi05Marked with logA = 1 at masses inside and below the window.
    //
    // Expect
    // ------
    // - sigma_central = 0 in both cases (c ∈ {0, 1}); never NaN.
    fn zehavi05_marked_sigma_central_uses_unweighted_occupation() {
        // Arrange
        let overrides = ParamSet::new().with("logA", 1.0);
        let model = Zehavi05Marked::new(false, HaloContext::default(), &overrides).unwrap();

        // Act
        let inside = model.sigma_central(1e13);
        let below = model.sigma_central(1e10);

        // Assert
        assert_eq!(inside, 0.0);
        assert_eq!(below, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Undeclared parameters are rejected at construction.
    //
    // Given
    // -----
    // - Zehavi05 with an `M_max` override (only the truncated model has it).
    //
    // Expect
    // ------
    // - `Err(HODError::UnknownParameter { .. })`.
    fn zehavi05_rejects_undeclared_parameter() {
        // Arrange
        let overrides = ParamSet::new().with("M_max", 15.0);

        // Act
        let result = Zehavi05::new(false, HaloContext::default(), &overrides);

        // Assert
        assert!(matches!(
            result,
            Err(crate::hod::errors::HODError::UnknownParameter { .. })
        ));
    }
}
