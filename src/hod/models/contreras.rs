//! Duty-cycle HODs of Contreras et al. (2013) and Geach et al. (2012).
//!
//! The central curve blends a Gaussian bump in log10 mass (weighted by
//! `fcb (1 - fca)`) with an erf ramp (weighted by `fca`); satellites follow an
//! erf-modulated power law. [`Geach12`] is the same curve under its own name;
//! both default the width multiplier `x` to one.
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

/// Fixed curve shape shared by both models.
#[derive(Debug, Clone, Copy)]
struct DutyCycle {
    mass_min: f64,
    mass_1: f64,
    alpha: f64,
    sig_logm: f64,
    fca: f64,
    fcb: f64,
    fs: f64,
    delta: f64,
    x: f64,
}

impl DutyCycle {
    fn from_params(name: &'static str, params: &ParamSet) -> HODResult<Self> {
        Ok(DutyCycle {
            mass_min: exp10(params.require(name, "M_min")?),
            mass_1: exp10(params.require(name, "M_1")?),
            alpha: params.require(name, "alpha")?,
            sig_logm: params.require(name, "sig_logm")?,
            fca: params.require(name, "fca")?,
            fcb: params.require(name, "fcb")?,
            fs: params.require(name, "fs")?,
            delta: params.require(name, "delta")?,
            x: params.require(name, "x")?,
        })
    }

    fn central(&self, m: f64) -> f64 {
        let log_ratio = (m / self.mass_min).log10();
        let width = self.x * self.sig_logm;
        self.fcb * (1.0 - self.fca) * (-log_ratio.powi(2) / (2.0 * width.powi(2))).exp()
            + self.fca * (1.0 + erf(log_ratio / width))
    }

    fn satellite(&self, m: f64) -> f64 {
        let ratio = m / self.mass_1;
        self.fs * (1.0 + erf(ratio.log10() / self.delta)) * ratio.powf(self.alpha)
    }
}

/// Nine-parameter duty-cycle model of Contreras et al. (2013).
///
/// Parameters
/// ----------
/// - `M_min`, `M_1`, `alpha`, `M_0`, `sig_logm`: as in
///   [`Zheng05`](crate::hod::models::zheng::Zheng05). `M_0` is declared for
///   compatibility and does not enter the curves.
/// - `fca` (0.5): weight of the erf ramp.
/// - `fcb` (0.0): weight of the Gaussian bump.
/// - `fs` (1.0): satellite normalisation.
/// - `delta` (1.0): width of the satellite erf modulation.
/// - `x` (1.0): multiplier of `sig_logm` in the central curve.
#[derive(Debug, Clone)]
pub struct Contreras13 {
    settings: ModelSettings,
    curve: DutyCycle,
}

impl Contreras13 {
    pub const NAME: &'static str = "Contreras13";

    pub const DEFAULTS: &'static [(&'static str, f64)] = &[
        ("M_min", 11.6222),
        ("M_1", 12.851),
        ("alpha", 1.049),
        ("M_0", 11.5047),
        ("sig_logm", 0.26),
        ("fca", 0.5),
        ("fcb", 0.0),
        ("fs", 1.0),
        ("delta", 1.0),
        ("x", 1.0),
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
        let curve = DutyCycle::from_params(Self::NAME, settings.params())?;
        Ok(Contreras13 { settings, curve })
    }

    pub fn with_defaults(central: bool) -> HODResult<Self> {
        Self::new(central, HaloContext::default(), &ParamSet::new())
    }
}

impl OccupationModel for Contreras13 {
    fn traits(&self) -> ModelTraits {
        Self::TRAITS
    }

    fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    fn raw_central_occupation(&self, m: f64) -> f64 {
        self.curve.central(m)
    }

    fn raw_satellite_occupation(&self, m: f64) -> f64 {
        self.curve.satellite(m)
    }
}

/// Duty-cycle model of Geach et al. (2012).
///
/// Same parameters, defaults and curves as [`Contreras13`], including the
/// overridable `x` (1.0).
#[derive(Debug, Clone)]
pub struct Geach12 {
    settings: ModelSettings,
    curve: DutyCycle,
}

impl Geach12 {
    pub const NAME: &'static str = "Geach12";

    pub const DEFAULTS: &'static [(&'static str, f64)] = &[
        ("M_min", 11.6222),
        ("M_1", 12.851),
        ("alpha", 1.049),
        ("M_0", 11.5047),
        ("sig_logm", 0.26),
        ("fca", 0.5),
        ("fcb", 0.0),
        ("fs", 1.0),
        ("delta", 1.0),
        ("x", 1.0),
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
        let curve = DutyCycle::from_params(Self::NAME, settings.params())?;
        Ok(Geach12 { settings, curve })
    }

    pub fn with_defaults(central: bool) -> HODResult<Self> {
        Self::new(central, HaloContext::default(), &ParamSet::new())
    }
}

impl OccupationModel for Geach12 {
    fn traits(&self) -> ModelTraits {
        Self::TRAITS
    }

    fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    fn raw_central_occupation(&self, m: f64) -> f64 {
        self.curve.central(m)
    }

    fn raw_satellite_occupation(&self, m: f64) -> f64 {
        self.curve.satellite(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // With no Gaussian bump the central curve at M_min equals fca and the
    // satellite curve at M_1 equals fs.
    //
    // Given
    // -----
    // - Default Contreras13 (fca = 0.5, fcb = 0, fs = 1).
    //
    // Expect
    // ------
    // - central(10^M_min) ≈ 0.5, satellite(10^M_1) ≈ 1.
    fn contreras13_reference_points() {
        // Arrange
        let model = Contreras13::with_defaults(false).unwrap();

        // Act
        let central = model.central_occupation(10f64.powf(11.6222));
        let satellite = model.satellite_occupation(10f64.powf(12.851));

        // Assert
        assert_relative_eq!(central, 0.5, epsilon = 1e-12);
        assert_relative_eq!(satellite, 1.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // The Gaussian bump contributes fcb (1 - fca) at its peak.
    //
    // Given
    // -----
    // - Contreras13 with fca = 0.2, fcb = 0.5 at m = 10^M_min.
    //
    // Expect
    // ------
    // - central = 0.5 · 0.8 + 0.2 = 0.6.
    fn contreras13_gaussian_bump_peaks_at_m_min() {
        // Arrange
        let overrides = ParamSet::new().with("fca", 0.2).with("fcb", 0.5);
        let model = Contreras13::new(false, HaloContext::default(), &overrides).unwrap();

        // Act
        let central = model.central_occupation(10f64.powf(11.6222));

        // Assert
        assert_relative_eq!(central, 0.6, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Geach12 carries the same curves and parameter table as Contreras13,
    // including an overridable width multiplier `x`.
    //
    // Given
    // -----
    // - Default Geach12 and Contreras13; both again with `x = 2`.
    //
    // Expect
    // ------
    // - Identical central and satellite curves pairwise; merged `x` is 1 by
    //   default and 2 when overridden; widening changes the central curve off
    //   M_min.
    fn geach12_matches_contreras13_for_any_x() {
        // Arrange
        let overrides = ParamSet::new().with("x", 2.0);
        let geach = Geach12::with_defaults(false).unwrap();
        let contreras = Contreras13::with_defaults(false).unwrap();

        // Act
        let geach_wide = Geach12::new(false, HaloContext::default(), &overrides).unwrap();
        let contreras_wide =
            Contreras13::new(false, HaloContext::default(), &overrides).unwrap();

        // Assert
        assert_eq!(geach.params().get("x"), Some(1.0));
        assert_eq!(geach_wide.params().get("x"), Some(2.0));
        for m in [1e10, 3e11, 1e12, 5e13, 1e15] {
            assert_eq!(geach.central_occupation(m), contreras.central_occupation(m));
            assert_eq!(geach.satellite_occupation(m), contreras.satellite_occupation(m));
            assert_eq!(geach_wide.central_occupation(m), contreras_wide.central_occupation(m));
            assert_eq!(
                geach_wide.satellite_occupation(m),
                contreras_wide.satellite_occupation(m)
            );
        }
        assert_ne!(geach_wide.central_occupation(1e11), geach.central_occupation(1e11));
    }
}
