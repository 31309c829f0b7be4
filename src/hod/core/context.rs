//! Halo-model collaborators threaded through occupation models.
//!
//! Occupation models hold a cosmology, a mass definition, and optional
//! concentration–mass and density-profile handles. None of the shipped models
//! read them; they are carried so that models which do need them (and the
//! halo-model code integrating occupations over mass) see one consistent
//! context.
//!
//! Notes
//! -----
//! - [`ConcentrationMass`] and [`HaloProfile`] are deliberately minimal:
//!   implementations live outside this crate.
//! - Handles are shared via `Arc` and never mutated here.
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Cosmological parameters carried alongside a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cosmology {
    pub name: String,
    /// Hubble constant in km/s/Mpc.
    pub h0: f64,
    /// Matter density parameter at z = 0.
    pub omega_m: f64,
}

impl Cosmology {
    /// Planck 2015 (TT,TE,EE+lowP+lensing+ext) background.
    pub fn planck15() -> Self {
        Cosmology { name: "Planck15".to_string(), h0: 67.74, omega_m: 0.3075 }
    }
}

impl Default for Cosmology {
    fn default() -> Self {
        Cosmology::planck15()
    }
}

/// Halo mass definition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MassDefinition {
    /// Spherical overdensity relative to the mean matter density.
    SOMean { overdensity: f64 },
    /// Spherical overdensity relative to the critical density.
    SOCritical { overdensity: f64 },
    /// Virial spherical overdensity.
    SOVirial,
    /// Friends-of-friends with the given linking length.
    FOF { linking_length: f64 },
}

impl Default for MassDefinition {
    fn default() -> Self {
        MassDefinition::SOMean { overdensity: 200.0 }
    }
}

/// Concentration–mass relation supplied by the surrounding halo model.
pub trait ConcentrationMass: Send + Sync {
    fn name(&self) -> &str;
}

/// Halo density profile supplied by the surrounding halo model.
pub trait HaloProfile: Send + Sync {
    fn name(&self) -> &str;
}

/// Everything an occupation model may read from the wider halo model.
#[derive(Clone, Default)]
pub struct HaloContext {
    pub cosmology: Cosmology,
    pub mass_definition: MassDefinition,
    pub cm_relation: Option<Arc<dyn ConcentrationMass>>,
    pub profile: Option<Arc<dyn HaloProfile>>,
}

impl HaloContext {
    pub fn new(cosmology: Cosmology, mass_definition: MassDefinition) -> Self {
        HaloContext { cosmology, mass_definition, cm_relation: None, profile: None }
    }

    pub fn with_cm_relation(mut self, cm_relation: Arc<dyn ConcentrationMass>) -> Self {
        self.cm_relation = Some(cm_relation);
        self
    }

    pub fn with_profile(mut self, profile: Arc<dyn HaloProfile>) -> Self {
        self.profile = Some(profile);
        self
    }
}

impl std::fmt::Debug for HaloContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HaloContext")
            .field("cosmology", &self.cosmology)
            .field("mass_definition", &self.mass_definition)
            .field("cm_relation", &self.cm_relation.as_ref().map(|c| c.name().to_string()))
            .field("profile", &self.profile.as_ref().map(|p| p.name().to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nfw;

    impl HaloProfile for Nfw {
        fn name(&self) -> &str {
            "NFW"
        }
    }

    #[test]
    // Purpose
    // -------
    // The default context is Planck15 with SOMean(200) and no handles.
    //
    // Given
    // -----
    // - `HaloContext::default()`.
    //
    // Expect
    // ------
    // - Matching cosmology and mass definition; both handles `None`.
    fn default_context_is_planck15_somean200() {
        // Arrange / Act
        let ctx = HaloContext::default();

        // Assert
        assert_eq!(ctx.cosmology.name, "Planck15");
        assert_eq!(ctx.mass_definition, MassDefinition::SOMean { overdensity: 200.0 });
        assert!(ctx.cm_relation.is_none() && ctx.profile.is_none());
    }

    #[test]
    // Purpose
    // -------
    // Attached handles show up by name in the Debug output.
    //
    // Given
    // -----
    // - A context carrying an NFW profile.
    //
    // Expect
    // ------
    // - Debug string contains "NFW".
    fn debug_lists_attached_profile_name() {
        // Arrange
        let ctx = HaloContext::default().with_profile(Arc::new(Nfw));

        // Act
        let dbg = format!("{ctx:?}");

        // Assert
        assert!(dbg.contains("NFW"), "Got: {dbg}");
    }
}
