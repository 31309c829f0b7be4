//! Per-instance model settings: merged parameters, the central-condition
//! flag, and the halo-model context.
//!
//! A [`ModelSettings`] is built once per model instance and never mutated.
//! Construction is where configuration errors surface: unknown or non-finite
//! parameter overrides fail here, before any moment is evaluated.
use crate::hod::{
    core::{
        context::HaloContext,
        model::ModelTraits,
        params::{M_MIN, ParamSet},
    },
    errors::HODResult,
};

/// Immutable state shared by every occupation model.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    params: ParamSet,
    central_enforced: bool,
    m_min: f64,
    context: HaloContext,
}

impl ModelSettings {
    /// Merge parameters and fix the central-condition flag.
    ///
    /// # Arguments
    /// - `traits`: the model's static descriptor (name and tracer class).
    /// - `defaults`: the model's declared parameter defaults.
    /// - `central`: caller's request to enforce the central condition.
    /// - `context`: cosmology, mass definition, and optional profile handles.
    /// - `overrides`: caller parameter values.
    ///
    /// # Behavior
    /// Tracer classes without a central component force `central_enforced`
    /// to `false` regardless of the request.
    ///
    /// # Errors
    /// Propagates [`ParamSet::merge`] failures.
    pub fn new(
        traits: &ModelTraits, defaults: &[(&str, f64)], central: bool, context: HaloContext,
        overrides: &ParamSet,
    ) -> HODResult<Self> {
        let params = ParamSet::merge(traits.name, defaults, overrides)?;
        let m_min = params.require(traits.name, M_MIN)?;
        let central_enforced = traits.tracer.central_enforced(central);
        if central && !central_enforced {
            tracing::debug!(
                model = traits.name,
                "central condition requested for a tracer without centrals; not enforced"
            );
        }
        Ok(ModelSettings { params, central_enforced, m_min, context })
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    pub fn central_enforced(&self) -> bool {
        self.central_enforced
    }

    /// Merged `M_min` (log10 mass).
    pub fn m_min(&self) -> f64 {
        self.m_min
    }

    pub fn context(&self) -> &HaloContext {
        &self.context
    }
}
