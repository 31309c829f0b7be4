//! Parameter sets for occupation models: class defaults merged with caller
//! overrides.
//!
//! Purpose
//! -------
//! Provide the named-parameter container [`ParamSet`] and the merge rule used
//! by every model constructor. A model declares its defaults as a static
//! table; callers may override any declared key and nothing else.
//!
//! Key behaviors
//! -------------
//! - Seed every merged set with the base default `M_min = 11.0`, so the
//!   minimum-mass accessor always has a value to read.
//! - Overlay the model's own defaults, then the caller's overrides.
//! - Reject override keys the model does not declare and non-finite values.
//!
//! Invariants & assumptions
//! ------------------------
//! - After a successful [`ParamSet::merge`], the key set is exactly the union
//!   of the base default and the model defaults.
//! - Mass-like parameters are log10 masses; this module does not interpret
//!   values beyond the finiteness check.
//!
//! Conventions
//! -----------
//! - Keys keep the conventional HOD spelling (`M_min`, `M_1`, `sig_logm`, …)
//!   so configuration files and Python keyword arguments read naturally.
//! - Iteration order is the lexical key order (backed by a `BTreeMap`).
use crate::hod::{
    core::validation::validate_parameter_value,
    errors::{HODError, HODResult},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the parameter every model carries.
pub const M_MIN: &str = "M_min";

/// Base default shared by all models.
pub const BASE_DEFAULTS: &[(&str, f64)] = &[(M_MIN, 11.0)];

/// Ordered mapping from parameter name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet {
    values: BTreeMap<String, f64>,
}

impl ParamSet {
    /// Empty set; the usual starting point for caller overrides.
    pub fn new() -> Self {
        ParamSet { values: BTreeMap::new() }
    }

    /// Build a set from a static `(name, value)` table.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        let values = pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect();
        ParamSet { values }
    }

    /// Builder-style insert, handy for writing overrides inline.
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: &str, value: f64) -> Option<f64> {
        self.values.insert(key.to_string(), value)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Look up a declared parameter of `model`.
    ///
    /// # Errors
    /// - [`HODError::UnknownParameter`] if `key` is absent. For sets produced by
    ///   [`ParamSet::merge`] this only happens when a model reads a key missing
    ///   from its own default table.
    pub fn require(&self, model: &'static str, key: &str) -> HODResult<f64> {
        self.get(key).ok_or_else(|| HODError::UnknownParameter { model, key: key.to_string() })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Merge base defaults, model defaults, and caller overrides.
    ///
    /// Parameters
    /// ----------
    /// - `model`: model name used in error messages.
    /// - `defaults`: the model's declared defaults. May repeat `M_min`, in
    ///   which case the model value wins over the base default.
    /// - `overrides`: caller values; every key must be declared.
    ///
    /// Returns
    /// -------
    /// The merged [`ParamSet`].
    ///
    /// Errors
    /// ------
    /// - [`HODError::UnknownParameter`] for an override key that is not
    ///   declared by the base or model defaults.
    /// - [`HODError::NonFiniteParameter`] for a NaN/±inf override.
    pub fn merge(
        model: &'static str, defaults: &[(&str, f64)], overrides: &ParamSet,
    ) -> HODResult<ParamSet> {
        let mut merged = ParamSet::from_pairs(BASE_DEFAULTS);
        for &(key, value) in defaults {
            merged.insert(key, value);
        }
        for (key, value) in overrides.iter() {
            if !merged.contains(key) {
                return Err(HODError::UnknownParameter { model, key: key.to_string() });
            }
            merged.insert(key, validate_parameter_value(key, value)?);
        }
        tracing::debug!(model, n_overrides = overrides.len(), "merged occupation parameters");
        Ok(merged)
    }
}

impl<'a> FromIterator<(&'a str, f64)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let values = iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        ParamSet { values }
    }
}
