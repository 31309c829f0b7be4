//! Declarative model configuration.
//!
//! Purpose
//! -------
//! Describe an occupation model in a TOML document (model name, central
//! condition, parameter overrides, cosmology, mass definition) and build it.
//!
//! Example
//! -------
//! ```toml
//! model = "Zheng05"
//! central = true
//!
//! [params]
//! M_min = 12.0
//! sig_logm = 0.3
//!
//! [cosmology]
//! name = "Planck15"
//! h0 = 67.74
//! omega_m = 0.3075
//!
//! [mass_definition]
//! kind = "SOMean"
//! overdensity = 200.0
//! ```
//!
//! Conventions
//! -----------
//! - Everything except `model` is optional; omitted sections take the
//!   defaults of [`Cosmology`] and [`MassDefinition`].
//! - Unknown top-level keys are parse errors. Unknown parameter names are
//!   rejected later, when the model is built.
use crate::hod::{
    core::{
        context::{Cosmology, HaloContext, MassDefinition},
        model::OccupationModel,
        params::ParamSet,
    },
    errors::{HODError, HODResult},
    models::registry::ModelKind,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable description of one occupation model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HODConfig {
    /// Registry name of the model (case-insensitive).
    pub model: String,
    /// Request the central condition.
    #[serde(default)]
    pub central: bool,
    /// Parameter overrides.
    #[serde(default)]
    pub params: ParamSet,
    #[serde(default)]
    pub cosmology: Cosmology,
    #[serde(default)]
    pub mass_definition: MassDefinition,
}

impl HODConfig {
    /// Configuration for `kind` with defaults everywhere else.
    pub fn new(kind: ModelKind) -> Self {
        HODConfig {
            model: kind.name().to_string(),
            central: false,
            params: ParamSet::new(),
            cosmology: Cosmology::default(),
            mass_definition: MassDefinition::default(),
        }
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    /// - [`HODError::ConfigParse`] for malformed TOML, wrong value types, or
    ///   unknown top-level keys.
    pub fn from_toml_str(source: &str) -> HODResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    /// - [`HODError::ConfigParse`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> HODResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|err| HODError::ConfigParse {
            reason: format!("cannot read {}: {err}", path.display()),
        })?;
        Self::from_toml_str(&source)
    }

    /// Resolve the model name.
    ///
    /// # Errors
    /// - [`HODError::UnknownModel`] if no model has that name.
    pub fn kind(&self) -> HODResult<ModelKind> {
        self.model.parse()
    }

    /// Halo context built from the cosmology and mass definition, with no
    /// profile handles.
    pub fn context(&self) -> HaloContext {
        HaloContext::new(self.cosmology.clone(), self.mass_definition)
    }

    /// Build the configured model.
    ///
    /// # Errors
    /// - [`HODError::UnknownModel`] for an unregistered name.
    /// - [`HODError::UnknownParameter`] / [`HODError::NonFiniteParameter`] for
    ///   bad overrides.
    pub fn build(&self) -> HODResult<Box<dyn OccupationModel>> {
        let kind = self.kind()?;
        tracing::debug!(
            model = kind.name(),
            cosmology = %self.cosmology.name,
            "building occupation model from config"
        );
        kind.build(self.central, self.context(), &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // A full document parses into every field and builds the named model.
    //
    // Given
    // -----
    // - A Zheng05 document with the central condition, two overrides, a
    //   custom cosmology, and an SOCritical mass definition.
    //
    // Expect
    // ------
    // - Fields match the document; the built model reports the overrides.
    fn full_document_parses_and_builds() {
        // Arrange
        let source = r#"
            model = "zheng05"
            central = true

            [params]
            M_min = 12.0
            sig_logm = 0.3

            [cosmology]
            name = "WMAP9"
            h0 = 69.32
            omega_m = 0.2865

            [mass_definition]
            kind = "SOCritical"
            overdensity = 500.0
        "#;

        // Act
        let config = HODConfig::from_toml_str(source).unwrap();
        let model = config.build().unwrap();

        // Assert
        assert!(config.central);
        assert_eq!(config.cosmology.name, "WMAP9");
        assert_eq!(config.mass_definition, MassDefinition::SOCritical { overdensity: 500.0 });
        assert_eq!(model.name(), "Zheng05");
        assert!(model.central_enforced());
        assert_relative_eq!(model.minimum_mass(), 12.0 - 1.5, max_relative = 1e-12);
        assert_eq!(model.settings().context().cosmology.name, "WMAP9");
    }

    #[test]
    // Purpose
    // -------
    // Only the model name is required.
    //
    // Given
    // -----
    // - `model = "Constant"`.
    //
    // Expect
    // ------
    // - Defaults for everything else; equal to `HODConfig::new`.
    fn minimal_document_uses_defaults() {
        // Act
        let config = HODConfig::from_toml_str(r#"model = "Constant""#).unwrap();

        // Assert
        assert_eq!(config, HODConfig::new(ModelKind::Constant));
    }

    #[test]
    // Purpose
    // -------
    // Malformed documents, unknown models, and unknown parameters surface as
    // distinct errors.
    //
    // Given
    // -----
    // - A document with a stray key, one naming an unknown model, and one
    //   overriding an undeclared parameter.
    //
    // Expect
    // ------
    // - ConfigParse, UnknownModel, UnknownParameter respectively.
    fn bad_documents_report_distinct_errors() {
        // Arrange
        let stray = "model = \"Zehavi05\"\ncolour = \"red\"";
        let unknown_model = "model = \"Berlind03\"";
        let unknown_param = "model = \"Zehavi05\"\n[params]\nsig_logm = 0.2";

        // Act
        let stray_err = HODConfig::from_toml_str(stray);
        let model_err = HODConfig::from_toml_str(unknown_model).unwrap().build();
        let param_err = HODConfig::from_toml_str(unknown_param).unwrap().build();

        // Assert
        assert!(matches!(stray_err, Err(HODError::ConfigParse { .. })));
        assert!(matches!(model_err, Err(HODError::UnknownModel { .. })));
        assert!(matches!(param_err, Err(HODError::UnknownParameter { .. })));
    }

    #[test]
    // Purpose
    // -------
    // A configuration file on disk loads like the same document in memory,
    // and a missing file is a parse error naming the path.
    //
    // Given
    // -----
    // - A Zheng05 document written to a temporary file; a path that does not
    //   exist.
    //
    // Expect
    // ------
    // - The loaded config equals `from_toml_str` of the same text and builds.
    // - ConfigParse whose reason contains the missing path.
    fn from_path_reads_file_and_reports_missing_file() {
        // Arrange
        let source = "model = \"Zheng05\"\ncentral = true\n[params]\nsig_logm = 0.3\n";
        let dir = std::env::temp_dir();
        let path = dir.join(format!("halo_occupation_config_{}.toml", std::process::id()));
        let missing = dir.join("halo_occupation_config_does_not_exist.toml");
        std::fs::write(&path, source).unwrap();

        // Act
        let loaded = HODConfig::from_path(&path);
        let missing_err = HODConfig::from_path(&missing);
        std::fs::remove_file(&path).unwrap();

        // Assert
        let loaded = loaded.unwrap();
        assert_eq!(loaded, HODConfig::from_toml_str(source).unwrap());
        let model = loaded.build().unwrap();
        assert_eq!(model.name(), "Zheng05");
        assert!(model.central_enforced());
        match missing_err {
            Err(HODError::ConfigParse { reason }) => {
                assert!(reason.contains("halo_occupation_config_does_not_exist.toml"));
            }
            other => panic!("expected ConfigParse, got: {other:?}"),
        }
    }
}
