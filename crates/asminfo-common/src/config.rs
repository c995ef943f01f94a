//! ---
//! asminfo_section: "03-configuration-logging"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Shared configuration, logging, and build metadata."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use asminfo_codegen::BuildFacts;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::logging::LogFormat;

fn default_language() -> String {
    "c#".to_owned()
}

/// Top-level configuration for a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub output: OutputConfig,
    /// Build facts rendered into `ThisAssembly`.
    #[serde(default)]
    pub assembly: BuildFacts,
    #[serde(default)]
    pub signing: SigningConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Metadata describing where a [`GeneratorConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: GeneratorConfig,
    /// `None` when no file was found and defaults are in effect.
    pub source: Option<PathBuf>,
}

impl GeneratorConfig {
    pub const ENV_CONFIG_PATH: &str = "ASMINFO_CONFIG";
    pub const DEFAULT_FILE: &str = "asminfo.toml";

    /// Load configuration from an explicit path, the `ASMINFO_CONFIG`
    /// override, or `asminfo.toml` in the working directory, in that order.
    ///
    /// An explicitly named file must exist; without any file the defaults
    /// are returned.
    pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
        if let Some(path) = explicit {
            return Self::loaded_from(path.to_path_buf());
        }

        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                return Self::loaded_from(PathBuf::from(env_path));
            }
        }

        let default_path = PathBuf::from(Self::DEFAULT_FILE);
        if default_path.exists() {
            return Self::loaded_from(default_path);
        }

        debug!("no configuration file found; using defaults");
        Ok(LoadedConfig {
            config: GeneratorConfig::default(),
            source: None,
        })
    }

    fn loaded_from(path: PathBuf) -> Result<LoadedConfig> {
        let config = Self::from_path(&path)?;
        Ok(LoadedConfig {
            config,
            source: Some(path),
        })
    }

    fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        contents
            .parse::<GeneratorConfig>()
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<()> {
        if self.output.language.trim().is_empty() {
            return Err(anyhow!("output.language must name a target language"));
        }
        if let Some(path) = &self.output.path {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("output.path cannot be empty"));
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for GeneratorConfig {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: GeneratorConfig =
            toml::from_str(content).with_context(|| "failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Language identifier, e.g. `c#`, `vb`, `f#`.
    #[serde(default = "default_language")]
    pub language: String,
    /// Destination file; defaults to `ThisAssembly.<ext>` when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Declare title/product/company/copyright assembly attributes.
    #[serde(default)]
    pub emit_descriptive_attributes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            path: None,
            emit_descriptive_attributes: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SigningConfig {
    /// Strong-name key file (`.snk`).
    #[serde(default)]
    pub key_file: Option<PathBuf>,
    /// Key container name; lookup is unsupported and yields no key info.
    #[serde(default)]
    pub key_container: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Directory for daily rolling log files; console only when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [output]
        language = "vb"
        path = "obj/ThisAssembly.vb"
        emit_descriptive_attributes = true

        [assembly]
        assembly_version = "1.2.3.0"
        git_commit_id = "abc123"
        root_namespace = "Contoso"

        [signing]
        key_file = "keys/contoso.snk"

        [logging]
        format = "structured-json"
    "#;

    #[test]
    fn parses_all_sections() {
        let config: GeneratorConfig = SAMPLE.parse().unwrap();
        assert_eq!(config.output.language, "vb");
        assert!(config.output.emit_descriptive_attributes);
        assert_eq!(config.assembly.assembly_version.as_deref(), Some("1.2.3.0"));
        assert_eq!(config.assembly.root_namespace.as_deref(), Some("Contoso"));
        assert_eq!(
            config.signing.key_file,
            Some(PathBuf::from("keys/contoso.snk"))
        );
        assert_eq!(config.logging.format, LogFormat::StructuredJson);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config: GeneratorConfig = "".parse().unwrap();
        assert_eq!(config.output.language, "c#");
        assert!(config.output.path.is_none());
        assert_eq!(config.assembly, BuildFacts::default());
    }

    #[test]
    fn blank_language_is_rejected() {
        let err = "[output]\nlanguage = \"  \"".parse::<GeneratorConfig>().unwrap_err();
        assert!(err.to_string().contains("language"));
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(GeneratorConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asminfo.toml");
        fs::write(&path, SAMPLE).unwrap();
        let loaded = GeneratorConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
        assert_eq!(loaded.config.output.language, "vb");
    }
}
