//! ---
//! asminfo_section: "03-configuration-logging"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Shared configuration, logging, and build metadata."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use asminfo_codegen::GeneratorIdentity;

/// Name the tool reports in generated files and `--version` output.
pub const TOOL_NAME: &str = "asminfo";

/// Compile-time version metadata captured via `vergen`.
#[derive(Debug, Clone)]
pub struct VersionInfo {
    /// Workspace semantic version.
    pub semver: String,
    /// Git commit hash captured at build time.
    pub git_sha: String,
    /// Build timestamp from the compilation environment.
    pub build_timestamp: String,
}

impl VersionInfo {
    /// Construct a new [`VersionInfo`] instance using environment metadata.
    #[must_use]
    pub fn current() -> Self {
        Self {
            semver: env!("CARGO_PKG_VERSION").to_owned(),
            git_sha: option_env!("VERGEN_GIT_SHA")
                .unwrap_or("UNKNOWN")
                .to_owned(),
            build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP")
                .unwrap_or("UNKNOWN")
                .to_owned(),
        }
    }

    /// Identity written into the `GeneratedCode` attribute.
    ///
    /// Only the semantic version is used so output stays identical across
    /// rebuilds of the same release.
    #[must_use]
    pub fn generator_identity(&self) -> GeneratorIdentity {
        GeneratorIdentity::new(TOOL_NAME, self.semver.clone())
    }

    /// Human readable banner used in logging surfaces.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("{TOOL_NAME} v{} (git {})", self.semver, self.git_sha)
    }

    /// Extended string containing build metadata suitable for `--version` flags.
    #[must_use]
    pub fn extended(&self) -> String {
        format!(
            "{banner}\nBuilt: {built}",
            banner = self.banner(),
            built = self.build_timestamp,
        )
    }
}
