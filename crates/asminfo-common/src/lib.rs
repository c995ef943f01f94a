//! ---
//! asminfo_section: "03-configuration-logging"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Shared configuration, logging, and build metadata."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
//! Shared plumbing for the asminfo tools: configuration loading, tracing
//! setup, change-aware output writing, and the tool's own build metadata.

pub mod config;
pub mod logging;
pub mod output;
pub mod version;

pub use config::{GeneratorConfig, LoadedConfig, LoggingConfig, OutputConfig, SigningConfig};
pub use logging::{init_tracing, LogFormat};
pub use output::{write_if_changed, WriteOutcome};
pub use version::VersionInfo;
