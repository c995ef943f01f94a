//! ---
//! asminfo_section: "02-code-emission"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Version metadata model and multi-language code emission."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use thiserror::Error;

/// Result alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Failures surfaced to callers of the generator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// No emitter exists for the requested language identifier.
    #[error("code generation is not available for language '{0}'; no version info will be embedded")]
    UnsupportedLanguage(String),
}
