//! ---
//! asminfo_section: "01-signing-keys"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Strong-name key interpretation and token derivation."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the key crate.
pub type Result<T> = std::result::Result<T, KeyError>;

/// Failures raised while reading or interpreting strong-name key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The private key blob could not be parsed.
    #[error("invalid key pair: {0}")]
    MalformedKeyPair(String),
    /// Key container lookup is not supported on this platform.
    #[error("reading public keys from key container '{0}' is not implemented")]
    NotImplemented(String),
    /// The key file exists but could not be read.
    #[error("unable to read key file {path}: {source}")]
    Io {
        /// Key file that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
