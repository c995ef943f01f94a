//! ---
//! asminfo_section: "01-signing-keys"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Strong-name key interpretation and token derivation."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Reads strong-name key material (`.snk` files) and turns it into the
//! hexadecimal public key and public key token strings embedded into the
//! generated `ThisAssembly` type.

pub mod blob;
pub mod errors;
pub mod resolver;

pub use blob::{public_key_from_private_blob, strong_name_token, PRIVATE_KEY_BLOB};
pub use errors::{KeyError, Result};
pub use resolver::{public_key_from_container, resolve, KeyInfo, KeyResolution};
