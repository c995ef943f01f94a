//! ---
//! asminfo_section: "02-code-emission"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Version metadata model and multi-language code emission."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Renders build-time version facts into a `ThisAssembly` source file for
//! C#, Visual Basic, or F#. Output is a pure function of the
//! [`VersionMetadata`] and the selected language, so regenerating with the
//! same inputs yields byte-identical files.

pub mod emitter;
pub mod errors;
pub mod generate;
pub mod language;
pub mod model;

pub use emitter::{AttributeKind, CodeBuilder, CodeEmitter, FILE_HEADER};
pub use errors::{GenerateError, Result};
pub use generate::{generate, generate_for_language};
pub use language::{select_emitter, Language};
pub use model::{
    ticks_from_datetime, BuildFacts, ConstantName, GeneratorIdentity, VersionMetadata,
    VersionMetadataBuilder, ROOT_NAMESPACE,
};
