//! ---
//! asminfo_section: "02-code-emission"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Version metadata model and multi-language code emission."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use tracing::debug;

use crate::emitter::{AttributeKind, CodeBuilder, CodeEmitter, FILE_HEADER};
use crate::errors::Result;
use crate::language::Language;
use crate::model::{ConstantName, VersionMetadata, ROOT_NAMESPACE};

/// Render the complete `ThisAssembly` source file for `model`.
///
/// The call sequence is fixed: header comment, blank line, namespace (when
/// the language needs one), assembly attributes, then the `ThisAssembly`
/// type with its constants, optional commit date, and `RootNamespace`.
#[must_use]
pub fn generate(model: &VersionMetadata, emitter: &dyn CodeEmitter) -> String {
    let mut code = CodeBuilder::new();
    emitter.add_comment(&mut code, FILE_HEADER);
    emitter.add_blank_line(&mut code);
    emitter.emit_namespace_if_required(&mut code, model.namespace_hint());

    for (kind, value) in assembly_attributes(model) {
        emitter.declare_attribute(&mut code, kind, value);
    }

    emitter.start_this_assembly_class(&mut code, model.generator());
    for (name, value) in model.constants() {
        emitter.add_member(&mut code, name.as_ref(), value);
    }
    if let Some(ticks) = model.commit_date_ticks() {
        emitter.add_commit_date_member(&mut code, ticks);
    }
    emitter.add_member(&mut code, ROOT_NAMESPACE, model.root_namespace());
    emitter.end_this_assembly_class(&mut code);

    code.into_code()
}

/// Select the emitter for `language` and render `model` with it.
pub fn generate_for_language(model: &VersionMetadata, language: &str) -> Result<String> {
    let language: Language = language.parse()?;
    let code = generate(model, language.emitter());
    debug!(%language, bytes = code.len(), "generated ThisAssembly source");
    Ok(code)
}

fn assembly_attributes(model: &VersionMetadata) -> Vec<(AttributeKind, &str)> {
    let value = |name| model.constant(name).unwrap_or_default();
    let mut attributes = vec![
        (AttributeKind::Version, value(ConstantName::AssemblyVersion)),
        (AttributeKind::FileVersion, value(ConstantName::AssemblyFileVersion)),
        (
            AttributeKind::InformationalVersion,
            value(ConstantName::AssemblyInformationalVersion),
        ),
    ];
    if model.emit_descriptive_attributes() {
        attributes.extend(
            [
                (AttributeKind::Title, ConstantName::AssemblyTitle),
                (AttributeKind::Product, ConstantName::AssemblyProduct),
                (AttributeKind::Company, ConstantName::AssemblyCompany),
                (AttributeKind::Copyright, ConstantName::AssemblyCopyright),
            ]
            .into_iter()
            .filter_map(|(kind, name)| model.constant(name).map(|value| (kind, value))),
        );
    }
    attributes
}
