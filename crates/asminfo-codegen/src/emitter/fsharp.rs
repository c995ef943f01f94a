//! ---
//! asminfo_section: "02-code-emission"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Version metadata model and multi-language code emission."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
//! F# emitter.
//!
//! Assembly attributes must sit inside a namespace and attach to a `do()`
//! expression, so the type declaration is bracketed by two `do()` lines.
use super::{
    c_style_literal, generated_code_marker, AttributeKind, CodeBuilder, CodeEmitter,
    DEFAULT_NAMESPACE, THIS_ASSEMBLY,
};
use crate::model::GeneratorIdentity;

/// F# emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FSharpEmitter;

impl CodeEmitter for FSharpEmitter {
    fn comment_token(&self) -> &'static str {
        "//"
    }

    fn string_literal(&self, value: &str) -> String {
        c_style_literal(value)
    }

    fn emit_namespace_if_required(&self, code: &mut CodeBuilder, namespace: Option<&str>) {
        let namespace = namespace
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
            .unwrap_or(DEFAULT_NAMESPACE);
        code.line(format!("namespace {namespace}"));
    }

    fn declare_attribute(&self, code: &mut CodeBuilder, kind: AttributeKind, value: &str) {
        code.line(format!(
            "[<assembly: {}({})>]",
            kind.type_name(),
            self.string_literal(value)
        ));
    }

    fn start_this_assembly_class(&self, code: &mut CodeBuilder, generator: &GeneratorIdentity) {
        code.line("do()");
        code.line(format!("[<{}>]", generated_code_marker(self, generator)));
        code.line(format!("type internal {THIS_ASSEMBLY}() ="));
    }

    fn add_member(&self, code: &mut CodeBuilder, name: &str, value: &str) {
        code.line(format!(
            "  static member internal {name} = {}",
            self.string_literal(value)
        ));
    }

    fn add_commit_date_member(&self, code: &mut CodeBuilder, ticks: i64) {
        code.line(format!(
            "  static member internal GitCommitDate = new System.DateTimeOffset({ticks}L, System.TimeSpan.Zero)"
        ));
    }

    fn end_this_assembly_class(&self, code: &mut CodeBuilder) {
        code.line("do()");
    }
}
