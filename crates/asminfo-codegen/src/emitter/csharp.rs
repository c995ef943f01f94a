//! ---
//! asminfo_section: "02-code-emission"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Version metadata model and multi-language code emission."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use super::{
    c_style_literal, generated_code_marker, AttributeKind, CodeBuilder, CodeEmitter, THIS_ASSEMBLY,
};
use crate::model::GeneratorIdentity;

/// C# emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpEmitter;

impl CodeEmitter for CSharpEmitter {
    fn comment_token(&self) -> &'static str {
        "//"
    }

    fn string_literal(&self, value: &str) -> String {
        c_style_literal(value)
    }

    fn declare_attribute(&self, code: &mut CodeBuilder, kind: AttributeKind, value: &str) {
        code.line(format!(
            "[assembly: {}({})]",
            kind.type_name(),
            self.string_literal(value)
        ));
    }

    fn start_this_assembly_class(&self, code: &mut CodeBuilder, generator: &GeneratorIdentity) {
        code.line(format!("[{}]", generated_code_marker(self, generator)));
        code.line(format!("internal sealed partial class {THIS_ASSEMBLY} {{"));
        // Not a static class, so hide the constructor instead.
        code.line(format!("    private {THIS_ASSEMBLY}() {{}}"));
    }

    fn add_member(&self, code: &mut CodeBuilder, name: &str, value: &str) {
        code.line(format!(
            "    internal const string {name} = {};",
            self.string_literal(value)
        ));
    }

    fn add_commit_date_member(&self, code: &mut CodeBuilder, ticks: i64) {
        code.line(format!(
            "    internal static readonly System.DateTimeOffset GitCommitDate = new System.DateTimeOffset({ticks}, System.TimeSpan.Zero);"
        ));
    }

    fn end_this_assembly_class(&self, code: &mut CodeBuilder) {
        code.line("}");
    }
}
