//! ---
//! asminfo_section: "02-code-emission"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Version metadata model and multi-language code emission."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use super::{generated_code_marker, AttributeKind, CodeBuilder, CodeEmitter, THIS_ASSEMBLY};
use crate::model::GeneratorIdentity;

/// Visual Basic emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualBasicEmitter;

impl CodeEmitter for VisualBasicEmitter {
    fn comment_token(&self) -> &'static str {
        "'"
    }

    // VB has no escape sequences: quotes are doubled and control characters
    // are spliced in as `ChrW` constants so the literal stays on one line.
    fn string_literal(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        for ch in value.chars() {
            match ch {
                '"' => out.push_str("\"\""),
                c if c.is_control() => {
                    out.push_str(&format!("\" & ChrW({}) & \"", u32::from(c)));
                }
                other => out.push(other),
            }
        }
        out.push('"');
        out
    }

    fn declare_attribute(&self, code: &mut CodeBuilder, kind: AttributeKind, value: &str) {
        code.line(format!(
            "<Assembly: {}({})>",
            kind.type_name(),
            self.string_literal(value)
        ));
    }

    fn start_this_assembly_class(&self, code: &mut CodeBuilder, generator: &GeneratorIdentity) {
        code.line(format!("<{}>", generated_code_marker(self, generator)));
        code.line(format!("Partial Friend NotInheritable Class {THIS_ASSEMBLY}"));
    }

    fn add_member(&self, code: &mut CodeBuilder, name: &str, value: &str) {
        code.line(format!(
            "    Friend Const {name} As String = {}",
            self.string_literal(value)
        ));
    }

    fn add_commit_date_member(&self, code: &mut CodeBuilder, ticks: i64) {
        code.line(format!(
            "    Friend Shared ReadOnly GitCommitDate As System.DateTimeOffset = New System.DateTimeOffset({ticks}, System.TimeSpan.Zero)"
        ));
    }

    fn end_this_assembly_class(&self, code: &mut CodeBuilder) {
        code.line("End Class");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_friend_class() {
        let emitter = VisualBasicEmitter;
        let mut code = CodeBuilder::new();
        emitter.declare_attribute(&mut code, AttributeKind::FileVersion, "1.2.3.4");
        emitter.start_this_assembly_class(&mut code, &GeneratorIdentity::new("gen", "1.0"));
        emitter.add_member(&mut code, "RootNamespace", "");
        emitter.end_this_assembly_class(&mut code);
        assert_eq!(
            code.into_code(),
            "<Assembly: System.Reflection.AssemblyFileVersionAttribute(\"1.2.3.4\")>\n\
             <System.CodeDom.Compiler.GeneratedCode(\"gen\",\"1.0\")>\n\
             Partial Friend NotInheritable Class ThisAssembly\n\
             \x20   Friend Const RootNamespace As String = \"\"\n\
             End Class\n"
        );
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(
            VisualBasicEmitter.string_literal(r#"say "hi""#),
            r#""say ""hi""""#
        );
        assert_eq!(VisualBasicEmitter.string_literal(r"C:\path"), r#""C:\path""#);
    }

    #[test]
    fn line_breaks_stay_on_one_line() {
        let mut code = CodeBuilder::new();
        VisualBasicEmitter.add_member(&mut code, "AssemblyCopyright", "line1\r\nline2");
        let code = code.into_code();
        assert_eq!(code.lines().count(), 1);
        assert_eq!(
            code,
            "    Friend Const AssemblyCopyright As String = \"line1\" & ChrW(13) & \"\" & ChrW(10) & \"line2\"\n"
        );
    }
}
