//! ---
//! asminfo_section: "02-code-emission"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Version metadata model and multi-language code emission."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
//! The emission protocol shared by every target language.
//!
//! Emitters are stateless; all text accumulates in a [`CodeBuilder`] owned by
//! the caller, so a single emitter may serve concurrent generations.
use std::borrow::Cow;

use crate::model::GeneratorIdentity;

mod csharp;
mod fsharp;
mod visual_basic;

pub use csharp::CSharpEmitter;
pub use fsharp::FSharpEmitter;
pub use visual_basic::VisualBasicEmitter;

/// Banner placed at the top of every generated file.
pub const FILE_HEADER: &str = "------------------------------------------------------------------------------
 <auto-generated>
     This code was generated by a tool.
     Runtime Version:4.0.30319.42000

     Changes to this file may cause incorrect behavior and will be lost if
     the code is regenerated.
 </auto-generated>
------------------------------------------------------------------------------
";

/// Namespace substituted when a language requires one and none was given.
pub const DEFAULT_NAMESPACE: &str = "AssemblyInfo";

/// Name of the generated container type.
pub const THIS_ASSEMBLY: &str = "ThisAssembly";

const GENERATED_CODE_ATTRIBUTE: &str = "System.CodeDom.Compiler.GeneratedCode";

/// Assembly-level attributes the generator can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// `AssemblyVersionAttribute`
    Version,
    /// `AssemblyFileVersionAttribute`
    FileVersion,
    /// `AssemblyInformationalVersionAttribute`
    InformationalVersion,
    /// `AssemblyTitleAttribute`
    Title,
    /// `AssemblyProductAttribute`
    Product,
    /// `AssemblyCompanyAttribute`
    Company,
    /// `AssemblyCopyrightAttribute`
    Copyright,
}

impl AttributeKind {
    /// Fully-qualified attribute type name.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            AttributeKind::Version => "System.Reflection.AssemblyVersionAttribute",
            AttributeKind::FileVersion => "System.Reflection.AssemblyFileVersionAttribute",
            AttributeKind::InformationalVersion => {
                "System.Reflection.AssemblyInformationalVersionAttribute"
            }
            AttributeKind::Title => "System.Reflection.AssemblyTitleAttribute",
            AttributeKind::Product => "System.Reflection.AssemblyProductAttribute",
            AttributeKind::Company => "System.Reflection.AssemblyCompanyAttribute",
            AttributeKind::Copyright => "System.Reflection.AssemblyCopyrightAttribute",
        }
    }
}

/// Accumulates generated source text line by line.
#[derive(Debug, Default, Clone)]
pub struct CodeBuilder {
    code: String,
}

impl CodeBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line terminated with `\n`.
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.code.push_str(text.as_ref());
        self.code.push('\n');
    }

    /// Append an empty line.
    pub fn blank_line(&mut self) {
        self.code.push('\n');
    }

    /// Text accumulated so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Consume the builder, yielding the accumulated text.
    #[must_use]
    pub fn into_code(self) -> String {
        self.code
    }
}

/// Language-specific rendering of the `ThisAssembly` generation steps.
pub trait CodeEmitter: Send + Sync {
    /// Token starting a single-line comment.
    fn comment_token(&self) -> &'static str;

    /// Quote a string value as a literal of the target language.
    fn string_literal(&self, value: &str) -> String;

    /// Emit a multi-line comment, one comment token per line.
    fn add_comment(&self, code: &mut CodeBuilder, comment: &str) {
        for line in comment.lines() {
            code.line(format!("{}{line}", self.comment_token()));
        }
    }

    /// Emit an empty line.
    fn add_blank_line(&self, code: &mut CodeBuilder) {
        code.blank_line();
    }

    /// Give languages that require a namespace a chance to emit one.
    fn emit_namespace_if_required(&self, _code: &mut CodeBuilder, _namespace: Option<&str>) {}

    /// Declare an assembly-level attribute with a single string argument.
    fn declare_attribute(&self, code: &mut CodeBuilder, kind: AttributeKind, value: &str);

    /// Open the non-instantiable `ThisAssembly` type.
    fn start_this_assembly_class(&self, code: &mut CodeBuilder, generator: &GeneratorIdentity);

    /// Emit an internal string constant.
    fn add_member(&self, code: &mut CodeBuilder, name: &str, value: &str);

    /// Emit the read-only `GitCommitDate` member at `ticks` with a zero offset.
    fn add_commit_date_member(&self, code: &mut CodeBuilder, ticks: i64);

    /// Close the `ThisAssembly` type.
    fn end_this_assembly_class(&self, code: &mut CodeBuilder);
}

/// `GeneratedCode("name","version")` argument list rendered by `emitter`.
fn generated_code_marker(emitter: &dyn CodeEmitter, generator: &GeneratorIdentity) -> String {
    format!(
        "{GENERATED_CODE_ATTRIBUTE}({},{})",
        emitter.string_literal(&generator.name),
        emitter.string_literal(&generator.version)
    )
}

/// Backslash escaping shared by C# and F# regular string literals.
fn c_style_literal(value: &str) -> String {
    let escaped: Cow<'_, str> = if value.contains(['\\', '"', '\n', '\r', '\t']) {
        let mut out = String::with_capacity(value.len() + 8);
        for ch in value.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                other => out.push(other),
            }
        }
        Cow::Owned(out)
    } else {
        Cow::Borrowed(value)
    };
    format!("\"{escaped}\"")
}
