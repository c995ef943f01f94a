//! ---
//! asminfo_section: "02-code-emission"
//! asminfo_subsection: "integration-tests"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Version metadata model and multi-language code emission."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use asminfo_codegen::{
    generate, generate_for_language, BuildFacts, ConstantName, GenerateError, GeneratorIdentity,
    Language, VersionMetadata,
};
use asminfo_keys::KeyInfo;

const HEADER_CS: &str = "\
//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by a tool.
//     Runtime Version:4.0.30319.42000
//
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------
";

fn generator() -> GeneratorIdentity {
    GeneratorIdentity::new("asminfo", "0.1.0")
}

fn minimal_model() -> VersionMetadata {
    VersionMetadata::builder(generator())
        .constant(ConstantName::AssemblyVersion, "1.2.3.0")
        .constant(ConstantName::GitCommitId, "abc123")
        .root_namespace("")
        .emit_descriptive_attributes(false)
        .build()
}

fn full_facts() -> BuildFacts {
    BuildFacts {
        assembly_name: Some("Contoso.Core".into()),
        assembly_version: Some("1.2.0.0".into()),
        assembly_file_version: Some("1.2.3.4".into()),
        assembly_informational_version: Some("1.2.3+abc123".into()),
        assembly_title: Some("Contoso Core".into()),
        assembly_product: Some("Contoso".into()),
        assembly_copyright: Some("(c) Contoso".into()),
        assembly_company: Some("Contoso Ltd".into()),
        assembly_configuration: Some("Release".into()),
        git_commit_id: Some("abc123".into()),
        git_commit_date_ticks: Some("637134336000000000".into()),
        root_namespace: Some("Contoso.Core".into()),
    }
}

#[test]
fn csharp_minimal_scenario() {
    let code = generate_for_language(&minimal_model(), "c#").unwrap();
    let expected = format!(
        "{HEADER_CS}
[assembly: System.Reflection.AssemblyVersionAttribute(\"1.2.3.0\")]
[assembly: System.Reflection.AssemblyFileVersionAttribute(\"\")]
[assembly: System.Reflection.AssemblyInformationalVersionAttribute(\"\")]
[System.CodeDom.Compiler.GeneratedCode(\"asminfo\",\"0.1.0\")]
internal sealed partial class ThisAssembly {{
    private ThisAssembly() {{}}
    internal const string AssemblyVersion = \"1.2.3.0\";
    internal const string GitCommitId = \"abc123\";
    internal const string RootNamespace = \"\";
}}
"
    );
    assert_eq!(code, expected);
    for absent in ["Title", "Product", "Company", "Copyright", "GitCommitDate", "PublicKey"] {
        assert!(!code.contains(absent), "unexpected {absent} in output");
    }
}

#[test]
fn fsharp_minimal_scenario() {
    let code = generate_for_language(&minimal_model(), "F#").unwrap();
    let body = code.strip_prefix(HEADER_CS).unwrap();
    assert_eq!(
        body,
        "
namespace AssemblyInfo
[<assembly: System.Reflection.AssemblyVersionAttribute(\"1.2.3.0\")>]
[<assembly: System.Reflection.AssemblyFileVersionAttribute(\"\")>]
[<assembly: System.Reflection.AssemblyInformationalVersionAttribute(\"\")>]
do()
[<System.CodeDom.Compiler.GeneratedCode(\"asminfo\",\"0.1.0\")>]
type internal ThisAssembly() =
  static member internal AssemblyVersion = \"1.2.3.0\"
  static member internal GitCommitId = \"abc123\"
  static member internal RootNamespace = \"\"
do()
"
    );
}

#[test]
fn visual_basic_full_model() {
    let key = KeyInfo::from_public_key(&[0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0]);
    let model = VersionMetadata::builder(generator())
        .facts(&full_facts())
        .key_info(Some(&key))
        .emit_descriptive_attributes(true)
        .build();
    let code = generate_for_language(&model, "visual basic").unwrap();
    let lines: Vec<_> = code.lines().skip(10).collect();

    assert_eq!(
        lines,
        vec![
            "<Assembly: System.Reflection.AssemblyVersionAttribute(\"1.2.0.0\")>",
            "<Assembly: System.Reflection.AssemblyFileVersionAttribute(\"1.2.3.4\")>",
            "<Assembly: System.Reflection.AssemblyInformationalVersionAttribute(\"1.2.3+abc123\")>",
            "<Assembly: System.Reflection.AssemblyTitleAttribute(\"Contoso Core\")>",
            "<Assembly: System.Reflection.AssemblyProductAttribute(\"Contoso\")>",
            "<Assembly: System.Reflection.AssemblyCompanyAttribute(\"Contoso Ltd\")>",
            "<Assembly: System.Reflection.AssemblyCopyrightAttribute(\"(c) Contoso\")>",
            "<System.CodeDom.Compiler.GeneratedCode(\"asminfo\",\"0.1.0\")>",
            "Partial Friend NotInheritable Class ThisAssembly",
            "    Friend Const AssemblyVersion As String = \"1.2.0.0\"",
            "    Friend Const AssemblyFileVersion As String = \"1.2.3.4\"",
            "    Friend Const AssemblyInformationalVersion As String = \"1.2.3+abc123\"",
            "    Friend Const AssemblyName As String = \"Contoso.Core\"",
            "    Friend Const AssemblyTitle As String = \"Contoso Core\"",
            "    Friend Const AssemblyProduct As String = \"Contoso\"",
            "    Friend Const AssemblyCopyright As String = \"(c) Contoso\"",
            "    Friend Const AssemblyCompany As String = \"Contoso Ltd\"",
            "    Friend Const AssemblyConfiguration As String = \"Release\"",
            "    Friend Const GitCommitId As String = \"abc123\"",
            "    Friend Const PublicKey As String = \"00000000000000000400000000000000\"",
            "    Friend Const PublicKeyToken As String = \"b77a5c561934e089\"",
            "    Friend Shared ReadOnly GitCommitDate As System.DateTimeOffset = New System.DateTimeOffset(637134336000000000, System.TimeSpan.Zero)",
            "    Friend Const RootNamespace As String = \"Contoso.Core\"",
            "End Class",
        ]
    );
    assert!(code.starts_with("'------"));
}

#[test]
fn fsharp_uses_root_namespace_when_present() {
    let model = VersionMetadata::builder(generator())
        .facts(&full_facts())
        .build();
    let code = generate(&model, Language::FSharp.emitter());
    assert!(code.contains("\nnamespace Contoso.Core\n"));
    assert!(code.contains(
        "  static member internal GitCommitDate = new System.DateTimeOffset(637134336000000000L, System.TimeSpan.Zero)\n"
    ));
    assert!(!code.contains("AssemblyTitleAttribute"));
    assert!(code.contains("static member internal AssemblyTitle = \"Contoso Core\""));
}

#[test]
fn generation_is_deterministic() {
    let facts = full_facts();
    for language in ["c#", "vb", "f#"] {
        let first = generate_for_language(
            &VersionMetadata::builder(generator()).facts(&facts).build(),
            language,
        )
        .unwrap();
        let second = generate_for_language(
            &VersionMetadata::builder(generator()).facts(&facts).build(),
            language,
        )
        .unwrap();
        assert_eq!(first, second, "{language} output differs between runs");
    }
}

#[test]
fn insertion_order_does_not_affect_output() {
    let forward = VersionMetadata::builder(generator())
        .constant(ConstantName::AssemblyVersion, "1.0.0.0")
        .constant(ConstantName::AssemblyConfiguration, "Debug")
        .constant(ConstantName::GitCommitId, "abc")
        .build();
    let reversed = VersionMetadata::builder(generator())
        .constant(ConstantName::GitCommitId, "abc")
        .constant(ConstantName::AssemblyConfiguration, "Debug")
        .constant(ConstantName::AssemblyVersion, "1.0.0.0")
        .build();
    assert_eq!(
        generate_for_language(&forward, "c#").unwrap(),
        generate_for_language(&reversed, "c#").unwrap()
    );
}

#[test]
fn missing_key_info_omits_both_constants() {
    let model = VersionMetadata::builder(generator())
        .facts(&full_facts())
        .key_info(None)
        .build();
    let code = generate_for_language(&model, "c#").unwrap();
    assert!(!code.contains("PublicKey"));
    assert!(code.contains("internal const string RootNamespace = \"Contoso.Core\";"));
}

#[test]
fn unparseable_ticks_omit_commit_date() {
    let facts = BuildFacts {
        git_commit_date_ticks: Some("yesterday".into()),
        ..full_facts()
    };
    let model = VersionMetadata::builder(generator()).facts(&facts).build();
    assert!(!generate_for_language(&model, "c#").unwrap().contains("GitCommitDate"));
}

#[test]
fn values_are_escaped_per_language() {
    let model = VersionMetadata::builder(GeneratorIdentity::new("gen", "1"))
        .constant(ConstantName::AssemblyCopyright, r#"© "Contoso" \ 2024"#)
        .build();
    let cs = generate_for_language(&model, "c#").unwrap();
    assert!(cs.contains(r#"AssemblyCopyright = "© \"Contoso\" \\ 2024";"#));
    let vb = generate_for_language(&model, "vb").unwrap();
    assert!(vb.contains(r#"AssemblyCopyright As String = "© ""Contoso"" \ 2024""#));
}

#[test]
fn unsupported_language_names_identifier() {
    assert_eq!(
        generate_for_language(&minimal_model(), "pascal").unwrap_err(),
        GenerateError::UnsupportedLanguage("pascal".into())
    );
}
