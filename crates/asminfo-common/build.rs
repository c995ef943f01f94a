//! ---
//! asminfo_section: "03-configuration-logging"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Shared configuration, logging, and build metadata."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Without `fail_on_error`, builds outside a git checkout fall back to placeholder values.
    EmitBuilder::builder()
        .build_timestamp()
        .git_sha(false)
        .emit()?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
