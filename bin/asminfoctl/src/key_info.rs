//! ---
//! asminfo_section: "04-cli"
//! asminfo_subsection: "binary"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Command line front end for ThisAssembly generation."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use asminfo_keys::{resolve, KeyResolution};
use clap::Args;

#[derive(Debug, Args)]
pub struct KeyInfoArgs {
    /// Strong-name key file (.snk) holding a private key pair.
    #[arg(value_name = "FILE")]
    pub key_file: PathBuf,
    /// Print JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &KeyInfoArgs) -> Result<()> {
    if !args.key_file.is_file() {
        bail!("key file {} does not exist", args.key_file.display());
    }
    let resolution = resolve(Some(&args.key_file), None)
        .with_context(|| format!("unable to read key file {}", args.key_file.display()))?;

    let info = match resolution {
        KeyResolution::Resolved(info) => info,
        KeyResolution::Unavailable => {
            bail!("key file {} is empty", args.key_file.display())
        }
        KeyResolution::Absent => bail!(
            "{} is not a strong-name key file (expected a .snk extension)",
            args.key_file.display()
        ),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Public key: {}", info.public_key());
        println!("Public key token: {}", info.public_key_token());
    }
    Ok(())
}
