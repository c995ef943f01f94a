//! ---
//! asminfo_section: "04-cli"
//! asminfo_subsection: "binary"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Command line front end for ThisAssembly generation."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use asminfo_codegen::{generate, BuildFacts, Language, VersionMetadata};
use asminfo_common::{write_if_changed, GeneratorConfig, VersionInfo, WriteOutcome};
use asminfo_keys::resolve;
use clap::Args;
use tracing::{debug, error};

/// Options for the `generate` command; flags override the config file.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Target language: `c#`, `vb` (`visual basic`), or `f#`.
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,
    /// Output file, or `-` for stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Declare title/product/company/copyright assembly attributes.
    /// `--emit-descriptive-attributes=false` turns off a config-enabled setting.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub emit_descriptive_attributes: Option<bool>,
    /// Strong-name key file (.snk).
    #[arg(long, value_name = "FILE")]
    pub key_file: Option<PathBuf>,
    /// Key container name.
    #[arg(long, value_name = "NAME")]
    pub key_container: Option<String>,
    #[command(flatten)]
    pub facts: FactArgs,
}

/// Build facts accepted on the command line.
#[derive(Debug, Args)]
pub struct FactArgs {
    #[arg(long)]
    pub assembly_name: Option<String>,
    #[arg(long)]
    pub assembly_version: Option<String>,
    #[arg(long)]
    pub assembly_file_version: Option<String>,
    #[arg(long)]
    pub assembly_informational_version: Option<String>,
    #[arg(long)]
    pub assembly_title: Option<String>,
    #[arg(long)]
    pub assembly_product: Option<String>,
    #[arg(long)]
    pub assembly_copyright: Option<String>,
    #[arg(long)]
    pub assembly_company: Option<String>,
    #[arg(long)]
    pub assembly_configuration: Option<String>,
    #[arg(long)]
    pub git_commit_id: Option<String>,
    #[arg(long, alias = "commit-date-ticks", allow_hyphen_values = true)]
    pub git_commit_date_ticks: Option<String>,
    #[arg(long)]
    pub root_namespace: Option<String>,
}

impl FactArgs {
    fn apply(self, facts: &mut BuildFacts) {
        override_with(&mut facts.assembly_name, self.assembly_name);
        override_with(&mut facts.assembly_version, self.assembly_version);
        override_with(&mut facts.assembly_file_version, self.assembly_file_version);
        override_with(
            &mut facts.assembly_informational_version,
            self.assembly_informational_version,
        );
        override_with(&mut facts.assembly_title, self.assembly_title);
        override_with(&mut facts.assembly_product, self.assembly_product);
        override_with(&mut facts.assembly_copyright, self.assembly_copyright);
        override_with(&mut facts.assembly_company, self.assembly_company);
        override_with(&mut facts.assembly_configuration, self.assembly_configuration);
        override_with(&mut facts.git_commit_id, self.git_commit_id);
        override_with(&mut facts.git_commit_date_ticks, self.git_commit_date_ticks);
        override_with(&mut facts.root_namespace, self.root_namespace);
    }
}

impl GenerateArgs {
    fn apply(self, config: &mut GeneratorConfig) {
        override_with(&mut config.output.language, self.language);
        if self.output.is_some() {
            config.output.path = self.output;
        }
        override_with(
            &mut config.output.emit_descriptive_attributes,
            self.emit_descriptive_attributes,
        );
        if self.key_file.is_some() {
            config.signing.key_file = self.key_file;
        }
        if self.key_container.is_some() {
            config.signing.key_container = self.key_container;
        }
        self.facts.apply(&mut config.assembly);
    }
}

fn override_with<T>(slot: &mut T, value: Option<T::Inner>)
where
    T: Overridable,
{
    if let Some(value) = value {
        slot.set(value);
    }
}

trait Overridable {
    type Inner;
    fn set(&mut self, value: Self::Inner);
}

impl Overridable for String {
    type Inner = String;
    fn set(&mut self, value: String) {
        *self = value;
    }
}

impl Overridable for bool {
    type Inner = bool;
    fn set(&mut self, value: bool) {
        *self = value;
    }
}

impl Overridable for Option<String> {
    type Inner = String;
    fn set(&mut self, value: String) {
        *self = Some(value);
    }
}

/// Execute the `generate` command.
pub fn run(args: GenerateArgs, mut config: GeneratorConfig) -> Result<()> {
    args.apply(&mut config);
    config.validate()?;

    let language: Language = config.output.language.parse().map_err(|err| {
        error!(language = %config.output.language, "unsupported code language");
        err
    })?;

    let resolution = resolve(
        config.signing.key_file.as_deref(),
        config.signing.key_container.as_deref(),
    )
    .map_err(|err| {
        error!(error = %err, "strong-name key could not be read; aborting generation");
        err
    })
    .context("unable to read strong-name key")?;

    let model = VersionMetadata::builder(VersionInfo::current().generator_identity())
        .facts(&config.assembly)
        .key_info(resolution.key_info())
        .emit_descriptive_attributes(config.output.emit_descriptive_attributes)
        .build();
    if let Some(commit_date) = model.commit_date() {
        debug!(%commit_date, "embedding commit date");
    }

    let code = generate(&model, language.emitter());
    let path = config
        .output
        .path
        .unwrap_or_else(|| default_output_path(language));

    if path == Path::new("-") {
        io::stdout()
            .write_all(code.as_bytes())
            .context("unable to write generated code to stdout")?;
        return Ok(());
    }

    match write_if_changed(&path, &code)? {
        WriteOutcome::Written => println!("Wrote {}", path.display()),
        WriteOutcome::Unchanged => println!("{} is up to date", path.display()),
    }
    Ok(())
}

fn default_output_path(language: Language) -> PathBuf {
    PathBuf::from(format!("ThisAssembly.{}", language.file_extension()))
}
