//! ---
//! asminfo_section: "02-code-emission"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Version metadata model and multi-language code emission."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use asminfo_keys::KeyInfo;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};
use tracing::debug;

/// Name of the member that is emitted even when its value is empty.
pub const ROOT_NAMESPACE: &str = "RootNamespace";

/// Ticks (100ns units) between 0001-01-01 and the Unix epoch.
const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;
const TICKS_PER_SECOND: i64 = 10_000_000;
/// Ticks of 9999-12-31T23:59:59.9999999.
const MAX_TICKS: i64 = 3_155_378_975_999_999_999;

/// String constants exposed on `ThisAssembly`, in emission order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, AsRefStr, Display,
)]
pub enum ConstantName {
    /// `AssemblyVersion`
    AssemblyVersion,
    /// `AssemblyFileVersion`
    AssemblyFileVersion,
    /// `AssemblyInformationalVersion`
    AssemblyInformationalVersion,
    /// `AssemblyName`
    AssemblyName,
    /// `AssemblyTitle`
    AssemblyTitle,
    /// `AssemblyProduct`
    AssemblyProduct,
    /// `AssemblyCopyright`
    AssemblyCopyright,
    /// `AssemblyCompany`
    AssemblyCompany,
    /// `AssemblyConfiguration`
    AssemblyConfiguration,
    /// `GitCommitId`
    GitCommitId,
    /// `PublicKey`
    PublicKey,
    /// `PublicKeyToken`
    PublicKeyToken,
}

/// Identifies the tool in the `GeneratedCode` marker attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorIdentity {
    /// Tool name.
    pub name: String,
    /// Tool version.
    pub version: String,
}

impl GeneratorIdentity {
    /// Construct an identity from explicit values.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for GeneratorIdentity {
    fn default() -> Self {
        Self::new("asminfo", env!("CARGO_PKG_VERSION"))
    }
}

/// Raw build facts as supplied by the versioning subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildFacts {
    /// Simple assembly name.
    pub assembly_name: Option<String>,
    /// Four-part assembly version.
    pub assembly_version: Option<String>,
    /// Win32 file version.
    pub assembly_file_version: Option<String>,
    /// Informational (semantic) version.
    pub assembly_informational_version: Option<String>,
    /// Assembly title.
    pub assembly_title: Option<String>,
    /// Product name.
    pub assembly_product: Option<String>,
    /// Copyright notice.
    pub assembly_copyright: Option<String>,
    /// Company name.
    pub assembly_company: Option<String>,
    /// Build configuration, e.g. `Release`.
    pub assembly_configuration: Option<String>,
    /// Full commit id.
    pub git_commit_id: Option<String>,
    /// Commit timestamp in ticks; ignored unless it parses as an integer.
    pub git_commit_date_ticks: Option<String>,
    /// Project root namespace.
    pub root_namespace: Option<String>,
}

impl BuildFacts {
    fn constants(&self) -> [(ConstantName, Option<&str>); 10] {
        [
            (ConstantName::AssemblyVersion, self.assembly_version.as_deref()),
            (ConstantName::AssemblyFileVersion, self.assembly_file_version.as_deref()),
            (
                ConstantName::AssemblyInformationalVersion,
                self.assembly_informational_version.as_deref(),
            ),
            (ConstantName::AssemblyName, self.assembly_name.as_deref()),
            (ConstantName::AssemblyTitle, self.assembly_title.as_deref()),
            (ConstantName::AssemblyProduct, self.assembly_product.as_deref()),
            (ConstantName::AssemblyCopyright, self.assembly_copyright.as_deref()),
            (ConstantName::AssemblyCompany, self.assembly_company.as_deref()),
            (ConstantName::AssemblyConfiguration, self.assembly_configuration.as_deref()),
            (ConstantName::GitCommitId, self.git_commit_id.as_deref()),
        ]
    }
}

/// Immutable input to a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMetadata {
    constants: IndexMap<ConstantName, String>,
    commit_date_ticks: Option<i64>,
    root_namespace: String,
    namespace_hint: Option<String>,
    emit_descriptive_attributes: bool,
    generator: GeneratorIdentity,
}

impl VersionMetadata {
    /// Start building a model for the given generator identity.
    #[must_use]
    pub fn builder(generator: GeneratorIdentity) -> VersionMetadataBuilder {
        VersionMetadataBuilder::new(generator)
    }

    /// Non-empty constants in declaration order.
    pub fn constants(&self) -> impl Iterator<Item = (ConstantName, &str)> {
        self.constants
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    /// Value of a constant, if present.
    #[must_use]
    pub fn constant(&self, name: ConstantName) -> Option<&str> {
        self.constants.get(&name).map(String::as_str)
    }

    /// Raw commit ticks, when they parsed.
    #[must_use]
    pub fn commit_date_ticks(&self) -> Option<i64> {
        self.commit_date_ticks
    }

    /// Commit timestamp as a UTC instant, when the ticks are in range.
    #[must_use]
    pub fn commit_date(&self) -> Option<DateTime<Utc>> {
        self.commit_date_ticks.and_then(datetime_from_ticks)
    }

    /// Root namespace; may be empty.
    #[must_use]
    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    /// Namespace used by languages that require a namespace wrapper.
    #[must_use]
    pub fn namespace_hint(&self) -> Option<&str> {
        self.namespace_hint.as_deref()
    }

    /// Whether title/product/company/copyright attributes are declared.
    #[must_use]
    pub fn emit_descriptive_attributes(&self) -> bool {
        self.emit_descriptive_attributes
    }

    /// Identity embedded in the `GeneratedCode` marker.
    #[must_use]
    pub fn generator(&self) -> &GeneratorIdentity {
        &self.generator
    }
}

/// Builder for [`VersionMetadata`].
///
/// Values may be supplied in any order; [`VersionMetadataBuilder::build`]
/// drops empty constants and fixes the declaration order.
#[derive(Debug, Clone)]
pub struct VersionMetadataBuilder {
    generator: GeneratorIdentity,
    constants: IndexMap<ConstantName, String>,
    commit_date_ticks: Option<i64>,
    root_namespace: String,
    namespace_hint: Option<String>,
    emit_descriptive_attributes: bool,
}

impl VersionMetadataBuilder {
    fn new(generator: GeneratorIdentity) -> Self {
        Self {
            generator,
            constants: IndexMap::new(),
            commit_date_ticks: None,
            root_namespace: String::new(),
            namespace_hint: None,
            emit_descriptive_attributes: false,
        }
    }

    /// Set a single constant.
    #[must_use]
    pub fn constant(mut self, name: ConstantName, value: impl Into<String>) -> Self {
        self.constants.insert(name, value.into());
        self
    }

    /// Apply every fact carried by [`BuildFacts`].
    #[must_use]
    pub fn facts(mut self, facts: &BuildFacts) -> Self {
        for (name, value) in facts.constants() {
            self.constants
                .insert(name, value.unwrap_or_default().to_owned());
        }
        if let Some(root_namespace) = &facts.root_namespace {
            self.root_namespace = root_namespace.clone();
        }
        self.commit_date_ticks(facts.git_commit_date_ticks.as_deref())
    }

    /// Set or clear the public key pair of constants.
    #[must_use]
    pub fn key_info(mut self, key: Option<&KeyInfo>) -> Self {
        match key {
            Some(key) => {
                self.constants
                    .insert(ConstantName::PublicKey, key.public_key().to_owned());
                self.constants
                    .insert(ConstantName::PublicKeyToken, key.public_key_token().to_owned());
            }
            None => {
                self.constants.shift_remove(&ConstantName::PublicKey);
                self.constants.shift_remove(&ConstantName::PublicKeyToken);
            }
        }
        self
    }

    /// Parse raw commit ticks; anything that is not an integer clears the date.
    #[must_use]
    pub fn commit_date_ticks(mut self, raw: Option<&str>) -> Self {
        self.commit_date_ticks = raw.and_then(|raw| raw.trim().parse::<i64>().ok());
        if self.commit_date_ticks.is_none() && raw.is_some_and(|raw| !raw.trim().is_empty()) {
            debug!("ignoring commit date ticks that are not an integer");
        }
        self
    }

    /// Set the commit date from a UTC instant.
    #[must_use]
    pub fn commit_date(mut self, at: DateTime<Utc>) -> Self {
        self.commit_date_ticks = ticks_from_datetime(at);
        self
    }

    /// Set the root namespace constant.
    #[must_use]
    pub fn root_namespace(mut self, root_namespace: impl Into<String>) -> Self {
        self.root_namespace = root_namespace.into();
        self
    }

    /// Override the namespace hint; defaults to the root namespace.
    #[must_use]
    pub fn namespace_hint(mut self, hint: impl Into<String>) -> Self {
        self.namespace_hint = Some(hint.into());
        self
    }

    /// Toggle the descriptive assembly attributes.
    #[must_use]
    pub fn emit_descriptive_attributes(mut self, emit: bool) -> Self {
        self.emit_descriptive_attributes = emit;
        self
    }

    /// Freeze the model.
    #[must_use]
    pub fn build(self) -> VersionMetadata {
        let mut constants: IndexMap<ConstantName, String> = ConstantName::iter()
            .filter_map(|name| {
                self.constants
                    .get(&name)
                    .filter(|value| !value.is_empty())
                    .map(|value| (name, value.clone()))
            })
            .collect();

        let has_key = constants.contains_key(&ConstantName::PublicKey);
        let has_token = constants.contains_key(&ConstantName::PublicKeyToken);
        if has_key != has_token {
            debug!("public key and token must be supplied together; dropping both");
            constants.shift_remove(&ConstantName::PublicKey);
            constants.shift_remove(&ConstantName::PublicKeyToken);
        }

        let namespace_hint = self.namespace_hint.or_else(|| {
            (!self.root_namespace.is_empty()).then(|| self.root_namespace.clone())
        });

        VersionMetadata {
            constants,
            commit_date_ticks: self.commit_date_ticks,
            root_namespace: self.root_namespace,
            namespace_hint,
            emit_descriptive_attributes: self.emit_descriptive_attributes,
            generator: self.generator,
        }
    }
}

fn datetime_from_ticks(ticks: i64) -> Option<DateTime<Utc>> {
    if !(0..=MAX_TICKS).contains(&ticks) {
        return None;
    }
    let since_epoch = ticks - UNIX_EPOCH_TICKS;
    let secs = since_epoch.div_euclid(TICKS_PER_SECOND);
    let nanos = (since_epoch.rem_euclid(TICKS_PER_SECOND) * 100) as u32;
    DateTime::from_timestamp(secs, nanos)
}

/// Convert a UTC instant to .NET ticks, if representable.
#[must_use]
pub fn ticks_from_datetime(at: DateTime<Utc>) -> Option<i64> {
    let ticks = at
        .timestamp()
        .checked_mul(TICKS_PER_SECOND)?
        .checked_add(i64::from(at.timestamp_subsec_nanos() / 100))?
        .checked_add(UNIX_EPOCH_TICKS)?;
    (0..=MAX_TICKS).contains(&ticks).then_some(ticks)
}
