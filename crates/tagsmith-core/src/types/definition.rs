//! Local extension definition types matching definitions.yaml
//!
//! Each definition carries shared metadata (id, name, scope, occurrence,
//! status, conditions) plus a per-type configuration blob. The blob is an
//! internally-tagged union: generator dispatch is by the explicit `type` tag,
//! never by shape inspection.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::conditions::ConditionSet;

/// Scope naming the execution point after load rules have run
pub const SCOPE_AFTER_LOAD: &str = "afterload";

/// True when a scope is an explicit list of dependent tag ids ("123" or "4,17,102")
pub fn is_tag_scope(scope: &str) -> bool {
    !scope.is_empty()
        && scope
            .split(',')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}

/// Extension type discriminant
///
/// One variant per code generator. The serialized form is the `type` tag in
/// both local definitions and remote listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionType {
    SetDataValues,
    PersistDataValue,
    JoinDataValues,
    LookupTable,
    Crypto,
    PathnameTokenizer,
}

impl ExtensionType {
    /// Uppercase label used in the generated banner comment
    pub fn banner_label(&self) -> &'static str {
        match self {
            ExtensionType::SetDataValues => "SET DATA VALUES",
            ExtensionType::PersistDataValue => "PERSIST DATA VALUE",
            ExtensionType::JoinDataValues => "JOIN DATA VALUES",
            ExtensionType::LookupTable => "LOOKUP TABLE",
            ExtensionType::Crypto => "CRYPTO",
            ExtensionType::PathnameTokenizer => "PATHNAME TOKENIZER",
        }
    }
}

impl fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExtensionType::SetDataValues => "set_data_values",
            ExtensionType::PersistDataValue => "persist_data_value",
            ExtensionType::JoinDataValues => "join_data_values",
            ExtensionType::LookupTable => "lookup_table",
            ExtensionType::Crypto => "crypto",
            ExtensionType::PathnameTokenizer => "pathname_tokenizer",
        };
        write!(f, "{}", s)
    }
}

/// One local extension definition from definitions.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalDefinition {
    /// Extension id, unique within the local collection
    pub id: u64,

    /// Human-readable extension name
    pub name: String,

    /// Execution scope: a named point or a comma-separated tag-id list
    #[serde(default)]
    pub scope: String,

    /// How often the extension runs at its scope
    #[serde(default = "default_occurrence")]
    pub occurrence: String,

    /// Deployment status
    #[serde(default = "default_status")]
    pub status: String,

    /// Free-form notes, not compared by the diff engine
    #[serde(default)]
    pub notes: String,

    /// OR-of-AND condition tree gating the generated logic
    #[serde(default)]
    pub conditions: ConditionSet,

    /// Per-type configuration, discriminated by the `type` tag
    #[serde(flatten)]
    pub config: ExtensionConfig,
}

impl LocalDefinition {
    /// The generator type this definition routes to
    pub fn extension_type(&self) -> ExtensionType {
        self.config.extension_type()
    }
}

fn default_occurrence() -> String {
    "run_always".to_string()
}

fn default_status() -> String {
    "active".to_string()
}

/// Per-type extension configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExtensionConfig {
    SetDataValues(SetDataValuesConfig),
    PersistDataValue(PersistDataValueConfig),
    JoinDataValues(JoinDataValuesConfig),
    LookupTable(LookupTableConfig),
    Crypto(CryptoConfig),
    PathnameTokenizer(PathnameTokenizerConfig),
}

impl ExtensionConfig {
    /// The type tag of this configuration
    pub fn extension_type(&self) -> ExtensionType {
        match self {
            ExtensionConfig::SetDataValues(_) => ExtensionType::SetDataValues,
            ExtensionConfig::PersistDataValue(_) => ExtensionType::PersistDataValue,
            ExtensionConfig::JoinDataValues(_) => ExtensionType::JoinDataValues,
            ExtensionConfig::LookupTable(_) => ExtensionType::LookupTable,
            ExtensionConfig::Crypto(_) => ExtensionType::Crypto,
            ExtensionConfig::PathnameTokenizer(_) => ExtensionType::PathnameTokenizer,
        }
    }
}

/// Set-Data-Values configuration: an ordered list of assignments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDataValuesConfig {
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

/// One Set-Data-Values assignment row
///
/// `setoption` selects the source: `text` (literal, from `settotext`),
/// `code` (raw expression, from `settotext`), or `var` (copy from the
/// data-layer property named by `settovar`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub setoption: String,
    pub set: String,
    #[serde(default)]
    pub settotext: Option<String>,
    #[serde(default)]
    pub settovar: Option<String>,
}

/// Persist-Data-Value configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistDataValueConfig {
    pub setoption: String,
    pub set: String,
    #[serde(default)]
    pub settovar: Option<String>,
}

/// Join-Data-Values configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinDataValuesConfig {
    /// Ordered sources joined into the target
    #[serde(default)]
    pub configs: Vec<JoinSource>,

    /// Raw sibling keys from the original flat configuration; literal entries
    /// are resolved through `<key>_set_text` lookups here
    #[serde(default)]
    pub extras: BTreeMap<String, String>,

    /// Separator placed between joined values
    #[serde(default)]
    pub delimiter: String,

    /// Target data-layer property
    pub set: String,

    /// Back-fill for empty/undefined slots; empty string disables the loop
    #[serde(default)]
    pub default_value: String,

    /// Load-rule restriction; unsupported, presence is a hard error
    #[serde(default)]
    pub loadrule: Option<String>,

    /// Leading-delimiter mode; unimplemented, `true` is a hard error
    #[serde(default)]
    pub leading_delimiter: bool,
}

/// One Join-Data-Values source row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinSource {
    /// Key of this row in the original flat configuration
    pub key: String,

    /// `text` for a literal slot, `var` for a property reference
    pub setoption: String,

    /// Property reference for `var` rows (keeps its `js.` prefix)
    #[serde(default)]
    pub variable: Option<String>,

    /// Inline literal, the fallback when no `<key>_set_text` sibling exists
    #[serde(default)]
    pub text: Option<String>,
}

/// Lookup-Table configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupTableConfig {
    /// Data-layer variable looked up (keeps its prefix)
    pub variable: String,

    /// Target data-layer property
    pub set: String,

    /// Comparator: `equals` or `contains`; anything else skips the definition
    #[serde(default)]
    pub filter: String,

    /// Ordered lookup rows
    #[serde(default)]
    pub lookups: Vec<LookupRow>,

    /// Control flag from the table's control entry; `"true"` suppresses the
    /// else branch when no default is configured
    #[serde(default)]
    pub logic: String,

    /// Default assigned by the else branch
    #[serde(default)]
    pub default_value: String,
}

/// One lookup row: input value -> output value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupRow {
    pub name: String,
    pub value: String,
}

/// Crypto configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CryptoConfig {
    /// Hash routine code: "1" = MD5, "2" = SHA-1, "3" = SHA-256
    #[serde(default)]
    pub hash_type: String,
}

/// Pathname-Tokenizer carries no per-instance configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathnameTokenizerConfig {}
