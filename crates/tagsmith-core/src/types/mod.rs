//! Type definitions for local extension definitions and remote payloads

mod conditions;
mod definition;
mod extension;

pub use conditions::{Condition, ConditionGroup, ConditionSet};
pub use definition::{
    is_tag_scope, CryptoConfig, ExtensionConfig, ExtensionType, JoinDataValuesConfig, JoinSource,
    LocalDefinition, LookupRow, LookupTableConfig, PathnameTokenizerConfig,
    PersistDataValueConfig, SetDataValuesConfig, SetEntry, SCOPE_AFTER_LOAD,
};
pub use extension::{Extension, RemoteExtension};
