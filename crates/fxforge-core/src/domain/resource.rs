//! The resource configuration record.

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::ScriptGroup};

/// Description substituted when the user leaves the field empty.
pub const DEFAULT_DESCRIPTION: &str = "fivem script";

/// Version substituted when the user leaves the field empty.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Immutable record of all user-provided or defaulted settings for one
/// generation run.
///
/// Collected once by the interview, read-only afterwards, discarded at
/// process exit. Nothing here is persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Resource name; also the name of the output directory. Required.
    pub script_name: String,
    /// Author credit for the manifest. The empty string is valid.
    pub author: String,
    pub description: String,
    pub version: String,
    pub include_client: bool,
    pub include_server: bool,
    pub include_shared: bool,
    pub include_config: bool,
    /// Collected from the user but currently has no effect on the output
    /// layout. Kept so the prompt sequence stays stable.
    pub create_subfolders: bool,
    pub include_examples: bool,
}

impl ResourceConfig {
    /// A config with every toggle on and the documented defaults, as if the
    /// user accepted every prompt.
    pub fn new(script_name: impl Into<String>) -> Self {
        Self {
            script_name: script_name.into(),
            author: String::new(),
            description: DEFAULT_DESCRIPTION.to_string(),
            version: DEFAULT_VERSION.to_string(),
            include_client: true,
            include_server: true,
            include_shared: true,
            include_config: true,
            create_subfolders: true,
            include_examples: true,
        }
    }

    /// Whether the given script group is enabled in this configuration.
    pub fn is_enabled(&self, group: ScriptGroup) -> bool {
        match group {
            ScriptGroup::Client => self.include_client,
            ScriptGroup::Server => self.include_server,
            ScriptGroup::Shared => self.include_shared,
            ScriptGroup::Config => self.include_config,
        }
    }

    /// Enabled groups in materialization order.
    pub fn enabled_groups(&self) -> impl Iterator<Item = ScriptGroup> + '_ {
        ScriptGroup::ALL
            .into_iter()
            .filter(|group| self.is_enabled(*group))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.script_name.trim().is_empty() {
            return Err(DomainError::ScriptNameRequired);
        }
        Ok(())
    }
}
