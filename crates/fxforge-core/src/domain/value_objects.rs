//! Enumerated value objects: script groups and template file kinds.

use std::fmt;

use crate::domain::templates::TemplateKind;

/// One of the four toggle-gated file sets a resource can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptGroup {
    Client,
    Server,
    Shared,
    Config,
}

impl ScriptGroup {
    /// All groups, in materialization order.
    pub const ALL: [ScriptGroup; 4] = [
        ScriptGroup::Client,
        ScriptGroup::Server,
        ScriptGroup::Shared,
        ScriptGroup::Config,
    ];

    /// Subdirectory this group's files live in.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
            Self::Shared => "shared",
            Self::Config => "config",
        }
    }

    /// The fixed file set for this group as `(template kind, file name)`
    /// pairs.
    ///
    /// Only the client and server groups gate part of their set behind
    /// `include_examples`; shared and config always emit both of their files.
    pub fn files(self, include_examples: bool) -> Vec<(TemplateKind, &'static str)> {
        match self {
            Self::Client => {
                let mut files = vec![(TemplateKind::Main, "main.lua")];
                if include_examples {
                    files.push((TemplateKind::Events, "events.lua"));
                    files.push((TemplateKind::Ui, "ui.lua"));
                }
                files
            }
            Self::Server => {
                let mut files = vec![(TemplateKind::Main, "main.lua")];
                if include_examples {
                    files.push((TemplateKind::Events, "events.lua"));
                    files.push((TemplateKind::Database, "database.lua"));
                }
                files
            }
            Self::Shared => vec![
                (TemplateKind::Main, "main.lua"),
                (TemplateKind::Utils, "utils.lua"),
            ],
            Self::Config => vec![
                (TemplateKind::Main, "config.lua"),
                (TemplateKind::Locales, "locales.lua"),
            ],
        }
    }
}

impl fmt::Display for ScriptGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
