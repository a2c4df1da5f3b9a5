//! Static text templates for generated files.
//!
//! Every function here is pure: given the same [`ResourceConfig`] it returns
//! the same text, with no I/O and no state. The manifest is the only
//! configuration-driven template; the per-file bodies are placeholders that
//! carry nothing but the resource name.

use crate::domain::{resource::ResourceConfig, value_objects::ScriptGroup};

/// Identity of a file template within its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Main,
    Events,
    Ui,
    Database,
    Utils,
    Locales,
}

/// Render the `fxmanifest.lua` resource descriptor.
///
/// Fixed line structure: format-version marker, game identifier, the four
/// metadata fields, then the script blocks in shared → client → server
/// order. Disabled blocks contribute nothing, not even a blank line; the
/// enabled shared/client blocks end with a blank line while the server block
/// carries no trailing newline.
pub fn manifest(config: &ResourceConfig) -> String {
    let mut out = format!(
        "fx_version 'cerulean'\n\
         game 'gta5'\n\
         \n\
         name '{}'\n\
         author '{}'\n\
         description '{}'\n\
         version '{}'\n\
         \n",
        config.script_name, config.author, config.description, config.version
    );

    if config.include_shared {
        out.push_str("shared_scripts {\n    'shared/*.lua'\n}\n\n");
    }
    if config.include_client {
        out.push_str("client_scripts {\n    'client/*.lua'\n}\n\n");
    }
    if config.include_server {
        out.push_str("server_scripts {\n    'server/*.lua'\n}");
    }

    out
}

/// Render the body of one group file.
///
/// All placeholder bodies are a single comment line naming the resource; the
/// `shared/main.lua` variant additionally ends with a blank line.
pub fn render(group: ScriptGroup, kind: TemplateKind, config: &ResourceConfig) -> String {
    match (group, kind) {
        (ScriptGroup::Shared, TemplateKind::Main) => format!("-- {}\n\n", config.script_name),
        _ => format!("-- {}\n", config.script_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ResourceConfig {
        ResourceConfig {
            author: "bob".into(),
            ..ResourceConfig::new("myscript")
        }
    }

    #[test]
    fn manifest_header_fields() {
        let text = manifest(&config());
        assert!(text.starts_with("fx_version 'cerulean'\ngame 'gta5'\n\n"));
        assert!(text.contains("name 'myscript'\n"));
        assert!(text.contains("author 'bob'\n"));
        assert!(text.contains("description 'fivem script'\n"));
        assert!(text.contains("version '1.0.0'\n"));
    }

    #[test]
    fn manifest_blocks_in_shared_client_server_order() {
        let text = manifest(&config());
        let shared = text.find("shared_scripts").unwrap();
        let client = text.find("client_scripts").unwrap();
        let server = text.find("server_scripts").unwrap();
        assert!(shared < client);
        assert!(client < server);
    }

    #[test]
    fn manifest_omits_disabled_blocks() {
        let cfg = ResourceConfig {
            include_client: false,
            include_server: false,
            include_shared: false,
            ..config()
        };
        let text = manifest(&cfg);
        assert!(!text.contains("shared_scripts"));
        assert!(!text.contains("client_scripts"));
        assert!(!text.contains("server_scripts"));
        // No blank-line artifact in place of the dropped blocks.
        assert!(text.ends_with("version '1.0.0'\n\n"));
    }

    #[test]
    fn manifest_server_block_has_no_trailing_newline() {
        let text = manifest(&config());
        assert!(text.ends_with("server_scripts {\n    'server/*.lua'\n}"));
    }

    #[test]
    fn shared_main_carries_trailing_blank_line() {
        let cfg = config();
        assert_eq!(
            render(ScriptGroup::Shared, TemplateKind::Main, &cfg),
            "-- myscript\n\n"
        );
        assert_eq!(
            render(ScriptGroup::Client, TemplateKind::Main, &cfg),
            "-- myscript\n"
        );
        assert_eq!(
            render(ScriptGroup::Server, TemplateKind::Database, &cfg),
            "-- myscript\n"
        );
    }
}
