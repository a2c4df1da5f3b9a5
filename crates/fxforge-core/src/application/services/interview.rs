//! Interview Service - collects the resource configuration.
//!
//! Asks a fixed, ordered list of questions over the [`Console`] port and
//! returns the assembled [`ResourceConfig`]. There is no retry loop and no
//! backtracking: the only hard requirement is a non-empty script name, which
//! fails the whole run when violated.

use tracing::{debug, instrument};

use crate::{
    application::ports::Console,
    domain::{DEFAULT_DESCRIPTION, DEFAULT_VERSION, DomainError, ResourceConfig},
    error::FxforgeResult,
};

/// Collects one [`ResourceConfig`] per invocation.
pub struct InterviewService {
    console: Box<dyn Console>,
}

impl InterviewService {
    /// Create a new interview service with the given console adapter.
    pub fn new(console: Box<dyn Console>) -> Self {
        Self { console }
    }

    /// Run the question sequence and return the collected configuration.
    ///
    /// Questions are asked strictly in order. Every answer is trimmed of
    /// surrounding whitespace; empty answers accept the stated default where
    /// one exists.
    #[instrument(skip_all)]
    pub fn collect(&self) -> FxforgeResult<ResourceConfig> {
        self.console.say("Script Configuration:")?;
        self.console.say("")?;

        let script_name = self.ask_trimmed("Script name: ")?;
        if script_name.is_empty() {
            return Err(DomainError::ScriptNameRequired.into());
        }

        let author = self.ask_trimmed("Author: ")?;
        let description = self.ask_with_default("Description: ", DEFAULT_DESCRIPTION)?;
        let version = self.ask_with_default("Version: ", DEFAULT_VERSION)?;

        self.console.say("")?;
        self.console.say("Select the files to create:")?;
        let include_client = self.ask_yes_no("Include client side? (Y/n): ", true)?;
        let include_server = self.ask_yes_no("Include server side? (Y/n): ", true)?;
        let include_shared = self.ask_yes_no("Include shared? (Y/n): ", true)?;
        let include_config = self.ask_yes_no("Include config? (Y/n): ", true)?;

        self.console.say("")?;
        self.console.say("Advanced configuration:")?;
        let create_subfolders = self.ask_yes_no("Create organized subfolders? (Y/n): ", true)?;
        let include_examples = self.ask_yes_no("Include example code? (Y/n): ", true)?;

        let config = ResourceConfig {
            script_name,
            author,
            description,
            version,
            include_client,
            include_server,
            include_shared,
            include_config,
            create_subfolders,
            include_examples,
        };

        debug!(resource = %config.script_name, "interview complete");
        Ok(config)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ask_trimmed(&self, prompt: &str) -> FxforgeResult<String> {
        Ok(self.console.ask(prompt)?.trim().to_string())
    }

    fn ask_with_default(&self, prompt: &str, default: &str) -> FxforgeResult<String> {
        let answer = self.ask_trimmed(prompt)?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn ask_yes_no(&self, prompt: &str, default: bool) -> FxforgeResult<bool> {
        Ok(parse_yes_no(&self.ask_trimmed(prompt)?, default))
    }
}

/// Interpret a trimmed yes/no answer.
///
/// Empty input keeps the default. Anything starting with `y` or `s`
/// (case-insensitive) counts as yes; every other non-empty answer is a no.
/// There is deliberately no stricter validation than this prefix check.
pub fn parse_yes_no(answer: &str, default: bool) -> bool {
    if answer.is_empty() {
        return default;
    }
    let answer = answer.to_lowercase();
    answer.starts_with('y') || answer.starts_with('s')
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer_keeps_default() {
        assert!(parse_yes_no("", true));
        assert!(!parse_yes_no("", false));
    }

    #[test]
    fn affirmative_prefixes_parse_true() {
        for answer in ["y", "Y", "yes", "YES", "s", "S", "si", "Sí", "yep"] {
            assert!(parse_yes_no(answer, false), "failed for: {answer}");
        }
    }

    #[test]
    fn everything_else_parses_false() {
        for answer in ["n", "N", "no", "nope", "maybe", "0", "true"] {
            assert!(!parse_yes_no(answer, true), "failed for: {answer}");
        }
    }
}
