//! Implementation of the interactive generation flow.
//!
//! Responsibility: wire the stdio console and local filesystem adapters into
//! the core services, and narrate the result. No scaffolding logic lives
//! here.

use std::env;

use tracing::{info, instrument};

use fxforge_adapters::{LocalFilesystem, StdioConsole};
use fxforge_core::{
    application::{InterviewService, ScaffoldService, ScaffoldSummary},
    domain::{ResourceConfig, ScriptGroup},
};

use crate::{
    cli::global::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the generation flow.
///
/// Dispatch sequence:
/// 1. Print the banner
/// 2. Collect the configuration via `InterviewService`
/// 3. Resolve the output root (current working directory)
/// 4. Materialize via `ScaffoldService`
/// 5. Print the success report and next steps
#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, _config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.header("FiveM Resource Creator")?;
    output.header("============================")?;
    output.print("")?;

    // 2. Interview
    let interview = InterviewService::new(Box::new(StdioConsole::new()));
    let resource = interview.collect().map_err(CliError::Core)?;

    // 3. Output root
    let cwd = env::current_dir().map_err(|e| CliError::IoError {
        message: "failed to resolve current working directory".into(),
        source: e,
    })?;

    output.print("")?;
    output.info(&format!(
        "Generating resource in: {}",
        cwd.join(&resource.script_name).display()
    ))?;

    // 4. Materialize
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(StdioConsole::new()));

    info!(resource = %resource.script_name, "generation started");
    let summary = service.materialize(&resource, &cwd).map_err(CliError::Core)?;
    info!(
        resource = %resource.script_name,
        files = summary.files_written,
        "generation completed"
    );

    // 5. Success report
    show_success(&resource, &summary, &global, &output)?;

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_success(
    resource: &ResourceConfig,
    summary: &ScaffoldSummary,
    global: &GlobalArgs,
    out: &OutputManager,
) -> CliResult<()> {
    out.print("")?;
    out.success("Resource generated!")?;
    out.print("")?;
    out.print(&format!("Location: {}", summary.root.display()))?;
    out.print(&format!("Files created: {}", summary.files_written))?;
    for group in ScriptGroup::ALL {
        if resource.is_enabled(group) {
            out.print(&format!("  {} ({}/)", group_label(group), group.dir_name()))?;
        }
    }
    out.print("  fxmanifest.lua")?;

    if !global.quiet {
        out.print("")?;
        out.print("To use your resource:")?;
        out.print(&format!(
            "  1. Copy the {} folder to your server's resources directory",
            resource.script_name
        ))?;
        out.print(&format!(
            "  2. Add `ensure {}` to your server.cfg",
            resource.script_name
        ))?;
        out.print("  3. Restart the server")?;
    }

    Ok(())
}

fn group_label(group: ScriptGroup) -> &'static str {
    match group {
        ScriptGroup::Client => "Client side",
        ScriptGroup::Server => "Server side",
        ScriptGroup::Shared => "Shared",
        ScriptGroup::Config => "Config",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_labels_match_success_report_wording() {
        assert_eq!(group_label(ScriptGroup::Client), "Client side");
        assert_eq!(group_label(ScriptGroup::Server), "Server side");
        assert_eq!(group_label(ScriptGroup::Shared), "Shared");
        assert_eq!(group_label(ScriptGroup::Config), "Config");
    }
}
