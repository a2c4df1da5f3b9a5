//! Console adapter over process stdin/stdout.

use std::io::{self, BufRead, Write};

use fxforge_core::{application::ports::Console, error::FxforgeResult};

/// Production console talking to the process's standard streams.
#[derive(Debug, Clone, Copy)]
pub struct StdioConsole;

impl StdioConsole {
    /// Create a new stdio console adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdioConsole {
    fn ask(&self, prompt: &str) -> FxforgeResult<String> {
        let mut stdout = io::stdout();
        stdout
            .write_all(prompt.as_bytes())
            .map_err(|e| map_console_error("write prompt", e))?;
        stdout
            .flush()
            .map_err(|e| map_console_error("flush stdout", e))?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| map_console_error("read input line", e))?;

        // read_line leaves the terminator in place; end-of-input yields an
        // empty string, which the interview treats as an accepted default.
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&self, line: &str) -> FxforgeResult<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{line}").map_err(|e| map_console_error("write line", e))
    }
}

fn map_console_error(operation: &str, e: io::Error) -> fxforge_core::error::FxforgeError {
    use fxforge_core::application::ApplicationError;

    ApplicationError::ConsoleError {
        reason: format!("failed to {}: {}", operation, e),
    }
    .into()
}
