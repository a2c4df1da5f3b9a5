//! Console adapters.

mod scripted;
mod stdio;

pub use scripted::ScriptedConsole;
pub use stdio::StdioConsole;
