//! Scripted console adapter for testing.

use std::{
    collections::VecDeque,
    sync::{Arc, RwLock},
};

use fxforge_core::{application::ports::Console, error::FxforgeResult};

/// Test console that replays a fixed list of answers and records everything
/// printed through it.
#[derive(Debug, Clone)]
pub struct ScriptedConsole {
    inner: Arc<RwLock<ScriptedConsoleInner>>,
}

#[derive(Debug, Default)]
struct ScriptedConsoleInner {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that will answer prompts with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Arc::new(RwLock::new(ScriptedConsoleInner {
                answers: answers.into_iter().map(Into::into).collect(),
                transcript: Vec::new(),
            })),
        }
    }

    /// Everything asked or said through this console, in order.
    pub fn transcript(&self) -> Vec<String> {
        let inner = self.inner.read().unwrap();
        inner.transcript.clone()
    }

    /// Answers not yet consumed.
    pub fn remaining_answers(&self) -> usize {
        let inner = self.inner.read().unwrap();
        inner.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn ask(&self, prompt: &str) -> FxforgeResult<String> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        inner.transcript.push(prompt.to_string());

        // Running out of scripted answers behaves like end-of-input on stdin.
        Ok(inner.answers.pop_front().unwrap_or_default())
    }

    fn say(&self, line: &str) -> FxforgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        inner.transcript.push(line.to_string());
        Ok(())
    }
}

fn lock_error() -> fxforge_core::error::FxforgeError {
    use fxforge_core::application::ApplicationError;

    ApplicationError::ConsoleError {
        reason: "console lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_answers_in_order() {
        let console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(console.ask("a? ").unwrap(), "first");
        assert_eq!(console.ask("b? ").unwrap(), "second");
        assert_eq!(console.remaining_answers(), 0);
    }

    #[test]
    fn exhausted_answers_behave_like_eof() {
        let console = ScriptedConsole::new(Vec::<String>::new());
        assert_eq!(console.ask("a? ").unwrap(), "");
    }

    #[test]
    fn transcript_records_prompts_and_lines() {
        let console = ScriptedConsole::new(["yes"]);
        console.say("hello").unwrap();
        console.ask("ok? ").unwrap();

        assert_eq!(console.transcript(), vec!["hello", "ok? "]);
    }
}
