//! Scripted console for driving flows from tests.

use std::collections::VecDeque;

use super::Console;

/// A console that replays canned answers and records everything shown.
///
/// Prompts consume answers front to back; every `say` line and every
/// prompt text is recorded so tests can assert on the conversation.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    output: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that will answer prompts with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Every line shown via [`Console::say`], in order.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Every prompt text shown, in order.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Whether `line` was shown exactly, at any point.
    #[must_use]
    pub fn printed(&self, line: &str) -> bool {
        self.output.iter().any(|shown| shown == line)
    }

    /// Number of canned answers not yet consumed.
    #[must_use]
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    /// # Panics
    ///
    /// Panics if the script has run out of answers - a scripted session
    /// that prompts more than planned should fail fast, not hang.
    fn prompt(&mut self, text: &str) -> String {
        self.prompts.push(text.to_owned());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("script exhausted at prompt: {text}"))
    }

    fn say(&mut self, line: &str) {
        self.output.push(line.to_owned());
    }
}
