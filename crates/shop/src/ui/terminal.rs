//! Console implementation over stdin/stdout.

use std::io::{self, BufRead, Write};

use super::Console;

/// The real terminal: prompts on stdout, reads answers from stdin.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    /// Create a terminal console.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[allow(clippy::print_stdout)]
impl Console for TerminalConsole {
    fn prompt(&mut self, text: &str) -> String {
        print!("{text}");
        if let Err(e) = io::stdout().flush() {
            tracing::warn!("failed to flush prompt: {e}");
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF or error both read as an empty answer.
            Ok(0) | Err(_) => String::new(),
            Ok(_) => line.trim_end_matches(['\r', '\n']).to_owned(),
        }
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}
