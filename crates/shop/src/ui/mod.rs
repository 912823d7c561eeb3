//! The interactive prompt collaborator.
//!
//! All user conversation goes through [`Console`]: one blocking [`prompt`]
//! call per menu question and [`say`] for every user-facing line. The
//! checkout and login flows only ever talk to this trait, so scripted
//! sessions can drive them end to end.
//!
//! [`prompt`]: Console::prompt
//! [`say`]: Console::say

pub mod scripted;
pub mod terminal;

pub use scripted::ScriptedConsole;
pub use terminal::TerminalConsole;

/// Blocking terminal conversation seam.
pub trait Console {
    /// Show `text` and block until the user answers one line.
    fn prompt(&mut self, text: &str) -> String;

    /// Show one line of output to the user.
    fn say(&mut self, line: &str);
}
