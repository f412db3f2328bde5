//! Line-oriented console used by the menus.
//!
//! The menus never touch stdin or stdout directly; they talk to a [`Console`],
//! which keeps them testable with scripted input.

mod stream;

pub use stream::{StdConsole, StreamConsole};

use crate::error::ConsoleResult;

/// Blocking text input and output.
pub trait Console {
    /// Show `prompt` and read one line of input.
    ///
    /// The line terminator is removed; nothing else is trimmed. Returns
    /// [`ConsoleError::InputClosed`](crate::error::ConsoleError::InputClosed)
    /// at end of input.
    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String>;

    /// Append `text` and a line break to the output.
    fn print(&mut self, text: &str) -> ConsoleResult<()>;
}
