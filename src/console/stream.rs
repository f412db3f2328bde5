use super::Console;
use crate::error::{ConsoleError, ConsoleResult};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Console over any buffered reader and writer.
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
}

/// Console bound to the process's standard input and output.
pub type StdConsole = StreamConsole<StdinLock<'static>, Stdout>;

impl StdConsole {
    /// Attach to stdin and stdout.
    pub fn stdio() -> Self {
        StreamConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    /// Create a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    fn print(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}
