use contact_book::console::Console;
use contact_book::error::{ConsoleError, ConsoleResult};
use std::collections::VecDeque;

/// Scripted console for testing.
///
/// Replays a fixed list of input lines and records every prompt and printed
/// line. Once the script runs out, reads fail with `InputClosed`, which ends
/// a navigator session cleanly.
#[derive(Debug, Default)]
pub struct MockConsole {
    script: VecDeque<String>,
    prompts: Vec<String>,
    printed: Vec<String>,
    transcript: Vec<String>,
}

impl MockConsole {
    /// Create a console that will answer prompts with `lines`, in order.
    pub fn new(lines: &[&str]) -> Self {
        Self {
            script: lines.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Every prompt shown, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every printed line (prompts excluded), in order.
    pub fn printed(&self) -> &[String] {
        &self.printed
    }

    /// Printed output joined into one string.
    pub fn output(&self) -> String {
        self.printed.join("\n")
    }

    /// Prompts and printed lines interleaved as they happened.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Number of scripted lines not consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// How many times `prompt` was shown.
    pub fn prompt_count(&self, prompt: &str) -> usize {
        self.prompts.iter().filter(|p| p.as_str() == prompt).count()
    }
}

impl Console for MockConsole {
    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        self.prompts.push(prompt.to_string());
        self.transcript.push(prompt.to_string());
        self.script.pop_front().ok_or(ConsoleError::InputClosed)
    }

    fn print(&mut self, text: &str) -> ConsoleResult<()> {
        for line in text.split('\n') {
            self.printed.push(line.to_string());
            self.transcript.push(line.to_string());
        }
        Ok(())
    }
}
