//! The read-act loop driving the menu tree.

use super::actions;
use super::node::{Choice, MenuNode, Signal};
use crate::console::Console;
use crate::domain::ContactId;
use crate::error::{ConsoleError, NavigationError, NavigationResult};
use crate::repositories::ContactRepository;
use tracing::{debug, info};

/// Drives the menus against a contact repository and a console.
///
/// The navigator borrows both for the length of a session; the caller keeps
/// ownership and can inspect the repository afterwards.
pub struct Navigator<'a> {
    repo: &'a mut dyn ContactRepository,
    console: &'a mut dyn Console,
}

impl<'a> Navigator<'a> {
    /// Create a navigator over `repo` talking through `console`.
    pub fn new(repo: &'a mut dyn ContactRepository, console: &'a mut dyn Console) -> Self {
        Self { repo, console }
    }

    /// Run the main menu until the user exits.
    ///
    /// End of input is treated like `exit`.
    pub fn run(&mut self) -> NavigationResult<()> {
        match self.run_menu(&actions::main_menu(), Vec::new()) {
            Err(NavigationError::Console(ConsoleError::InputClosed)) => {
                info!("Input closed, leaving the main menu");
                Ok(())
            }
            other => other,
        }
    }

    /// Show `node` repeatedly until one of its actions stops it.
    ///
    /// Unknown input reports an error and shows the same prompt again; there
    /// is no retry limit.
    pub fn run_menu(
        &mut self,
        node: &MenuNode,
        mut selection: Vec<ContactId>,
    ) -> NavigationResult<()> {
        debug!(menu = node.name(), offered = selection.len(), "Entering menu");

        loop {
            let input = self.ask(&node.prompt(selection.len()))?;

            let signal = match node.resolve(&input, &selection) {
                Choice::Action(action) => {
                    debug!(menu = node.name(), action = action.name(), "Running action");
                    action.run(self, &mut selection)?
                }
                Choice::Select(id) => actions::open_record(self, id)?,
                Choice::Unknown => {
                    debug!(menu = node.name(), input = %input, "Unknown input");
                    self.say(&format!("Unknown action: {}", input))?;
                    continue;
                }
            };

            self.say("")?;

            if signal == Signal::Stop {
                debug!(menu = node.name(), "Leaving menu");
                return Ok(());
            }
        }
    }

    /// Prompt for one line of input, trimmed of surrounding whitespace.
    pub fn ask(&mut self, prompt: &str) -> NavigationResult<String> {
        let line = self.console.read_line(prompt)?;
        Ok(line.trim().to_string())
    }

    /// Print one line of output.
    pub fn say(&mut self, text: &str) -> NavigationResult<()> {
        self.console.print(text)?;
        Ok(())
    }

    /// The repository this session works on.
    pub fn repo(&mut self) -> &mut (dyn ContactRepository + 'a) {
        self.repo
    }
}
