//! Menu nodes: named levels of the navigation tree.

use super::navigator::Navigator;
use crate::domain::ContactId;
use crate::error::NavigationResult;

/// What the menu that ran an action should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Show this menu's prompt again
    Continue,

    /// Leave this menu and return to its caller
    Stop,
}

/// Body of a menu action.
///
/// Receives the navigator and the contacts the menu is currently offering.
/// An action may replace the selection, as `again` does in search results.
pub type ActionFn = fn(&mut Navigator<'_>, &mut Vec<ContactId>) -> NavigationResult<Signal>;

/// A named entry in a menu.
pub struct MenuAction {
    name: &'static str,
    run: ActionFn,
}

impl MenuAction {
    /// The word the user types to pick this action.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the action.
    pub fn run(
        &self,
        navigator: &mut Navigator<'_>,
        selection: &mut Vec<ContactId>,
    ) -> NavigationResult<Signal> {
        (self.run)(navigator, selection)
    }
}

/// How a line of input maps onto a menu.
pub enum Choice<'n> {
    /// A named action
    Action(&'n MenuAction),

    /// A 1-based index into the current selection
    Select(ContactId),

    /// Anything else
    Unknown,
}

/// One level of the menu tree.
///
/// A node offers its named actions, and when it is numbered, also lets the
/// user pick one of the contacts it was opened with by its 1-based position.
///
/// Children are not stored on the node. An action enters a child by building
/// it and passing it to [`Navigator::run_menu`](super::Navigator::run_menu)
/// together with the selection it just computed, so each child is created
/// with fresh contents. The shape of the tree is laid out in
/// [`actions`](super::actions).
pub struct MenuNode {
    name: &'static str,
    actions: Vec<MenuAction>,
    numbered: bool,
}

impl MenuNode {
    /// Create an empty node.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            actions: Vec::new(),
            numbered: false,
        }
    }

    /// Add a named action. Actions are offered in the order they are added.
    pub fn action(mut self, name: &'static str, run: ActionFn) -> Self {
        self.actions.push(MenuAction { name, run });
        self
    }

    /// Accept numeric picks from the selection.
    pub fn numbered(mut self) -> Self {
        self.numbered = true;
        self
    }

    /// Node name, shown in brackets in the prompt.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Names of the actions in display order.
    pub fn action_names(&self) -> Vec<&'static str> {
        self.actions.iter().map(|a| a.name).collect()
    }

    /// Prompt for a node currently offering `selection_len` contacts.
    ///
    /// The `[number]` choice is only advertised when there is something to pick.
    pub fn prompt(&self, selection_len: usize) -> String {
        let mut choices = Vec::with_capacity(self.actions.len() + 1);
        if self.numbered && selection_len > 0 {
            choices.push("[number]");
        }
        choices.extend(self.action_names());

        format!("[{}] Enter action ({}):", self.name, choices.join(", "))
    }

    /// Interpret a trimmed line of input.
    ///
    /// Action names take precedence over numbers. Numbers outside
    /// `1..=selection.len()`, and any number on an unnumbered node, are unknown.
    pub fn resolve(&self, input: &str, selection: &[ContactId]) -> Choice<'_> {
        if let Some(action) = self.actions.iter().find(|a| a.name == input) {
            return Choice::Action(action);
        }

        if self.numbered {
            let picked = input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| selection.get(i));
            if let Some(id) = picked {
                return Choice::Select(*id);
            }
        }

        Choice::Unknown
    }
}
