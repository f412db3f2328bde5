//! Menu navigation.
//!
//! The user moves through a small tree of named menus. Each menu shows its
//! prompt in a loop until one of its actions asks to leave; actions may open
//! further menus below them.

pub mod actions;
pub mod navigator;
pub mod node;

pub use navigator::Navigator;
pub use node::{ActionFn, Choice, MenuAction, MenuNode, Signal};
