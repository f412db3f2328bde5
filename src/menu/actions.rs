//! The menu tree and the actions behind each entry.
//!
//! ```text
//! menu ── add | count | exit
//!   ├─ list ─── back | [number] ─> record
//!   └─ search ─ back | again | [number] ─> record
//! record ── edit | delete | menu
//! ```

use super::navigator::Navigator;
use super::node::{MenuNode, Signal};
use crate::domain::ContactId;
use crate::error::NavigationResult;
use crate::models::{
    Contact, ContactKind, Organization, OrganizationDraft, Person, PersonDraft, UpdateOutcome,
};
use crate::search::SearchQuery;
use tracing::{info, warn};

/// Top of the tree.
pub fn main_menu() -> MenuNode {
    MenuNode::new("menu")
        .action("add", add)
        .action("list", list)
        .action("search", search)
        .action("count", count)
        .action("exit", leave)
}

/// The full store, offered by position.
pub fn list_menu() -> MenuNode {
    MenuNode::new("list").numbered().action("back", leave)
}

/// Search results, offered by position.
pub fn search_menu() -> MenuNode {
    MenuNode::new("search")
        .numbered()
        .action("back", leave)
        .action("again", again)
}

/// A single contact.
pub fn record_menu() -> MenuNode {
    MenuNode::new("record")
        .action("edit", edit)
        .action("delete", delete)
        .action("menu", leave)
}

/// Show a contact and run the record menu on it.
///
/// Always stops the calling menu: after `delete` its selection holds a
/// handle that no longer exists, and `menu` means going back to the top.
pub fn open_record(nav: &mut Navigator<'_>, id: ContactId) -> NavigationResult<Signal> {
    let details = nav.repo().get(id)?.describe();
    nav.say(&details)?;
    nav.say("")?;

    nav.run_menu(&record_menu(), vec![id])?;
    Ok(Signal::Stop)
}

fn leave(_: &mut Navigator<'_>, _: &mut Vec<ContactId>) -> NavigationResult<Signal> {
    Ok(Signal::Stop)
}

fn add(nav: &mut Navigator<'_>, _: &mut Vec<ContactId>) -> NavigationResult<Signal> {
    let kind = ask_kind(nav)?;

    let (contact, warnings) = match kind {
        ContactKind::Person => {
            let draft = PersonDraft {
                name: nav.ask("Enter the name:")?,
                surname: nav.ask("Enter the surname:")?,
                birthdate: nav.ask("Enter the birth date:")?,
                gender: nav.ask("Enter the gender (M, F):")?,
                number: nav.ask("Enter the number:")?,
            };
            let (person, warnings) = Person::new(draft);
            let contact: Box<dyn Contact> = Box::new(person);
            (contact, warnings)
        }
        ContactKind::Organization => {
            let draft = OrganizationDraft {
                name: nav.ask("Enter the organization name:")?,
                address: nav.ask("Enter the address:")?,
                number: nav.ask("Enter the number:")?,
            };
            let (organization, warnings) = Organization::new(draft);
            let contact: Box<dyn Contact> = Box::new(organization);
            (contact, warnings)
        }
    };

    for warning in &warnings {
        warn!(kind = %kind, input = warning.input(), "{}", warning);
        nav.say(&warning.to_string())?;
    }

    let id = nav.repo().add(contact);
    info!(%id, %kind, "Contact added");
    nav.say("The record added.")?;

    Ok(Signal::Continue)
}

fn ask_kind(nav: &mut Navigator<'_>) -> NavigationResult<ContactKind> {
    let kinds = [ContactKind::Person, ContactKind::Organization];
    let keywords: Vec<&str> = kinds.iter().map(|k| k.keyword()).collect();
    let prompt = format!("Enter the type ({}):", keywords.join(", "));

    loop {
        let input = nav.ask(&prompt)?;
        if let Some(kind) = kinds.iter().find(|k| k.keyword() == input) {
            return Ok(*kind);
        }
        nav.say(&format!("Unknown type: {}", input))?;
    }
}

fn count(nav: &mut Navigator<'_>, _: &mut Vec<ContactId>) -> NavigationResult<Signal> {
    let total = nav.repo().count();
    nav.say(&format!("The Phone Book has {} records.", total))?;
    Ok(Signal::Continue)
}

fn list(nav: &mut Navigator<'_>, _: &mut Vec<ContactId>) -> NavigationResult<Signal> {
    let ids = nav.repo().ids();
    print_numbered(nav, &ids)?;
    nav.say("")?;

    nav.run_menu(&list_menu(), ids)?;
    Ok(Signal::Continue)
}

fn search(nav: &mut Navigator<'_>, _: &mut Vec<ContactId>) -> NavigationResult<Signal> {
    let found = run_search(nav)?;
    nav.run_menu(&search_menu(), found)?;
    Ok(Signal::Continue)
}

fn again(nav: &mut Navigator<'_>, selection: &mut Vec<ContactId>) -> NavigationResult<Signal> {
    *selection = run_search(nav)?;
    Ok(Signal::Continue)
}

fn run_search(nav: &mut Navigator<'_>) -> NavigationResult<Vec<ContactId>> {
    let text = nav.ask("Enter search query:")?;
    let found = SearchQuery::new(&text).run(nav.repo());

    nav.say(&format!("Found {} results:", found.len()))?;
    print_numbered(nav, &found)?;
    nav.say("")?;

    Ok(found)
}

fn print_numbered(nav: &mut Navigator<'_>, ids: &[ContactId]) -> NavigationResult<()> {
    for (position, id) in ids.iter().enumerate() {
        let label = nav.repo().get(*id)?.display_label();
        nav.say(&format!("{}. {}", position + 1, label))?;
    }
    Ok(())
}

fn edit(nav: &mut Navigator<'_>, selection: &mut Vec<ContactId>) -> NavigationResult<Signal> {
    for &id in selection.iter() {
        let field = ask_field(nav, id)?;
        let value = nav.ask(&format!("Enter {}:", field))?;

        let contact = nav.repo().get_mut(id)?;
        let outcome = contact.update_field(field, &value)?;
        let details = contact.describe();

        if let UpdateOutcome::Cleared(warning) = outcome {
            nav.say(&warning.to_string())?;
        }
        info!(%id, field, "Contact edited");
        nav.say("Saved")?;
        nav.say(&details)?;
    }

    Ok(Signal::Continue)
}

fn ask_field(nav: &mut Navigator<'_>, id: ContactId) -> NavigationResult<&'static str> {
    let names = nav.repo().get(id)?.field_names();
    let prompt = format!("Select a field ({}):", names.join(", "));

    loop {
        let input = nav.ask(&prompt)?;
        if let Some(name) = names.iter().find(|n| **n == input) {
            return Ok(*name);
        }
        nav.say(&format!("Unknown field: {}", input))?;
    }
}

fn delete(nav: &mut Navigator<'_>, selection: &mut Vec<ContactId>) -> NavigationResult<Signal> {
    let removed = nav.repo().remove_all(selection);
    info!(removed, "Contacts removed");
    nav.say("The record removed!")?;
    Ok(Signal::Stop)
}
