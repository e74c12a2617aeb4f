use crate::cli::context::{usage, CliContext};
use crate::error::ContactsResult;
use crate::model::Phone;
use crate::ops::contact_ops::{self, AddOutcome};
use crate::queries::contact_queries;

pub fn add(ctx: &mut CliContext, args: &[&str]) -> String {
    let (name, phone) = match args {
        [name, phone, ..] => (*name, *phone),
        _ => return usage("add <name> <phone>"),
    };

    match contact_ops::add_contact(&mut ctx.book, name, phone) {
        Ok(AddOutcome::Added) => "Contact added.".into(),
        Ok(AddOutcome::Updated) => "Contact updated.".into(),
        Err(e) => ctx.error_message(&e),
    }
}

pub fn change(ctx: &mut CliContext, args: &[&str]) -> String {
    let (name, old, new) = match args {
        [name, old, new, ..] => (*name, *old, *new),
        _ => return usage("change <name> <old_phone> <new_phone>"),
    };

    let changed = contact_ops::change_phone(&mut ctx.book, name, old, new).map(|r| r.is_some());
    match changed {
        Ok(true) => format!("Phone number updated for {}.", name),
        Ok(false) => not_found(name),
        Err(e) => ctx.error_message(&e),
    }
}

pub fn remove_phone(ctx: &mut CliContext, args: &[&str]) -> String {
    let (name, phone) = match args {
        [name, phone, ..] => (*name, *phone),
        _ => return usage("remove-phone <name> <phone>"),
    };

    match contact_ops::remove_phone(&mut ctx.book, name, phone) {
        Some(removed) => format!("Removed {} phone(s) from {}.", removed, name),
        None => not_found(name),
    }
}

pub fn phone(ctx: &CliContext, args: &[&str]) -> String {
    let name = match args.first() {
        Some(name) => *name,
        None => return usage("phone <name>"),
    };

    match contact_queries::phones_of(&ctx.book, name) {
        Some(phones) => {
            let numbers: Vec<&str> = phones.iter().map(Phone::as_str).collect();
            format!("{}'s phone number is {}.", name, numbers.join(", "))
        }
        None => not_found(name),
    }
}

pub fn all(ctx: &CliContext) -> String {
    if ctx.book.is_empty() {
        return "No contacts found.".into();
    }
    ctx.book
        .records()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn delete(ctx: &mut CliContext, args: &[&str]) -> String {
    let name = match args.first() {
        Some(name) => *name,
        None => return usage("delete <name>"),
    };

    match contact_ops::delete_contact(&mut ctx.book, name) {
        Some(_) => format!("Contact {} deleted.", name),
        None => not_found(name),
    }
}

/// Pretty-printed JSON snapshot of the whole book.
pub fn export(ctx: &CliContext) -> ContactsResult<String> {
    Ok(serde_json::to_string_pretty(&ctx.book)?)
}

fn not_found(name: &str) -> String {
    format!("Contact {} not found.", name)
}
