use crate::cli::context::{usage, CliContext};
use crate::ops::birthday_ops;
use crate::queries::{birthday_queries, contact_queries};

pub fn add_birthday(ctx: &mut CliContext, args: &[&str]) -> String {
    let (name, value) = match args {
        [name, value, ..] => (*name, *value),
        _ => return usage("add-birthday <name> <DD.MM.YYYY>"),
    };

    let added = birthday_ops::add_birthday(&mut ctx.book, name, value).map(|r| r.is_some());
    match added {
        Ok(true) => format!("Birthday added for {}.", name),
        Ok(false) => format!("Contact {} not found.", name),
        Err(e) => ctx.error_message(&e),
    }
}

pub fn show_birthday(ctx: &CliContext, args: &[&str]) -> String {
    let name = match args.first() {
        Some(name) => *name,
        None => return usage("show-birthday <name>"),
    };

    match contact_queries::birthday_of(&ctx.book, name) {
        Some(Some(birthday)) => format!("{}'s birthday is on {}.", name, birthday),
        _ => format!("Contact {} not found or birthday not set.", name),
    }
}

pub fn birthdays(ctx: &CliContext) -> String {
    let period = describe_horizon(ctx.horizon_days);
    let upcoming = birthday_queries::birthdays_in_window(&ctx.book, ctx.today(), ctx.horizon_days);
    if upcoming.is_empty() {
        return format!("No birthdays in {}.", period);
    }

    let lines: Vec<String> = upcoming
        .iter()
        .map(|u| format!("{}: {}", u.name, u.birthday))
        .collect();
    format!("Birthdays in {}:\n{}", period, lines.join("\n"))
}

fn describe_horizon(days: u32) -> String {
    match days {
        7 => "the next week".into(),
        n => format!("the next {} days", n),
    }
}
