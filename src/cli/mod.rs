pub mod context;
pub mod contact_commands;
pub mod birthday_commands;

use std::io::{self, BufRead, Write};

use context::CliContext;

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading.
    Message(String),
    /// Nothing to print (blank line).
    Silent,
    /// Print the farewell and stop.
    Exit(String),
}

/// Run the interactive REPL until `close`/`exit` or end of input.
pub fn run<R: BufRead, W: Write>(ctx: &mut CliContext, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "Welcome to the assistant bot!")?;
    writeln!(output, "Type 'help' for commands, 'close' to quit.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match execute(ctx, &line) {
            Reply::Message(msg) => writeln!(output, "{}", msg)?,
            Reply::Silent => {}
            Reply::Exit(msg) => {
                writeln!(output, "{}", msg)?;
                break;
            }
        }
    }
    Ok(())
}

/// Handle one input line against the context.
pub fn execute(ctx: &mut CliContext, input: &str) -> Reply {
    let (command, args) = match parse_command(input) {
        Some(parsed) => parsed,
        None => return Reply::Silent,
    };

    let msg: String = match command.as_str() {
        "close" | "exit" | "quit" => return Reply::Exit("Good bye!".into()),
        "hello" => "How can I help you?".into(),
        "help" | "?" => help_text().into(),

        "add" => contact_commands::add(ctx, &args),
        "change" => contact_commands::change(ctx, &args),
        "remove-phone" => contact_commands::remove_phone(ctx, &args),
        "phone" => contact_commands::phone(ctx, &args),
        "all" => contact_commands::all(ctx),
        "delete" => contact_commands::delete(ctx, &args),
        "export" => match contact_commands::export(ctx) {
            Ok(json) => json,
            Err(e) => format!("Error: {}", e),
        },

        "add-birthday" => birthday_commands::add_birthday(ctx, &args),
        "show-birthday" => birthday_commands::show_birthday(ctx, &args),
        "birthdays" => birthday_commands::birthdays(ctx),

        other => format!("Unknown command: {}. Type 'help' for commands.", other),
    };
    Reply::Message(msg)
}

/// Split a line into a lowercased command and its whitespace-separated
/// arguments. Returns `None` for a blank line.
pub fn parse_command(input: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = input.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

fn help_text() -> &'static str {
    r#"COMMANDS:

  Contacts:
    add <name> <phone>                    Add a contact or a phone to it
    change <name> <old_phone> <new_phone> Replace one of a contact's phones
    remove-phone <name> <phone>           Remove a phone from a contact
    phone <name>                          Show a contact's phones
    all                                   List all contacts
    delete <name>                         Delete a contact
    export                                Print all contacts as JSON

  Birthdays:
    add-birthday <name> <DD.MM.YYYY>      Set a contact's birthday
    show-birthday <name>                  Show a contact's birthday
    birthdays                             Birthdays coming up soon

  Other:
    hello                                 Say hello
    help                                  Show this help
    close / exit / quit                   Exit

TIPS:
  - Phones are exactly 10 digits
  - A birthday can be set only once per contact"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_lowercases_command_only() {
        let (cmd, args) = parse_command("  ADD Alice 1234567890 ").unwrap();
        assert_eq!(cmd, "add");
        assert_eq!(args, vec!["Alice", "1234567890"]);
    }

    #[test]
    fn parse_command_blank_is_none() {
        assert!(parse_command("   \t ").is_none());
    }
}
