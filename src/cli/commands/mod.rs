pub mod draft;
pub mod entry;
pub mod savings;
pub mod summary;
pub mod system;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "add", "list", "edit", "delete", "draft", "submit", "target", "transfer", "savings",
    "summary", "help", "version", "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(entry::definitions());
    commands.extend(draft::definitions());
    commands.extend(savings::definitions());
    commands.extend(summary::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

/// Fails with the command's usage line unless exactly `count` arguments were given.
pub(crate) fn expect_args(args: &[&str], count: usize, usage: &str) -> Result<(), CommandError> {
    if args.len() == count {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!("usage: {usage}")))
    }
}

pub(crate) fn parse_id(raw: &str) -> Result<u64, CommandError> {
    raw.trim()
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("`{raw}` is not an entry id")))
}
