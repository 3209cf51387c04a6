use pocketbook_domain::{DraftField, EntryDraft};

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const DRAFT_USAGE: &str = "draft [set <name|amount|category|date> <value> | clear]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "draft",
            "Show or change the in-progress entry",
            DRAFT_USAGE,
            cmd_draft,
        ),
        CommandEntry::new("submit", "Add the draft as a new entry", "submit", cmd_submit),
    ]
}

fn cmd_draft(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            print_draft(context.state.draft());
            Ok(())
        }
        [action] if action.eq_ignore_ascii_case("clear") => {
            context.state.clear_draft();
            output::success("Draft cleared.");
            Ok(())
        }
        [action, field, value @ ..] if action.eq_ignore_ascii_case("set") => {
            let field = DraftField::parse(field).ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "unknown draft field `{field}`; expected name, amount, category or date"
                ))
            })?;
            context.state.update_draft(field, value.join(" "));
            output::success(format!("Draft {field} updated."));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(format!("usage: {DRAFT_USAGE}"))),
    }
}

fn cmd_submit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    super::expect_args(args, 0, "submit")?;
    let entry = context.state.submit_draft()?;
    output::success(format!(
        "Added {} `{}` ({}) as #{}.",
        entry.category,
        entry.name,
        context.money(entry.amount),
        entry.id
    ));
    Ok(())
}

pub(crate) fn print_draft(draft: &EntryDraft) {
    if draft.is_empty() {
        output::info("Draft is empty.");
        return;
    }
    let rows: Vec<(&str, String)> = DraftField::ALL
        .iter()
        .map(|field| (field.as_str(), draft.field(*field).to_string()))
        .collect();
    output::two_column(&rows);
}
