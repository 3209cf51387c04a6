use pocketbook_domain::EntryDraft;

use crate::cli::commands::{expect_args, parse_id};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const ADD_USAGE: &str = "add <name> <amount> <Income|Expense> <date>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record an income or expense", ADD_USAGE, cmd_add),
        CommandEntry::new("list", "Show all entries", "list", cmd_list),
        CommandEntry::new(
            "edit",
            "Move an entry into the draft for re-editing",
            "edit <id>",
            cmd_edit,
        ),
        CommandEntry::new("delete", "Delete an entry", "delete <id>", cmd_delete),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 4, ADD_USAGE)?;
    let candidate = EntryDraft::new(args[0], args[1], args[2], args[3]);
    let entry = context.state.add_entry(&candidate)?;
    output::success(format!(
        "Added {} `{}` ({}) as #{}.",
        entry.category,
        entry.name,
        context.money(entry.amount),
        entry.id
    ));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 0, "list")?;
    let entries = context.state.ledger().entries();
    if entries.is_empty() {
        output::info("No entries recorded yet.");
        return Ok(());
    }

    let rows: Vec<[String; 5]> = entries
        .iter()
        .map(|entry| {
            [
                entry.id.to_string(),
                entry.name.clone(),
                context.money(entry.amount),
                entry.category.to_string(),
                entry.date.clone(),
            ]
        })
        .collect();
    print_table(["ID", "Name", "Amount", "Category", "Date"], &rows);
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, "edit <id>")?;
    let id = parse_id(args[0])?;
    match context.state.edit_entry(id) {
        Some(draft) => {
            output::success(format!("Entry #{id} moved into the draft."));
            super::draft::print_draft(&draft);
            output::hint("Change fields with `draft set <field> <value>`, then `submit`.");
            Ok(())
        }
        None => Err(CommandError::Message(format!("Entry #{id} not found."))),
    }
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, "delete <id>")?;
    let id = parse_id(args[0])?;
    if context.state.remove_entry(id) {
        output::success(format!("Entry #{id} deleted."));
    } else {
        output::info(format!("Entry #{id} not found; nothing to delete."));
    }
    Ok(())
}

fn print_table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) {
    let mut widths = headers.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{cell:<width$}", width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    println!("{}", render(headers.to_vec()));
    println!(
        "{}",
        widths.iter().map(|width| "-".repeat(*width)).collect::<Vec<_>>().join("  ")
    );
    for row in rows {
        println!("{}", render(row.iter().map(String::as_str).collect()));
    }
}
