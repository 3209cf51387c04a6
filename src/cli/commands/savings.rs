use pocketbook_core::validation::{parse_amount, FIELD_TARGET, FIELD_TRANSFER};

use crate::cli::commands::expect_args;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "target",
            "Set or reset the savings target",
            "target <amount|reset>",
            cmd_target,
        ),
        CommandEntry::new(
            "transfer",
            "Move money into savings",
            "transfer <amount>",
            cmd_transfer,
        ),
        CommandEntry::new(
            "savings",
            "Reset accumulated savings",
            "savings reset",
            cmd_savings,
        ),
    ]
}

fn cmd_target(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, "target <amount|reset>")?;
    if args[0].eq_ignore_ascii_case("reset") {
        context.state.reset_target();
        output::success("Savings target reset.");
        return Ok(());
    }
    let value = parse_amount(FIELD_TARGET, args[0])?;
    context.state.set_target(value)?;
    output::success(format!("Savings target set to {}.", context.money(value)));
    Ok(())
}

fn cmd_transfer(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, "transfer <amount>")?;
    let amount = parse_amount(FIELD_TRANSFER, args[0])?;
    context.state.transfer(amount)?;
    output::success(format!(
        "Transferred {}. Current savings: {}.",
        context.money(amount),
        context.money(context.state.savings().accumulated())
    ));
    Ok(())
}

fn cmd_savings(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [action] if action.eq_ignore_ascii_case("reset") => {
            context.state.reset_savings();
            output::success("Current savings reset.");
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments("usage: savings reset".into())),
    }
}
