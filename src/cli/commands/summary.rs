use crate::cli::commands::expect_args;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const BAR_WIDTH: usize = 26;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "summary",
        "Show totals and savings progress",
        "summary",
        cmd_summary,
    )]
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 0, "summary")?;
    let summary = context.state.summary();
    let net = output::balance(&context.money(summary.net_total), summary.status);

    output::section("Summary");
    output::two_column(&[
        ("Entries", summary.entry_count.to_string()),
        ("Income", context.money(summary.income)),
        ("Expenses", context.money(summary.expenses)),
        ("Total", context.money(summary.total)),
        ("Net total", net),
        ("Target", context.money(summary.target)),
        ("Current savings", context.money(summary.accumulated)),
        (
            "Progress",
            format!(
                "{} {}",
                progress_bar(summary.display_progress),
                context.state.savings().progress_label()
            ),
        ),
    ]);
    if summary.status.is_warning() {
        output::warning("Savings exceed the ledger total.");
    }
    if summary.target_reached {
        output::success("Savings target reached.");
    }
    Ok(())
}

/// Bar spanning 0..=130% of target; the `|` marks 100%.
fn progress_bar(display_progress: f64) -> String {
    let cap = pocketbook_core::DISPLAY_PROGRESS_CAP;
    let ratio = (display_progress.max(0.0) / cap).min(1.0);
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    let goal = ((100.0 / cap) * BAR_WIDTH as f64).round() as usize;
    let cells: String = (0..BAR_WIDTH)
        .map(|idx| match (idx < filled, idx == goal) {
            (_, true) => '|',
            (true, false) => '#',
            (false, false) => '.',
        })
        .collect();
    format!("[{cells}]")
}
