use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};
use shell_words::split;

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext, SCRIPT_ENV};
use crate::cli::output;

/// Starts the shell, reading commands from stdin when the script env var is set.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    let mut context = ShellContext::new(mode)?;

    match context.mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandCompleter, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandCompleter::new(context.command_names())));
    output::info("Type `help` to list commands.");

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.trim()).ok();
                }
                if run_line(context, &line) == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        if !context.running || run_line(context, &line?) == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// Executes one line, reporting any command error in place.
fn run_line(context: &mut ShellContext, line: &str) -> LoopControl {
    handle_line(context, line).unwrap_or_else(|err| {
        context.report_error(err);
        LoopControl::Continue
    })
}

pub(crate) fn handle_line(
    context: &mut ShellContext,
    line: &str,
) -> Result<LoopControl, CommandError> {
    let tokens = tokenize(line)?;
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();

    context.last_command = Some(line.trim().to_string());
    let control = context.dispatch(&raw.to_lowercase(), raw, &args)?;
    if control == LoopControl::Exit {
        context.running = false;
    }
    Ok(control)
}

/// Splits a line into words, honouring shell-style quotes.
pub(crate) fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    split(line)
        .map_err(|err| CommandError::InvalidArguments(format!("Could not parse input: {err}")))
}

/// Tab completion for the first word of a line.
struct CommandCompleter {
    names: Vec<String>,
}

impl CommandCompleter {
    fn new(names: Vec<&'static str>) -> Self {
        let mut names: Vec<String> = names.into_iter().map(str::to_ascii_lowercase).collect();
        names.sort();
        names.dedup();
        Self { names }
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        if head.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = head.len() - head.trim_start().len();
        let needle = head[start..].to_ascii_lowercase();
        let candidates = self
            .names
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

// rustyline requires these for `Helper`; the defaults are no-ops.
impl Hinter for CommandCompleter {
    type Hint = String;
}
impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}
