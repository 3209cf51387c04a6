//! Shared runtime state and error types for shell command execution.

use std::{env, io, path::PathBuf};

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use pocketbook_config::{Config, ConfigError, ConfigManager};
use pocketbook_core::{format_amount, KeyValueStore, StoreError, ValidationError, ValidationErrors};
use pocketbook_storage_json::JsonFileStore;

use crate::{
    cli::{commands, output, registry::CommandEntry, registry::CommandRegistry},
    state::AppState,
};

/// Overrides the directory holding `config.json` and the default data directory.
pub const HOME_ENV: &str = "POCKETBOOK_HOME";
/// When set, commands are read line by line from stdin without a prompt.
pub const SCRIPT_ENV: &str = "POCKETBOOK_CLI_SCRIPT";

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidEntry(#[from] ValidationErrors),
    #[error("{0}")]
    Message(String),
    #[error("exit requested")]
    ExitRequested,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub state: AppState<Box<dyn KeyValueStore>>,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Resolves the home directory, loads config and opens the on-disk store.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let base = resolve_base_dir();
        let manager = ConfigManager::with_base_dir(base.clone())?;
        let config = match manager.load() {
            Ok(config) => config,
            Err(err) => {
                output::warning(format!(
                    "Could not read {}: {err}. Using defaults.",
                    manager.config_path().display()
                ));
                Config::default()
            }
        };
        crate::init_with_filter(&config.log_filter);
        output::set_color_enabled(config.ui_color_enabled);

        let data_dir = config.resolve_data_dir(&base);
        tracing::info!(data_dir = %data_dir.display(), "opening record store");
        let store = JsonFileStore::new(data_dir)?;
        let state = AppState::load(Box::new(store) as Box<dyn KeyValueStore>);
        Ok(Self::with_state(mode, state, config))
    }

    pub fn with_state(
        mode: CliMode,
        state: AppState<Box<dyn KeyValueStore>>,
        config: Config,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            mode,
            registry,
            state,
            config,
            last_command: None,
            running: true,
        }
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        format!(
            "pocketbook [{}]> ",
            format_amount(self.state.net_total(), &self.config.currency_symbol)
        )
    }

    pub fn money(&self, amount: f64) -> String {
        format_amount(amount, &self.config.currency_symbol)
    }

    pub fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Validation(err) => output::error(err),
            CommandError::InvalidEntry(report) => {
                for err in report.iter() {
                    output::error(err);
                }
            }
            CommandError::Message(message) => output::error(message),
        }
    }
}

fn resolve_base_dir() -> PathBuf {
    env::var_os(HOME_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(Config::default_base_dir)
}
