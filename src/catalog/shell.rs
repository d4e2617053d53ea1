use tracing::debug;
use crate::catalog::controller;
use crate::core::command::CommandError;
use crate::core::controller::{AppState, Flow};
use crate::core::library::LibraryResult;
use crate::core::messages::Messages;
use crate::gateway::console::Console;

// ShellCommand is one typed console command.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ShellCommand {
    Add,
    Delete,
    Catalog,
    Status,
    Save,
    Search,
    Help,
    Quit,
    Unknown(String),
}

impl ShellCommand {
    /// Matches a typed word against the locale's command words, ignoring case and padding.
    pub fn parse(input: &str, messages: &Messages) -> ShellCommand {
        let word = input.trim().to_lowercase();
        let table = [
            (messages.cmd_add, ShellCommand::Add),
            (messages.cmd_delete, ShellCommand::Delete),
            (messages.cmd_catalog, ShellCommand::Catalog),
            (messages.cmd_status, ShellCommand::Status),
            (messages.cmd_save, ShellCommand::Save),
            (messages.cmd_search, ShellCommand::Search),
            (messages.cmd_help, ShellCommand::Help),
            (messages.cmd_quit, ShellCommand::Quit),
        ];
        table.into_iter()
            .find(|(token, _)| *token == word)
            .map(|(_, cmd)| cmd)
            .unwrap_or(ShellCommand::Unknown(word))
    }
}

pub async fn dispatch<C: Console + ?Sized>(state: &AppState, console: &mut C, command: ShellCommand) -> LibraryResult<Flow> {
    debug!("dispatching {:?}", command);
    match command {
        ShellCommand::Add => controller::add_book(state, console).await,
        ShellCommand::Delete => controller::remove_book(state, console).await,
        ShellCommand::Catalog => controller::list_books(state, console).await,
        ShellCommand::Status => controller::update_status(state, console).await,
        ShellCommand::Save => controller::save_catalog(state, console).await,
        ShellCommand::Search => controller::search_books(state, console).await,
        ShellCommand::Help => controller::help(state, console).await,
        ShellCommand::Quit => controller::quit(state, console).await,
        ShellCommand::Unknown(_) => controller::unknown_command(state, console).await,
    }
}

/// Reads and runs commands until quit or end of input.
pub async fn command_loop<C: Console + ?Sized>(state: &AppState, console: &mut C) -> LibraryResult<()> {
    let messages = state.messages();
    while let Some(line) = console.read_line(messages.prompt).await? {
        let command = ShellCommand::parse(line.as_str(), messages);
        if dispatch(state, console, command).await? == Flow::Quit {
            return Ok(());
        }
    }
    debug!("console input closed");
    Ok(())
}

/// Startup prompt followed by the command loop.
pub async fn run<C: Console + ?Sized>(state: &AppState, console: &mut C) -> Result<(), CommandError> {
    controller::open_catalog(state, console).await?;
    command_loop(state, console).await?;
    Ok(())
}
