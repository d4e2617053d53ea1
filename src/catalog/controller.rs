use std::sync::Arc;
use tracing::{error, warn};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::load_catalog_cmd::{LoadCatalogCommand, LoadCatalogCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::save_catalog_cmd::{SaveCatalogCommand, SaveCatalogCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::command::update_status_cmd::{UpdateStatusCommand, UpdateStatusCommandRequest};
use crate::catalog::domain::model::SearchCriteria;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, Flow};
use crate::core::library::{BookStatus, LibraryResult};
use crate::gateway::console::Console;

// reads one trimmed line; None at end of input
async fn ask<C: Console + ?Sized>(console: &mut C, prompt: &str) -> LibraryResult<Option<String>> {
    Ok(console.read_line(prompt).await?.map(|l| l.trim().to_string()))
}

/// Asks for a catalog file and loads it. A file that cannot be read leaves the library
/// empty; a file with malformed content is returned as an error so the caller can stop.
pub async fn open_catalog<C: Console + ?Sized>(state: &AppState, console: &mut C) -> Result<(), CommandError> {
    let messages = state.messages();
    console.print_line(messages.path_request).await?;
    let path = ask(console, messages.prompt).await?.unwrap_or_default();
    if path.is_empty() {
        console.print_line(messages.library_created).await?;
        return Ok(());
    }
    let cmd = LoadCatalogCommand::new(Arc::clone(&state.catalog_service));
    match cmd.execute(LoadCatalogCommandRequest::new(path.as_str())).await {
        Ok(_) => {
            console.print_line(format!("{} {}", path, messages.open_success).as_str()).await?;
            Ok(())
        }
        Err(err) if err.is_malformed_content() => {
            error!("catalog {} is malformed: {}", path, err.message());
            console.print_line(format!("{} {}", messages.bad_file, err.message()).as_str()).await?;
            Err(err)
        }
        Err(err) => {
            warn!("could not open catalog {}: {}", path, err.message());
            console.print_line(messages.open_error).await?;
            Ok(())
        }
    }
}

pub async fn add_book<C: Console + ?Sized>(state: &AppState, console: &mut C) -> LibraryResult<Flow> {
    let messages = state.messages();
    let Some(title) = ask(console, messages.title_input).await? else { return Ok(Flow::Quit) };
    let Some(author) = ask(console, messages.author_input).await? else { return Ok(Flow::Quit) };
    let Some(year) = ask(console, messages.year_input).await? else { return Ok(Flow::Quit) };
    let cmd = AddBookCommand::new(Arc::clone(&state.catalog_service));
    match cmd.execute(AddBookCommandRequest::new(title.as_str(), author.as_str(), year.as_str())).await {
        Ok(res) => console.print_line(format!("{} {}", messages.book_added, res.book).as_str()).await?,
        Err(err) => console.print_line(err.message()).await?,
    }
    Ok(Flow::Continue)
}

pub async fn remove_book<C: Console + ?Sized>(state: &AppState, console: &mut C) -> LibraryResult<Flow> {
    let messages = state.messages();
    let Some(id) = ask(console, messages.id_input).await? else { return Ok(Flow::Quit) };
    if id.is_empty() {
        console.print_line(messages.interrupted).await?;
        return Ok(Flow::Continue);
    }
    let cmd = RemoveBookCommand::new(Arc::clone(&state.catalog_service));
    match cmd.execute(RemoveBookCommandRequest::new(id.as_str())).await {
        Ok(res) => console.print_line(format!("{} {}", messages.book_deleted, res.book).as_str()).await?,
        Err(CommandError::NotFound { .. }) => console.print_line(messages.book_not_found).await?,
        Err(err) => console.print_line(err.message()).await?,
    }
    Ok(Flow::Continue)
}

pub async fn list_books<C: Console + ?Sized>(state: &AppState, console: &mut C) -> LibraryResult<Flow> {
    let cmd = ListBooksCommand::new(Arc::clone(&state.catalog_service));
    match cmd.execute(ListBooksCommandRequest::new()).await {
        Ok(res) => {
            for book in res.books.iter() {
                console.print_line(book.to_string().as_str()).await?;
            }
        }
        Err(err) => console.print_line(err.message()).await?,
    }
    Ok(Flow::Continue)
}

pub async fn update_status<C: Console + ?Sized>(state: &AppState, console: &mut C) -> LibraryResult<Flow> {
    let messages = state.messages();
    let Some(id) = ask(console, messages.id_input).await? else { return Ok(Flow::Quit) };
    if id.is_empty() {
        console.print_line(messages.interrupted).await?;
        return Ok(Flow::Continue);
    }
    let search_cmd = SearchBooksCommand::new(Arc::clone(&state.catalog_service));
    if search_cmd.execute(SearchBooksCommandRequest::new(SearchCriteria::by_id(id.as_str()))).await.is_err() {
        console.print_line(messages.book_not_found).await?;
        return Ok(Flow::Continue);
    }
    let Some(code) = ask(console, messages.status_input).await? else { return Ok(Flow::Quit) };
    if BookStatus::from_code(code.as_str()).is_none() {
        console.print_line(messages.bad_status).await?;
        return Ok(Flow::Continue);
    }
    let cmd = UpdateStatusCommand::new(Arc::clone(&state.catalog_service));
    match cmd.execute(UpdateStatusCommandRequest::new(id.as_str(), code.as_str())).await {
        Ok(res) => console.print_line(format!("{} {}", messages.status_set, res.book).as_str()).await?,
        Err(CommandError::NotFound { .. }) => console.print_line(messages.book_not_found).await?,
        Err(CommandError::Validation { .. }) => console.print_line(messages.bad_status).await?,
        Err(err) => console.print_line(err.message()).await?,
    }
    Ok(Flow::Continue)
}

pub async fn save_catalog<C: Console + ?Sized>(state: &AppState, console: &mut C) -> LibraryResult<Flow> {
    let messages = state.messages();
    let Some(path) = ask(console, messages.file_input).await? else { return Ok(Flow::Quit) };
    if path.is_empty() {
        return Ok(Flow::Continue);
    }
    let cmd = SaveCatalogCommand::new(Arc::clone(&state.catalog_service));
    match cmd.execute(SaveCatalogCommandRequest::new(path.as_str())).await {
        Ok(_) => console.print_line(messages.save_success).await?,
        Err(err) => {
            warn!("could not save catalog to {}: {}", path, err.message());
            console.print_line(messages.save_error).await?
        }
    }
    Ok(Flow::Continue)
}

pub async fn search_books<C: Console + ?Sized>(state: &AppState, console: &mut C) -> LibraryResult<Flow> {
    let messages = state.messages();
    let Some(title) = ask(console, messages.title_input).await? else { return Ok(Flow::Quit) };
    let Some(author) = ask(console, messages.author_input).await? else { return Ok(Flow::Quit) };
    let Some(year) = ask(console, messages.year_input).await? else { return Ok(Flow::Quit) };
    let criteria = SearchCriteria::new(title.as_str(), author.as_str(), year.as_str());
    if criteria.is_empty() {
        console.print_line(messages.interrupted).await?;
        return Ok(Flow::Continue);
    }
    let cmd = SearchBooksCommand::new(Arc::clone(&state.catalog_service));
    match cmd.execute(SearchBooksCommandRequest::new(criteria)).await {
        Ok(res) if !res.books.is_empty() => {
            console.print_line(messages.found).await?;
            for book in res.books.iter() {
                console.print_line(book.to_string().as_str()).await?;
            }
        }
        Ok(_) => console.print_line(messages.not_found).await?,
        Err(err) => console.print_line(err.message()).await?,
    }
    Ok(Flow::Continue)
}

pub async fn help<C: Console + ?Sized>(state: &AppState, console: &mut C) -> LibraryResult<Flow> {
    console.print_line(state.messages().help).await?;
    Ok(Flow::Continue)
}

pub async fn quit<C: Console + ?Sized>(state: &AppState, console: &mut C) -> LibraryResult<Flow> {
    console.print_line(state.messages().quit).await?;
    Ok(Flow::Quit)
}

pub async fn unknown_command<C: Console + ?Sized>(state: &AppState, console: &mut C) -> LibraryResult<Flow> {
    console.print_line(state.messages().bad_command).await?;
    Ok(Flow::Continue)
}
