//! Interactive browsing session.
//!
//! Commands are read line by line from the input. Loads and runs are spawned
//! as background tasks and their results come back through channels, so a
//! newer `open` can supersede one still in flight.

use crate::commands::list::print_repository_header;
use crate::core::{
    command_init::CommandInit,
    error::{CodeboxError, LoadError, Result},
    index::RepositoryIndex,
    output::{print_error, print_file_list, print_section_header, print_warning, TerminalPresenter},
    presentation::Presenter,
    session::{LoadOutcome, RunReport, SessionController},
    state::{LoadTicket, LoadedFile},
    target::Target,
};
use colored::*;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const COMMANDS: [(&str, &str); 10] = [
    ("list", "Show the (filtered) file list"),
    ("search TERM", "Filter the list by file name"),
    ("clear", "Clear the search"),
    ("open TARGET", "Load a file by number or path"),
    ("edit FILE", "Replace the editor content with a local file"),
    ("show", "Show the current file again"),
    ("info", "Show or hide the file's details"),
    ("run", "Run the current editor content"),
    ("help", "Show this help"),
    ("quit", "Leave the session"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    List,
    Search(String),
    Clear,
    Open(String),
    Edit(PathBuf),
    Show,
    Info,
    Run,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse one input line; blank lines are `None`
    pub fn parse(line: &str) -> Result<Option<BrowseCommand>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let required = |argument: &str| {
            if argument.is_empty() {
                Err(CodeboxError::missing_argument(command))
            } else {
                Ok(argument.to_string())
            }
        };

        let parsed = match command.to_lowercase().as_str() {
            "list" | "ls" => BrowseCommand::List,
            "search" | "/" => BrowseCommand::Search(argument.to_string()),
            "clear" => BrowseCommand::Clear,
            "open" | "o" => BrowseCommand::Open(required(argument)?),
            "edit" => BrowseCommand::Edit(PathBuf::from(required(argument)?)),
            "show" => BrowseCommand::Show,
            "info" | "i" => BrowseCommand::Info,
            "run" | "r" => BrowseCommand::Run,
            "help" | "?" => BrowseCommand::Help,
            "quit" | "exit" | "q" => BrowseCommand::Quit,
            _ => return Err(CodeboxError::unknown_command(command)),
        };
        Ok(Some(parsed))
    }
}

pub async fn execute_browse(repo: Option<&str>, branch: Option<&str>) -> Result<()> {
    let ctx = CommandInit::initialize(repo, branch)?;
    let mut index = ctx.load_index().await?;
    let mut session = ctx.session(TerminalPresenter::new());

    print_repository_header(&ctx);
    print_file_list(&index, None);
    print_help();

    let input = BufReader::new(tokio::io::stdin());
    browse(&mut index, &mut session, input).await
}

type LoadMessage = (LoadTicket, std::result::Result<LoadedFile, LoadError>);

/// Drive a session from `input` until `quit`, or until the input ends and
/// every background load and run has settled.
pub async fn browse<P, R>(
    index: &mut RepositoryIndex,
    session: &mut SessionController<P>,
    input: R,
) -> Result<()>
where
    P: Presenter,
    R: AsyncBufRead + Unpin,
{
    let (load_tx, mut load_rx) = mpsc::unbounded_channel::<LoadMessage>();
    let (run_tx, mut run_rx) = mpsc::unbounded_channel::<RunReport>();
    let mut lines = input.lines();
    let mut input_open = true;
    let mut pending_loads = 0usize;
    let mut running = false;

    loop {
        if !input_open && pending_loads == 0 && !running {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    log::debug!("Input closed; waiting for {pending_loads} load(s)");
                    input_open = false;
                    continue;
                };

                let command = match BrowseCommand::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        print_warning(&e.to_string());
                        continue;
                    }
                };

                match command {
                    BrowseCommand::Quit => break,
                    BrowseCommand::Open(target) => {
                        let path = match Target::parse(&target).resolve(index) {
                            Ok(entry) => entry.path.clone(),
                            Err(e) => {
                                print_error(&e.to_string());
                                continue;
                            }
                        };
                        let ticket = session.begin_select(&path);
                        let task = session.load_task(ticket);
                        let tx = load_tx.clone();
                        pending_loads += 1;
                        tokio::spawn(async move {
                            let _ = tx.send(task.await);
                        });
                    }
                    BrowseCommand::Run => {
                        // Rejections are notified by the session
                        if let Ok(job) = session.start_run() {
                            let tx = run_tx.clone();
                            running = true;
                            tokio::spawn(async move {
                                let _ = tx.send(job.execute().await);
                            });
                        }
                    }
                    other => apply(other, index, session),
                }
            }
            Some((ticket, result)) = load_rx.recv(), if pending_loads > 0 => {
                pending_loads -= 1;
                if session.complete_select(ticket, result) == LoadOutcome::Superseded {
                    log::debug!("{pending_loads} load(s) still pending");
                }
            }
            Some(report) = run_rx.recv(), if running => {
                running = false;
                // Failures were already shown on the output surface
                let _ = session.finish_run(report);
            }
            else => break,
        }
    }

    Ok(())
}

/// Commands that complete synchronously
fn apply<P: Presenter>(
    command: BrowseCommand,
    index: &mut RepositoryIndex,
    session: &mut SessionController<P>,
) {
    match command {
        BrowseCommand::List => print_file_list(index, session.active_path()),
        BrowseCommand::Search(term) => {
            index.search(&term);
            print_file_list(index, session.active_path());
        }
        BrowseCommand::Clear => {
            index.clear_search();
            print_file_list(index, session.active_path());
        }
        BrowseCommand::Edit(file) => match std::fs::read_to_string(&file) {
            Ok(content) => {
                // A pending load refuses the edit and says so
                let _ = session.set_editor_content(&content);
            }
            Err(e) => print_error(&format!("Cannot read '{}': {e}", file.display())),
        },
        BrowseCommand::Show => session.redraw(),
        BrowseCommand::Info => {
            session.toggle_info();
        }
        BrowseCommand::Help => print_help(),
        BrowseCommand::Open(_) | BrowseCommand::Run | BrowseCommand::Quit => {}
    }
}

fn print_help() {
    print_section_header("Commands");
    for (usage, description) in COMMANDS {
        println!("  {:<14} {}", usage.white(), description.bright_black());
    }
    println!();
}
