use clap::{Parser, Subcommand};
use codebox::commands::*;
use codebox::core::{
    error::{CodeboxError, Result},
    print_error,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codebox")]
#[command(about = "Browse a code repository, read its files and run them remotely")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Repository to browse, as OWNER/NAME
    #[arg(long, global = true, value_name = "OWNER/NAME")]
    repo: Option<String>,

    /// Branch to browse
    #[arg(long, global = true)]
    branch: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the numbered list of runnable files
    List {
        /// Only show files whose name contains TERM (case-insensitive)
        #[arg(short, long, value_name = "TERM")]
        search: Option<String>,
    },
    /// Show a file by number or path
    Show {
        /// File number from `list` or repository path
        target: String,
        /// Also show the file's details document
        #[arg(short, long)]
        info: bool,
    },
    /// Run a file by number or path
    Run {
        /// File number from `list` or repository path
        target: String,
        /// Run the content of a local file instead, as if it were TARGET
        #[arg(short, long, value_name = "FILE")]
        source: Option<PathBuf>,
    },
    /// Start an interactive browsing session
    Browse,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let repo = cli.repo.as_deref();
    let branch = cli.branch.as_deref();

    let result = match cli.command {
        Commands::List { search } => execute_list(repo, branch, search.as_deref()).await,
        Commands::Show { target, info } => execute_show(repo, branch, &target, info).await,
        Commands::Run { target, source } => {
            execute_run(repo, branch, &target, source.as_deref()).await
        }
        Commands::Browse => execute_browse(repo, branch).await,
    };

    if let Err(e) = result {
        // Already shown through the session's notifications
        if !matches!(e, CodeboxError::Reported | CodeboxError::ProgramFailed { .. }) {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }

    Ok(())
}
