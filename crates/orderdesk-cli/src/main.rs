mod cmd;
mod output;
mod root;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "orderdesk",
    about = "Take orders, print reports, and mark orders as fulfilled",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the order files (default: nearest orderdesk.yaml, else cwd)
    #[arg(long, global = true, env = "ORDERDESK_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON (`list` and `report` only)
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Omit to start the interactive menu
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List orders with their totals
    List {
        /// Show fulfilled orders instead of pending ones
        #[arg(long)]
        completed: bool,
    },

    /// Print the full order report
    Report {
        /// Show fulfilled orders instead of pending ones
        #[arg(long)]
        completed: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if cli.json && cli.command.is_none() {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--json only applies to `list` and `report`",
            )
            .exit();
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        None => cmd::session::run(&root),
        Some(Commands::List { completed }) => cmd::list::run(&root, completed, cli.json),
        Some(Commands::Report { completed }) => cmd::report::run(&root, completed, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
