use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chitieu_parse::{ExpenseParser, ParserConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "chitieu", version, about = "Turn quick spending notes into records")]
struct Cli {
    /// TOML file with parser settings (defaults are used when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse one phrase, e.g. `chitieu parse cafe 30k`
    Parse {
        /// Words of the phrase; joined with spaces
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,

        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },

    /// List every category, the fallback last
    Categories,

    /// Read phrases from stdin and print one JSON preview per line
    Preview,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let parser = build_parser(cli.config.as_deref())?;
    let stdout = io::stdout();

    match cli.command {
        Command::Parse { phrase, pretty } => {
            commands::parse_phrase(&parser, &phrase.join(" "), pretty, &mut stdout.lock())?;
        }
        Command::Categories => {
            commands::list_categories(&mut stdout.lock())?;
        }
        Command::Preview => {
            let count = commands::preview(&parser, io::stdin().lock(), &mut stdout.lock())?;
            tracing::info!("Previewed {count} phrases");
        }
    }

    Ok(())
}

fn build_parser(config_path: Option<&Path>) -> Result<ExpenseParser> {
    let config = match config_path {
        Some(path) => ParserConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ParserConfig::default(),
    };
    tracing::debug!(threshold = config.classifier.threshold, "parser configured");
    Ok(ExpenseParser::new(&config))
}
