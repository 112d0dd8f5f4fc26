// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gb: Bookkeeping for grid jobs, from status reports to download lists

mod color;
mod commands;
mod config;
mod env;
mod exit_error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{done, dump, obsolete, process, retries, schema, update};
use config::Settings;

#[derive(Parser)]
#[command(
    name = "gb",
    version,
    about = "Track grid jobs across status reports, retries, and downloads",
    arg_required_else_help = true,
    styles = color::styles()
)]
struct Cli {
    /// Job database file
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the job table
    Init,
    /// Drop the job table and every row in it
    Drop,
    /// Ingest a status report file or register a retry directive
    Update(update::UpdateArgs),
    /// Show jobs that are not done and suggest retries
    Retries,
    /// Mark one job, or a list of jobs, as obsoleted
    Obsolete(obsolete::ObsoleteArgs),
    /// Dump every row
    All(dump::DumpArgs),
    /// Dump rows not marked obsoleted
    Active(dump::DumpArgs),
    /// Label jobs with their process from a lookup file
    Process(process::ProcessArgs),
    /// Write tasknames of done jobs to a file
    Done(done::DoneArgs),
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_error::exit_code(&e));
    }
}

/// Log to stderr so stdout carries only report text.
fn init_logging() {
    let filter = EnvFilter::try_from_env(env::LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.db)?;
    tracing::debug!(database = %settings.database.display(), "resolved settings");

    match cli.command {
        Commands::Init => schema::init(&settings),
        Commands::Drop => schema::drop_table(&settings),
        Commands::Update(args) => update::handle(args, &settings),
        Commands::Retries => retries::handle(&settings),
        Commands::Obsolete(args) => obsolete::handle(args, &settings),
        Commands::All(args) => dump::all(args, &settings),
        Commands::Active(args) => dump::active(args, &settings),
        Commands::Process(args) => process::handle(args, &settings),
        Commands::Done(args) => done::handle(args, &settings),
    }
}
