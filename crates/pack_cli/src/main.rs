#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod cmd;
mod error;

use crate::error::Result;

#[derive(Parser)]
#[command(name = "pack", about = "Canonical pack payload tools")]
struct Cli {
	/// Log decoder diagnostics to stderr.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a payload and print its value tree.
	Inspect(cmd::inspect::Args),
	/// Encode typed JSON into a payload.
	Encode(cmd::encode::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: bool) {
	let mut filter = EnvFilter::from_default_env();
	if verbose {
		filter = filter.add_directive(LevelFilter::DEBUG.into());
	}
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: Commands) -> Result<()> {
	match command {
		Commands::Inspect(args) => cmd::inspect::run(args),
		Commands::Encode(args) => cmd::encode::run(args),
	}
}
