#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "scenereport", about = "Scene asset introspection tools")]
struct Cli {
	/// Raise log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print a report of every record in an asset snapshot.
	Info(cmd::info::Args),
}

fn main() {
	match run() {
		Ok(true) => {}
		Ok(false) => std::process::exit(1),
		Err(err) => {
			eprintln!("error: {err}");
			std::process::exit(1);
		}
	}
}

/// Returns whether every record was retrieved.
fn run() -> scenereport::report::Result<bool> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => log::LevelFilter::Warn,
		1 => log::LevelFilter::Info,
		2 => log::LevelFilter::Debug,
		_ => log::LevelFilter::Trace,
	};

	env_logger::Builder::from_default_env()
		.filter_level(level)
		.format_timestamp(None)
		.format_module_path(false)
		.format_target(false)
		.init();
}
