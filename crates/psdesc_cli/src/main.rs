#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "psdesc", about = "Descriptor structure inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Show(cmd::show::Args),
	Roundtrip(cmd::roundtrip::Args),
	Tags {
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("psdesc=warn")))
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> psdesc::codec::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Show(args) => cmd::show::run(args),
		Commands::Roundtrip(args) => cmd::roundtrip::run(args),
		Commands::Tags { json } => cmd::tags::run(json),
	}
}
