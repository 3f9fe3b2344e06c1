mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
	arg_required_else_help = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	#[clap(alias = "run")]
	/// Fetch articles, build the PMTiles archive and upload it
	Publish(tools::publish::Subcommand),

	/// Fetch articles and write them as GeoJSON, without tiling or uploading
	Export(tools::export::Subcommand),

	/// Print the tippecanoe command line used by "publish"
	PrintArgs(tools::print_args::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Publish(arguments) => tools::publish::run(arguments),
		Commands::Export(arguments) => tools::export::run(arguments),
		Commands::PrintArgs(arguments) => tools::print_args::run(arguments),
	}
}
