use clap::Parser;

use sortbench::cli::{Cli, Commands};
use sortbench::commands::{run_init, run_render, run_stats};
use sortbench::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet, cli.color);

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Stats(args) => run_stats(args),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
