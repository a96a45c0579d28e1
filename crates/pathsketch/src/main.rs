mod app;
mod cli;
mod command;
mod commands;
mod config;
mod graph;
mod logging;
mod render;
mod theme;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose, cli.quiet, cli.no_color);

    if let Err(e) = cli.run() {
        eprintln!("{} {e:#}", colored::Colorize::red("error:"));
        std::process::exit(1);
    }
}
