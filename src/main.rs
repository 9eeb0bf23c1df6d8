use clap::Parser;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = commands::run::handle(&cli) {
        services::output::print_error(cli.json, &err.to_string());
        std::process::exit(2);
    }
}
