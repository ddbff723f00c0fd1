use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;
mod table;

fn main() {
    let args = cli::Cli::parse();

    let settings = match services::settings::load_settings() {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Error: failed to load config: {:#}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = commands::run::run_analysis(&args, &settings) {
        eprintln!("Error: {:#}", err);
        eprintln!("Ending the session.");
        std::process::exit(1);
    }
}
