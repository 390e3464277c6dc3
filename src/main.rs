// src/main.rs
use clap::Parser;
use count_deps::args::Args;
use count_deps::config::{self, Config};
use count_deps::{app, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(config::log_level(&args));
    let config = Config::from(args);

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}
