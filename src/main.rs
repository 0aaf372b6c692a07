mod cli;
mod commands;
mod config;
mod convert;
mod dec;
mod error;
mod gfx;
mod hex;
mod img;
mod jpeg;
mod png;
mod util;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    cli::Cli::parse().run()
}
