use std::process;

use clap::Parser;
use regmake::Cli;

fn main() {
    env_logger::init();

    if let Err(err) = regmake::run(Cli::parse()) {
        eprintln!("{:#}", err);
        process::exit(1);
    }
}
