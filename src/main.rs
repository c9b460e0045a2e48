#![forbid(unsafe_code)]

//! client-menu — interactive client-management console entry point.

use clap::Parser;

mod cli_app;

fn main() {
    let args = cli_app::Cli::parse();
    if let Err(e) = cli_app::run(&args) {
        eprintln!("client-menu: {e}");
        std::process::exit(e.exit_code());
    }
}
