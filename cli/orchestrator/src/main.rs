//! restconf CLI
//!
//! Reads a REST service declaration, resolves it, and prints the resulting
//! registry entries for one role as JSON.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use clap::Parser;
use restconf_cli::Cli;

fn main() {
    let cli = Cli::parse();

    match restconf_cli::run(&cli) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
