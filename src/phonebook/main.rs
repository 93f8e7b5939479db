//! # Phonebook CLI
//!
//! The binary only calls `cli::run()` and turns an error into exit code 1. All
//! directory logic lives in the `phonebook` library; see its crate docs for the layering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
