//! # CLI
//!
//! The console client: the only place that knows about stdin/stdout, colors and exit
//! codes. Everything it does goes through [`phonebook::api::DirectoryApi`].
//!
//! Running `phonebook` with no subcommand starts the interactive menu ([`session`]).
//! The subcommands (`list`, `add`, `edit`, `delete`, `search`) do the same operations in
//! one shot, which is what scripts and the integration tests use.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch from parsed arguments to API calls
//! - `session`: the interactive menu loop
//! - `render`: output formatting through the templates
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styles
//! - `templates`: output templates

mod commands;
mod render;
mod session;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
