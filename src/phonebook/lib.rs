//! # Phonebook Architecture
//!
//! Phonebook is a small contact directory: a Record Set loaded from one JSON file,
//! paged, searched and edited in memory, and written back once when the session ends.
//! The record logic is a library; the interactive menu and the subcommands are one
//! client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu session, prompts, subcommands, rendering            │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - DirectoryApi: the session object owning the Record Set   │
//! │  - Loads once on open, saves once on close                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure operations over an explicit &[Record] / &mut Vec    │
//! │  - paginate, render_page, search, add, update, delete       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Addressing
//!
//! Edit and delete take a **position** (1-based ordinal in the current set), not an
//! id. See [`page`] for how the two diverge after deletes.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and never prints, never
//! reads stdin and never exits. Invalid pages and positions come back as recoverable
//! [`error::DirectoryError`] variants for the UI to re-prompt on.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade
//! - [`commands`]: Record Set operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Record`, `Field`, `SearchCriteria`, `Scope`
//! - [`page`]: Pages and positions
//! - [`config`]: Per-scope configuration
//! - [`init`]: Wiring a session for a scope
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the interactive menu and templated rendering (binary only)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod page;
pub mod store;
