//! Library crate root re-exporting the CLI, shared helpers, and launcher runtime.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod server;
