// Module exports for CLI subcommands
//
// Each module handles a group of subcommands; main.rs parses arguments and
// dispatches here.

pub mod build;
pub mod catalog;
