//! Outfitter CLI library.
//!
//! This crate provides the command-line host for the loadout engine: output
//! formatting and saved-build file handling shared by the subcommands.

pub mod output;
pub mod session;
