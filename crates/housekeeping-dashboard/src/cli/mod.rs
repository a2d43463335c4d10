/*
[INPUT]:  Subcommands parsed in main.rs
[OUTPUT]: One-shot command handlers
[POS]:    CLI module for housekeeping-dashboard binary
[UPDATE]: When adding subcommands
*/

pub mod commands;

pub use commands::{run_check_config, run_clean, run_create, run_list, run_update};
