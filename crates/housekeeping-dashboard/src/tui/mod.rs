/*
[INPUT]:  Dashboard controller and log buffer
[OUTPUT]: Ratatui-based interactive dashboard
[POS]:    TUI module for housekeeping-dashboard binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::run_tui_with_log;
