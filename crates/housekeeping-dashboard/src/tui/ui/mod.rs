/*
[INPUT]:  TUI app state for UI components
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding panels
*/

mod cleaning_table;
mod layout;
mod logs;
mod task_table;

pub mod modal;

pub(in crate::tui) use cleaning_table::draw_cleaning_panel;
pub(in crate::tui) use layout::{centered_rect, draw_footer, draw_tabs};
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use task_table::draw_task_panel;
