/*
[INPUT]:  Dashboard controller, log buffer, crossterm input, request completions
[OUTPUT]: Ratatui-based TUI run loop and shared styles
[POS]:    TUI runtime loop
[UPDATE]: When changing TUI layout, event sources, or loop timing
*/

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use housekeeping_dashboard::TaskDashboard;
use housekeeping_dashboard::logging::LogBufferHandle;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::app::{ActiveModal, AppState, Tab};
use super::events::{UiEvent, handle_key_event};
use super::terminal::TerminalGuard;
use super::ui::modal::draw_modal;
use super::ui::*;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn error_style() -> Style {
    Style::default()
        .fg(Color::LightRed)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn success_style() -> Style {
    Style::default().fg(Color::LightGreen)
}

/// Run the interactive dashboard until the user quits.
///
/// The TUI takes over the controller's state as its single writer: requests
/// are spawned on the runtime and their completions are applied here.
pub async fn run_tui_with_log(dashboard: Arc<TaskDashboard>, log_buffer: LogBufferHandle) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();
    let input_tx = event_tx.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = input_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let state = dashboard.snapshot().await;
    let mut app = AppState::new(
        state,
        dashboard.dispatcher().clone(),
        event_tx,
        log_buffer,
    );
    info!("dashboard started");
    app.load_tasks();

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key)))
                        if key.kind == KeyEventKind::Press =>
                    {
                        should_quit = handle_key_event(&mut app, key.code);
                    }
                    Some(UiEvent::Completion(completion)) => app.apply_completion(completion),
                    Some(_) => {}
                    None => should_quit = true,
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    info!("dashboard closed");
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    draw_tabs(frame, layout[1], app.current_tab);

    match app.current_tab {
        Tab::Tasks => draw_task_panel(frame, layout[0], app),
        Tab::Cleaning => draw_cleaning_panel(frame, layout[0], app),
        Tab::Logs => draw_logs(frame, layout[0], &app.log_buffer),
    }

    draw_footer(frame, layout[2], app);

    if let Some(active_modal) = app.active_modal.as_ref() {
        let modal = match active_modal {
            ActiveModal::CreateTask(modal) => modal.to_modal(app.dashboard.task_form()),
            ActiveModal::GenerateCleaning(modal) => modal.to_modal(app.dashboard.cleaning_form()),
            ActiveModal::Token(modal) => modal.to_modal(),
        };
        let modal_area = centered_rect(area, 60, 50);
        draw_modal(frame, modal_area, &modal);
    }
}
