use crate::tui::app::App;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use std::time::Duration;

pub fn handle_events(app: &mut App) -> Result<()> {
    let poll_window = Duration::from_secs_f64(app.config.display.refresh_rate.max(0.05));
    if event::poll(poll_window)? {
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => {
                    app.should_quit = true;
                }
                KeyCode::Right | KeyCode::Tab => {
                    app.next_tab();
                }
                KeyCode::Left => {
                    app.previous_tab();
                }
                KeyCode::Down => {
                    app.next_row();
                }
                KeyCode::Up => {
                    app.previous_row();
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    app.toggle_selected_row();
                }
                KeyCode::Char('t') => {
                    app.cycle_time_filter();
                }
                KeyCode::Char('m') => {
                    app.toggle_only_missing();
                }
                KeyCode::Char('r') => {
                    app.toggle_raining();
                }
                _ => {}
            }
        }
    }
    Ok(())
}
