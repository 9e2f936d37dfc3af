mod modal;
mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

/// Renders whichever screen the session state calls for. The cancel
/// prompt overlays the quiz screens when open.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => welcome::render(frame, area, app),
        AppState::Quiz | AppState::Reveal => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }

    if app.cancel_prompt_open() {
        modal::render(frame, area);
    }
}
