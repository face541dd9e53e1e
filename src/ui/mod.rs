//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Overlay;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_report_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    if let Overlay::ImagePrompt { input } = &app.state.overlay {
        components::render_image_prompt(frame, input);
    }

    if let Some(notification) = &app.state.notification {
        components::render_toast(frame, notification);
    }
}
