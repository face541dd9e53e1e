//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border and text color for a section
pub fn section_style(is_active: bool, is_enabled: bool) -> Style {
    if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Draw a single-line text field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, is_enabled: bool) {
    draw_field_with_label(frame, area, &field.label, field, is_active, is_enabled);
}

/// Draw a single-line text field under a custom label
pub fn draw_field_with_label(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &FormField,
    is_active: bool,
    is_enabled: bool,
) {
    let style = section_style(is_active, is_enabled);

    let display_value = field.display_value();
    let value_span = match (&field.placeholder, display_value.is_empty()) {
        (Some(placeholder), true) => {
            Span::styled(placeholder.clone(), Style::default().fg(Color::DarkGray))
        }
        (None, true) if !is_active => Span::styled("(vazio)", Style::default().fg(Color::DarkGray)),
        _ => Span::styled(display_value, style),
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        value_span,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}
