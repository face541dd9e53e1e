//! Notification toast in the top-right corner

use super::dialog::wrap_text;
use crate::state::{Notification, NotificationKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_MAX_WIDTH: u16 = 48;

/// Render a transient notification above everything else
pub fn render_toast(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();
    let color = match notification.kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    let width = TOAST_MAX_WIDTH.min(area.width.saturating_sub(2));
    let lines = wrap_text(&notification.message, width.saturating_sub(4) as usize);
    // Starts one row down, so it may use at most height - 1 rows
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(1));

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height,
    }
    .intersection(area);
    if toast_area.is_empty() {
        return;
    }

    frame.render_widget(Clear, toast_area);

    let paragraph = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(paragraph, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_toast_is_clipped_to_the_frame() {
        let notification = Notification::error("Erro ao enviar dados. Tente novamente.");
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();

        terminal
            .draw(|frame| render_toast(frame, &notification))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, 1)].symbol(), "┌");
        assert_eq!(buffer[(1, 2)].symbol(), "└");
    }

    #[test]
    fn test_toast_skipped_on_single_row() {
        let notification = Notification::success("ok");
        let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();

        terminal
            .draw(|frame| render_toast(frame, &notification))
            .unwrap();

        assert_eq!(terminal.backend().buffer()[(1, 0)].symbol(), " ");
    }
}
