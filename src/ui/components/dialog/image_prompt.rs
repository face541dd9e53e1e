//! Image path prompt

use super::base::{render_dialog, DialogConfig};
use crate::report::IMAGE_EXTENSIONS;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the prompt asking for an image file path
pub fn render_image_prompt(frame: &mut Frame, input: &str) {
    let message = format!(
        "Caminho do arquivo ({}):\n\n{input}▌",
        IMAGE_EXTENSIONS.join(", ")
    );

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw(": anexar  "),
        Span::styled("Esc", key_style),
        Span::raw(": cancelar"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Anexar imagem",
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message: &message,
            hint: Some(hint),
            max_width: 70,
        },
    );
}
