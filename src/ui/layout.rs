//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{ADD_ITEM_SHORTCUT, EXPORT_SHORTCUT, REMOVE_ITEM_SHORTCUT, SUBMIT_SHORTCUT};
use crate::report::is_valid;
use crate::state::Focus;
use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, form and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title banner
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        "RELATÓRIO DE EXECUÇÃO DE SERVIÇO",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightRed)),
    );
    frame.render_widget(title, area);
}

/// Key hints for the focused section
fn focus_hints(focus: Focus) -> Vec<(&'static str, &'static str)> {
    match focus {
        Focus::WorkOrder => vec![("digite", "número da obra")],
        Focus::WorkType => vec![("←/→", "opção"), ("Espaço", "selecionar")],
        Focus::Collaborators => vec![("←/→", "colaborador"), ("Espaço", "marcar")],
        Focus::Images => vec![("Enter", "anexar"), ("↑/↓", "imagem"), ("x", "remover")],
        Focus::LaborCode(_) | Focus::LaborQuantity(_) => {
            vec![("digite", "valor"), (REMOVE_ITEM_SHORTCUT, "remover item")]
        }
        Focus::LaborAction(_) => vec![("Espaço", "alternar"), (REMOVE_ITEM_SHORTCUT, "remover item")],
        Focus::AddItem | Focus::Export | Focus::Submit => vec![("Enter", "confirmar")],
    }
}

/// Draw the status bar with key hints and footer
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan);

    let mut spans = Vec::new();
    let mut hints = focus_hints(app.state.form.focus);
    hints.extend([
        ("Tab", "próximo"),
        (ADD_ITEM_SHORTCUT, "item"),
        (EXPORT_SHORTCUT, "xlsx"),
        (SUBMIT_SHORTCUT, "enviar"),
        ("Ctrl+Q", "sair"),
    ]);
    for (key, label) in hints {
        spans.push(Span::styled(key, key_style));
        spans.push(Span::raw(format!(": {label}  ")));
    }

    let (marker, color) = if is_valid(&app.state.form.snapshot()) {
        ("● pronto  ", Color::Green)
    } else {
        ("○ incompleto  ", Color::Yellow)
    };
    spans.push(Span::styled(marker, Style::default().fg(color)));

    if let Some(path) = &app.state.last_export {
        spans.push(Span::styled(
            format!("| {path}  "),
            Style::default().fg(Color::Green),
        ));
    }

    spans.push(Span::styled(
        format!(
            "© {} JXA Linha Viva - Todos os direitos reservados.",
            Local::now().year()
        ),
        Style::default().fg(Color::DarkGray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Gray));
    frame.render_widget(status, area);
}
