//! Service report form rendering

use super::field_renderer::{draw_field, draw_field_with_label, section_style};
use crate::app::App;
use crate::report::{ActionType, WorkType};
use crate::state::{Focus, LaborItemForm, ReportForm};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Collaborator checkboxes per row
const ROSTER_COLUMNS: usize = 3;
/// Image names listed before scrolling
const VISIBLE_IMAGES: usize = 4;
/// Rows taken by one labor item block
const LABOR_ITEM_HEIGHT: u16 = 5;

/// Draw the whole report form
pub fn draw_report_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let roster_rows = form.roster.len().div_ceil(ROSTER_COLUMNS).max(1) as u16;
    let image_rows = form.images.len().clamp(1, VISIBLE_IMAGES) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Work order
            Constraint::Length(3),              // Work type
            Constraint::Length(roster_rows + 2), // Collaborators
            Constraint::Length(image_rows + 2), // Images
            Constraint::Min(LABOR_ITEM_HEIGHT), // Labor items
            Constraint::Length(BUTTON_HEIGHT),  // Actions
        ])
        .split(area);

    let unlocked = form.is_unlocked();

    draw_field(
        frame,
        chunks[0],
        &form.work_order,
        form.focus == Focus::WorkOrder,
        true,
    );
    draw_work_type(frame, chunks[1], form, unlocked);
    draw_collaborators(frame, chunks[2], form, unlocked);
    draw_images(frame, chunks[3], form, unlocked);
    draw_labor_items(frame, chunks[4], form, unlocked);
    draw_actions(frame, chunks[5], app, unlocked);
}

fn radio(selected: bool) -> &'static str {
    if selected {
        "(•)"
    } else {
        "( )"
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Style for an option, highlighting the one under the cursor
fn option_style(under_cursor: bool, is_active: bool, unlocked: bool) -> Style {
    if !unlocked {
        Style::default().fg(Color::DarkGray)
    } else if under_cursor && is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn draw_work_type(frame: &mut Frame, area: Rect, form: &ReportForm, unlocked: bool) {
    let is_active = form.focus == Focus::WorkType;

    let mut spans = Vec::new();
    for (idx, work_type) in WorkType::ALL.iter().enumerate() {
        let selected = form.work_type == Some(*work_type);
        spans.push(Span::styled(
            format!("{} {}", radio(selected), work_type.label()),
            option_style(idx == form.work_type_cursor, is_active, unlocked),
        ));
        spans.push(Span::raw("    "));
    }

    let block = Block::default()
        .title(" Esta execução é de uma obra de contrato com a Energisa ou particular? ")
        .borders(Borders::ALL)
        .border_style(section_style(is_active, unlocked));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_collaborators(frame: &mut Frame, area: Rect, form: &ReportForm, unlocked: bool) {
    let is_active = form.focus == Focus::Collaborators;

    let lines: Vec<Line> = form
        .roster
        .chunks(ROSTER_COLUMNS)
        .enumerate()
        .map(|(row, names)| {
            let spans: Vec<Span> = names
                .iter()
                .enumerate()
                .map(|(col, name)| {
                    let idx = row * ROSTER_COLUMNS + col;
                    Span::styled(
                        format!("{} {:<16}", checkbox(form.is_collaborator_selected(name)), name),
                        option_style(idx == form.roster_cursor, is_active, unlocked),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .title(format!(
            " Colaboradores envolvidos na atividade ({} selecionados) ",
            form.collaborators.len()
        ))
        .borders(Borders::ALL)
        .border_style(section_style(is_active, unlocked));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_images(frame: &mut Frame, area: Rect, form: &ReportForm, unlocked: bool) {
    let is_active = form.focus == Focus::Images;

    let lines: Vec<Line> = if form.images.is_empty() {
        vec![Line::from(Span::styled(
            "Nenhuma imagem anexada. Enter: anexar",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let start = form
            .image_cursor
            .saturating_sub(VISIBLE_IMAGES.saturating_sub(1));
        form.images
            .iter()
            .enumerate()
            .skip(start)
            .take(VISIBLE_IMAGES)
            .map(|(idx, image)| {
                Line::from(Span::styled(
                    format!("{:>2}. {}", idx + 1, image.name),
                    option_style(idx == form.image_cursor, is_active, unlocked),
                ))
            })
            .collect()
    };

    let block = Block::default()
        .title(format!(
            " Imagens das principais mãos de obra ({}) ",
            form.images.len()
        ))
        .borders(Borders::ALL)
        .border_style(section_style(is_active, unlocked));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_labor_items(frame: &mut Frame, area: Rect, form: &ReportForm, unlocked: bool) {
    let border_style = section_style(form.focus.labor_index().is_some(), unlocked);
    let block = Block::default()
        .title(format!(
            " Detalhes da Mão de Obra ({} itens) ",
            form.labor_items.len()
        ))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = (inner.height / LABOR_ITEM_HEIGHT).max(1) as usize;
    let focused = form.focus.labor_index().unwrap_or(0);
    let start = focused.saturating_sub(visible - 1);

    for (slot, (idx, item)) in form
        .labor_items
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .enumerate()
    {
        let item_area = Rect {
            x: inner.x,
            y: inner.y + slot as u16 * LABOR_ITEM_HEIGHT,
            width: inner.width,
            height: LABOR_ITEM_HEIGHT.min(inner.height),
        };
        draw_labor_item(frame, item_area, form, idx, item, unlocked);
    }
}

fn draw_labor_item(
    frame: &mut Frame,
    area: Rect,
    form: &ReportForm,
    idx: usize,
    item: &LaborItemForm,
    unlocked: bool,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(2)])
        .split(area);
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);

    draw_field_with_label(
        frame,
        fields[0],
        &format!("Item {}: {}", idx + 1, item.code.label),
        &item.code,
        form.focus == Focus::LaborCode(idx),
        unlocked,
    );
    draw_field(
        frame,
        fields[1],
        &item.quantity,
        form.focus == Focus::LaborQuantity(idx),
        unlocked,
    );

    let action_active = form.focus == Focus::LaborAction(idx);
    let mut spans = vec![Span::styled(
        " Foi uma instalação ou remoção?  ",
        section_style(action_active, unlocked),
    )];
    for action in ActionType::ALL {
        spans.push(Span::styled(
            format!("{} {}", radio(item.action == action), action.label()),
            option_style(item.action == action, action_active, unlocked),
        ));
        spans.push(Span::raw("   "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
        rows[1],
    );
}

fn draw_actions(frame: &mut Frame, area: Rect, app: &App, unlocked: bool) {
    let form = &app.state.form;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    render_action_button(
        frame,
        chunks[0],
        "+ Adicionar mais códigos",
        form.focus == Focus::AddItem,
        unlocked,
        Color::Yellow,
    );
    render_action_button(
        frame,
        chunks[1],
        "Salvar Relatório em XLSX",
        form.focus == Focus::Export,
        unlocked,
        Color::Green,
    );

    let submit_label = if app.state.submitting {
        "Enviando..."
    } else {
        "Enviar Dados e Recomeçar"
    };
    render_action_button(
        frame,
        chunks[2],
        submit_label,
        form.focus == Focus::Submit,
        unlocked && !app.state.submitting,
        Color::LightRed,
    );
}
