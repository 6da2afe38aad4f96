//! Bill form rendering

use super::field_renderer::{draw_error, draw_field, FIELD_HEIGHT};
use crate::state::{BillForm, Focus, RowView};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::validation::FieldPath;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Rows per bill: input boxes plus one error line
const ROW_HEIGHT: u16 = FIELD_HEIGHT + 1;

/// Widest the form gets before it is centered
const MAX_FORM_WIDTH: u16 = 96;

/// Indices of the rows that fit, scrolled so the focused row stays visible
pub fn visible_rows(total: usize, capacity: usize, focused: Option<usize>) -> Range<usize> {
    if capacity == 0 {
        return 0..0;
    }
    if total <= capacity {
        return 0..total;
    }
    let focused = focused.unwrap_or(0).min(total - 1);
    let start = focused.saturating_sub(capacity - 1).min(total - capacity);
    start..start + capacity
}

/// Horizontally center the form inside `area`
fn centered(area: Rect) -> Rect {
    let width = area.width.min(MAX_FORM_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Draw the whole form
pub fn draw(frame: &mut Frame, area: Rect, form: &BillForm) {
    let area = centered(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(1),             // Name error
            Constraint::Min(0),                // Bill rows
            Constraint::Length(BUTTON_HEIGHT), // Add bill
            Constraint::Length(1),             // List-level error
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .horizontal_margin(1)
        .split(inner);

    let name_error = form.visible_error(FieldPath::Name);
    draw_field(
        frame,
        chunks[0],
        "Informe seu nome",
        &form.draft().name,
        form.focus == Focus::Name,
        name_error.is_some(),
    );
    draw_error(frame, chunks[1], name_error.as_deref());

    draw_rows(frame, chunks[2], form);

    render_button(
        frame,
        chunks[3],
        "+ Adicionar conta",
        form.focus == Focus::AddBill,
        Color::Green,
    );
    draw_error(
        frame,
        chunks[4],
        form.visible_error(FieldPath::Bills).as_deref(),
    );
    render_button(
        frame,
        chunks[5],
        "Enviar",
        form.focus == Focus::Submit,
        Color::Blue,
    );
}

fn draw_rows(frame: &mut Frame, area: Rect, form: &BillForm) {
    let total = form.bills().len();
    // Keep the last line free for the scroll indicator when rows overflow
    let capacity = if total * ROW_HEIGHT as usize > area.height as usize {
        (area.height.saturating_sub(1) / ROW_HEIGHT) as usize
    } else {
        total
    };
    let focused = form
        .focus
        .row_id()
        .and_then(|id| form.bills().position(id));
    let window = visible_rows(total, capacity, focused);
    if window.is_empty() {
        return;
    }

    if window.len() < total {
        let indicator = format!(
            "{}-{} de {}",
            window.start + 1,
            window.end,
            total
        );
        let width = (indicator.len() as u16).min(area.width);
        let indicator_area = Rect {
            x: area.x + area.width - width,
            y: area.y + area.height.saturating_sub(1),
            width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(indicator).style(Style::default().fg(Color::DarkGray)),
            indicator_area,
        );
    }

    let skip = window.start;
    for (slot, view) in form.row_views().skip(skip).take(window.len()).enumerate() {
        let row_area = Rect {
            y: area.y + slot as u16 * ROW_HEIGHT,
            height: ROW_HEIGHT,
            ..area
        };
        draw_row(frame, row_area, &view, form.focus);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &RowView<'_>, focus: Focus) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Description
            Constraint::Min(10),        // Amount
            Constraint::Length(5),      // Remove
        ])
        .spacing(1)
        .split(area);

    let description = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_HEIGHT), Constraint::Length(1)])
        .split(columns[0]);
    let amount = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_HEIGHT), Constraint::Length(1)])
        .split(columns[1]);

    draw_field(
        frame,
        description[0],
        &format!("Descrição {}", view.index + 1),
        &view.row.description,
        focus == Focus::Description(view.id),
        view.description_error.is_some(),
    );
    draw_error(frame, description[1], view.description_error.as_deref());

    draw_field(
        frame,
        amount[0],
        "Valor",
        &view.row.amount,
        focus == Focus::Amount(view.id),
        view.amount_error.is_some(),
    );
    draw_error(frame, amount[1], view.amount_error.as_deref());

    let remove_area = Rect {
        height: BUTTON_HEIGHT,
        ..columns[2]
    };
    render_button(
        frame,
        remove_area,
        "✕",
        focus == Focus::Remove(view.id),
        Color::Red,
    );
}
