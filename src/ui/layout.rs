//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{ADD_BILL_SHORTCUT, REMOVE_BILL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::submit::SubmissionSink;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the centered title
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Conta em débito")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, area);
}

/// Draw the status bar
pub fn draw_status_bar<S: SubmissionSink>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let mut spans = vec![];

    // Row count
    spans.push(Span::styled(
        format!(" {} conta(s) ", app.form.bills().len()),
        Style::default().fg(Color::Cyan),
    ));

    // Last status message
    if let Some(msg) = &app.status_message {
        let color = if msg.starts_with("Enviado") {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::styled(msg, Style::default().fg(color)));
        spans.push(Span::raw(" | "));
    }

    spans.push(Span::styled(hints(), Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the form
fn hints() -> String {
    format!(
        "Tab:next  Enter:activate  {ADD_BILL_SHORTCUT}:add  {REMOVE_BILL_SHORTCUT}:remove  {SUBMIT_SHORTCUT}:submit  Esc:quit"
    )
}
