//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::submit::SubmissionSink;
use ratatui::Frame;

/// Main draw function
pub fn draw<S: SubmissionSink>(frame: &mut Frame, app: &App<S>) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_bill_form(frame, main_area, &app.form);
    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::submit::LogSink;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_draw_full_screen() {
        let mut app = App::new(&TuiConfig::default(), LogSink::default());
        app.status_message = Some("2 erro(s) no formulário".to_string());

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Conta em débito"));
        assert!(screen.contains("0 conta(s)"));
        assert!(screen.contains("2 erro(s) no formulário"));
    }
}
