//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{BillForm, Focus, NewBill};
use crate::submit::SubmissionSink;
use crate::validation::ValidationResult;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App<S: SubmissionSink> {
    /// The form being edited
    pub form: BillForm,
    /// Completion action for accepted submissions
    pub sink: S,
    /// Status bar message
    pub status_message: Option<String>,
    exit_on_submit: bool,
    /// Whether the app should quit
    quit: bool,
}

impl<S: SubmissionSink> App<S> {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, sink: S) -> Self {
        Self {
            form: BillForm::new(config.validation_mode()),
            sink,
            status_message: None,
            exit_on_submit: config.exit_on_submit(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Esc or Ctrl+C
    pub fn is_quit_key(key: &KeyEvent) -> bool {
        key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if Self::is_quit_key(&key) {
            self.quit = true;
            return Ok(());
        }

        let ctrl = key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER)
            || key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('n') if ctrl => self.add_bill(),
            KeyCode::Char('d') if ctrl => self.remove_focused_bill(),
            KeyCode::Tab | KeyCode::Down => self.form.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_focus(),
            KeyCode::Enter => match self.form.focus {
                Focus::AddBill => self.add_bill(),
                Focus::Remove(_) => self.remove_focused_bill(),
                Focus::Submit => self.submit().await,
                focus if focus.is_input() => self.form.next_focus(),
                _ => {}
            },
            KeyCode::Char(c) if !ctrl => self.form.input_char(c),
            KeyCode::Backspace => self.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Append a blank bill and focus its description
    pub fn add_bill(&mut self) {
        let id = self.form.append_row(NewBill::default());
        self.form.focus = Focus::Description(id);
        self.status_message = None;
    }

    /// Remove the bill the focus is on
    pub fn remove_focused_bill(&mut self) {
        if let Some(removed) = self.form.remove_focused_row() {
            self.status_message = Some(format!("Conta removida ({})", removed.id));
        }
    }

    /// Validate and, when valid, hand the value to the sink
    pub async fn submit(&mut self) {
        match self.form.submit() {
            ValidationResult::Valid(value) => match self.sink.complete(&value).await {
                Ok(()) => {
                    self.status_message = Some(format!(
                        "Enviado: {} conta(s) de {}",
                        value.bills.len(),
                        value.name
                    ));
                    if self.exit_on_submit {
                        self.quit = true;
                    }
                }
                Err(err) => {
                    tracing::warn!("submission failed: {err:#}");
                    self.status_message = Some(format!("Falha ao enviar: {err}"));
                }
            },
            ValidationResult::Invalid(errors) => {
                let paths: Vec<String> = errors.paths().map(ToString::to_string).collect();
                tracing::debug!("submit rejected: {}", paths.join(", "));
                self.status_message = Some(format!("{} erro(s) no formulário", errors.len()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationMode;
    use crate::submit::{LogSink, MockSubmissionSink};
    use crate::validation::{Bill, FieldPath, FormValue};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text<S: SubmissionSink>(app: &mut App<S>, text: &str) {
        for c in text.chars() {
            tokio_test::block_on(app.handle_key(key(KeyCode::Char(c)))).unwrap();
        }
    }

    fn press<S: SubmissionSink>(app: &mut App<S>, event: KeyEvent) {
        tokio_test::block_on(app.handle_key(event)).unwrap();
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_esc_and_ctrl_c_quit() {
            let mut app = App::new(&TuiConfig::default(), LogSink::default());
            assert!(!app.should_quit());
            press(&mut app, key(KeyCode::Esc));
            assert!(app.should_quit());

            let mut app = App::new(&TuiConfig::default(), LogSink::default());
            press(&mut app, ctrl('c'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_full_keyboard_flow_submits() {
            let mut app = App::new(&TuiConfig::default(), LogSink::default());
            type_text(&mut app, "Joana");
            press(&mut app, ctrl('n'));
            type_text(&mut app, "Water");
            press(&mut app, key(KeyCode::Tab));
            press(&mut app, key(KeyCode::Backspace));
            type_text(&mut app, "50");
            press(&mut app, ctrl('s'));

            assert_eq!(
                app.sink.records()[0].value,
                FormValue {
                    name: "Joana".to_string(),
                    bills: vec![Bill {
                        description: "Water".to_string(),
                        amount: 50.0,
                    }],
                }
            );
            assert!(app.status_message.unwrap().starts_with("Enviado"));
        }

        #[test]
        fn test_enter_on_buttons() {
            let mut app = App::new(&TuiConfig::default(), LogSink::default());
            app.form.focus = Focus::AddBill;
            press(&mut app, key(KeyCode::Enter));
            press(&mut app, key(KeyCode::Enter)); // advances from description
            assert_eq!(app.form.bills().len(), 1);

            let id = app.form.bills().get(0).unwrap().id;
            assert_eq!(app.form.focus, Focus::Amount(id));
            press(&mut app, key(KeyCode::Tab));
            assert_eq!(app.form.focus, Focus::Remove(id));
            press(&mut app, key(KeyCode::Enter));
            assert!(app.form.bills().is_empty());
            assert_eq!(app.form.focus, Focus::AddBill);
        }

        #[test]
        fn test_ctrl_d_removes_focused_row_only() {
            let mut app = App::new(&TuiConfig::default(), LogSink::default());
            app.add_bill();
            app.add_bill();
            let first = app.form.bills().get(0).unwrap().id;
            let second = app.form.bills().get(1).unwrap().id;
            app.form.focus = Focus::Amount(first);

            press(&mut app, ctrl('d'));

            assert_eq!(app.form.bills().len(), 1);
            assert_eq!(app.form.bills().get(0).unwrap().id, second);
        }

        #[test]
        fn test_ctrl_d_off_row_is_noop() {
            let mut app = App::new(&TuiConfig::default(), LogSink::default());
            app.add_bill();
            app.form.focus = Focus::Name;
            press(&mut app, ctrl('d'));
            assert_eq!(app.form.bills().len(), 1);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_submit_never_calls_sink() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_complete().never();

            let mut app = App::new(&TuiConfig::default(), sink);
            app.form.set_field(FieldPath::Name, "Jo");
            tokio_test::block_on(app.submit());

            assert!(app.form.errors().contains(&FieldPath::Name));
            assert!(app.form.errors().contains(&FieldPath::Bills));
            assert_eq!(app.status_message.as_deref(), Some("2 erro(s) no formulário"));
        }

        #[test]
        fn test_valid_submit_calls_sink_once_with_value() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_complete()
                .withf(|value: &FormValue| {
                    value.name == "Joana"
                        && value.bills
                            == vec![Bill {
                                description: "Water".to_string(),
                                amount: 50.0,
                            }]
                })
                .times(1)
                .returning(|_| Ok(()));

            let mut app = App::new(&TuiConfig::default(), sink);
            app.form.set_field(FieldPath::Name, "Joana");
            app.form.append_row(NewBill::new("Water", "50"));
            tokio_test::block_on(app.submit());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_sink_failure_is_reported_not_fatal() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_complete()
                .returning(|_| Err(anyhow::anyhow!("disk full")));

            let mut app = App::new(&TuiConfig::default(), sink);
            app.form.set_field(FieldPath::Name, "Joana");
            app.form.append_row(NewBill::new("Water", "50"));
            tokio_test::block_on(app.submit());

            assert_eq!(
                app.status_message.as_deref(),
                Some("Falha ao enviar: disk full")
            );
            assert!(!app.should_quit());
        }

        #[test]
        fn test_exit_on_submit() {
            let config = TuiConfig {
                exit_on_submit: Some(true),
                ..Default::default()
            };
            let mut app = App::new(&config, LogSink::default());
            app.form.set_field(FieldPath::Name, "Joana");
            app.form.append_row(NewBill::new("Water", "50"));
            tokio_test::block_on(app.submit());
            assert!(app.should_quit());
        }

        #[test]
        fn test_config_mode_reaches_form() {
            let config = TuiConfig {
                validation_mode: Some(ValidationMode::Touched),
                ..Default::default()
            };
            let app = App::new(&config, LogSink::default());
            assert_eq!(app.form.mode(), ValidationMode::Touched);
        }
    }
}
