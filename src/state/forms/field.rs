//! Form field value objects

/// Whether the user has interacted with a field yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Touched,
}

/// Kind of input, used to filter keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    /// Accepts digits, sign, decimal point and exponent only
    Number,
}

impl InputKind {
    pub fn accepts(&self, c: char) -> bool {
        match self {
            InputKind::Text => !c.is_control(),
            InputKind::Number => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
        }
    }
}

/// Push a character into a raw input value, honouring the input kind.
/// Returns whether the value changed.
pub fn push_char(value: &mut String, kind: InputKind, c: char) -> bool {
    if kind.accepts(c) {
        value.push(c);
        true
    } else {
        false
    }
}

/// Remove the last character. Returns whether the value changed.
pub fn pop_char(value: &mut String) -> bool {
    value.pop().is_some()
}

/// Display value for rendering, with a placeholder for empty inactive inputs
pub fn display_value<'a>(value: &'a str, placeholder: &'a str, is_active: bool) -> &'a str {
    if value.is_empty() && !is_active {
        placeholder
    } else {
        value
    }
}
