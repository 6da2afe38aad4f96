//! Validation error taxonomy

use thiserror::Error;

/// Text fields that carry a minimum length constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Description,
}

impl TextField {
    fn expected(&self) -> &'static str {
        match self {
            TextField::Name => "um nome válido",
            TextField::Description => "uma descrição válida",
        }
    }
}

/// User-input errors produced by the validator. These are data, never raised.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Por favor, informe {}", .field.expected())]
    FieldTooShort {
        field: TextField,
        min: usize,
        actual: usize,
    },

    #[error("Por favor, informe um valor válido")]
    AmountNotPositiveOrUnparsable { raw: String },

    #[error("Por favor, informe pelo menos uma conta")]
    NoBillsPresent,
}
