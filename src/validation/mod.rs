//! Form schema and validation
//!
//! Each field has its own constraint function; `validate` runs all of them
//! without short-circuiting and merges the results into one `ErrorSet`.
//! Nothing here panics or returns `Err`: invalid input is data.

mod error;
mod path;

pub use error::{TextField, ValidationError};
pub use path::FieldPath;

use crate::state::{BillDraft, FormDraft};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimum number of characters for the name and for bill descriptions
pub const MIN_TEXT_LEN: usize = 3;

/// A validated bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub description: String,
    pub amount: f64,
}

/// The validated, typed form value handed to the completion action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormValue {
    pub name: String,
    pub bills: Vec<Bill>,
}

/// Errors keyed by field path, iterated in on-screen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorSet {
    errors: BTreeMap<FieldPath, ValidationError>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: FieldPath, error: ValidationError) {
        self.errors.insert(path, error);
    }

    pub fn get(&self, path: &FieldPath) -> Option<&ValidationError> {
        self.errors.get(path)
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.errors.contains_key(path)
    }

    /// Message shown under the field at `path`, if it has an error
    pub fn message(&self, path: &FieldPath) -> Option<String> {
        self.get(path).map(ToString::to_string)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.errors.keys()
    }
}

/// Outcome of a full validation pass
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(FormValue),
    Invalid(ErrorSet),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The error set, empty when valid
    pub fn errors(&self) -> ErrorSet {
        match self {
            ValidationResult::Valid(_) => ErrorSet::new(),
            ValidationResult::Invalid(errors) => errors.clone(),
        }
    }
}

/// Convert raw amount text into a number.
///
/// Surrounding whitespace is ignored and blank input coerces to zero, which
/// then fails the positivity check rather than the parse.
pub fn coerce_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    let actual = name.trim().chars().count();
    if actual >= MIN_TEXT_LEN {
        Ok(())
    } else {
        Err(ValidationError::FieldTooShort {
            field: TextField::Name,
            min: MIN_TEXT_LEN,
            actual,
        })
    }
}

fn check_description(description: &str) -> Result<(), ValidationError> {
    let actual = description.chars().count();
    if actual >= MIN_TEXT_LEN {
        Ok(())
    } else {
        Err(ValidationError::FieldTooShort {
            field: TextField::Description,
            min: MIN_TEXT_LEN,
            actual,
        })
    }
}

fn check_amount(raw: &str) -> Result<f64, ValidationError> {
    match coerce_amount(raw) {
        Some(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(ValidationError::AmountNotPositiveOrUnparsable {
            raw: raw.to_string(),
        }),
    }
}

fn check_bill(index: usize, row: &BillDraft, errors: &mut ErrorSet) -> Option<Bill> {
    let description = check_description(&row.description);
    let amount = check_amount(&row.amount);

    match (description, amount) {
        (Ok(()), Ok(amount)) => Some(Bill {
            description: row.description.clone(),
            amount,
        }),
        (description, amount) => {
            if let Err(e) = description {
                errors.insert(FieldPath::BillDescription(index), e);
            }
            if let Err(e) = amount {
                errors.insert(FieldPath::BillAmount(index), e);
            }
            None
        }
    }
}

/// Run every constraint against the draft
pub fn validate(draft: &FormDraft) -> ValidationResult {
    let mut errors = ErrorSet::new();

    if let Err(e) = check_name(&draft.name) {
        errors.insert(FieldPath::Name, e);
    }

    let bills: Vec<Bill> = draft
        .bills
        .iter()
        .enumerate()
        .filter_map(|(index, row)| check_bill(index, row, &mut errors))
        .collect();

    if draft.bills.is_empty() {
        errors.insert(FieldPath::Bills, ValidationError::NoBillsPresent);
    }

    if errors.is_empty() {
        ValidationResult::Valid(FormValue {
            name: draft.name.clone(),
            bills,
        })
    } else {
        ValidationResult::Invalid(errors)
    }
}
