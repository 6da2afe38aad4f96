//! Form domain layer
//!
//! Raw input values for the bill form, row identities, focus and touched
//! tracking. Validation lives in `crate::validation`.

mod bills;
mod field;
mod form_state;

pub use bills::{BillDraft, BillList, NewBill, RowId};
pub use field::{display_value, FieldState, InputKind};
pub use form_state::{BillForm, Focus, FormDraft, RowView};
