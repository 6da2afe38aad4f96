//! Bill form model: raw values, focus, touched state and the current errors

use super::bills::{BillDraft, BillList, NewBill, RowId};
use super::field::{self, FieldState, InputKind};
use crate::config::ValidationMode;
use crate::validation::{self, ErrorSet, FieldPath, ValidationResult};
use std::collections::HashSet;

/// Raw form contents exactly as the inputs hold them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub bills: BillList,
}

/// What currently has keyboard focus. Row targets refer to row identity,
/// so focus follows a row when siblings are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Name,
    Description(RowId),
    Amount(RowId),
    Remove(RowId),
    AddBill,
    Submit,
}

impl Focus {
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Focus::Name | Focus::Description(_) | Focus::Amount(_)
        )
    }

    pub fn row_id(&self) -> Option<RowId> {
        match self {
            Focus::Description(id) | Focus::Amount(id) | Focus::Remove(id) => Some(*id),
            Focus::Name | Focus::AddBill | Focus::Submit => None,
        }
    }
}

/// One row as the renderer sees it
#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a> {
    pub index: usize,
    pub id: RowId,
    pub row: &'a BillDraft,
    pub description_error: Option<String>,
    pub amount_error: Option<String>,
}

/// The single form instance
#[derive(Debug, Clone)]
pub struct BillForm {
    draft: FormDraft,
    errors: ErrorSet,
    touched: HashSet<Focus>,
    list_touched: bool,
    submit_attempted: bool,
    mode: ValidationMode,
    pub focus: Focus,
}

impl Default for BillForm {
    fn default() -> Self {
        Self::new(ValidationMode::default())
    }
}

impl BillForm {
    /// Empty form: blank name, no bills. Nothing is validated until the
    /// first change, blur or submit.
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            draft: FormDraft::default(),
            errors: ErrorSet::new(),
            touched: HashSet::new(),
            list_touched: false,
            submit_attempted: false,
            mode,
            focus: Focus::Name,
        }
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn bills(&self) -> &BillList {
        &self.draft.bills
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Raw value at `path`, if the path names an existing leaf
    pub fn value(&self, path: FieldPath) -> Option<&str> {
        match path {
            FieldPath::Name => Some(self.draft.name.as_str()),
            FieldPath::BillDescription(i) => self.draft.bills.get(i).map(|r| r.description.as_str()),
            FieldPath::BillAmount(i) => self.draft.bills.get(i).map(|r| r.amount.as_str()),
            FieldPath::Bills => None,
        }
    }

    /// Replace the raw value at `path`. Paths without a leaf are ignored.
    pub fn set_field(&mut self, path: FieldPath, value: impl Into<String>) {
        let Some(target) = self.focus_for_path(path) else {
            tracing::debug!("set_field ignored for {path}");
            return;
        };
        if let Some(slot) = self.slot_mut(target) {
            *slot = value.into();
        }
        self.touched.insert(target);
        self.revalidate();
    }

    /// Append a row at the end of the list and return its id
    pub fn append_row(&mut self, initial: NewBill) -> RowId {
        let id = self.draft.bills.push(initial);
        self.list_touched = true;
        tracing::debug!("appended bill row {id} at {}", self.draft.bills.len() - 1);
        self.revalidate();
        id
    }

    /// Remove the row at `index`. A stale index is a no-op.
    pub fn remove_row(&mut self, index: usize) -> Option<BillDraft> {
        let Some(removed) = self.draft.bills.remove(index) else {
            tracing::debug!("remove_row ignored for stale index {index}");
            return None;
        };
        self.list_touched = true;
        self.touched.retain(|f| f.row_id() != Some(removed.id));

        if self.focus.row_id() == Some(removed.id) {
            self.focus = match self.draft.bills.get(index) {
                Some(next) => Focus::Description(next.id),
                None => Focus::AddBill,
            };
        }

        tracing::debug!("removed bill row {} from {index}", removed.id);
        self.revalidate();
        Some(removed)
    }

    /// Remove the row the focus is on, if any
    pub fn remove_focused_row(&mut self) -> Option<BillDraft> {
        let id = self.focus.row_id()?;
        let index = self.draft.bills.position(id)?;
        self.remove_row(index)
    }

    /// Type a character into the focused input
    pub fn input_char(&mut self, c: char) {
        let focus = self.focus;
        let kind = match focus {
            Focus::Amount(_) => InputKind::Number,
            _ => InputKind::Text,
        };
        let changed = match self.slot_mut(focus) {
            Some(slot) => field::push_char(slot, kind, c),
            None => return,
        };
        self.touched.insert(focus);
        if changed {
            self.revalidate();
        }
    }

    /// Delete the last character of the focused input
    pub fn backspace(&mut self) {
        let focus = self.focus;
        let changed = match self.slot_mut(focus) {
            Some(slot) => field::pop_char(slot),
            None => return,
        };
        self.touched.insert(focus);
        if changed {
            self.revalidate();
        }
    }

    /// Full validation pass for submission. Reveals every error.
    pub fn submit(&mut self) -> ValidationResult {
        self.submit_attempted = true;
        let result = validation::validate(&self.draft);
        self.errors = result.errors();
        result
    }

    pub fn field_state(&self, focus: Focus) -> FieldState {
        if self.touched.contains(&focus) {
            FieldState::Touched
        } else {
            FieldState::Untouched
        }
    }

    /// Message to draw under the field at `path`, honouring the validation mode
    pub fn visible_error(&self, path: FieldPath) -> Option<String> {
        let message = self.errors.message(&path)?;
        let shown = match self.mode {
            ValidationMode::Always => true,
            ValidationMode::Touched => {
                self.submit_attempted
                    || match path {
                        FieldPath::Bills => self.list_touched,
                        other => self
                            .focus_for_path(other)
                            .is_some_and(|f| self.field_state(f) == FieldState::Touched),
                    }
            }
        };
        shown.then_some(message)
    }

    /// Lazily yields one view per row, in list order
    pub fn row_views(&self) -> impl Iterator<Item = RowView<'_>> + '_ {
        self.draft
            .bills
            .iter()
            .enumerate()
            .map(move |(index, row)| RowView {
                index,
                id: row.id,
                row,
                description_error: self.visible_error(FieldPath::BillDescription(index)),
                amount_error: self.visible_error(FieldPath::BillAmount(index)),
            })
    }

    /// Focus targets in on-screen order
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = Vec::with_capacity(3 + self.draft.bills.len() * 3);
        order.push(Focus::Name);
        for row in &self.draft.bills {
            order.push(Focus::Description(row.id));
            order.push(Focus::Amount(row.id));
            order.push(Focus::Remove(row.id));
        }
        order.push(Focus::AddBill);
        order.push(Focus::Submit);
        order
    }

    pub fn next_focus(&mut self) {
        self.blur();
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + 1) % order.len()];
    }

    pub fn prev_focus(&mut self) {
        self.blur();
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = if current == 0 {
            order[order.len() - 1]
        } else {
            order[current - 1]
        };
    }

    /// Leaving an input marks it touched
    fn blur(&mut self) {
        if self.focus.is_input() {
            self.touched.insert(self.focus);
            self.revalidate();
        }
    }

    /// Field path currently addressed by the focus, if it is an input
    pub fn focused_path(&self) -> Option<FieldPath> {
        match self.focus {
            Focus::Name => Some(FieldPath::Name),
            Focus::Description(id) => self.draft.bills.position(id).map(FieldPath::BillDescription),
            Focus::Amount(id) => self.draft.bills.position(id).map(FieldPath::BillAmount),
            Focus::Remove(_) | Focus::AddBill | Focus::Submit => None,
        }
    }

    fn focus_for_path(&self, path: FieldPath) -> Option<Focus> {
        match path {
            FieldPath::Name => Some(Focus::Name),
            FieldPath::BillDescription(i) => self.draft.bills.get(i).map(|r| Focus::Description(r.id)),
            FieldPath::BillAmount(i) => self.draft.bills.get(i).map(|r| Focus::Amount(r.id)),
            FieldPath::Bills => None,
        }
    }

    fn slot_mut(&mut self, focus: Focus) -> Option<&mut String> {
        match focus {
            Focus::Name => Some(&mut self.draft.name),
            Focus::Description(id) => self.draft.bills.get_by_id_mut(id).map(|r| &mut r.description),
            Focus::Amount(id) => self.draft.bills.get_by_id_mut(id).map(|r| &mut r.amount),
            Focus::Remove(_) | Focus::AddBill | Focus::Submit => None,
        }
    }

    fn revalidate(&mut self) {
        self.errors = validation::validate(&self.draft).errors();
    }
}
