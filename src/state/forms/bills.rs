//! Bill rows with stable identities

use std::fmt;

/// Identity assigned to a row when it is created. Independent of position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Initial values for a row being appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBill {
    pub description: String,
    pub amount: String,
}

impl Default for NewBill {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: "0".to_string(),
        }
    }
}

impl NewBill {
    pub fn new(description: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
        }
    }
}

/// A bill row as the inputs hold it: raw, unvalidated text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillDraft {
    pub id: RowId,
    pub description: String,
    pub amount: String,
}

/// Ordered rows plus the id counter that owns their identities.
///
/// Ids are handed out monotonically and never reused, so removing a row
/// never renumbers its siblings. Position is whatever index a row sits at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillList {
    rows: Vec<BillDraft>,
    next_id: u64,
}

impl BillList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BillDraft> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[BillDraft] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&BillDraft> {
        self.rows.get(index)
    }

    /// Current position of the row with this id
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    pub fn get_by_id(&self, id: RowId) -> Option<&BillDraft> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn get_by_id_mut(&mut self, id: RowId) -> Option<&mut BillDraft> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    /// Append a row at the end and return its fresh id
    pub fn push(&mut self, initial: NewBill) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(BillDraft {
            id,
            description: initial.description,
            amount: initial.amount,
        });
        id
    }

    /// Remove the row at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<BillDraft> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a BillList {
    type Item = &'a BillDraft;
    type IntoIter = std::slice::Iter<'a, BillDraft>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_bill_defaults_to_zero_amount() {
        let bill = NewBill::default();
        assert_eq!(bill.description, "");
        assert_eq!(bill.amount, "0");
    }

    #[test]
    fn test_push_assigns_monotonic_ids() {
        let mut list = BillList::new();
        let a = list.push(NewBill::default());
        let b = list.push(NewBill::default());
        assert!(a < b);
        assert_eq!(list.len(), 2);
        assert_eq!(list.position(b), Some(1));
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut list = BillList::new();
        let first = list.push(NewBill::default());
        list.remove(0);
        let second = list.push(NewBill::default());
        assert_ne!(first, second);
    }

    #[test]
    fn test_remove_middle_keeps_sibling_ids() {
        let mut list = BillList::new();
        let a = list.push(NewBill::new("Luz", "10"));
        let b = list.push(NewBill::new("Água", "20"));
        let c = list.push(NewBill::new("Gás", "30"));

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.id, b);

        let ids: Vec<RowId> = list.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(list.position(c), Some(1));
        assert_eq!(list.get_by_id(c).unwrap().description, "Gás");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut list = BillList::new();
        list.push(NewBill::default());
        let before = list.clone();
        assert!(list.remove(5).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_row_id_display() {
        let mut list = BillList::new();
        let id = list.push(NewBill::default());
        assert_eq!(id.to_string(), "#0");
    }
}
