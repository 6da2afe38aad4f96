//! Field paths locating a leaf or group inside the form

use std::cmp::Ordering;
use std::fmt;

/// Locator for one field (or the bill list itself) within the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    /// `name`
    Name,
    /// `bills` (list-level, not any row)
    Bills,
    /// `bills[i].description`
    BillDescription(usize),
    /// `bills[i].amount`
    BillAmount(usize),
}

impl FieldPath {
    /// Visual order: name, then rows top to bottom, then the list-level slot
    fn sort_key(&self) -> (u8, usize, u8) {
        match self {
            FieldPath::Name => (0, 0, 0),
            FieldPath::BillDescription(i) => (1, *i, 0),
            FieldPath::BillAmount(i) => (1, *i, 1),
            FieldPath::Bills => (2, 0, 0),
        }
    }
}

impl Ord for FieldPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for FieldPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => write!(f, "name"),
            FieldPath::Bills => write!(f, "bills"),
            FieldPath::BillDescription(i) => write!(f, "bills[{i}].description"),
            FieldPath::BillAmount(i) => write!(f, "bills[{i}].amount"),
        }
    }
}
