//! The mutable menu store: the one owner of the live dish list.

use thiserror::Error;
use tracing::debug;

use crate::checkout::{parse_price_or_zero, CheckoutSnapshot};
use crate::domain::{DishDraft, ItemId, MenuItem};

/// Why a submitted draft was dropped. Never shown in the UI; the add is a
/// silent no-op there. Logged at debug level and observable in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftRejection {
    #[error("dish name is blank")]
    BlankName,
    #[error("course is blank")]
    BlankCourse,
    #[error("price is not a positive number")]
    InvalidPrice,
}

/// Ordered list of dishes for the current session. Items are only ever
/// appended or cleared wholesale; ids come from a monotonic counter so
/// uniqueness never depends on the wall clock.
#[derive(Debug, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    next_id: i64,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the draft and appends a new dish. Invalid input is a
    /// no-op: `None` comes back and the list is untouched. Two identical
    /// valid drafts produce two distinct items.
    pub fn add_item(&mut self, draft: DishDraft) -> Option<ItemId> {
        match Self::validate(&draft) {
            Ok((name, price, course)) => {
                self.next_id += 1;
                let id = ItemId(self.next_id);
                self.items.push(MenuItem {
                    id,
                    name,
                    price,
                    course,
                });
                Some(id)
            }
            Err(rejection) => {
                debug!(%rejection, name = %draft.name.trim(), "dropped dish draft");
                None
            }
        }
    }

    fn validate(draft: &DishDraft) -> Result<(String, f64, String), DraftRejection> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(DraftRejection::BlankName);
        }
        let course = draft.course.trim();
        if course.is_empty() {
            return Err(DraftRejection::BlankCourse);
        }
        let price = parse_price_or_zero(&draft.price);
        if price <= 0.0 {
            return Err(DraftRejection::InvalidPrice);
        }
        Ok((name.to_string(), price, course.to_string()))
    }

    /// Empties the menu unconditionally. Snapshots already captured keep
    /// their own copies; the next snapshot is empty.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn snapshot(&self) -> CheckoutSnapshot {
        CheckoutSnapshot::new(self.items.clone())
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
