//! Row selection kept outside the table.
//!
//! The table only sees the checkbox callbacks built by `checkbox_props`; the
//! selected ids live here and are shared with the screen that owns them.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use table_engine::{CheckboxProps, Record, RowId};

/// Cheaply clonable handle to a set of selected row ids.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: Rc<RefCell<BTreeSet<RowId>>>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&self, id: RowId, checked: bool) {
        let mut ids = self.ids.borrow_mut();
        if checked {
            ids.insert(id);
        } else {
            ids.remove(&id);
        }
    }

    pub fn contains(&self, id: &RowId) -> bool {
        self.ids.borrow().contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.borrow().is_empty()
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.ids.borrow().iter().cloned().collect()
    }

    /// Selected ids that are numeric, in ascending order.
    pub fn numeric_ids(&self) -> Vec<i64> {
        self.ids
            .borrow()
            .iter()
            .filter_map(|id| match id {
                RowId::Number(n) => Some(*n),
                RowId::Text(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.ids.borrow_mut().clear();
    }

    /// Drop selected ids that are no longer present. Returns how many were
    /// dropped.
    pub fn retain_existing(&self, existing: impl IntoIterator<Item = RowId>) -> usize {
        let existing: BTreeSet<RowId> = existing.into_iter().collect();
        let mut ids = self.ids.borrow_mut();
        let before = ids.len();
        ids.retain(|id| existing.contains(id));
        before - ids.len()
    }

    /// Checkbox callbacks bound to this selection.
    ///
    /// Records without an id can never be selected.
    pub fn checkbox_props<R: Record + 'static>(&self) -> CheckboxProps<R> {
        let view = self.clone();
        let sink = self.clone();
        CheckboxProps::new(
            move |record: &R| record.id().is_some_and(|id| view.contains(&id)),
            move |record: &R, checked| {
                if let Some(id) = record.id() {
                    sink.toggle(id, checked);
                }
            },
        )
    }
}
