use crate::row::RowId;
use std::collections::BTreeSet;

/// Selection mode for the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionMode {
    /// Selection disabled; every mutation is a no-op.
    #[default]
    None,
    /// At most one row; selecting another row replaces the current one.
    Single,
    /// Any number of rows.
    Multi,
}

/// Derived state of a "select all" checkbox. Computed from counts on demand,
/// never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectAllState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// `Checked` iff every one of `total > 0` rows is selected, `Indeterminate`
/// for a partial selection.
pub fn select_all_state(selected: usize, total: usize) -> SelectAllState {
    if total > 0 && selected >= total {
        SelectAllState::Checked
    } else if selected > 0 {
        SelectAllState::Indeterminate
    } else {
        SelectAllState::Unchecked
    }
}

/// Tracks selected rows by id under a [`SelectionMode`].
#[derive(Clone, Debug, Default)]
pub struct Selection {
    mode: SelectionMode,
    selected: BTreeSet<RowId>,
}

impl Selection {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Select or deselect one row. Returns `true` if the set changed.
    ///
    /// In `Single` mode selecting a row replaces any prior selection, and
    /// deselecting only clears the set if that row was the selected one.
    pub fn select(&mut self, id: RowId, selected: bool) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if selected {
                    if self.selected.contains(&id) && self.selected.len() == 1 {
                        return false;
                    }
                    self.selected.clear();
                    self.selected.insert(id);
                    true
                } else {
                    self.selected.remove(&id)
                }
            }
            SelectionMode::Multi => {
                if selected {
                    self.selected.insert(id)
                } else {
                    self.selected.remove(&id)
                }
            }
        }
    }

    pub fn toggle(&mut self, id: RowId) -> bool {
        let selected = !self.selected.contains(&id);
        self.select(id, selected)
    }

    /// Select or clear every row in `ids` at once. Only meaningful in `Multi`
    /// mode; duplicates in `ids` are tolerated (set semantics). Returns `true`
    /// if the set changed.
    pub fn select_all<I>(&mut self, ids: I, selected: bool) -> bool
    where
        I: IntoIterator<Item = RowId>,
    {
        if self.mode != SelectionMode::Multi {
            return false;
        }
        if selected {
            let next: BTreeSet<RowId> = ids.into_iter().collect();
            if next == self.selected {
                return false;
            }
            log::debug!("select all: {} rows", next.len());
            self.selected = next;
            true
        } else {
            if self.selected.is_empty() {
                return false;
            }
            self.selected.clear();
            true
        }
    }

    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RowId> {
        self.selected.iter()
    }

    /// How many of `ids` are currently selected. Feeds the select-all
    /// tri-state over the processed (not raw) row set.
    pub fn count_in<'a, I>(&self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a RowId>,
    {
        ids.into_iter().filter(|id| self.is_selected(id)).count()
    }

    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }

    /// Replace the whole set. Used when the caller owns selection state and
    /// writes it back. `None` mode still forces the set empty.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = RowId>) {
        self.selected = match self.mode {
            SelectionMode::None => BTreeSet::new(),
            _ => ids.into_iter().collect(),
        };
        if self.mode == SelectionMode::Single && self.selected.len() > 1 {
            // Keep one row rather than silently violating the mode invariant.
            let keep = self.selected.iter().next().cloned();
            self.selected.clear();
            self.selected.extend(keep);
        }
    }
}
