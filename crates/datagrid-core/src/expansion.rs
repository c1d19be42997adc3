use crate::row::RowId;
use std::collections::BTreeSet;

/// Tracks which rows show auxiliary expanded content.
///
/// Unlike selection there is no mode and no cardinality limit: each row's
/// expanded flag is independent. Rendering the expanded content is the view
/// layer's job; this only owns membership.
#[derive(Clone, Debug, Default)]
pub struct Expansion {
    expanded: BTreeSet<RowId>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a row's expanded flag. Returns the new state.
    pub fn toggle(&mut self, id: RowId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn set(&mut self, id: RowId, expanded: bool) -> bool {
        if expanded {
            self.expanded.insert(id)
        } else {
            self.expanded.remove(&id)
        }
    }

    pub fn is_expanded(&self, id: &RowId) -> bool {
        self.expanded.contains(id)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RowId> {
        self.expanded.iter()
    }

    pub fn clear(&mut self) -> bool {
        if self.expanded.is_empty() {
            return false;
        }
        self.expanded.clear();
        true
    }

    /// Replace the whole set (caller-owned expansion state).
    pub fn replace(&mut self, ids: impl IntoIterator<Item = RowId>) {
        self.expanded = ids.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_symmetric() {
        let mut e = Expansion::new();
        assert!(e.toggle(RowId::Int(3)));
        assert!(e.is_expanded(&RowId::Int(3)));
        assert!(!e.toggle(RowId::Int(3)));
        assert!(!e.is_expanded(&RowId::Int(3)));
    }

    #[test]
    fn any_number_of_rows_can_expand() {
        let mut e = Expansion::new();
        for n in 0..100 {
            e.toggle(RowId::Int(n));
        }
        assert_eq!(e.len(), 100);
        e.clear();
        assert!(e.is_empty());
    }
}
