use crate::types::BlockPosition;
use std::collections::HashSet;

/// Blocks reached by one flood fill, in discovery order. Never holds duplicates.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    order: Vec<BlockPosition>,
    members: HashSet<BlockPosition>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a position, returning false if it was already present.
    pub fn insert(&mut self, pos: BlockPosition) -> bool {
        if !self.members.insert(pos) {
            return false;
        }
        self.order.push(pos);
        true
    }

    pub fn contains(&self, pos: BlockPosition) -> bool {
        self.members.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Positions in the order they were discovered.
    pub fn as_slice(&self) -> &[BlockPosition] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = BlockPosition> + '_ {
        self.order.iter().copied()
    }

    /// Empty the set, keeping its allocations.
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

impl PartialEq for VisitedSet {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for VisitedSet {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut set = VisitedSet::new();
        assert!(set.insert(BlockPosition::new(1, 2, 3)));
        assert!(!set.insert(BlockPosition::new(1, 2, 3)));
        assert!(set.insert(BlockPosition::new(0, 0, 0)));
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![BlockPosition::new(1, 2, 3), BlockPosition::new(0, 0, 0)]
        );

        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(BlockPosition::new(1, 2, 3)));
    }
}
