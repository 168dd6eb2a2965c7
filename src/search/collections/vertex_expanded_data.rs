use std::collections::BTreeSet;

use crate::graphs::NodeId;

/// Settled nodes, ordered by id.
pub type FinalizedSet = BTreeSet<NodeId>;

/// Tracks which nodes have been dequeued for the first time.
#[derive(Default)]
pub struct FinalizedNodes {
    finalized: FinalizedSet,
}

impl FinalizedNodes {
    pub fn new() -> Self {
        FinalizedNodes::default()
    }

    /// Marks `node` as finalized and reports whether it already was.
    pub fn expand(&mut self, node: NodeId) -> bool {
        !self.finalized.insert(node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.finalized.contains(&node)
    }

    pub fn as_set(&self) -> &FinalizedSet {
        &self.finalized
    }

    pub fn len(&self) -> usize {
        self.finalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finalized.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_expand_counts() {
        let mut finalized = FinalizedNodes::new();

        assert!(!finalized.expand(NodeId(2)));
        assert!(finalized.expand(NodeId(2)));
        assert!(finalized.contains(NodeId(2)));
        assert!(!finalized.contains(NodeId(1)));
        assert_eq!(finalized.len(), 1);
    }
}
