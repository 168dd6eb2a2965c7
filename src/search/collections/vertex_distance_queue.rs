use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::{Distance, NodeId};

#[derive(Copy, Clone, Debug)]
pub struct QueueElement {
    pub distance: Distance,
    pub node: NodeId,
}

// `BinaryHeap` is a max-heap, so the ordering is flipped on distances. Ties
// go to the smaller node id, which keeps runs reproducible.
impl Ord for QueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueElement {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueElement {}

/// Min-queue of nodes keyed by tentative distance.
///
/// There is no decrease-key: a node is simply inserted again with its new
/// distance, and stale entries are dropped by the caller once the node has
/// been finalized.
#[derive(Default)]
pub struct NodeDistanceQueue {
    heap: BinaryHeap<QueueElement>,
}

impl NodeDistanceQueue {
    pub fn new() -> Self {
        NodeDistanceQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, node: NodeId, distance: Distance) {
        self.heap.push(QueueElement { distance, node });
    }

    /// Removes the entry with the smallest distance.
    pub fn pop(&mut self) -> Option<QueueElement> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
