//! Frontier orderings used by the search loop.
//!
//! Every frontier stores node ids only; the nodes live in the run's
//! [`NodeArena`](crate::node::NodeArena).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::heuristic::Heuristic;
use crate::node::{NodeId, SearchNode};

pub trait Frontier {
    fn push(&mut self, id: NodeId, node: &SearchNode);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;
}

/// Breadth-first: earliest inserted comes out first.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId, _node: &SearchNode) {
        self.queue.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Depth-first: most recently inserted comes out first.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, id: NodeId, _node: &SearchNode) {
        self.stack.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Best-first on `f = cost + h(state)`.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`. Equal `f`
/// values fall back to the node id, i.e. creation order.
#[derive(Debug)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<(u32, NodeId)>>,
    heuristic: Heuristic,
}

impl PriorityFrontier {
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heap: BinaryHeap::new(),
            heuristic,
        }
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, node: &SearchNode) {
        let f_cost = node.cost + self.heuristic.estimate(&node.state);
        self.heap.push(Reverse((f_cost, id)));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, id))| id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeArena;
    use crate::puzzle::{State, GOAL};

    fn arena_with(states: &[&str]) -> (NodeArena, Vec<NodeId>) {
        let mut arena = NodeArena::new();
        let ids = states
            .iter()
            .map(|s| arena.push_root(s.parse::<State>().unwrap()))
            .collect();
        (arena, ids)
    }

    fn drain(frontier: &mut impl Frontier) -> Vec<NodeId> {
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    #[test]
    fn fifo_pops_in_insertion_order() {
        let (arena, ids) = arena_with(&["12345678_", "1234567_8", "123456_78"]);
        let mut frontier = FifoFrontier::default();
        for &id in &ids {
            frontier.push(id, &arena[id]);
        }
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), ids);
        assert_eq!(frontier.len(), 0);
    }

    #[test]
    fn lifo_pops_most_recent_first() {
        let (arena, ids) = arena_with(&["12345678_", "1234567_8", "123456_78"]);
        let mut frontier = LifoFrontier::default();
        for &id in &ids {
            frontier.push(id, &arena[id]);
        }
        let mut expected = ids.clone();
        expected.reverse();
        assert_eq!(drain(&mut frontier), expected);
    }

    #[test]
    fn priority_pops_lowest_f_cost_first() {
        // h = 2, 0, 1 under Manhattan, all at cost 0.
        let (arena, ids) = arena_with(&["123456_78", "12345678_", "1234567_8"]);
        let mut frontier = PriorityFrontier::new(Heuristic::Manhattan);
        for &id in &ids {
            frontier.push(id, &arena[id]);
        }
        assert_eq!(drain(&mut frontier), vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn priority_ties_follow_creation_order() {
        let (arena, ids) = arena_with(&["1234567_8", "12345_786", "12345678_"]);
        let mut frontier = PriorityFrontier::new(Heuristic::Hamming);
        // Insert out of creation order; both non-goal nodes score 1.
        for &id in ids.iter().rev() {
            frontier.push(id, &arena[id]);
        }
        assert_eq!(arena[ids[2]].state, GOAL);
        assert_eq!(drain(&mut frontier), vec![ids[2], ids[0], ids[1]]);
    }
}
