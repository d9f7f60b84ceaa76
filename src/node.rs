use std::ops::Index;

use crate::puzzle::{Move, State};

/// Index of a node in its [`NodeArena`]. Ids are handed out in creation
/// order, so they double as a stable tie-breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable node of the search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub state: State,
    /// `None` for the root.
    pub parent: Option<NodeId>,
    /// Move that produced this node from its parent, `None` for the root.
    pub action: Option<Move>,
    /// Moves taken from the root.
    pub cost: u32,
}

/// Append-only node storage for one search run.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_root(&mut self, state: State) -> NodeId {
        self.push(SearchNode {
            state,
            parent: None,
            action: None,
            cost: 0,
        })
    }

    pub fn push_child(&mut self, parent: NodeId, action: Move, state: State) -> NodeId {
        let cost = self[parent].cost + 1;
        self.push(SearchNode {
            state,
            parent: Some(parent),
            action: Some(action),
            cost,
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Moves from the root down to `id`, walking parent links iteratively.
    pub fn path_to(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self[id].cost as usize);
        let mut current = &self[id];
        while let (Some(action), Some(parent)) = (current.action, current.parent) {
            moves.push(action);
            current = &self[parent];
        }
        moves.reverse();
        moves
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::GOAL;

    #[test]
    fn root_has_no_parent_and_zero_cost() {
        let mut arena = NodeArena::new();
        let root = arena.push_root(GOAL);
        assert_eq!(root.index(), 0);
        assert_eq!(arena[root].parent, None);
        assert_eq!(arena[root].action, None);
        assert_eq!(arena[root].cost, 0);
        assert!(arena.path_to(root).is_empty());
    }

    #[test]
    fn children_accumulate_cost_and_path() {
        let start: State = "1234_5678".parse().unwrap();
        let mut arena = NodeArena::new();
        let root = arena.push_root(start);

        let mut id = root;
        let mut state = start;
        for movement in [Move::Right, Move::Down, Move::Left] {
            state = state.apply(movement).unwrap();
            id = arena.push_child(id, movement, state);
        }

        assert_eq!(arena.len(), 4);
        assert_eq!(arena[id].cost, 3);
        assert_eq!(arena.path_to(id), vec![Move::Right, Move::Down, Move::Left]);
    }

    #[test]
    fn siblings_share_a_parent() {
        let start: State = "1234_5678".parse().unwrap();
        let mut arena = NodeArena::new();
        let root = arena.push_root(start);
        let ids: Vec<NodeId> = start
            .successors()
            .into_iter()
            .map(|(movement, next)| arena.push_child(root, movement, next))
            .collect();

        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        for id in ids {
            assert_eq!(arena[id].parent, Some(root));
            assert_eq!(arena.path_to(id).len(), 1);
        }
    }
}
