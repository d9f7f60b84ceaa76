use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;
use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
use crate::heuristic::Heuristic;
use crate::node::NodeArena;
use crate::puzzle::{Move, State};

/// Counters collected during one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expanded: usize,
    /// Nodes created, root included.
    pub generated: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Moves from the start to the goal; `None` when the goal is unreachable.
    pub moves: Option<Vec<Move>>,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    AStarHamming,
    AStarManhattan,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::AStarHamming,
        Strategy::AStarManhattan,
    ];

    /// Whether the strategy always returns a shortest move sequence.
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Strategy::DepthFirst)
    }

    /// The heuristic ordering an A* frontier, `None` for blind search.
    pub fn heuristic(&self) -> Option<Heuristic> {
        match self {
            Strategy::AStarHamming => Some(Heuristic::Hamming),
            Strategy::AStarManhattan => Some(Heuristic::Manhattan),
            Strategy::BreadthFirst | Strategy::DepthFirst => None,
        }
    }

    pub fn search(&self, start: &State) -> SearchOutcome {
        match (self, self.heuristic()) {
            (_, Some(heuristic)) => explore(start, PriorityFrontier::new(heuristic)),
            (Strategy::DepthFirst, None) => explore(start, LifoFrontier::default()),
            (_, None) => explore(start, FifoFrontier::default()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.heuristic()) {
            (_, Some(heuristic)) => write!(f, "astar-{heuristic}"),
            (Strategy::DepthFirst, None) => write!(f, "dfs"),
            (_, None) => write!(f, "bfs"),
        }
    }
}

impl FromStr for Strategy {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PuzzleError::UnknownStrategy(s.to_string()))
    }
}

/// Graph search shared by every strategy; only the frontier ordering differs.
///
/// A state is expanded at most once. The goal test happens when a node is
/// removed from the frontier, not when it is generated.
fn explore<F: Frontier>(start: &State, mut frontier: F) -> SearchOutcome {
    let mut arena = NodeArena::new();
    let mut explored: HashSet<State> = HashSet::new();

    let root = arena.push_root(*start);
    frontier.push(root, &arena[root]);
    let mut stats = SearchStats {
        generated: 1,
        max_frontier: 1,
        ..SearchStats::default()
    };

    while let Some(id) = frontier.pop() {
        let state = arena[id].state;

        if state.is_goal() {
            return SearchOutcome {
                moves: Some(arena.path_to(id)),
                stats,
            };
        }

        if !explored.insert(state) {
            continue;
        }

        stats.expanded += 1;
        for (action, next) in state.successors() {
            let child = arena.push_child(id, action, next);
            frontier.push(child, &arena[child]);
        }
        stats.generated = arena.len();
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    SearchOutcome { moves: None, stats }
}

pub fn breadth_first_search(start: &State) -> Option<Vec<Move>> {
    Strategy::BreadthFirst.search(start).moves
}

pub fn depth_first_search(start: &State) -> Option<Vec<Move>> {
    Strategy::DepthFirst.search(start).moves
}

pub fn a_star_hamming(start: &State) -> Option<Vec<Move>> {
    Strategy::AStarHamming.search(start).moves
}

pub fn a_star_manhattan(start: &State) -> Option<Vec<Move>> {
    Strategy::AStarManhattan.search(start).moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::GOAL;

    fn state(s: &str) -> State {
        s.parse().unwrap()
    }

    #[test]
    fn goal_start_returns_empty_path() {
        for strategy in Strategy::ALL {
            let outcome = strategy.search(&GOAL);
            assert_eq!(outcome.moves, Some(vec![]), "{strategy}");
            assert_eq!(outcome.stats.expanded, 0);
            assert_eq!(outcome.stats.generated, 1);
        }
    }

    #[test]
    fn one_move_from_goal() {
        let start = state("1234567_8");
        assert_eq!(breadth_first_search(&start), Some(vec![Move::Right]));
        assert_eq!(a_star_hamming(&start), Some(vec![Move::Right]));
        assert_eq!(a_star_manhattan(&start), Some(vec![Move::Right]));
    }

    #[test]
    fn bfs_finds_two_move_path() {
        // Tiles 7 and 8 each sit one cell right of their goal.
        let start = state("123456_78");
        assert_eq!(
            breadth_first_search(&start),
            Some(vec![Move::Right, Move::Right])
        );
    }

    #[test]
    fn dfs_path_is_valid() {
        let start = state("1234567_8");
        let moves = depth_first_search(&start).unwrap();
        assert_eq!(start.replay(&moves), Ok(GOAL));
    }

    #[test]
    fn stats_are_consistent() {
        let outcome = Strategy::AStarManhattan.search(&state("2_3541687"));
        let stats = outcome.stats;
        assert!(outcome.moves.is_some());
        assert!(stats.expanded > 0);
        assert!(stats.generated > stats.expanded);
        assert!(stats.max_frontier >= 1);
        assert!(stats.max_frontier <= stats.generated);
    }

    #[test]
    fn astar_expands_fewer_nodes_than_bfs() {
        let start = state("2_3541687");
        let bfs = Strategy::BreadthFirst.search(&start).stats;
        let manhattan = Strategy::AStarManhattan.search(&start).stats;
        assert!(manhattan.expanded < bfs.expanded);
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("BFS".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert!(matches!(
            "greedy".parse::<Strategy>(),
            Err(PuzzleError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn only_depth_first_is_suboptimal() {
        assert!(Strategy::BreadthFirst.is_optimal());
        assert!(!Strategy::DepthFirst.is_optimal());
        assert!(Strategy::AStarHamming.is_optimal());
        assert!(Strategy::AStarManhattan.is_optimal());
    }

    #[test]
    fn only_astar_carries_a_heuristic() {
        assert_eq!(Strategy::BreadthFirst.heuristic(), None);
        assert_eq!(Strategy::DepthFirst.heuristic(), None);
        assert_eq!(Strategy::AStarHamming.heuristic(), Some(Heuristic::Hamming));
        assert_eq!(
            Strategy::AStarManhattan.heuristic(),
            Some(Heuristic::Manhattan)
        );
        assert_eq!(Strategy::AStarHamming.to_string(), "astar-hamming");
        assert_eq!(Strategy::AStarManhattan.to_string(), "astar-manhattan");
    }
}
