//! Breadth-first search over any [`PuzzleState`].
//!
//! The whole search runs when the solver is built: states are explored in
//! order of move count from the start, every discovered state remembers the
//! state that first reached it, and the search stops at the first goal it
//! dequeues. Because of that ordering the predecessor links always encode a
//! shortest path.

use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use log::{debug, trace};

use crate::state::PuzzleState;

/// Arena index of a discovered state
type StateId = usize;

/// Index of the start state in the arena
const ROOT: StateId = 0;

/// A finished breadth-first search and its predecessor map.
///
/// States are stored once in an arena and shared between the lookup table
/// and the queue; predecessors are arena indices. The start state is its own
/// predecessor.
#[derive(Debug)]
pub struct Solver<S: PuzzleState> {
    states: Vec<Rc<S>>,
    ids: HashMap<Rc<S>, StateId>,
    predecessors: Vec<StateId>,
    total_generated: usize,
    solution: Option<StateId>,
}

impl<S: PuzzleState> Solver<S> {
    /// Search from `start` until a goal is dequeued or the queue runs dry.
    pub fn new(start: S) -> Self {
        let mut solver = Self {
            states: Vec::new(),
            ids: HashMap::new(),
            predecessors: Vec::new(),
            total_generated: 1,
            solution: None,
        };
        solver.discover(start, ROOT);

        let mut queue: VecDeque<StateId> = VecDeque::new();
        queue.push_back(ROOT);

        while let Some(current) = queue.pop_front() {
            let state = Rc::clone(&solver.states[current]);
            if state.is_goal() {
                solver.solution = Some(current);
                break;
            }

            trace!("expanding state #{} ({} queued)", current, queue.len());
            for neighbor in state.neighbors() {
                solver.total_generated += 1;
                if !solver.ids.contains_key(&neighbor) {
                    let id = solver.discover(neighbor, current);
                    queue.push_back(id);
                }
            }
        }

        debug!(
            "search finished: solved={} total={} unique={}",
            solver.solution.is_some(),
            solver.total_generated,
            solver.unique_count()
        );
        solver
    }

    fn discover(&mut self, state: S, predecessor: StateId) -> StateId {
        let id = self.states.len();
        let state = Rc::new(state);
        self.states.push(Rc::clone(&state));
        self.ids.insert(state, id);
        self.predecessors.push(predecessor);
        id
    }

    /// Number of states generated, revisits included (the start counts once)
    pub fn total_generated(&self) -> usize {
        self.total_generated
    }

    /// Number of distinct states discovered
    pub fn unique_count(&self) -> usize {
        self.predecessors.len()
    }

    pub fn start(&self) -> &S {
        &self.states[ROOT]
    }

    /// The goal state the search stopped on, if any
    pub fn solution(&self) -> Option<&S> {
        self.solution.map(|id| self.states[id].as_ref())
    }

    /// Whether `state` was discovered by this search
    pub fn contains(&self, state: &S) -> bool {
        self.ids.contains_key(state)
    }

    /// Every discovered state, in discovery order
    pub fn discovered(&self) -> impl Iterator<Item = &S> {
        self.states.iter().map(|s| s.as_ref())
    }

    /// Number of moves between the start and `state`, if it was discovered
    pub fn depth(&self, state: &S) -> Option<usize> {
        let mut current = *self.ids.get(state)?;
        let mut depth = 0;
        while current != ROOT {
            current = self.predecessors[current];
            depth += 1;
        }
        Some(depth)
    }

    /// Shortest path `from ..= to`, following predecessor links back from `to`.
    ///
    /// Returns an empty path when `to` was never discovered or when `from`
    /// does not lie on the way from the start to `to`. When both are the same
    /// discovered state the path holds that single state.
    pub fn path(&self, from: &S, to: &S) -> Vec<S> {
        let (Some(&from_id), Some(&to_id)) = (self.ids.get(from), self.ids.get(to)) else {
            return Vec::new();
        };

        let mut path = Vec::new();
        let mut current = to_id;
        loop {
            path.push(self.states[current].as_ref().clone());
            if current == from_id {
                break;
            }
            if current == ROOT {
                return Vec::new();
            }
            current = self.predecessors[current];
        }
        path.reverse();
        path
    }

    /// Shortest path from the start to the goal found, or empty if none was
    pub fn solution_path(&self) -> Vec<S> {
        match self.solution() {
            Some(goal) => self.path(self.start(), goal),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockState;
    use crate::strings::StringsState;

    /// Small hand-made graph: 0 -> {1, 2}, 1 -> {3}, 2 -> {3, 4}, 3 -> {0}, 4 -> {}
    /// Node 5 is isolated.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Node {
        id: u8,
        goal: u8,
    }

    const EDGES: [&[u8]; 6] = [&[1, 2], &[3], &[3, 4], &[0], &[], &[]];

    impl PuzzleState for Node {
        fn is_goal(&self) -> bool {
            self.id == self.goal
        }

        fn neighbors(&self) -> Vec<Self> {
            EDGES[self.id as usize]
                .iter()
                .map(|&id| Node { id, goal: self.goal })
                .collect()
        }
    }

    fn node(id: u8, goal: u8) -> Node {
        Node { id, goal }
    }

    #[test]
    fn test_clock_shortest_path() {
        let start = ClockState::new(12, 6, 12).unwrap();
        let solver = Solver::new(start);

        let hours: Vec<u32> = solver.solution_path().iter().map(|s| s.current()).collect();
        assert_eq!(hours, vec![6, 7, 8, 9, 10, 11, 12]);
        assert!(solver.unique_count() >= 12);
        assert!(solver.unique_count() <= solver.total_generated());
    }

    #[test]
    fn test_strings_single_step() {
        let solver = Solver::new(StringsState::new("AA", "AB").unwrap());
        let words: Vec<String> = solver
            .solution_path()
            .iter()
            .map(|s| s.current().to_string())
            .collect();
        assert_eq!(words, vec!["AA", "AB"]);
    }

    #[test]
    fn test_start_is_goal() {
        let solver = Solver::new(node(0, 0));
        assert_eq!(solver.total_generated(), 1);
        assert_eq!(solver.unique_count(), 1);
        assert_eq!(solver.solution(), Some(&node(0, 0)));
        assert_eq!(solver.solution_path(), vec![node(0, 0)]);
    }

    #[test]
    fn test_unreachable_goal_gives_empty_path() {
        let solver = Solver::new(node(0, 5));
        assert!(solver.solution().is_none());
        assert!(solver.solution_path().is_empty());
        assert!(solver.path(&node(0, 5), &node(5, 5)).is_empty());
        assert!(solver.discovered().all(|s| !s.is_goal()));
        assert!(solver.contains(&node(4, 5)));
        assert!(!solver.contains(&node(5, 5)));
        // 0, 1, 2, 3, 4 discovered; every edge traversed once plus the start
        assert_eq!(solver.unique_count(), 5);
        assert_eq!(solver.total_generated(), 1 + 6);
    }

    #[test]
    fn test_counts_include_revisits() {
        let solver = Solver::new(node(0, 4));
        // expands 0 (1, 2), 1 (3), 2 (3 again, 4) and 3 (0 again) before 4
        assert_eq!(solver.total_generated(), 1 + 2 + 1 + 2 + 1);
        assert_eq!(solver.unique_count(), 5);
        assert_eq!(solver.solution_path(), vec![node(0, 4), node(2, 4), node(4, 4)]);
    }

    #[test]
    fn test_depth_is_shortest_distance() {
        // distances from node 0 worked out by hand from EDGES
        let expected = [(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)];
        let solver = Solver::new(node(0, 5));
        for (id, distance) in expected {
            assert_eq!(solver.depth(&node(id, 5)), Some(distance));
            assert_eq!(solver.path(solver.start(), &node(id, 5)).len(), distance + 1);
        }
        assert_eq!(solver.depth(&node(5, 5)), None);
    }

    #[test]
    fn test_clock_depths_go_the_short_way_round() {
        // 12 is the farthest hour from 6, so the whole face is discovered first
        let solver = Solver::new(ClockState::new(12, 6, 12).unwrap());
        assert_eq!(solver.unique_count(), 12);
        let expected = [5, 4, 3, 2, 1, 0, 1, 2, 3, 4, 5, 6];
        for (hour, distance) in (1..=12u32).zip(expected) {
            let state = ClockState::new(12, hour, 12).unwrap();
            assert_eq!(solver.depth(&state), Some(distance), "hour {}", hour);
            assert_eq!(solver.path(solver.start(), &state).len(), distance + 1);
        }
    }

    #[test]
    fn test_path_from_intermediate_state() {
        let solver = Solver::new(node(0, 5));
        assert_eq!(solver.path(&node(2, 5), &node(4, 5)), vec![node(2, 5), node(4, 5)]);
        assert_eq!(solver.path(&node(1, 5), &node(1, 5)), vec![node(1, 5)]);
        // 4 was reached through 2, never through 1
        assert!(solver.path(&node(1, 5), &node(4, 5)).is_empty());
    }
}
