//! Bounded-state traversal
//!
//! Two modes over an implicit state graph:
//!
//! - shortest path ([`bfs`], [`bfs_distances`]): unit-cost breadth-first
//!   expansion with a visited set;
//! - cycle detection ([`find_cycle`]): a single deterministic state advanced
//!   until it repeats, so values at huge step counts can be read back from
//!   the recorded prefix.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use aoc_solver::SolveError;
use indexmap::IndexSet;
use log::trace;
use thiserror::Error;

/// Why a traversal produced no answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The reachable state space was exhausted without meeting the goal
    #[error("goal is unreachable")]
    Unreachable,
    /// No repeat was seen within the caller's step ceiling
    #[error("no repeated state within {0} steps")]
    StepLimit(usize),
}

impl From<SearchError> for SolveError {
    fn from(err: SearchError) -> Self {
        SolveError::NoSolution(err.to_string())
    }
}

/// Minimum number of transitions from `start` to a state satisfying `is_goal`.
///
/// Returns [`SearchError::Unreachable`] once the frontier empties.
pub fn bfs<S, I, F, G>(start: S, mut successors: F, mut is_goal: G) -> Result<usize, SearchError>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
    F: FnMut(&S) -> I,
    G: FnMut(&S) -> bool,
{
    if is_goal(&start) {
        return Ok(0);
    }

    let mut visited = HashSet::from([start.clone()]);
    let mut frontier = vec![start];
    let mut depth = 0;

    while !frontier.is_empty() {
        depth += 1;
        let mut next = Vec::new();
        for state in &frontier {
            for succ in successors(state) {
                if visited.contains(&succ) {
                    continue;
                }
                if is_goal(&succ) {
                    return Ok(depth);
                }
                visited.insert(succ.clone());
                next.push(succ);
            }
        }
        frontier = next;
    }

    Err(SearchError::Unreachable)
}

/// Every state reachable from `start`, with its minimum distance.
///
/// With `max_depth`, states further than that many transitions are not
/// expanded or returned.
pub fn bfs_distances<S, I, F>(start: S, mut successors: F, max_depth: Option<usize>) -> HashMap<S, usize>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
    F: FnMut(&S) -> I,
{
    let mut dist = HashMap::from([(start.clone(), 0)]);
    let mut queue = VecDeque::from([(start, 0)]);

    while let Some((state, d)) = queue.pop_front() {
        if max_depth.is_some_and(|max| d >= max) {
            continue;
        }
        for succ in successors(&state) {
            if !dist.contains_key(&succ) {
                dist.insert(succ.clone(), d + 1);
                queue.push_back((succ, d + 1));
            }
        }
    }

    dist
}

/// A detected cycle in a deterministic state sequence.
///
/// `history[i]` is the state after `i` steps; states are unique, so the
/// sequence loops from `repeat_at` back to `first_seen`.
#[derive(Debug, Clone)]
pub struct Cycle<S> {
    pub first_seen: usize,
    pub repeat_at: usize,
    history: IndexSet<S>,
}

impl<S: Eq + Hash> Cycle<S> {
    /// Number of steps in one loop
    pub fn len(&self) -> usize {
        self.repeat_at - self.first_seen
    }

    /// Step index within the recorded prefix equivalent to `target`
    pub fn project(&self, target: usize) -> usize {
        if target < self.first_seen {
            target
        } else {
            (target - self.first_seen) % self.len() + self.first_seen
        }
    }

    /// State after `target` steps
    pub fn state_at(&self, target: usize) -> &S {
        // project() always lands below repeat_at == history.len()
        &self.history[self.project(target)]
    }
}

/// Advance `initial` with `step` until a state repeats.
///
/// Each state is recorded with the step at which it was first seen; the
/// first occurrence is never overwritten. `max_steps` bounds state spaces
/// that are not known to be finite.
pub fn find_cycle<S, F>(initial: S, mut step: F, max_steps: Option<usize>) -> Result<Cycle<S>, SearchError>
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> S,
{
    let mut history = IndexSet::new();
    let mut state = initial;

    loop {
        let next = step(&state);
        let (index, inserted) = history.insert_full(state);
        if !inserted {
            trace!("cycle found: first seen at {index}, repeated at {}", history.len());
            return Ok(Cycle {
                first_seen: index,
                repeat_at: history.len(),
                history,
            });
        }
        if let Some(limit) = max_steps.filter(|&limit| history.len() > limit) {
            return Err(SearchError::StepLimit(limit));
        }
        state = next;
    }
}
