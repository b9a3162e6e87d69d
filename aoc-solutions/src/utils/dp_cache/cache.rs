//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// A memoization cache with lazy dependency resolution.
///
/// Dependencies are resolved recursively and every index is computed at
/// most once. The cache does NOT detect cycles: the dependency graph must
/// be a DAG, otherwise `get` recurses until the stack overflows.
///
/// # Example (closure-based)
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, HashMapBackend};
///
/// // ways to climb n stairs taking 1 or 2 steps
/// let cache = DpCache::new(
///     HashMapBackend::new(),
///     |n: &u32| if *n < 2 { vec![] } else { vec![n - 1, n - 2] },
///     |n: &u32, deps: Vec<u64>| if *n < 2 { 1 } else { deps[0] + deps[1] },
/// );
///
/// assert_eq!(cache.get(&10), 89);
/// ```
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a cache over `backend` for the given problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for `index`, computing it (and any missing
    /// dependencies) if necessary.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        // no borrow is held while dependencies recurse
        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .into_iter()
            .map(|dep| self.get(&dep))
            .collect();

        self.backend
            .borrow_mut()
            .get_or_insert_with(index.clone(), || self.problem.compute(index, dep_values))
            .clone()
    }
}

/// Adapts a pair of closures to [`DpProblem`].
pub struct ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    dep_fn: D,
    compute_fn: C,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, D, C> DpProblem<I, K> for ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    fn deps(&self, index: &I) -> Vec<I> {
        (self.dep_fn)(index)
    }

    fn compute(&self, index: &I, deps: Vec<K>) -> K {
        (self.compute_fn)(index, deps)
    }
}

impl<I, K, B, D, C> DpCache<I, K, B, ClosureProblem<I, K, D, C>>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    /// Creates a cache from a dependency closure and a compute closure.
    pub fn new(backend: B, dep_fn: D, compute_fn: C) -> Self {
        Self::with_problem(
            backend,
            ClosureProblem {
                dep_fn,
                compute_fn,
                _phantom: PhantomData,
            },
        )
    }
}
