//! Memoization for recursive cost functions
//!
//! A [`DpCache`] owns a problem definition ([`DpProblem`], or two closures
//! via [`DpCache::new`]) and a storage [`Backend`]. Values are computed
//! lazily on first `get` and reused afterwards. The cache lives only as long
//! as the computation that created it.
//!
//! - [`VecBackend`]: dense `usize` indices
//! - [`HashMapBackend`]: any hashable index
//!
//! Dependencies must form a DAG; cycles are not detected.

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{ClosureProblem, DpCache};
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
