//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
}

#[test]
fn test_diamond_dependency_computed_once() {
    // 0 depends on 1 and 2, both depend on 3
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let cache = DpCache::new(
        HashMapBackend::new(),
        |n: &u8| match n {
            0 => vec![1, 2],
            1 | 2 => vec![3],
            _ => vec![],
        },
        move |n: &u8, deps: Vec<u32>| {
            if *n == 3 {
                counter.set(counter.get() + 1);
            }
            deps.iter().sum::<u32>().max(1)
        },
    );

    assert_eq!(cache.get(&0), 2);
    assert_eq!(cache.get(&3), 1);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_vec_backend_grows_sparse() {
    let mut backend = VecBackend::with_capacity(2);
    assert_eq!(backend.get(&7), None);
    assert_eq!(*backend.get_or_insert_with(7, || 'x'), 'x');
    assert_eq!(*backend.get_or_insert_with(7, || 'y'), 'x');
    assert_eq!(backend.get(&3), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    #[test]
    fn prop_binomial_matches_direct_formula(n in 0u64..30, k in 0u64..30) {
        prop_assume!(k <= n);
        let cache = DpCache::new(
            HashMapBackend::new(),
            |&(n, k): &(u64, u64)| {
                if k == 0 || k == n { vec![] } else { vec![(n - 1, k - 1), (n - 1, k)] }
            },
            |_: &(u64, u64), deps: Vec<u64>| if deps.is_empty() { 1 } else { deps[0] + deps[1] },
        );

        let direct = (0..k).fold(1u64, |acc, i| acc * (n - i) / (i + 1));
        prop_assert_eq!(cache.get(&(n, k)), direct);
    }
}
