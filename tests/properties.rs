//! Algebraic properties of the selection engine.
//!
//! Integer weights with `weight_scale = 1` keep the scaled and raw
//! domains identical, so bounds can be asserted without rounding slack.

use lineup_select::dataset::Candidate;
use lineup_select::select::{SelectionConfig, SelectionEngine, SelectionStatus};
use proptest::prelude::*;

fn pool_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec((0u32..50, 0u32..100), 0..10).prop_map(|items| {
        items
            .iter()
            .enumerate()
            .map(|(i, &(w, v))| Candidate::new(format!("c{i}"), w as f64, v as f64))
            .collect()
    })
}

fn config(budget: u32, count: usize) -> SelectionConfig {
    SelectionConfig::default()
        .with_budget_limit(budget as f64)
        .with_count_limit(count)
        .with_weight_scale(1)
}

proptest! {
    #[test]
    fn prop_budget_never_exceeded(
        pool in pool_strategy(),
        budget in 0u32..200,
        count in 0usize..8,
    ) {
        let selection = SelectionEngine::run(&pool, &config(budget, count), &[]).unwrap();
        if selection.is_solution_found() {
            prop_assert!(selection.total_weight <= budget as f64 + 1e-9);
        }
    }

    #[test]
    fn prop_count_never_exceeded(
        pool in pool_strategy(),
        budget in 0u32..200,
        count in 0usize..8,
    ) {
        let selection = SelectionEngine::run(&pool, &config(budget, count), &[]).unwrap();
        if selection.is_solution_found() {
            prop_assert!(selection.selected.len() <= count);
        }
    }

    #[test]
    fn prop_resolved_locks_always_selected(
        pool in pool_strategy(),
        budget in 0u32..200,
        pick in 0usize..10,
    ) {
        let locks: Vec<String> = if pool.is_empty() {
            vec![]
        } else {
            vec![pool[pick % pool.len()].name.clone()]
        };
        let selection = SelectionEngine::run(&pool, &config(budget, 8), &locks).unwrap();
        if selection.is_solution_found() {
            for lock in &locks {
                prop_assert!(
                    selection.selected.contains(lock),
                    "lock {lock} missing from {:?}",
                    selection.selected
                );
            }
        }
    }

    #[test]
    fn prop_idempotent(
        pool in pool_strategy(),
        budget in 0u32..200,
        count in 0usize..8,
    ) {
        let first = SelectionEngine::run(&pool, &config(budget, count), &[]).unwrap();
        let second = SelectionEngine::run(&pool, &config(budget, count), &[]).unwrap();
        prop_assert_eq!(first.status, second.status);
        prop_assert_eq!(first.selected, second.selected);
        prop_assert!((first.total_value - second.total_value).abs() < 1e-12);
    }

    #[test]
    fn prop_budget_monotonic(
        pool in pool_strategy(),
        budget in 0u32..100,
        extra in 0u32..100,
        count in 0usize..8,
    ) {
        let tight = SelectionEngine::run(&pool, &config(budget, count), &[]).unwrap();
        let loose = SelectionEngine::run(&pool, &config(budget + extra, count), &[]).unwrap();
        if tight.status == SelectionStatus::Optimal && loose.status == SelectionStatus::Optimal {
            prop_assert!(loose.total_value >= tight.total_value - 1e-9);
        }
    }
}

#[test]
fn empty_pool_empty_locks_is_optimal_zero() {
    let selection = SelectionEngine::run(&[], &config(30, 5), &[]).unwrap();
    assert_eq!(selection.status, SelectionStatus::Optimal);
    assert!(selection.selected.is_empty());
    assert_eq!(selection.total_value, 0.0);
    assert_eq!(selection.total_weight, 0.0);
}
