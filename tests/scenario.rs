//! End-to-end scenarios for u-ordering.

use proptest::prelude::*;
use u_ordering::genetic::{GeneticConfig, GeneticRunner};
use u_ordering::random_search::{RandomSearchConfig, RandomSearchRunner};
use u_ordering::{
    create_rng, genetic_search, random_search, swap_shuffle, Error, OptimizationItem,
};

#[derive(Clone, Debug, PartialEq)]
struct WorkItem {
    id: i64,
    name: String,
    hours: i64,
}

impl OptimizationItem for WorkItem {
    fn unique_id(&self) -> i64 {
        self.id
    }
}

fn work_items(hours: &[i64]) -> Vec<WorkItem> {
    hours
        .iter()
        .enumerate()
        .map(|(i, &hours)| WorkItem {
            id: i as i64 + 1,
            name: format!("task-{}", i + 1),
            hours,
        })
        .collect()
}

fn weighted_position(ordering: &[WorkItem]) -> i64 {
    ordering
        .iter()
        .enumerate()
        .map(|(i, item)| i as i64 * item.hours)
        .sum()
}

/// Schedule cost that weighs each slot by `(i + 1/n) * 100`.
fn schedule_cost(ordering: &[WorkItem]) -> i64 {
    let n = ordering.len() as f64;
    ordering
        .iter()
        .enumerate()
        .map(|(i, item)| ((i as f64 + 1.0 / n) * 100.0 * item.hours as f64).round() as i64)
        .sum()
}

fn sorted_ids(ordering: &[WorkItem]) -> Vec<i64> {
    let mut ids: Vec<i64> = ordering.iter().map(|w| w.id).collect();
    ids.sort_unstable();
    ids
}

fn all_orderings(items: &[WorkItem]) -> Vec<Vec<WorkItem>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in all_orderings(&rest) {
            tail.insert(0, head.clone());
            out.push(tail);
        }
    }
    out
}

mod four_items {
    use super::*;

    fn candidates() -> Vec<WorkItem> {
        work_items(&[2, 7, 1, 5])
    }

    #[test]
    fn test_random_search_within_space_bounds() {
        let items = candidates();
        let costs: Vec<i64> = all_orderings(&items)
            .iter()
            .map(|o| weighted_position(o))
            .collect();
        assert_eq!(costs.len(), 24);
        let worst = *costs.iter().max().unwrap();
        let best = *costs.iter().min().unwrap();

        let result = random_search(&items, &weighted_position, 50).unwrap();

        assert!(result.best_cost <= worst);
        assert!(result.best_cost >= best);
        assert_eq!(result.best_cost, weighted_position(&result.best_ordering));
        assert_eq!(result.permutation_space_size, 24.0);
    }

    #[test]
    fn test_genetic_search_beats_initial_population() {
        let items = candidates();
        let seed = 2024;
        let config = GeneticConfig::default().with_seed(seed);

        // Replay the initial population: one shuffled clone per member.
        let mut replay = create_rng(seed);
        let initial_best = (0..config.population_size(items.len()))
            .map(|_| {
                let mut ordering = items.clone();
                swap_shuffle(&mut ordering, &mut replay);
                weighted_position(&ordering)
            })
            .min()
            .unwrap();

        let result = GeneticRunner::run(&items, &weighted_position, &config).unwrap();

        assert!(
            result.best_cost <= initial_best,
            "final {} > initial best {}",
            result.best_cost,
            initial_best
        );
        assert_eq!(sorted_ids(&result.best_ordering), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_genetic_search_default_entry_point() {
        let items = candidates();
        let result = genetic_search(&items, &weighted_position).unwrap();
        // Heaviest first: 7, 5, 2, 1.
        assert_eq!(result.best_cost, 5 + 2 * 2 + 3);
        assert_eq!(result.permutation_space_size, 24.0);
    }
}

mod work_schedule {
    use super::*;

    fn backlog() -> Vec<WorkItem> {
        work_items(&[3, 8, 1, 6, 2, 7, 4, 5, 1, 8])
    }

    #[test]
    fn test_genetic_no_worse_than_single_random_sample() {
        let items = backlog();
        let single = RandomSearchRunner::run(
            &items,
            &schedule_cost,
            &RandomSearchConfig::default().with_iterations(1).with_seed(5),
        )
        .unwrap();
        let many = RandomSearchRunner::run(
            &items,
            &schedule_cost,
            &RandomSearchConfig::default().with_iterations(100).with_seed(5),
        )
        .unwrap();
        let genetic = GeneticRunner::run(
            &items,
            &schedule_cost,
            &GeneticConfig::default().with_seed(5),
        )
        .unwrap();

        assert!(many.best_cost <= single.best_cost);
        assert!(genetic.best_cost <= single.best_cost);
        assert_eq!(genetic.permutation_space_size, 3_628_800.0);
    }

    #[test]
    fn test_items_are_cloned_not_mutated() {
        let items = backlog();
        let snapshot = items.clone();
        let result = genetic_search(&items, &schedule_cost).unwrap();

        assert_eq!(items, snapshot);
        for item in &result.best_ordering {
            let original = snapshot.iter().find(|w| w.id == item.id).unwrap();
            assert_eq!(item, original);
            assert_eq!(item.name, format!("task-{}", item.id));
        }
    }
}

mod validation {
    use super::*;

    #[test]
    fn test_empty_candidates() {
        let empty: Vec<WorkItem> = Vec::new();
        assert!(matches!(
            random_search(&empty, &weighted_position, 10),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            genetic_search(&empty, &weighted_position),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_zero_iterations() {
        let items = work_items(&[1, 2]);
        assert!(matches!(
            random_search(&items, &weighted_position, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_permutation_arguments() {
        assert!(matches!(
            u_ordering::permutations(2, 5),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            u_ordering::permutations(-3, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = random_search(&work_items(&[1]), &weighted_position, 0).unwrap_err();
        assert!(err.to_string().starts_with("Invalid argument"));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_random_search_returns_permutation(
        hours in prop::collection::vec(1i64..9, 1..12),
        iterations in 1usize..20,
        seed in any::<u64>(),
    ) {
        let items = work_items(&hours);
        let config = RandomSearchConfig::default().with_iterations(iterations).with_seed(seed);
        let result = RandomSearchRunner::run(&items, &weighted_position, &config).unwrap();
        prop_assert_eq!(sorted_ids(&result.best_ordering), sorted_ids(&items));
        prop_assert_eq!(result.best_cost, weighted_position(&result.best_ordering));
    }

    #[test]
    fn prop_genetic_search_returns_permutation(
        hours in prop::collection::vec(1i64..9, 1..10),
        seed in any::<u64>(),
    ) {
        let items = work_items(&hours);
        let config = GeneticConfig::default().with_generations(15).with_seed(seed);
        let result = GeneticRunner::run(&items, &weighted_position, &config).unwrap();
        prop_assert_eq!(sorted_ids(&result.best_ordering), sorted_ids(&items));
        prop_assert_eq!(result.best_cost, weighted_position(&result.best_ordering));
    }
}
