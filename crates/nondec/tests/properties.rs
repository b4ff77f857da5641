use nondec::{solve, unit_vector, Limits, Matrix, ModInt, BASE_RESULT};
use proptest::prelude::*;

const MAX_K: usize = 6;

/// A sequence with alphabet bound `k` and ranges inside it.
fn batch() -> impl Strategy<Value = (usize, Vec<u32>, Vec<(usize, usize)>)> {
    (1..=MAX_K, 1..=24usize).prop_flat_map(|(k, n)| {
        let values = prop::collection::vec(1..=k as u32, n);
        let ranges = prop::collection::vec((1..=n, 1..=n), 0..40)
            .prop_map(|pairs| {
                pairs
                    .into_iter()
                    .map(|(a, b)| (a.min(b), a.max(b)))
                    .collect::<Vec<(usize, usize)>>()
            });
        (Just(k), values, ranges)
    })
}

fn naive(values: &[u32], k: usize, l: usize, r: usize) -> ModInt {
    if l == r {
        return BASE_RESULT;
    }
    let mut state = unit_vector(k + 1);
    for &v in &values[l - 1..r] {
        state = Matrix::elemental(v as usize, k).apply(&state);
    }
    state[1..].iter().sum()
}

proptest! {
    #[test]
    fn matches_left_to_right_product((k, values, ranges) in batch()) {
        let results = solve(values.clone(), k, &ranges, &Limits::default()).unwrap();
        prop_assert_eq!(results.len(), ranges.len());
        for (&(l, r), result) in ranges.iter().zip(&results) {
            prop_assert_eq!(*result, naive(&values, k, l, r));
        }
    }

    #[test]
    fn query_order_does_not_matter(
        ((k, values, ranges), order) in batch().prop_flat_map(|batch| {
            let order = Just((0..batch.2.len()).collect::<Vec<usize>>()).prop_shuffle();
            (Just(batch), order)
        })
    ) {
        let limits = Limits::default();
        let results = solve(values.clone(), k, &ranges, &limits).unwrap();

        let permuted: Vec<(usize, usize)> = order.iter().map(|&i| ranges[i]).collect();
        let permuted_results = solve(values, k, &permuted, &limits).unwrap();

        let mut restored = vec![ModInt::ZERO; ranges.len()];
        for (position, &i) in order.iter().enumerate() {
            restored[i] = permuted_results[position];
        }
        prop_assert_eq!(restored, results);
    }

    #[test]
    fn repeated_runs_agree((k, values, ranges) in batch()) {
        let limits = Limits::default();
        let first = solve(values.clone(), k, &ranges, &limits).unwrap();
        let second = solve(values, k, &ranges, &limits).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn single_position_is_base_result((k, values, _ranges) in batch()) {
        let ranges: Vec<(usize, usize)> = (1..=values.len()).map(|i| (i, i)).collect();
        let results = solve(values, k, &ranges, &Limits::default()).unwrap();
        prop_assert!(results.iter().all(|&x| x == BASE_RESULT));
    }
}
