//! Offline divide and conquer over the sequence.
//!
//! Every level picks a midpoint, builds matrix chains outward from it and answers
//! the queries containing it. The remaining queries lie entirely on one side and
//! are handed to the half that contains them.

use log::{debug, trace};

use crate::{
    batch::{Answers, Query, QueryBatch},
    matrix::Matrix,
    ModInt,
};

/// Result of a query whose range is a single position.
pub const BASE_RESULT: ModInt = ModInt::ONE;

/// Queries left unanswered by one level, sorted by the half they fall in.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Split {
    pub(crate) left: Vec<Query>,
    pub(crate) right: Vec<Query>,
}

/// Working state for one batch.
///
/// `chain[i]` holds the composed matrix of position `i` for the level that
/// built it last. A level answers all of its crossing queries before either
/// half starts rebuilding, so the slots can be shared by the whole recursion.
pub struct Solver<'a> {
    batch: &'a QueryBatch,
    chain: Vec<Matrix>,
    state: Vec<ModInt>,
    scratch: Vec<ModInt>,
}

impl<'a> Solver<'a> {
    pub fn new(batch: &'a QueryBatch) -> Solver<'a> {
        let size = batch.k() + 1;
        Solver {
            batch,
            chain: vec![Matrix::zero(size); batch.len() + 1],
            state: vec![ModInt::ZERO; size],
            scratch: vec![ModInt::ZERO; size],
        }
    }

    /// Answers every query of the batch, ordered by query id.
    pub fn run(mut self) -> Vec<ModInt> {
        let queries = self.batch.queries().to_vec();
        let mut answers = Answers::new(queries.len());
        debug!(
            "solving {} queries over {} values with k = {}",
            queries.len(),
            self.batch.len(),
            self.batch.k()
        );
        if !self.batch.is_empty() {
            self.solve(1, self.batch.len(), queries, &mut answers);
        }
        answers.into_vec()
    }

    fn solve(&mut self, l: usize, r: usize, queries: Vec<Query>, answers: &mut Answers) {
        if queries.is_empty() {
            return;
        }
        if l == r {
            for query in &queries {
                answers.set(query.id, BASE_RESULT);
            }
            return;
        }
        let mid = (l + r) / 2;
        let Split { left, right } = self.split_level(l, r, queries, answers);
        self.solve(l, mid, left, answers);
        self.solve(mid + 1, r, right, answers);
    }

    /// Runs a single level on `[l, r]`: answers the queries containing the
    /// midpoint and returns the rest.
    ///
    /// Requires `1 <= l < r <= n` and every query inside `[l, r]`.
    pub(crate) fn split_level(
        &mut self,
        l: usize,
        r: usize,
        queries: Vec<Query>,
        answers: &mut Answers,
    ) -> Split {
        debug_assert!(1 <= l && l < r && r <= self.batch.len());
        let mid = (l + r) / 2;
        self.build_chains(l, mid, r);

        let mut split = Split::default();
        let mut crossing = 0;
        for query in queries {
            debug_assert!(l <= query.l && query.r <= r);
            if query.contains(mid) {
                answers.set(query.id, self.resolve(query, mid));
                crossing += 1;
            } else if query.r < mid {
                split.left.push(query);
            } else {
                split.right.push(query);
            }
        }
        trace!(
            "level [{l}, {r}] mid {mid}: {crossing} answered, {} left, {} right",
            split.left.len(),
            split.right.len()
        );
        split
    }

    /// After this, `chain[i]` for `i <= mid` is `E(v[mid]) * .. * E(v[i])` and
    /// for `i > mid` is `E(v[i]) * .. * E(v[mid + 1])`.
    fn build_chains(&mut self, l: usize, mid: usize, r: usize) {
        let batch = self.batch;
        self.chain[mid].assign_elemental(batch.value(mid));
        self.chain[mid + 1].assign_elemental(batch.value(mid + 1));

        for i in mid + 2..=r {
            let (built, rest) = self.chain.split_at_mut(i);
            built[i - 1].compose_left_into(batch.value(i), &mut rest[0]);
        }
        for i in (l..mid).rev() {
            let (rest, built) = self.chain.split_at_mut(i + 1);
            built[0].compose_right_into(batch.value(i), &mut rest[i]);
        }
    }

    /// Pushes the unit state through the chain of `query.l`, then through the
    /// chain of `query.r` when the query extends past the midpoint, and sums
    /// every state but the first.
    fn resolve(&mut self, query: Query, mid: usize) -> ModInt {
        self.state.fill(ModInt::ZERO);
        self.state[0] = ModInt::ONE;

        self.chain[query.l].apply_into(&self.state, &mut self.scratch);
        std::mem::swap(&mut self.state, &mut self.scratch);
        if query.r > mid {
            self.chain[query.r].apply_into(&self.state, &mut self.scratch);
            std::mem::swap(&mut self.state, &mut self.scratch);
        }

        self.state[1..].iter().sum()
    }
}
