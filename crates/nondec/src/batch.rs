use crate::{Error, Limits, ModInt};

/// Inclusive 1-based range `[l, r]`, tagged with its position in the submitted batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub id: usize,
    pub l: usize,
    pub r: usize,
}

impl Query {
    pub fn contains(&self, index: usize) -> bool {
        self.l <= index && index <= self.r
    }
}

/// A validated sequence together with the queries asked about it.
#[derive(Debug, Clone)]
pub struct QueryBatch {
    values: Vec<u32>,
    k: usize,
    queries: Vec<Query>,
}

impl QueryBatch {
    /// Checks sizes against `limits` (and that the solver's matrices can be
    /// allocated at all), every value against `[1, k]` and every range
    /// against `[1, n]`, in that order. Query ids follow the order of `ranges`.
    pub fn new(
        values: Vec<u32>,
        k: usize,
        ranges: &[(usize, usize)],
        limits: &Limits,
    ) -> Result<QueryBatch, Error> {
        let n = values.len();
        limits.check_n(n)?;
        limits.check_k(k)?;
        limits.check_q(ranges.len())?;
        limits.check_arena(n, k)?;

        for (i, &value) in values.iter().enumerate() {
            if value == 0 || value as usize > k {
                return Err(Error::InvalidValue {
                    index: i + 1,
                    value: value as i64,
                    k,
                });
            }
        }

        let queries = ranges
            .iter()
            .enumerate()
            .map(|(id, &(l, r))| {
                if l == 0 || l > r || r > n {
                    Err(Error::InvalidQueryRange { id, l, r, n })
                } else {
                    Ok(Query { id, l, r })
                }
            })
            .collect::<Result<Vec<Query>, Error>>()?;

        Ok(QueryBatch { values, k, queries })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Value at 1-based `index`.
    pub fn value(&self, index: usize) -> usize {
        self.values[index - 1] as usize
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }
}

/// One result slot per query id, each written once.
#[derive(Debug, Clone)]
pub struct Answers {
    slots: Vec<Option<ModInt>>,
}

impl Answers {
    pub fn new(len: usize) -> Answers {
        Answers {
            slots: vec![None; len],
        }
    }

    pub fn set(&mut self, id: usize, value: ModInt) {
        debug_assert!(self.slots[id].is_none(), "query #{id} answered twice");
        self.slots[id] = Some(value);
    }

    pub fn get(&self, id: usize) -> Option<ModInt> {
        self.slots[id]
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Results ordered by query id.
    pub fn into_vec(self) -> Vec<ModInt> {
        debug_assert!(self.is_complete());
        self.slots
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_submission_order() {
        let batch = QueryBatch::new(vec![1, 2, 1], 2, &[(2, 3), (1, 1)], &Limits::default()).unwrap();
        assert_eq!(
            batch.queries(),
            &[Query { id: 0, l: 2, r: 3 }, Query { id: 1, l: 1, r: 1 }]
        );
        assert_eq!(batch.value(2), 2);
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn test_invalid_value() {
        let limits = Limits::default();
        assert_eq!(
            QueryBatch::new(vec![1, 3], 2, &[], &limits).unwrap_err(),
            Error::InvalidValue {
                index: 2,
                value: 3,
                k: 2
            }
        );
        assert!(matches!(
            QueryBatch::new(vec![0], 2, &[], &limits),
            Err(Error::InvalidValue { index: 1, .. })
        ));
    }

    #[test]
    fn test_zero_alphabet_rejects_every_value() {
        let limits = Limits::default();
        assert!(matches!(
            QueryBatch::new(vec![1], 0, &[(1, 1)], &limits),
            Err(Error::InvalidValue { .. })
        ));
        assert!(QueryBatch::new(vec![], 0, &[], &limits).is_ok());
    }

    #[test]
    fn test_invalid_ranges() {
        let limits = Limits::default();
        for (l, r) in [(0, 1), (2, 1), (1, 4), (4, 4)] {
            assert_eq!(
                QueryBatch::new(vec![1, 1, 1], 1, &[(1, 1), (l, r)], &limits).unwrap_err(),
                Error::InvalidQueryRange { id: 1, l, r, n: 3 }
            );
        }
    }

    #[test]
    fn test_capacity() {
        let limits = Limits {
            max_n: 2,
            max_k: 3,
            max_q: 1,
        };
        assert!(matches!(
            QueryBatch::new(vec![1, 1, 1], 1, &[], &limits),
            Err(Error::CapacityExceeded { requested: 3, limit: 2, .. })
        ));
        assert!(matches!(
            QueryBatch::new(vec![1], 4, &[], &limits),
            Err(Error::CapacityExceeded { requested: 4, limit: 3, .. })
        ));
        assert!(matches!(
            QueryBatch::new(vec![1], 1, &[(1, 1), (1, 1)], &limits),
            Err(Error::CapacityExceeded { requested: 2, limit: 1, .. })
        ));
    }

    #[test]
    fn test_unbounded_alphabet_is_rejected() {
        let limits = Limits::unbounded();
        assert!(matches!(
            QueryBatch::new(vec![1], usize::MAX, &[(1, 1)], &limits),
            Err(Error::CapacityExceeded { .. })
        ));
        let limits = Limits {
            max_n: 10,
            max_k: usize::MAX,
            max_q: 10,
        };
        assert!(matches!(
            crate::solve(vec![1, 1], 1 << 32, &[(1, 2)], &limits),
            Err(Error::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_answers() {
        let mut answers = Answers::new(2);
        answers.set(1, ModInt::new(7));
        assert!(!answers.is_complete());
        answers.set(0, ModInt::ONE);
        assert!(answers.is_complete());
        assert_eq!(answers.get(1), Some(ModInt::new(7)));
        assert_eq!(answers.into_vec(), vec![ModInt::ONE, ModInt::new(7)]);
    }
}
