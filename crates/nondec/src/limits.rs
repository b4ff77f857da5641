use crate::{Error, ModInt};

/// Largest batch a solve accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_n: usize,
    pub max_k: usize,
    pub max_q: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_n: 50_000,
            max_k: 24,
            max_q: 200_000,
        }
    }
}

impl Limits {
    pub fn unbounded() -> Self {
        Limits {
            max_n: usize::MAX,
            max_k: usize::MAX,
            max_q: usize::MAX,
        }
    }

    pub fn check_n(&self, n: usize) -> Result<(), Error> {
        check("sequence length", n, self.max_n)
    }

    pub fn check_k(&self, k: usize) -> Result<(), Error> {
        check("alphabet bound", k, self.max_k)
    }

    pub fn check_q(&self, q: usize) -> Result<(), Error> {
        check("query count", q, self.max_q)
    }

    /// The solver keeps one `(k + 1) x (k + 1)` matrix per position `0..=n`;
    /// that many entries must fit in a single allocation whatever the limits say.
    pub fn check_arena(&self, n: usize, k: usize) -> Result<(), Error> {
        let entries = k
            .checked_add(1)
            .and_then(|size| size.checked_mul(size))
            .and_then(|square| square.checked_mul(n.saturating_add(1)));
        let limit = isize::MAX as usize / std::mem::size_of::<ModInt>();
        check("matrix arena size", entries.unwrap_or(usize::MAX), limit)
    }
}

fn check(what: &'static str, requested: usize, limit: usize) -> Result<(), Error> {
    if requested > limit {
        return Err(Error::CapacityExceeded {
            what,
            requested,
            limit,
        });
    }
    Ok(())
}
