//! Offline range queries over a bounded-alphabet sequence, answered by
//! composing small transition matrices modulo a prime.

mod batch;
mod error;
mod limits;
mod matrix;
mod modint;
mod scanner;
mod solver;

pub use batch::{Answers, Query, QueryBatch};
pub use error::Error;
pub use limits::Limits;
pub use matrix::{unit_vector, Matrix, NotSquareError};
pub use modint::{ModInt, MOD};
pub use scanner::{Input, Scanner};
pub use solver::{Solver, BASE_RESULT};

/// Validates the batch and answers every query, in the order of `ranges`.
pub fn solve(
    values: Vec<u32>,
    k: usize,
    ranges: &[(usize, usize)],
    limits: &Limits,
) -> Result<Vec<ModInt>, Error> {
    let batch = QueryBatch::new(values, k, ranges, limits)?;
    Ok(Solver::new(&batch).run())
}

/// Reads a text batch (see [`Input::parse`]) and answers it.
pub fn solve_str(src: &str, limits: &Limits) -> Result<Vec<ModInt>, Error> {
    let Input { k, values, ranges } = Input::parse(src, limits)?;
    solve(values, k, &ranges, limits)
}
