use std::str::{FromStr, SplitWhitespace};

use crate::{Error, Limits};

/// Whitespace-separated token reader over an in-memory input.
pub struct Scanner<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Scanner {
            tokens: src.split_whitespace(),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next<T: FromStr>(&mut self, field: &'static str) -> Result<T, Error> {
        let token = self.tokens.next().ok_or(Error::UnexpectedEof { field })?;
        token.parse().map_err(|_| Error::Parse {
            field,
            token: token.to_string(),
        })
    }
}

/// Raw batch as read from text: `n k`, `n` values, `q`, then `q` pairs `l r`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub k: usize,
    pub values: Vec<u32>,
    pub ranges: Vec<(usize, usize)>,
}

impl Input {
    /// Counts are checked against `limits` before anything is allocated for them,
    /// and each value against `[1, k]` as soon as it is read.
    /// Tokens after the last query are ignored.
    pub fn parse(src: &str, limits: &Limits) -> Result<Input, Error> {
        let mut scanner = Scanner::new(src);

        let n: usize = scanner.next("sequence length")?;
        limits.check_n(n)?;
        let k: usize = scanner.next("alphabet bound")?;
        limits.check_k(k)?;
        limits.check_arena(n, k)?;
        let values = (1..=n)
            .map(|index| -> Result<u32, Error> {
                let value: i64 = scanner.next("sequence value")?;
                u32::try_from(value)
                    .ok()
                    .filter(|&v| v >= 1 && v as usize <= k)
                    .ok_or(Error::InvalidValue { index, value, k })
            })
            .collect::<Result<Vec<u32>, Error>>()?;

        let q: usize = scanner.next("query count")?;
        limits.check_q(q)?;
        let ranges = (0..q)
            .map(|_| -> Result<(usize, usize), Error> {
                Ok((scanner.next("query start")?, scanner.next("query end")?))
            })
            .collect::<Result<Vec<(usize, usize)>, Error>>()?;

        Ok(Input { k, values, ranges })
    }
}
