use std::fmt;

/// Everything that can reject a batch before or while it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Query `id` is not a range `1 <= l <= r <= n`.
    InvalidQueryRange { id: usize, l: usize, r: usize, n: usize },
    /// Sequence value at 1-based `index` is outside `[1, k]`.
    InvalidValue { index: usize, value: i64, k: usize },
    /// `what` asked for `requested` entries, more than `limit`.
    CapacityExceeded {
        what: &'static str,
        requested: usize,
        limit: usize,
    },
    /// A token could not be read as the expected field.
    Parse { field: &'static str, token: String },
    /// Input ended while `field` was still expected.
    UnexpectedEof { field: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidQueryRange { id, l, r, n } => {
                write!(f, "query #{id} has invalid range [{l}, {r}] for a sequence of length {n}")
            }
            Error::InvalidValue { index, value, k } => {
                write!(f, "value {value} at position {index} is outside [1, {k}]")
            }
            Error::CapacityExceeded {
                what,
                requested,
                limit,
            } => write!(f, "{what} is {requested}, above the limit of {limit}"),
            Error::Parse { field, token } => write!(f, "cannot parse {field} from `{token}`"),
            Error::UnexpectedEof { field } => write!(f, "input ended while reading {field}"),
        }
    }
}

impl std::error::Error for Error {}
