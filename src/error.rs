use crate::entry::Key;
use std::error;
use std::fmt;
use std::io;
use std::result;

/// A structural defect found while validating a tree.
///
/// None of these can be produced by the public operations of the maps; they exist so tests can
/// report which invariant broke and where.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvariantError {
    /// `key` does not sort strictly between the keys bounding its subtree.
    Unordered { key: Key },
    /// The height stored on an avl node disagrees with its subtrees.
    HeightMismatch { key: Key, stored: usize, actual: usize },
    /// The balance factor of an avl node left `{-1, 0, 1}`.
    Unbalanced { key: Key, balance: i64 },
    /// The root of a red black tree is red.
    RedRoot { key: Key },
    /// A red node has a red child.
    RedViolation { parent: Key, child: Key },
    /// Two paths below `key` pass through a different number of black nodes.
    BlackHeightMismatch { key: Key, left: usize, right: usize },
    /// A child does not point back at the node that owns it.
    BrokenParentLink { key: Key },
    /// The number of reachable nodes disagrees with the recorded length.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvariantError::Unordered { key } => write!(f, "key {} is out of order", key),
            InvariantError::HeightMismatch {
                key,
                stored,
                actual,
            } => write!(
                f,
                "node {} stores height {} but has height {}",
                key, stored, actual
            ),
            InvariantError::Unbalanced { key, balance } => {
                write!(f, "node {} has balance factor {}", key, balance)
            },
            InvariantError::RedRoot { key } => write!(f, "root {} is red", key),
            InvariantError::RedViolation { parent, child } => {
                write!(f, "red node {} has red child {}", parent, child)
            },
            InvariantError::BlackHeightMismatch { key, left, right } => write!(
                f,
                "node {} has black height {} on the left and {} on the right",
                key, left, right
            ),
            InvariantError::BrokenParentLink { key } => {
                write!(f, "node {} does not point back at its parent", key)
            },
            InvariantError::LengthMismatch { expected, actual } => write!(
                f,
                "tree records {} nodes but {} are reachable",
                expected, actual
            ),
        }
    }
}

impl error::Error for InvariantError {}

/// Failures of the driver: reading and decoding the records, parsing its arguments, or a tree
/// failing validation after a run.
#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    SerdeError(serde_json::Error),
    Invariant(InvariantError),
    Usage(String),
}

impl From<InvariantError> for Error {
    fn from(err: InvariantError) -> Error {
        Error::Invariant(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::SerdeError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::SerdeError(error) => Some(error),
            Error::Invariant(error) => Some(error),
            Error::Usage(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::SerdeError(error) => write!(f, "{}", error),
            Error::Invariant(error) => write!(f, "invariant violated: {}", error),
            Error::Usage(message) => write!(f, "{}", message),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
