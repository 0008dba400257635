//! Everything that can go wrong while building or mutating a `DoubleDict`.

use thiserror::Error;

/// Errors returned by `DoubleDict` construction and mutation.
///
/// Validation always happens before anything is committed, so any of these leaves the map
/// exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// More positional sources were passed than the call accepts.
    #[error("DoubleDict expected at most {expected} arguments, got {got}")]
    InvalidArgument { expected: usize, got: usize },

    /// Two keys would end up sharing one value.
    #[error("DoubleDict values must be unique")]
    DuplicateValue,

    /// A value can't be used as a lookup key.
    #[error("DoubleDict values must be hashable")]
    UnhashableValue,

    /// A key can't be used as a lookup key.
    #[error("DoubleDict keys must be hashable")]
    UnhashableKey,

    /// A derived view was assigned to.
    #[error("DoubleDict.{0} cannot be set")]
    ImmutableProperty(&'static str),
}

pub type Result<T> = ::std::result::Result<T, Error>;
