/// Errors reported by the navigable collections.
///
/// Both variants are recoverable caller errors. A key that is simply not
/// present is never an error; lookups return `None` for it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    /// `first`, `last`, `peek` or `extract_top` was called on an empty collection.
    #[error("the collection is empty")]
    EmptyContainer,
    /// A range query was given a start bound that lies after its end bound.
    #[error("range start is greater than range end")]
    InvalidRange,
}

/// A `Result` whose error type is [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
