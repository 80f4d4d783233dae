use thiserror::Error;

/// Result type for registry, catalog and offset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the library.
///
/// Registry mutations return these directly so a front end can no-op or show a
/// message. Display paths (local-time labels, business-hour bitmaps) swallow
/// [`Error::UnknownTimeZone`] and fall back to a sentinel instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The registry already holds its maximum number of locations.
    #[error("location limit reached ({capacity} locations)")]
    CapacityExceeded { capacity: usize },

    /// The timezone is already tracked by the registry.
    #[error("timezone '{0}' is already tracked")]
    DuplicateZone(String),

    /// `remove` was called with an index outside `[0, len)`.
    #[error("index {index} out of range for {len} locations")]
    IndexOutOfRange { index: usize, len: usize },

    /// The identifier does not resolve in the timezone database.
    #[error("unknown timezone '{0}'")]
    UnknownTimeZone(String),

    /// Business window bounds outside `0..=23`.
    #[error("invalid business window {start}-{end} (hours must be 0..=23)")]
    InvalidWindow { start: u32, end: u32 },

    /// A window string that is not of the form `START-END`.
    #[error("invalid business window '{0}' (expected START-END)")]
    InvalidWindowSpec(String),

    /// The catalog source yielded no identifiers at all.
    #[error("timezone catalog is empty")]
    EmptyCatalog,

    /// A `City=Zone` location string could not be parsed.
    #[error("invalid location '{0}' (expected City=Area/Zone)")]
    InvalidLocationSpec(String),
}
