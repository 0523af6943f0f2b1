use thiserror::Error;

/// Why a field could not be read as a number.
///
/// The tolerant accessors on [`Record`](crate::Record) collapse all of these
/// into a sentinel; the `parse_*` accessors hand them back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("field index {index} out of range for a record of {len} fields")]
    OutOfRange { index: usize, len: usize },

    #[error("no numeric prefix in {raw:?}")]
    NoMatch { raw: String },

    #[error("numeric prefix {matched:?} of {raw:?} is not representable")]
    Invalid { raw: String, matched: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("invalid column format {spec:?}: {message}")]
    ColumnSpec { spec: String, message: String },

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
