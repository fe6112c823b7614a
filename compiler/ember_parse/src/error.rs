//! Parse error marker.

/// Marker for a parse failure.
///
/// The diagnostic describing the failure is already in the queue when this
/// is returned; the marker only drives panic-mode recovery (unwind to the
/// nearest statement boundary, synchronize, keep parsing).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseError;

pub(crate) type ParseResult<T> = Result<T, ParseError>;
