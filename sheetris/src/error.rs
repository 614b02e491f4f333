use thiserror::Error;

/// Result type alias for packing operations.
pub type Result<T> = std::result::Result<T, PackError>;

/// Conditions under which the engine refuses to start a packing run.
///
/// Pieces that are too large for the sheet are not an error: they end up in
/// [`LayoutResult::unplaced`](crate::LayoutResult::unplaced).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackError {
    /// Non-positive sheet dimensions or a negative kerf.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A piece with a non-positive or non-finite dimension.
    #[error("invalid piece {id}: dimensions {width} x {height}")]
    InvalidPiece { id: usize, width: f64, height: f64 },

    /// Two pieces of the same run share an identifier.
    #[error("duplicate piece id: {0}")]
    DuplicatePieceId(usize),
}
