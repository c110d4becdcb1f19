//! Error types for checked bitboard operations.

use thiserror::Error;

/// Reasons a checked [`Bigboard`](crate::bitboard::Bigboard) operation can refuse its input.
///
/// The unchecked API panics with the `Display` text of these variants, since every one of
/// them is a caller bug rather than a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BigboardError {
    /// Width or height was zero.
    #[error("board dimensions must be positive, got {width}x{height}")]
    EmptyDimension { width: usize, height: usize },

    /// `width * height` does not fit in a `usize`.
    #[error("board of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },

    /// The two operands of a binary operation have different dimensions.
    #[error("board shapes differ: {left_width}x{left_height} vs {right_width}x{right_height}")]
    ShapeMismatch {
        left_width: usize,
        left_height: usize,
        right_width: usize,
        right_height: usize,
    },

    /// A bit index outside `0..size`.
    #[error("bit index {index} out of range for board of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, BigboardError>;
