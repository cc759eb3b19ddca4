use thiserror::Error;

/// Failures of matrix access and overlay.
///
/// None of these leave the matrix modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("out of range of width: {w} not in 0..{width}")]
    OutOfRangeWidth { w: isize, width: usize },

    #[error("out of range of height: {h} not in 0..{height}")]
    OutOfRangeHeight { h: isize, height: usize },

    #[error("matrix too large: {width}x{height} cells do not fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("dimension mismatch: {left:?} vs {right:?} (width, height)")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

/// Failures turning raw codes, data strings or config files into values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown state code 0x{0:X}")]
    UnknownState(u16),

    #[error("unknown scan direction {0}")]
    UnknownDirection(u8),

    #[error("unknown scan direction name '{0}'")]
    UnknownDirectionName(String),

    #[error("invalid character '{0}' in data string at position {1}")]
    InvalidChar(char, usize),

    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("data string holds {found} cells, expected {expected}")]
    DataLength { expected: usize, found: usize },

    #[cfg(feature = "serde")]
    #[error("config error: {0}")]
    Config(String),
}
