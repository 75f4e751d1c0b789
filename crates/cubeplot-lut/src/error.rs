//! Cube parsing error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for cube parsing operations.
pub type CubeResult<T> = Result<T, CubeError>;

/// Errors that can occur while reading a .cube file.
///
/// Line numbers are 1-based and refer to the physical line in the input.
#[derive(Debug, Error)]
pub enum CubeError {
    /// A `LUT_1D_SIZE` directive was found. Only 3D tables are supported.
    #[error("line {line}: LUT_1D_SIZE is not supported, only 3D cube files can be read")]
    UnsupportedFormat {
        /// Line of the directive
        line: usize,
    },

    /// A data row had the wrong token count or a token that is not a number.
    #[error("line {line}: malformed data row: {reason}")]
    MalformedRow {
        /// Line of the row
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// A data row arrived after the grid already held `size^3` samples.
    #[error("line {line}: too many data rows, grid of size {size} is already full")]
    GridOverflow {
        /// Line of the extra row
        line: usize,
        /// Declared grid size
        size: usize,
    },

    /// No `LUT_3D_SIZE` was declared before the data.
    #[error("LUT size not specified in cube file")]
    MissingSize,

    /// `LUT_3D_SIZE` value that cannot back a grid.
    #[error("line {line}: invalid LUT_3D_SIZE: {reason}")]
    InvalidSize {
        /// Line of the directive
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// The input file does not exist.
    #[error("{} does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`CubeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 1D tables are rejected.
    UnsupportedFormat,
    /// Bad data row, including a row that overflows the grid.
    MalformedRow,
    /// No size declared before end of input.
    MissingSize,
    /// Size directive with an unusable value.
    InvalidSize,
    /// Input file missing.
    FileNotFound,
    /// Any other I/O failure.
    Io,
}

impl CubeError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::MalformedRow { .. } | Self::GridOverflow { .. } => ErrorKind::MalformedRow,
            Self::MissingSize => ErrorKind::MissingSize,
            Self::InvalidSize { .. } => ErrorKind::InvalidSize,
            Self::FileNotFound(_) => ErrorKind::FileNotFound,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Returns the input line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnsupportedFormat { line }
            | Self::MalformedRow { line, .. }
            | Self::GridOverflow { line, .. }
            | Self::InvalidSize { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_is_a_malformed_row() {
        let err = CubeError::GridOverflow { line: 12, size: 2 };
        assert_eq!(err.kind(), ErrorKind::MalformedRow);
        assert_eq!(err.line(), Some(12));
    }

    #[test]
    fn messages_name_the_line() {
        let err = CubeError::MalformedRow {
            line: 7,
            reason: "expected 3 values, found 2".into(),
        };
        assert_eq!(
            err.to_string(),
            "line 7: malformed data row: expected 3 values, found 2"
        );
        assert_eq!(CubeError::MissingSize.line(), None);
    }
}
