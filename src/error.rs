//! Error types for map construction and minimization.

use std::fmt;
use std::io;

use crate::types::MAX_VARIABLES;

/// Ways an input map can fail to match its declared size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// Variable count outside `1..=MAX_VARIABLES`
    VariableCount {
        /// The requested number of variables
        count: usize,
    },
    /// The matrix has the wrong number of rows
    RowCount {
        /// Rows required by the variable count
        expected: usize,
        /// Rows supplied
        actual: usize,
    },
    /// A matrix row has the wrong number of columns
    ColumnCount {
        /// Index of the offending row
        row: usize,
        /// Columns required by the variable count
        expected: usize,
        /// Columns supplied in that row
        actual: usize,
    },
    /// A minterm index does not fit the variable count
    Minterm {
        /// The offending minterm
        minterm: usize,
        /// The largest valid minterm
        max: usize,
    },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::VariableCount { count } => write!(
                f,
                "Variable count {} out of range (valid range: 1..={})",
                count, MAX_VARIABLES
            ),
            DimensionError::RowCount { expected, actual } => {
                write!(f, "Expected {} rows, got {}", expected, actual)
            }
            DimensionError::ColumnCount {
                row,
                expected,
                actual,
            } => write!(
                f,
                "Expected {} columns in row {}, got {}",
                expected, row, actual
            ),
            DimensionError::Minterm { minterm, max } => write!(
                f,
                "Minterm {} out of range (valid range: 0..={})",
                minterm, max
            ),
        }
    }
}

impl std::error::Error for DimensionError {}

/// Errors reported by the minimizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KmapError {
    /// The input does not describe a valid map; the caller should ask again
    InvalidDimension(DimensionError),
    /// True cells remain that no candidate group covers.
    ///
    /// Never produced when candidates come from the group finder.
    UnsatisfiableCover {
        /// Number of true cells left without a covering candidate
        uncovered: usize,
    },
}

impl fmt::Display for KmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmapError::InvalidDimension(e) => write!(f, "Invalid dimension: {}", e),
            KmapError::UnsatisfiableCover { uncovered } => write!(
                f,
                "Unsatisfiable cover: {} true cell(s) have no candidate group",
                uncovered
            ),
        }
    }
}

impl std::error::Error for KmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KmapError::InvalidDimension(e) => Some(e),
            KmapError::UnsatisfiableCover { .. } => None,
        }
    }
}

impl From<DimensionError> for KmapError {
    fn from(err: DimensionError) -> Self {
        KmapError::InvalidDimension(err)
    }
}

impl From<KmapError> for io::Error {
    fn from(err: KmapError) -> Self {
        match err {
            KmapError::InvalidDimension(_) => io::Error::new(io::ErrorKind::InvalidInput, err),
            KmapError::UnsatisfiableCover { .. } => io::Error::other(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, KmapError>;

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_variable_count_message() {
        let err = KmapError::from(DimensionError::VariableCount { count: 11 });
        let msg = err.to_string();
        assert!(msg.contains("Variable count 11"));
        assert!(msg.contains("1..=10"));
    }

    #[test]
    fn test_column_count_message() {
        let err = DimensionError::ColumnCount {
            row: 1,
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Expected 4 columns in row 1, got 3");
    }

    #[test]
    fn test_source_chain() {
        let err = KmapError::from(DimensionError::RowCount {
            expected: 2,
            actual: 1,
        });
        assert!(err.source().is_some());
        assert!(KmapError::UnsatisfiableCover { uncovered: 1 }.source().is_none());
    }

    #[test]
    fn test_to_io_error() {
        let err = KmapError::from(DimensionError::VariableCount { count: 0 });
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);

        let io_err: io::Error = KmapError::UnsatisfiableCover { uncovered: 3 }.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
    }
}
