use std::{fmt, io};

use thiserror::Error;

/// Errors raised while loading a point cloud or deriving its edges.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PointsError {
    /// The input contained no points.
    #[error("input contains no points")]
    EmptyInput,
    /// A line did not have exactly three comma-separated fields.
    #[error("line {line}: expected `x,y,z` but found `{content}`")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },
    /// A coordinate was not a valid 32-bit integer.
    #[error("line {line}: invalid coordinate `{value}`")]
    InvalidCoordinate {
        /// One-based line number.
        line: usize,
        /// The field that failed to parse.
        value: String,
    },
    /// The number of point pairs does not fit in memory addressing.
    #[error("{points} points produce more pairs than can be stored")]
    CapacityOverflow {
        /// Number of points in the cloud.
        points: usize,
    },
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl PointsError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> PointsErrorCode {
        match self {
            Self::EmptyInput => PointsErrorCode::EmptyInput,
            Self::MalformedLine { .. } => PointsErrorCode::MalformedLine,
            Self::InvalidCoordinate { .. } => PointsErrorCode::InvalidCoordinate,
            Self::CapacityOverflow { .. } => PointsErrorCode::CapacityOverflow,
            Self::Io(_) => PointsErrorCode::Io,
        }
    }
}

/// Machine-readable error codes for [`PointsError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum PointsErrorCode {
    /// The input contained no points.
    EmptyInput,
    /// A line did not have three fields.
    MalformedLine,
    /// A coordinate failed to parse.
    InvalidCoordinate,
    /// Too many points to enumerate every pair.
    CapacityOverflow,
    /// Reading the input failed.
    Io,
}

impl PointsErrorCode {
    /// Returns the stable string form of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "JUNCTION_POINTS_EMPTY_INPUT",
            Self::MalformedLine => "JUNCTION_POINTS_MALFORMED_LINE",
            Self::InvalidCoordinate => "JUNCTION_POINTS_INVALID_COORDINATE",
            Self::CapacityOverflow => "JUNCTION_POINTS_CAPACITY_OVERFLOW",
            Self::Io => "JUNCTION_POINTS_IO",
        }
    }
}

impl fmt::Display for PointsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
