//! Error types for MargaNav

use thiserror::Error;

use crate::core::Cell;

/// MargaNav error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("Invalid maze dimension {0}: must be even and at least 4")]
    InvalidDimension(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Map inconsistency: parent chain from {cell} does not reach the known path")]
    MapInconsistency { cell: Cell },

    #[error("Destination not reachable in one move: {0}")]
    UnreachableDirectMove(#[from] DirectMoveError),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;

/// Why a destination cannot be reached with a single rotate-and-move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectMoveError {
    /// Destination shares neither row nor column with the robot.
    #[error("destination is not in the same row or column")]
    NotAligned,

    /// Destination is further than one move allows.
    #[error("destination is {distance} cells away (max {max})")]
    TooFar { distance: i32, max: i32 },

    /// Destination lies outside the maze.
    #[error("destination is outside the maze")]
    OutOfBounds,

    /// An edge on the way has not been observed passable.
    #[error("edge {reachable} cells out is not known passable")]
    Blocked { reachable: i32 },
}

impl DirectMoveError {
    /// Short code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAligned => "NOT_ALIGNED",
            Self::TooFar { .. } => "TOO_FAR",
            Self::OutOfBounds => "OUT_OF_BOUNDS",
            Self::Blocked { .. } => "BLOCKED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NavError::InvalidDimension(5);
        assert_eq!(
            err.to_string(),
            "Invalid maze dimension 5: must be even and at least 4"
        );

        let err = NavError::MapInconsistency {
            cell: Cell::new(2, 3),
        };
        assert!(err.to_string().contains("(2, 3)"));
    }

    #[test]
    fn test_direct_move_conversion() {
        let err: NavError = DirectMoveError::TooFar {
            distance: 5,
            max: 3,
        }
        .into();
        assert!(matches!(
            err,
            NavError::UnreachableDirectMove(DirectMoveError::TooFar { .. })
        ));
        assert_eq!(DirectMoveError::Blocked { reachable: 1 }.code(), "BLOCKED");
    }
}
