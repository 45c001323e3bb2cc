//! Error types for grid placement and model construction

/// Errors raised by [`Grid`](crate::grid::Grid) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Requested coordinate lies outside the configured rectangle
    OutOfBounds {
        /// Requested x coordinate
        x: usize,
        /// Requested y coordinate
        y: usize,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },
    /// Attempt to place a second agent onto an already-occupied cell
    OccupiedCell {
        /// Occupied x coordinate
        x: usize,
        /// Occupied y coordinate
        y: usize,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Coordinate ({x}, {y}) is outside the {width}x{height} grid"
            ),
            GridError::OccupiedCell { x, y } => {
                write!(f, "Cell ({x}, {y}) already holds an agent")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors raised during [`ForestFire`](crate::model::ForestFire) construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Grid dimensions must be positive
    InvalidDimensions {
        /// Requested height
        height: usize,
        /// Requested width
        width: usize,
    },
    /// Tree density must lie in [0, 1]
    InvalidDensity(f64),
    /// A grid operation failed during initialization
    Grid(GridError),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidDimensions { height, width } => write!(
                f,
                "Grid dimensions must be positive, got {height}x{width}"
            ),
            ModelError::InvalidDensity(density) => {
                write!(f, "Tree density must be in [0, 1], got {density}")
            }
            ModelError::Grid(err) => write!(f, "Grid operation failed: {err}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for ModelError {
    fn from(err: GridError) -> Self {
        ModelError::Grid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_display() {
        let err = GridError::OutOfBounds {
            x: 7,
            y: 2,
            width: 5,
            height: 5,
        };
        assert_eq!(err.to_string(), "Coordinate (7, 2) is outside the 5x5 grid");

        let err = GridError::OccupiedCell { x: 1, y: 3 };
        assert_eq!(err.to_string(), "Cell (1, 3) already holds an agent");
    }

    #[test]
    fn test_model_error_from_grid_error() {
        let err = ModelError::from(GridError::OccupiedCell { x: 0, y: 0 });
        assert!(matches!(err, ModelError::Grid(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_model_error_display() {
        let err = ModelError::InvalidDensity(1.5);
        assert_eq!(err.to_string(), "Tree density must be in [0, 1], got 1.5");
    }
}
