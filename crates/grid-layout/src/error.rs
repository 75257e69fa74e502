// ABOUTME: Error types for grid validation and slide building.
// ABOUTME: Structural problems are reported with the path of the offending node.

use std::fmt;

use crate::Orientation;

/// Child indices leading from the root to a node
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePath(pub Vec<usize>);

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root")?;
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("{orientation} at {path} has no children")]
    EmptyContainer {
        path: NodePath,
        orientation: Orientation,
    },

    #[error("{orientation} at {path} has weight {weight}, expected a positive number")]
    InvalidWeight {
        path: NodePath,
        orientation: Orientation,
        weight: f64,
    },

    #[error("{orientation} at {path} sits directly inside another {orientation}; rows and columns must alternate")]
    OrientationMismatch {
        path: NodePath,
        orientation: Orientation,
    },

    #[error("children of {orientation} at {path} have weights summing to {sum}, expected 12")]
    WeightSumMismatch {
        path: NodePath,
        orientation: Orientation,
        sum: f64,
    },

    #[error("panel geometry has not been resolved")]
    Unresolved,
}

/// Failure while building a design onto a surface.
///
/// Renderer errors pass through untouched.
#[derive(Debug, thiserror::Error)]
pub enum BuildError<E> {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Render(E),
}

impl<E> BuildError<E> {
    pub fn as_render(&self) -> Option<&E> {
        match self {
            BuildError::Render(e) => Some(e),
            BuildError::Layout(_) => None,
        }
    }
}
