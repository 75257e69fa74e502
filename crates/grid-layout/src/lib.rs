// ABOUTME: Grid layout resolution for slide designs.
// ABOUTME: Splits a bounding box across nested rows and columns weighted out of 12.

mod error;
mod geometry;
mod node;
mod slide;

pub use error::{BuildError, LayoutError, NodePath};
pub use geometry::{Margins, Panel, Rect};
pub use node::{GridNode, NodeContent, Orientation, Renderable, Surface, GRID_UNITS};
pub use slide::SlideFrame;
