// ABOUTME: Leaf panels that draw themselves onto a slide surface.
// ABOUTME: Each component turns its resolved frame into a shape command.

pub mod chart;
pub mod image;
pub mod shape;
pub mod table;
pub mod text;

pub use chart::{
    AxisFormat, BarStyle, Chart, ChartData, ChartFormat, ChartKind, PieSplit, Series, Stacking,
    TickLabelPosition, TickMark,
};
pub use image::Image;
pub use shape::{
    ChartShape, ComponentError, PictureShape, Shape, ShapeFrame, ShapeSurface, TableShape,
    TextBoxShape,
};
pub use table::{Table, TableStyle};
pub use text::{Alignment, Text};
