// ABOUTME: Shape commands emitted by components and the surface that receives them.
// ABOUTME: Frames are converted to EMU here, the unit document renderers work in.

use std::path::PathBuf;

use grid_core::{Color, Emu};
use grid_layout::{LayoutError, Panel, Surface};
use serde::Serialize;

use crate::chart::{ChartData, ChartFormat};
use crate::text::Alignment;

/// Absolute position and size of a shape on the slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShapeFrame {
    pub x: Emu,
    pub y: Emu,
    pub cx: Emu,
    pub cy: Emu,
}

impl ShapeFrame {
    pub fn from_panel(panel: &Panel) -> Result<Self, ComponentError> {
        Ok(Self {
            x: panel.x()?,
            y: panel.y()?,
            cx: panel.cx()?,
            cy: panel.cy()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBoxShape {
    pub frame: ShapeFrame,
    pub text: String,
    pub alignment: Alignment,
    /// Font size in points
    pub font_size: f64,
    pub bold: bool,
    pub font_color: Color,
    pub fill_color: Option<Color>,
    pub outline_color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableShape {
    pub frame: ShapeFrame,
    pub rows: usize,
    pub cols: usize,
    /// Cell text, header row first when `first_row` is set
    pub cells: Vec<Vec<String>>,
    pub first_row: bool,
    pub first_col: bool,
    pub font_size: f64,
    pub style_id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartShape {
    pub frame: ShapeFrame,
    pub chart_type: String,
    pub data: ChartData,
    pub format: ChartFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PictureShape {
    pub frame: ShapeFrame,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    TextBox(TextBoxShape),
    Table(TableShape),
    Chart(ChartShape),
    Picture(PictureShape),
}

impl Shape {
    pub fn frame(&self) -> ShapeFrame {
        match self {
            Shape::TextBox(s) => s.frame,
            Shape::Table(s) => s.frame,
            Shape::Chart(s) => s.frame,
            Shape::Picture(s) => s.frame,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::TextBox(_) => "text_box",
            Shape::Table(_) => "table",
            Shape::Chart(_) => "chart",
            Shape::Picture(_) => "picture",
        }
    }
}

/// A slide that accepts shapes.
///
/// Components require `Self::Error: From<ComponentError>` so their own data
/// problems travel through the same channel as the surface's errors.
pub trait ShapeSurface: Surface {
    fn add_shape(&mut self, shape: Shape) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComponentError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("table row {row} has {found} cells, expected {expected}")]
    RaggedTable {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("table has no header and no rows")]
    EmptyTable,

    #[error("unknown table style: {0}")]
    UnknownTableStyle(String),

    #[error("series '{series}' has {found} values for {expected} categories")]
    SeriesLength {
        series: String,
        expected: usize,
        found: usize,
    },

    #[error("{chart_type} charts need {expected} data")]
    ChartDataMismatch {
        chart_type: String,
        expected: &'static str,
    },

    #[error("chart has no series")]
    EmptyChart,
}


#[cfg(test)]
mod tests {
    use super::*;
    use grid_layout::Rect;

    #[test]
    fn frame_requires_resolved_panel() {
        assert_eq!(
            ShapeFrame::from_panel(&Panel::new()),
            Err(ComponentError::Layout(LayoutError::Unresolved))
        );
    }

    #[test]
    fn frame_converts_inches_to_emu() {
        let panel = Panel::new().with_frame(Rect::new(1.0, 0.5, 2.0, 0.25));
        let frame = ShapeFrame::from_panel(&panel).unwrap();
        assert_eq!(frame.x, Emu(914_400));
        assert_eq!(frame.y, Emu(457_200));
        assert_eq!(frame.cx, Emu(1_828_800));
        assert_eq!(frame.cy, Emu(228_600));
    }
}
