// ABOUTME: In-memory slide surface that records placed shapes.
// ABOUTME: Prints the recorded slide as a readable listing or as JSON.

use std::fmt::Write as _;

use grid_components::{ComponentError, Shape, ShapeSurface};
use grid_layout::Surface;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error(transparent)]
    Component(#[from] ComponentError),
}

/// One slide's worth of shapes, in drawing order
#[derive(Debug, Default, Serialize)]
pub struct ShapeLog {
    pub title: Option<String>,
    pub shapes: Vec<Shape>,
}

impl ShapeLog {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            shapes: Vec::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_listing(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            let _ = writeln!(out, "# {}", title);
        }
        for (index, shape) in self.shapes.iter().enumerate() {
            let frame = shape.frame();
            let _ = writeln!(
                out,
                "{:>3}  {:<9} x={:>6.3} y={:>6.3} w={:>6.3} h={:>6.3}  {}",
                index,
                shape.kind(),
                frame.x.inches(),
                frame.y.inches(),
                frame.cx.inches(),
                frame.cy.inches(),
                describe(shape)
            );
        }
        out
    }
}

fn describe(shape: &Shape) -> String {
    match shape {
        Shape::TextBox(text) => format!("{:?}", text.text),
        Shape::Table(table) => format!("{}x{} table", table.rows, table.cols),
        Shape::Chart(chart) => chart.chart_type.clone(),
        Shape::Picture(picture) => picture.path.display().to_string(),
    }
}

impl Surface for ShapeLog {
    type Error = LogError;
}

impl ShapeSurface for ShapeLog {
    fn add_shape(&mut self, shape: Shape) -> Result<(), LogError> {
        tracing::debug!("Added {} shape", shape.kind());
        self.shapes.push(shape);
        Ok(())
    }
}
