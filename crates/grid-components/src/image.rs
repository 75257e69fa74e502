// ABOUTME: Picture component.
// ABOUTME: Places an image file stretched to its panel.

use std::path::PathBuf;

use grid_layout::{Margins, Panel, Renderable};

use crate::shape::{ComponentError, PictureShape, Shape, ShapeFrame, ShapeSurface};

#[derive(Debug, Clone)]
pub struct Image {
    panel: Panel,
    pub path: PathBuf,
}

impl Image {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            panel: Panel::new(),
            path: path.into(),
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.panel = self.panel.with_margins(margins);
        self
    }
}

impl<S> Renderable<S> for Image
where
    S: ShapeSurface + ?Sized,
    S::Error: From<ComponentError>,
{
    fn panel(&self) -> &Panel {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }

    fn kind(&self) -> &'static str {
        "image"
    }

    fn render_into(&self, surface: &mut S) -> Result<(), S::Error> {
        let frame = ShapeFrame::from_panel(&self.panel)?;
        surface.add_shape(Shape::Picture(PictureShape {
            frame,
            path: self.path.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::testing::ShapeList;
    use grid_layout::{GridNode, Rect};

    #[test]
    fn picture_fills_its_column() {
        let mut design = GridNode::<ShapeList>::row(
            12.0,
            vec![
                GridNode::column_leaf(4.0, Image::new("logo.png")),
                GridNode::column_leaf(8.0, Image::new("photo.jpg")),
            ],
        );
        let mut surface = ShapeList::default();
        design.build(Rect::new(0.0, 0.0, 12.0, 2.0), &mut surface).unwrap();

        let Shape::Picture(photo) = &surface.shapes[1] else {
            panic!("expected a picture, got {:?}", surface.shapes[1]);
        };
        assert_eq!(photo.path, PathBuf::from("photo.jpg"));
        assert_eq!(photo.frame.x, grid_core::Emu::from_inches(4.0));
        assert_eq!(photo.frame.cx, grid_core::Emu::from_inches(8.0));
    }
}
