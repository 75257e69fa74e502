// ABOUTME: Text box component.
// ABOUTME: Draws a single paragraph in a rectangle with optional fill and outline.

use grid_core::{Color, TextDefaults};
use grid_layout::{Margins, Panel, Renderable};
use serde::{Deserialize, Serialize};

use crate::shape::{ComponentError, Shape, ShapeFrame, ShapeSurface, TextBoxShape};

/// Paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Center,
    Distribute,
    Justify,
    JustifyLow,
    #[default]
    Left,
    Right,
    ThaiDistribute,
}

#[derive(Debug, Clone)]
pub struct Text {
    panel: Panel,
    pub text: String,
    pub alignment: Alignment,
    pub fill_color: Option<Color>,
    pub outline_color: Option<Color>,
    pub font_color: Color,
    pub bold: bool,
    /// Font size in points
    pub font_size: f64,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            panel: Panel::new(),
            text: text.into(),
            alignment: Alignment::default(),
            fill_color: Some(Color::WHITE),
            outline_color: None,
            font_color: Color::BLACK,
            bold: false,
            font_size: 16.0,
        }
    }

    /// Text box styled from the configured defaults
    pub fn with_defaults(text: impl Into<String>, defaults: &TextDefaults) -> Self {
        Self {
            fill_color: defaults.fill_color,
            font_color: defaults.font_color,
            font_size: defaults.font_size,
            ..Self::new(text)
        }
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn fill(mut self, color: Option<Color>) -> Self {
        self.fill_color = color;
        self
    }

    pub fn outline(mut self, color: Color) -> Self {
        self.outline_color = Some(color);
        self
    }

    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = color;
        self
    }

    pub fn font_size(mut self, points: f64) -> Self {
        self.font_size = points;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.panel = self.panel.with_margins(margins);
        self
    }

    pub(crate) fn to_shape(&self) -> Result<TextBoxShape, ComponentError> {
        Ok(TextBoxShape {
            frame: ShapeFrame::from_panel(&self.panel)?,
            text: self.text.clone(),
            alignment: self.alignment,
            font_size: self.font_size,
            bold: self.bold,
            font_color: self.font_color,
            fill_color: self.fill_color,
            outline_color: self.outline_color,
        })
    }
}

impl<S> Renderable<S> for Text
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
        "text"
    }

    fn render_into(&self, surface: &mut S) -> Result<(), S::Error> {
        let shape = self.to_shape()?;
        surface.add_shape(Shape::TextBox(shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::testing::ShapeList;
    use grid_core::Emu;
    use grid_layout::{GridNode, Rect};

    #[test]
    fn defaults_match_plain_text_box() {
        let text = Text::new("a");
        assert_eq!(text.alignment, Alignment::Left);
        assert_eq!(text.fill_color, Some(Color::WHITE));
        assert_eq!(text.outline_color, None);
        assert_eq!(text.font_color, Color::BLACK);
        assert_eq!(text.font_size, 16.0);
        assert!(!text.bold);
    }

    #[test]
    fn config_defaults_override_style() {
        let defaults = TextDefaults {
            font_size: 12.0,
            font_color: Color::rgb(0, 0, 128),
            fill_color: None,
        };
        let text = Text::with_defaults("a", &defaults).bold();
        assert_eq!(text.font_size, 12.0);
        assert_eq!(text.fill_color, None);
        assert!(text.bold);
    }

    #[test]
    fn renders_text_box_at_resolved_frame() {
        let text = Text::new("hello")
            .aligned(Alignment::Center)
            .outline(Color::BLACK)
            .font_size(20.0);
        let mut design = GridNode::<ShapeList>::row_leaf(12.0, text);
        let mut surface = ShapeList::default();
        design.build(Rect::new(1.0, 1.0, 2.0, 1.0), &mut surface).unwrap();

        let [Shape::TextBox(shape)] = surface.shapes.as_slice() else {
            panic!("expected one text box, got {:?}", surface.shapes);
        };
        assert_eq!(shape.text, "hello");
        assert_eq!(shape.alignment, Alignment::Center);
        assert_eq!(shape.outline_color, Some(Color::BLACK));
        assert_eq!(shape.font_size, 20.0);
        assert_eq!(shape.frame.x, Emu(914_400));
        assert_eq!(shape.frame.cx, Emu(1_828_800));
    }

    #[test]
    fn unresolved_text_fails_to_render() {
        let text = Text::new("floating");
        let mut surface = ShapeList::default();
        let result = <Text as Renderable<ShapeList>>::render_into(&text, &mut surface);
        assert!(result.is_err());
        assert!(surface.shapes.is_empty());
    }

    #[test]
    fn alignment_serializes_snake_case() {
        let json = serde_json::to_string(&Alignment::ThaiDistribute).unwrap();
        assert_eq!(json, "\"thai_distribute\"");
    }
}
