// ABOUTME: Slide content area derived from presentation settings.
// ABOUTME: Reserves header, footer, and side margins before the design is resolved.

use grid_core::{Config, WeightPolicy};

use crate::error::BuildError;
use crate::geometry::Rect;
use crate::node::{GridNode, Surface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    pub width: f64,
    pub height: f64,
    pub header_height: f64,
    pub footer_height: f64,
    pub left_margin: f64,
    pub right_margin: f64,
    pub weight_policy: WeightPolicy,
}

impl SlideFrame {
    pub fn from_config(config: &Config) -> Self {
        let (width, height) = config.slide_dimensions();
        Self {
            width,
            height,
            header_height: config.header_height,
            footer_height: config.footer_height,
            left_margin: config.left_margin,
            right_margin: config.right_margin,
            weight_policy: config.weight_policy,
        }
    }

    /// Area left for the design once header, footer and margins are taken out
    pub fn content_rect(&self) -> Rect {
        Rect {
            left: self.left_margin,
            top: self.header_height,
            width: self.width - self.left_margin - self.right_margin,
            height: self.height - self.header_height - self.footer_height,
        }
    }

    /// Resolve `design` into the content area and render it onto `surface`
    pub fn build<S: Surface + ?Sized>(
        &self,
        design: &mut GridNode<S>,
        surface: &mut S,
    ) -> Result<(), BuildError<S::Error>> {
        let bounds = self.content_rect();
        tracing::debug!(
            "Building slide design into {:.3}x{:.3} at ({:.3}, {:.3})",
            bounds.width,
            bounds.height,
            bounds.left,
            bounds.top
        );
        design.build_with_policy(bounds, surface, self.weight_policy)
    }
}

impl Default for SlideFrame {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
