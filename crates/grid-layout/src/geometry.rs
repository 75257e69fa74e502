// ABOUTME: Rectangle geometry shared by grid nodes and leaf panels.
// ABOUTME: Panels start unresolved and receive their frame from the parent node.

use grid_core::Emu;
use serde::{Deserialize, Serialize};

use crate::LayoutError;

/// Rectangle in slide units (inches unless the caller picks otherwise)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Shrink the rectangle by the given margins on each side
    pub fn inset(&self, margins: Margins) -> Self {
        Self {
            left: self.left + margins.left,
            top: self.top + margins.top,
            width: self.width - margins.left - margins.right,
            height: self.height - margins.top - margins.bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// Position and size of one node or leaf.
///
/// Margins are carried along but never applied during resolution; a leaf
/// that wants padding can draw into `frame().inset(margins())`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Panel {
    frame: Option<Rect>,
    margins: Margins,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
    }

    pub fn is_resolved(&self) -> bool {
        self.frame.is_some()
    }

    pub fn frame(&self) -> Result<Rect, LayoutError> {
        self.frame.ok_or(LayoutError::Unresolved)
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn right(&self) -> Option<f64> {
        self.frame.map(|f| f.right())
    }

    pub fn bottom(&self) -> Option<f64> {
        self.frame.map(|f| f.bottom())
    }

    /// Left edge in EMU
    pub fn x(&self) -> Result<Emu, LayoutError> {
        Ok(Emu::from_inches(self.frame()?.left))
    }

    /// Top edge in EMU
    pub fn y(&self) -> Result<Emu, LayoutError> {
        Ok(Emu::from_inches(self.frame()?.top))
    }

    /// Width in EMU
    pub fn cx(&self) -> Result<Emu, LayoutError> {
        Ok(Emu::from_inches(self.frame()?.width))
    }

    /// Height in EMU
    pub fn cy(&self) -> Result<Emu, LayoutError> {
        Ok(Emu::from_inches(self.frame()?.height))
    }
}
