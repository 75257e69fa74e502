// ABOUTME: Length units used by presentation documents.
// ABOUTME: Converts inches into English Metric Units (EMU).

use serde::{Deserialize, Serialize};

/// English Metric Units, the absolute integer length of office documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Emu(pub i64);

impl Emu {
    pub const PER_INCH: i64 = 914_400;

    pub fn from_inches(inches: f64) -> Self {
        Self((inches * Self::PER_INCH as f64).round() as i64)
    }

    pub fn inches(&self) -> f64 {
        self.0 as f64 / Self::PER_INCH as f64
    }
}
