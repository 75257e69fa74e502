// ABOUTME: Shared types and configuration for grid-deck.
// ABOUTME: Defines colors, document units, and config file handling.

pub mod color;
pub mod config;
pub mod units;

pub use color::{Color, ColorParseError};
pub use config::{Config, ConfigError, SlideSettings, SlideSize, TextDefaults, WeightPolicy};
pub use units::Emu;
