//! Palette assembly for the Inspira mood-board API.
//!
//! Palettes come from three places: a curated catalog compiled into the
//! binary, an external trending feed, and a deterministic generator seeded by
//! each tag's base colors. [`PaletteService`] stitches them together.

pub mod catalog;
pub mod color;
pub mod error;
pub mod generator;
pub mod model;
pub mod service;
pub mod trending;

pub use catalog::Tag;
pub use error::{ColorError, PaletteError, TrendingError};
pub use model::{AssembledPalettes, Palette, PaletteDetails, PaletteSource, TrendingPalettes};
pub use service::PaletteService;
pub use trending::{CoolorsClient, TrendingSource};
