use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PaletteSource {
    Curated,
    Trending,
    Generated,
    Fallback,
    Community,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Palette {
    pub id: String,
    pub name: String,
    pub colors: [String; 5],
    pub source: PaletteSource,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AssembledPalettes {
    pub tag: String,
    pub palettes: Vec<Palette>,
    pub total: usize,
    /// Set when the response was served from the curated/fallback path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AssembledPalettes {
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TrendingPalettes {
    pub palettes: Vec<Palette>,
    pub total: usize,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PaletteDetails {
    pub id: String,
    pub name: String,
    pub colors: [String; 5],
    pub description: String,
    pub tags: Vec<String>,
    pub downloads: u64,
    pub likes: u64,
    pub source: PaletteSource,
}

pub(crate) fn owned_colors(colors: [&str; 5]) -> [String; 5] {
    colors.map(str::to_string)
}
