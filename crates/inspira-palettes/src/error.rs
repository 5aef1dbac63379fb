#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color `{0}` (expected #RRGGBB)")]
    InvalidHex(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TrendingError {
    #[error("trending request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("trending endpoint returned status {0}")]
    Status(u16),
    #[error("invalid trending response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("trending source failed: {0}")]
    Source(String),
}

impl TrendingError {
    /// Whether this is an ordinary upstream outage that callers should
    /// absorb by serving fewer trending palettes.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, Self::Source(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("Tag not found")]
    UnknownTag(String),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Trending(#[from] TrendingError),
}
