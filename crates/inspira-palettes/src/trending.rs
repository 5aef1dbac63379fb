//! The external trending feed. The network is treated as unreliable: every
//! outage is reported as a [`TrendingError`] and [`fetch_trending`] turns it
//! into an empty result.

use std::future::Future;
use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::TrendingError;
use crate::model::{Palette, PaletteSource};

pub const DEFAULT_TRENDING_URL: &str = "https://coolors.co/api/palettes/trending";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub trait TrendingSource: Send + Sync {
    /// Up to `count` trending palettes. Implementations may return fewer.
    fn fetch(
        &self,
        count: usize,
    ) -> impl Future<Output = Result<Vec<Palette>, TrendingError>> + Send;
}

#[derive(Clone, Debug)]
pub struct CoolorsClient {
    http: reqwest::Client,
    url: String,
}

impl CoolorsClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, TrendingError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

impl TrendingSource for CoolorsClient {
    async fn fetch(&self, count: usize) -> Result<Vec<Palette>, TrendingError> {
        let resp = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(TrendingError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        let palettes = parse_trending(&body, count)?;
        debug!(requested = count, received = palettes.len(), "fetched trending palettes");
        Ok(palettes)
    }
}

/// Fetches up to `count` palettes from `source`, absorbing upstream outages.
///
/// Only [`TrendingError::Source`] failures are returned; anything the network
/// can throw at us degrades to an empty list.
pub async fn fetch_trending<S: TrendingSource>(
    source: &S,
    count: usize,
) -> Result<Vec<Palette>, TrendingError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    match source.fetch(count).await {
        Ok(palettes) => Ok(palettes),
        Err(err) if err.is_unavailable() => {
            warn!(error = %err, count, "trending palettes unavailable, continuing without them");
            Ok(Vec::new())
        }
        Err(err) => Err(err),
    }
}

#[derive(Deserialize)]
struct TrendingBody {
    #[serde(default)]
    palettes: Vec<TrendingEntry>,
}

#[derive(Deserialize)]
struct TrendingEntry {
    title: Option<String>,
    #[serde(default)]
    colors: Vec<TrendingColor>,
}

#[derive(Deserialize)]
struct TrendingColor {
    hex: String,
}

/// Converts the first `count` feed entries into palettes. Entries with fewer
/// than five colors are dropped rather than padded.
pub fn parse_trending(body: &[u8], count: usize) -> Result<Vec<Palette>, TrendingError> {
    let body: TrendingBody = serde_json::from_slice(body)?;

    Ok(body
        .palettes
        .into_iter()
        .take(count)
        .enumerate()
        .filter_map(|(i, entry)| {
            let hexes: Vec<String> = entry
                .colors
                .into_iter()
                .take(5)
                .map(|c| format!("#{}", c.hex.trim_start_matches('#')))
                .collect();
            let colors: [String; 5] = hexes.try_into().ok()?;
            Some(Palette {
                id: format!("trending-{i}"),
                name: entry
                    .title
                    .unwrap_or_else(|| format!("Trending Palette {}", i + 1)),
                colors,
                source: PaletteSource::Trending,
            })
        })
        .collect())
}
