use rand::seq::SliceRandom;
use tracing::{debug, error};

use crate::catalog::{self, title_case, Tag, FALLBACK_COLORS};
use crate::error::PaletteError;
use crate::generator;
use crate::model::{
    owned_colors, AssembledPalettes, Palette, PaletteDetails, PaletteSource, TrendingPalettes,
};
use crate::trending::{fetch_trending, TrendingSource};

/// Curated palettes placed at the front of every assembled response.
pub const MAX_CURATED_PER_RESPONSE: usize = 2;

/// Upper bound on palettes in one response; larger requests are clamped.
pub const MAX_PALETTES_PER_RESPONSE: usize = 100;

pub const FALLBACK_MARKER: &str = "Using fallback data";

pub struct PaletteService<S> {
    source: S,
}

impl<S: TrendingSource> PaletteService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn tags(&self) -> Vec<&'static str> {
        catalog::tags()
    }

    /// Fills `count` slots for `tag` from curated, trending and generated
    /// palettes, in that order.
    ///
    /// Fails only for unknown tags. Any other failure is answered with the
    /// tag's curated palettes (or a synthetic fallback) and the response's
    /// `error` marker is set.
    pub async fn assemble(&self, tag: &str, count: usize) -> Result<AssembledPalettes, PaletteError> {
        let tag = Tag::lookup(tag)?;
        let count = count.min(MAX_PALETTES_PER_RESPONSE);

        let palettes = match self.collect(tag, count).await {
            Ok(palettes) => palettes,
            Err(err) => {
                error!(%tag, count, error = %err, "palette assembly failed, serving fallback");
                let palettes = fallback_palettes(tag, count);
                return Ok(AssembledPalettes {
                    tag: tag.to_string(),
                    total: palettes.len(),
                    palettes,
                    error: Some(FALLBACK_MARKER.to_string()),
                });
            }
        };

        Ok(AssembledPalettes {
            tag: tag.to_string(),
            total: palettes.len(),
            palettes,
            error: None,
        })
    }

    async fn collect(&self, tag: Tag, count: usize) -> Result<Vec<Palette>, PaletteError> {
        let mut palettes: Vec<Palette> = catalog::curated_palettes(tag.as_str())
            .into_iter()
            .take(MAX_CURATED_PER_RESPONSE.min(count))
            .collect();
        let curated = palettes.len();

        if palettes.len() < count {
            let trending = fetch_trending(&self.source, count - palettes.len()).await?;
            palettes.extend(trending);
        }
        let trending = palettes.len() - curated;

        if palettes.len() < count {
            let generated = generator::generate(tag.as_str(), count - palettes.len())?;
            palettes.extend(generated);
        }

        debug!(
            %tag,
            count,
            curated,
            trending,
            generated = palettes.len() - curated - trending,
            "assembled palettes"
        );

        for (i, palette) in palettes.iter_mut().enumerate() {
            palette.id = format!("{tag}-{i}");
        }
        palettes.truncate(count);
        Ok(palettes)
    }

    /// Trending palettes, or a random sample of the whole curated catalog
    /// when the feed has nothing to offer. The sample order is deliberately
    /// unseeded.
    pub async fn trending(&self, count: usize) -> Result<TrendingPalettes, PaletteError> {
        let count = count.min(MAX_PALETTES_PER_RESPONSE);
        let mut palettes = fetch_trending(&self.source, count).await?;

        if palettes.is_empty() {
            palettes = catalog::all_curated();
            palettes.shuffle(&mut rand::thread_rng());
        }
        palettes.truncate(count);

        Ok(TrendingPalettes {
            total: palettes.len(),
            palettes,
        })
    }

    /// Palette lookup is not backed by storage yet; every id resolves to the
    /// same sample palette.
    pub fn palette_details(&self, id: &str) -> PaletteDetails {
        PaletteDetails {
            id: id.to_string(),
            name: "Sample Palette".to_string(),
            colors: owned_colors(FALLBACK_COLORS),
            description: "A vibrant and modern color palette perfect for digital designs."
                .to_string(),
            tags: Vec::from(["modern", "vibrant", "digital"].map(str::to_string)),
            downloads: 1250,
            likes: 89,
            source: PaletteSource::Community,
        }
    }
}

fn fallback_palettes(tag: Tag, count: usize) -> Vec<Palette> {
    let mut curated = catalog::curated_palettes(tag.as_str());
    if curated.is_empty() {
        curated.push(Palette {
            id: format!("{tag}-fallback"),
            name: format!("{} Palette", title_case(tag.as_str())),
            colors: owned_colors(FALLBACK_COLORS),
            source: PaletteSource::Fallback,
        });
    }
    curated.truncate(count);
    curated
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::catalog::TAGS;
    use crate::error::TrendingError;

    enum Feed {
        Palettes(Vec<Palette>),
        Outage,
        Broken,
    }

    struct StubSource {
        feed: Feed,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(feed: Feed) -> Self {
            Self {
                feed,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TrendingSource for StubSource {
        async fn fetch(&self, count: usize) -> Result<Vec<Palette>, TrendingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.feed {
                Feed::Palettes(palettes) => Ok(palettes.iter().take(count).cloned().collect()),
                Feed::Outage => Err(TrendingError::Status(504)),
                Feed::Broken => Err(TrendingError::Source("adapter crashed".into())),
            }
        }
    }

    fn trending_palette(i: usize) -> Palette {
        Palette {
            id: format!("trending-{i}"),
            name: format!("Hot {i}"),
            colors: owned_colors(["#111111", "#222222", "#333333", "#444444", "#555555"]),
            source: PaletteSource::Trending,
        }
    }

    fn service(feed: Feed) -> PaletteService<StubSource> {
        PaletteService::new(StubSource::new(feed))
    }

    fn sources(result: &AssembledPalettes) -> Vec<PaletteSource> {
        result.palettes.iter().map(|p| p.source).collect()
    }

    #[tokio::test]
    async fn every_tag_and_count_yields_sequential_ids() {
        let svc = service(Feed::Outage);
        for tag in TAGS {
            for count in 1..=10 {
                let result = svc.assemble(tag, count).await.unwrap();
                assert_eq!(result.palettes.len(), count, "{tag}/{count}");
                assert_eq!(result.total, count);
                assert!(!result.is_degraded());
                for (i, palette) in result.palettes.iter().enumerate() {
                    assert_eq!(palette.id, format!("{tag}-{i}"));
                }
            }
        }
    }

    #[tokio::test]
    async fn unknown_tag_is_rejected() {
        let svc = service(Feed::Outage);
        assert!(matches!(
            svc.assemble("lava", 5).await,
            Err(PaletteError::UnknownTag(tag)) if tag == "lava"
        ));
        assert_eq!(svc.source().calls(), 0);
    }

    #[tokio::test]
    async fn outage_fills_with_generated_palettes() {
        let result = service(Feed::Outage).assemble("autumn", 5).await.unwrap();
        assert_eq!(
            sources(&result),
            [
                PaletteSource::Curated,
                PaletteSource::Curated,
                PaletteSource::Generated,
                PaletteSource::Generated,
                PaletteSource::Generated,
            ]
        );
        assert_eq!(result.palettes[0].name, "Autumn Leaves");
        assert_eq!(result.palettes[2].name, "Autumn Palette 1");
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn trending_fills_between_curated_and_generated() {
        let svc = service(Feed::Palettes(vec![trending_palette(0), trending_palette(1)]));
        let result = svc.assemble("cyberpunk", 6).await.unwrap();
        assert_eq!(
            sources(&result),
            [
                PaletteSource::Curated,
                PaletteSource::Curated,
                PaletteSource::Trending,
                PaletteSource::Trending,
                PaletteSource::Generated,
                PaletteSource::Generated,
            ]
        );
        assert_eq!(result.palettes[2].id, "cyberpunk-2");
        assert_eq!(result.palettes[2].name, "Hot 0");
    }

    #[tokio::test]
    async fn small_counts_skip_the_feed() {
        let svc = service(Feed::Palettes(vec![trending_palette(0)]));
        let result = svc.assemble("beach", 1).await.unwrap();
        assert_eq!(sources(&result), [PaletteSource::Curated]);

        let result = svc.assemble("beach", 2).await.unwrap();
        assert_eq!(sources(&result), [PaletteSource::Curated; 2]);
        assert_eq!(svc.source().calls(), 0);
    }

    #[tokio::test]
    async fn zero_count_is_empty() {
        let svc = service(Feed::Palettes(vec![trending_palette(0)]));
        let result = svc.assemble("beach", 0).await.unwrap();
        assert!(result.palettes.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(svc.source().calls(), 0);
    }

    #[tokio::test]
    async fn oversupplying_feed_is_truncated() {
        struct Flood;
        impl TrendingSource for Flood {
            async fn fetch(&self, _count: usize) -> Result<Vec<Palette>, TrendingError> {
                Ok((0..20).map(trending_palette).collect())
            }
        }

        let result = PaletteService::new(Flood).assemble("cozy", 4).await.unwrap();
        assert_eq!(result.palettes.len(), 4);
        assert_eq!(result.total, 4);
        let ids: HashSet<_> = result.palettes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[tokio::test]
    async fn oversized_counts_are_clamped() {
        let svc = service(Feed::Outage);
        for count in [MAX_PALETTES_PER_RESPONSE + 1, usize::MAX / 2, usize::MAX] {
            let result = svc.assemble("cozy", count).await.unwrap();
            assert_eq!(result.total, MAX_PALETTES_PER_RESPONSE);
            assert_eq!(
                result.palettes.last().map(|p| p.id.as_str()),
                Some("cozy-99")
            );

            let result = svc.trending(count).await.unwrap();
            assert_eq!(result.total, catalog::all_curated().len());
        }

        let svc = service(Feed::Palettes((0..150).map(trending_palette).collect()));
        let result = svc.trending(usize::MAX).await.unwrap();
        assert_eq!(result.total, MAX_PALETTES_PER_RESPONSE);
    }

    #[tokio::test]
    async fn broken_source_without_curated_serves_single_fallback() {
        let result = service(Feed::Broken).assemble("cozy", 5).await.unwrap();
        assert_eq!(result.palettes.len(), 1);
        assert_eq!(result.total, 1);
        let palette = &result.palettes[0];
        assert_eq!(palette.source, PaletteSource::Fallback);
        assert_eq!(palette.id, "cozy-fallback");
        assert_eq!(palette.name, "Cozy Palette");
        assert_eq!(palette.colors, FALLBACK_COLORS);
        assert_eq!(result.error.as_deref(), Some(FALLBACK_MARKER));
    }

    #[tokio::test]
    async fn broken_source_with_curated_serves_curated_only() {
        let result = service(Feed::Broken).assemble("desert", 5).await.unwrap();
        assert!(result.is_degraded());
        assert_eq!(sources(&result), [PaletteSource::Curated; 2]);
        assert_eq!(result.palettes[0].id, "desert-curated-0");

        let result = service(Feed::Broken).assemble("desert", 3).await.unwrap();
        assert_eq!(result.total, 2);
    }

    #[tokio::test]
    async fn trending_prefers_feed() {
        let svc = service(Feed::Palettes((0..3).map(trending_palette).collect()));
        let result = svc.trending(10).await.unwrap();
        assert_eq!(result.total, 3);
        assert!(result
            .palettes
            .iter()
            .all(|p| p.source == PaletteSource::Trending));
    }

    #[tokio::test]
    async fn empty_feed_samples_curated_catalog() {
        let svc = service(Feed::Palettes(Vec::new()));
        let result = svc.trending(7).await.unwrap();
        assert_eq!(result.total, 7);
        assert!(result
            .palettes
            .iter()
            .all(|p| p.source == PaletteSource::Curated));

        let everything = svc.trending(50).await.unwrap();
        assert_eq!(everything.total, catalog::all_curated().len());
    }

    #[tokio::test]
    async fn curated_sample_order_varies() {
        let svc = service(Feed::Outage);
        let first: Vec<String> = svc
            .trending(10)
            .await
            .unwrap()
            .palettes
            .into_iter()
            .map(|p| p.id)
            .collect();

        // 10! orderings; forty identical draws in a row would mean no shuffle.
        let mut saw_different = false;
        for _ in 0..40 {
            let next: Vec<String> = svc
                .trending(10)
                .await
                .unwrap()
                .palettes
                .into_iter()
                .map(|p| p.id)
                .collect();
            if next != first {
                saw_different = true;
                break;
            }
        }
        assert!(saw_different);
    }

    #[tokio::test]
    async fn trending_surfaces_unexpected_failures() {
        assert!(matches!(
            service(Feed::Broken).trending(5).await,
            Err(PaletteError::Trending(TrendingError::Source(_)))
        ));
    }

    #[test]
    fn palette_details_is_a_fixed_sample() {
        let svc = service(Feed::Outage);
        let a = svc.palette_details("abc");
        let b = svc.palette_details("xyz");
        assert_eq!(a.id, "abc");
        assert_eq!(a.name, b.name);
        assert_eq!(a.colors, b.colors);
        assert_eq!(a.source, PaletteSource::Community);
        assert_eq!(a.tags, ["modern", "vibrant", "digital"]);
    }
}
