use tracing::{info, instrument};
use url::form_urlencoded;

use super::{ImageOptions, ScrapedPayload, ScrapingService, images_key, validate_limit, validate_query};
use crate::constants::{latency, limits};
use crate::error::AppError;
use crate::models::{ImageAsset, ImageKind};
use crate::services::simulation::SimRng;

const STOCK_IMAGE_URLS: [&str; 8] = [
    "https://images.unsplash.com/photo-1566577739112-5180d4bf9390",
    "https://images.unsplash.com/photo-1560272564-c83b66b1ad12",
    "https://images.unsplash.com/photo-1579952363873-27f3bade9f55",
    "https://images.unsplash.com/photo-1566577134770-3d85bb3a9cc4",
    "https://images.unsplash.com/photo-1611887417688-44330203838e",
    "https://images.unsplash.com/photo-1610812387871-fd350460c33c",
    "https://images.unsplash.com/photo-1631116616801-2c502a6bf695",
    "https://images.unsplash.com/photo-1567176013487-70df273f6fc1",
];

const IMAGE_SOURCE: &str = "Sports Images Database";
const IMAGE_LICENSE: &str = "Editorial Use Only";

/// Builds a shuffled image set of `min(pool size, limit + overfetch)` entries
pub fn generate_images(query: &str, kind: ImageKind, limit: usize, rng: &SimRng) -> Vec<ImageAsset> {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    let count = STOCK_IMAGE_URLS
        .len()
        .min(limit.saturating_add(limits::IMAGE_OVERFETCH));

    let mut images: Vec<ImageAsset> = STOCK_IMAGE_URLS
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, base_url)| ImageAsset {
            id: format!("img-{kind}-{index}"),
            url: format!("{base_url}?q={encoded}"),
            alt: format!("{query} {}", kind.subject()),
            width: rng.int_below(800, 1200),
            height: rng.int_below(600, 900),
            source: IMAGE_SOURCE.to_string(),
            license: Some(IMAGE_LICENSE.to_string()),
        })
        .collect();

    rng.shuffle(&mut images);
    images
}

impl ScrapingService {
    /// Images for a query, cached under `images_{kind}_{query}`
    #[instrument(skip(self))]
    pub async fn scrape_images(
        &self,
        query: &str,
        options: ImageOptions,
    ) -> Result<Vec<ImageAsset>, AppError> {
        let query = validate_query(query)?;
        let limit = validate_limit(options.limit)?;
        let key = images_key(options.kind, query);

        if !options.refresh
            && let Some(images) = self
                .cached(&key, |payload| match payload {
                    ScrapedPayload::Images(images) => {
                        Some(images.iter().take(limit).cloned().collect::<Vec<_>>())
                    }
                    _ => None,
                })
                .await
        {
            info!("Returning cached images for \"{}\"", query);
            return Ok(images);
        }

        info!("Scraping fresh images for \"{}\" ({})", query, options.kind);
        self.backend()
            .call("image scrape", query, latency::IMAGES_MS)
            .await?;

        let images = generate_images(query, options.kind, limit, self.backend().rng());
        let limited = images.iter().take(limit).cloned().collect();
        self.cache()
            .put(key, ScrapedPayload::Images(images))
            .await;

        Ok(limited)
    }

    /// Preview image for a matchup, queried as "{home} vs {away}"
    pub async fn scrape_game_images(
        &self,
        home_team: &str,
        away_team: &str,
        refresh: bool,
    ) -> Result<Vec<ImageAsset>, AppError> {
        let query = format!("{home_team} vs {away_team}");
        self.scrape_images(
            &query,
            ImageOptions {
                refresh,
                limit: 1,
                kind: ImageKind::Game,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestContext;
    use std::collections::HashSet;

    #[test]
    fn test_generated_images_annotated_with_query() {
        let rng = SimRng::seeded(4);
        let images = generate_images("Patrick Mahomes", ImageKind::Player, 2, &rng);
        assert_eq!(images.len(), 5);

        for image in &images {
            assert!(image.url.ends_with("?q=Patrick+Mahomes"));
            assert_eq!(image.alt, "Patrick Mahomes football player");
            assert!((800..1200).contains(&image.width));
            assert!((600..900).contains(&image.height));
            assert_eq!(image.license.as_deref(), Some("Editorial Use Only"));
            assert!(image.id.starts_with("img-player-"));
        }
    }

    #[test]
    fn test_generated_images_capped_by_pool() {
        let rng = SimRng::seeded(4);
        let images = generate_images("Chiefs", ImageKind::Team, 10, &rng);
        assert_eq!(images.len(), STOCK_IMAGE_URLS.len());
        let ids: HashSet<_> = images.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), images.len());
    }

    #[test]
    fn test_huge_limit_does_not_overflow() {
        let rng = SimRng::seeded(4);
        let images = generate_images("Chiefs", ImageKind::Player, usize::MAX, &rng);
        assert_eq!(images.len(), STOCK_IMAGE_URLS.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_max_limit_returns_whole_pool() {
        let ctx = TestContext::new(12);
        let images = ctx
            .scraping
            .scrape_images("Chiefs", ImageOptions::with_limit(usize::MAX))
            .await
            .unwrap();
        assert_eq!(images.len(), STOCK_IMAGE_URLS.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_images_truncated_to_limit() {
        let ctx = TestContext::new(12);
        let images = ctx
            .scraping
            .scrape_images("Chiefs", ImageOptions::with_limit(3))
            .await
            .unwrap();
        assert_eq!(images.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_image_kinds_cached_separately() {
        let ctx = TestContext::new(12);
        let team = ImageOptions {
            kind: ImageKind::Team,
            ..ImageOptions::default()
        };
        let player_images = ctx
            .scraping
            .scrape_images("Chiefs", ImageOptions::default())
            .await
            .unwrap();
        let team_images = ctx.scraping.scrape_images("Chiefs", team).await.unwrap();

        assert_eq!(ctx.scraping.cache().len().await, 2);
        assert!(player_images[0].alt.ends_with("football player"));
        assert!(team_images[0].alt.ends_with("football team"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_regenerates_images() {
        let ctx = TestContext::new(12);
        let first = ctx
            .scraping
            .scrape_images("Chiefs", ImageOptions::default())
            .await
            .unwrap();
        let refreshed = ctx
            .scraping
            .scrape_images(
                "Chiefs",
                ImageOptions {
                    refresh: true,
                    ..ImageOptions::default()
                },
            )
            .await
            .unwrap();
        assert_ne!(first, refreshed);
        assert_eq!(ctx.scraping.cache().len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_game_images() {
        let ctx = TestContext::new(12);
        let images = ctx
            .scraping
            .scrape_game_images("Chiefs", "Ravens", false)
            .await
            .unwrap();
        assert_eq!(images.len(), 1);
        assert!(images[0].id.starts_with("img-game-"));
        assert_eq!(images[0].alt, "Chiefs vs Ravens football game");
        assert!(images[0].url.ends_with("?q=Chiefs+vs+Ravens"));
    }
}
