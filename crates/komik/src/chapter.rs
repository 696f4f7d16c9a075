// ABOUTME: Chapter resolution across zero-padded chapter-number variants.
// ABOUTME: Probes variants in preference order: first with images wins, else first that loads at all.

use crate::client::Client;
use crate::extractors::page_data::extract_page_data;
use crate::extractors::raw::RawChapter;
use crate::models::ChapterImages;
use crate::normalize::{normalize_chapter, qualified_slug};

/// Widths plain integer chapter numbers are zero-padded to.
pub const PAD_WIDTHS: &[usize] = &[2, 3, 4];

/// Candidate spellings of a chapter number, original first.
///
/// Only plain non-negative integers that round-trip exactly (no sign, no
/// leading zeros, no decimals) are padded; everything else is tried verbatim.
///
/// ```
/// use komik_core::chapter_variants;
///
/// assert_eq!(chapter_variants("8"), vec!["8", "08", "008", "0008"]);
/// assert_eq!(chapter_variants("179"), vec!["179", "0179"]);
/// assert_eq!(chapter_variants("179.5"), vec!["179.5"]);
/// ```
pub fn chapter_variants(requested: &str) -> Vec<String> {
    let mut variants = vec![requested.to_string()];

    let is_plain_integer = requested
        .parse::<u64>()
        .is_ok_and(|n| n.to_string() == requested);

    if is_plain_integer {
        for &width in PAD_WIDTHS {
            if requested.len() < width {
                let padded = format!("{:0>width$}", requested, width = width);
                if !variants.contains(&padded) {
                    variants.push(padded);
                }
            }
        }
    }

    variants
}

impl Client {
    /// Resolve a chapter's images, trying each chapter-number variant in turn.
    ///
    /// Returns `None` when no variant loads at all. Upstream failures on
    /// individual variants are logged and skipped, never returned.
    pub async fn chapter(&self, slug: &str, requested: &str) -> Option<ChapterImages> {
        let variants = chapter_variants(requested);

        // Pass one: first variant with at least one resolvable image.
        for variant in &variants {
            let Some(raw) = self.load_chapter(slug, variant).await else {
                continue;
            };
            let chapter = normalize_chapter(self.site(), &raw, slug, variant, false);
            if !chapter.images.is_empty() {
                if variant != requested {
                    tracing::info!(slug, requested, resolved = %variant, "chapter resolved to padded variant");
                }
                return Some(chapter);
            }
            tracing::debug!(slug, variant = %variant, "chapter payload has no usable images");
        }

        // Pass two: first variant that loads, images or not.
        for variant in &variants {
            if let Some(raw) = self.load_chapter(slug, variant).await {
                tracing::info!(slug, requested, resolved = %variant, "chapter resolved without images");
                return Some(normalize_chapter(self.site(), &raw, slug, variant, true));
            }
        }

        tracing::debug!(slug, requested, tried = variants.len(), "no chapter variant loaded");
        None
    }

    async fn load_chapter(&self, slug: &str, variant: &str) -> Option<RawChapter> {
        let comic_segment = qualified_slug(slug);
        let chapter_segment = format!("chapter-{}", variant);
        let url = match self.page_url(&[comic_segment.as_str(), chapter_segment.as_str()], &[]) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(slug, variant, error = %e, "cannot build chapter URL");
                return None;
            }
        };

        match self.fetch_url(&url).await {
            Ok(html) => {
                let raw = extract_page_data(&html);
                if raw.is_none() {
                    tracing::debug!(url = %url, "chapter page has no payload");
                }
                raw
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "chapter variant failed to load");
                None
            }
        }
    }
}
