// ABOUTME: The single translation boundary from raw upstream payloads to canonical shapes.
// ABOUTME: Pure and total: missing optional fields become None, never errors or empty strings.

use serde_json::Value;

use crate::extractors::raw::{
    field_string, scalar_string, RawChapter, RawComic, RawComicDetail, RawComicPage,
};
use crate::models::{ChapterImages, ComicDetail, ComicListing, Rating, SearchResult};
use crate::options::Site;
use crate::paths::resolve_image_path;

/// Suffix upstream appends to slugs on its own pages.
pub const LOCALE_SUFFIX: &str = "-bahasa-indonesia";

/// Drop the locale suffix, if present.
pub fn canonical_slug(slug: &str) -> &str {
    slug.strip_suffix(LOCALE_SUFFIX).unwrap_or(slug)
}

/// The slug form upstream page paths require. Never doubles the suffix.
pub fn qualified_slug(slug: &str) -> String {
    format!("{}{}", canonical_slug(slug), LOCALE_SUFFIX)
}

pub fn normalize_listing(site: &Site, raw: &RawComic) -> ComicListing {
    let raw_slug = raw.slug.as_deref().unwrap_or_default();
    let thumbnail = raw
        .thumbnail
        .as_deref()
        .or(raw.cover.as_deref())
        .or(raw.image.as_deref());

    ComicListing {
        title: raw.title.clone().unwrap_or_default(),
        slug: canonical_slug(raw_slug).to_string(),
        // upstream pages need the locale-qualified slug
        url: format!("{}/{}", site.base_url, raw_slug),
        thumbnail: resolve_image_path(site, thumbnail),
        comic_type: raw.comic_type.clone(),
        status: raw.status.clone(),
        latest_chapter: raw
            .latest_chapter
            .clone()
            .or_else(|| raw.latest_chapter_camel.clone()),
        updated_at: raw.updated_at.clone().or_else(|| raw.updated_at_camel.clone()),
    }
}

pub fn normalize_listings(site: &Site, raw: &[RawComic]) -> Vec<ComicListing> {
    raw.iter().map(|item| normalize_listing(site, item)).collect()
}

pub fn normalize_detail(site: &Site, raw: &RawComicDetail) -> ComicDetail {
    // both halves or nothing
    let rating = raw.rating.and_then(|r| {
        Some(Rating {
            value: r.value?,
            member: r.member?,
        })
    });

    let genres = raw
        .genres
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(genre_name)
        .collect();

    ComicDetail {
        title: raw.title.clone().unwrap_or_default(),
        alternative_title: raw
            .alternative_title
            .clone()
            .or_else(|| raw.alternative_title_camel.clone())
            .or_else(|| raw.alternative.clone()),
        thumbnail: resolve_image_path(site, raw.thumbnail.as_deref().or(raw.cover.as_deref())),
        comic_type: raw.comic_type.clone(),
        status: raw.status.clone(),
        release_year: raw
            .release_year
            .clone()
            .or_else(|| raw.release_year_camel.clone())
            .or_else(|| raw.released.clone()),
        author: raw.author.clone(),
        rating,
        description: raw.description.clone().or_else(|| raw.synopsis.clone()),
        genres,
        visitor: raw.visitor,
        latest_chapter: raw
            .latest_chapter
            .clone()
            .or_else(|| raw.latest_chapter_camel.clone()),
        updated_at: raw.updated_at.clone().or_else(|| raw.updated_at_camel.clone()),
    }
}

/// Build a page of results. A missing payload collapses to page 1 of 1.
pub fn normalize_page(site: &Site, raw: Option<&RawComicPage>, requested_page: u32) -> SearchResult {
    let Some(raw) = raw else {
        return SearchResult::empty();
    };

    let current_page = raw
        .current_page()
        .map(clamp_page)
        .unwrap_or_else(|| requested_page.max(1));
    let total_pages = raw.total_pages().map(clamp_page).unwrap_or(1);

    SearchResult {
        comics: normalize_listings(site, &raw.comics),
        current_page,
        total_pages,
    }
}

/// Build chapter images. `variant` is the chapter string upstream answered for.
pub fn normalize_chapter(
    site: &Site,
    raw: &RawChapter,
    comic_slug: &str,
    variant: &str,
    degraded: bool,
) -> ChapterImages {
    let images = raw
        .image_entries()
        .iter()
        .filter_map(|entry| resolve_image_path(site, image_entry(entry).as_deref()))
        .collect();

    ChapterImages {
        title: raw.title.clone().unwrap_or_default(),
        comic_slug: canonical_slug(comic_slug).to_string(),
        chapter_number: variant.to_string(),
        images,
        prev_chapter: first_chapter_label(raw.prev_chapters()),
        next_chapter: first_chapter_label(raw.next_chapters()),
        degraded,
    }
}

fn clamp_page(page: u64) -> u32 {
    u32::try_from(page).unwrap_or(u32::MAX).max(1)
}

fn genre_name(value: &Value) -> Option<String> {
    scalar_string(value)
        .or_else(|| field_string(value, &["name", "title"]))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn image_entry(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(_) => field_string(value, &["url", "src"]),
        _ => None,
    }
}

fn first_chapter_label(entries: Option<&[Value]>) -> Option<String> {
    let first = entries?.first()?;
    scalar_string(first).or_else(|| field_string(first, &["chapter", "number", "slug"]))
}
