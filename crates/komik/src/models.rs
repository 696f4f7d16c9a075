// ABOUTME: Canonical comic shapes returned to callers, decoupled from upstream field names.
// ABOUTME: Serialized as camelCase JSON; absent values serialize as null.

use serde::{Deserialize, Serialize};

/// One comic as shown in home, list and browse results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicListing {
    pub title: String,
    /// Locale-independent identifier, reusable as detail/chapter input.
    pub slug: String,
    pub url: String,
    pub thumbnail: Option<String>,
    /// `manga`, `manhwa` or `manhua` by convention; not validated.
    #[serde(rename = "type")]
    pub comic_type: Option<String>,
    pub status: Option<String>,
    pub latest_chapter: Option<String>,
    /// Passed through verbatim.
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub value: f64,
    pub member: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicDetail {
    pub title: String,
    pub alternative_title: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(rename = "type")]
    pub comic_type: Option<String>,
    pub status: Option<String>,
    pub release_year: Option<String>,
    pub author: Option<String>,
    pub rating: Option<Rating>,
    pub description: Option<String>,
    pub genres: Vec<String>,
    pub visitor: Option<u64>,
    pub latest_chapter: Option<String>,
    pub updated_at: Option<String>,
}

/// Images for one chapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterImages {
    pub title: String,
    pub comic_slug: String,
    /// The chapter variant upstream actually answered for, e.g. `008` for input `8`.
    pub chapter_number: String,
    pub images: Vec<String>,
    pub prev_chapter: Option<String>,
    pub next_chapter: Option<String>,
    /// Set when no variant had a resolvable image and the first page that loaded was used.
    pub degraded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub comics: Vec<ComicListing>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl SearchResult {
    /// The result for a page whose payload could not be found.
    pub fn empty() -> Self {
        Self {
            comics: Vec::new(),
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::empty()
    }
}
