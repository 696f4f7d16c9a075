// ABOUTME: Maps raw upstream image paths onto absolute asset URLs.
// ABOUTME: Cover art and chapter pages live under different origins, told apart only by path prefix.

use url::Url;

use crate::options::Site;

/// Prefixes upstream has used for cover art, oldest first.
pub const COVER_PREFIXES: &[&str] = &["thumbnail/", "images/cover/"];

/// Prefixes upstream has used for chapter pages, oldest first.
pub const CHAPTER_PREFIXES: &[&str] = &["chapter/", "images/chapter/"];

/// Chapter pages sit one directory below the image origin root.
pub const CHAPTER_SEGMENT: &str = "storage";

/// Resolve a raw image path to an absolute URL.
///
/// Rules, first match wins:
/// 1. missing or blank input resolves to `None`
/// 2. anything already carrying a scheme is returned unchanged
/// 3. one leading `/` is stripped
/// 4. cover prefixes go to the cover origin
/// 5. chapter prefixes go to the image origin under [`CHAPTER_SEGMENT`]
/// 6. everything else goes to the image origin root
pub fn resolve_image_path(site: &Site, raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if has_scheme(raw) {
        return Some(raw.to_string());
    }

    let path = raw.strip_prefix('/').unwrap_or(raw);

    if COVER_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return Some(format!("{}/{}", site.cover_origin, path));
    }

    if CHAPTER_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return Some(format!(
            "{}/{}/{}",
            site.image_origin, CHAPTER_SEGMENT, path
        ));
    }

    Some(format!("{}/{}", site.image_origin, path))
}

/// True for anything that parses as an absolute URL on its own.
fn has_scheme(s: &str) -> bool {
    Url::parse(s).is_ok()
}
