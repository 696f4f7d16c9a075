// ABOUTME: Upstream payload shapes exactly as the site serves them, with every field optional.
// ABOUTME: Lenient deserializers turn wrongly-typed scalars into absent values instead of failing the payload.

use serde::Deserialize;
use serde_json::Value;

/// One comic record as it appears in home, list and browse payloads.
///
/// Upstream mixes snake_case and camelCase keys, sometimes in one object, and
/// has renamed fields over time (`cover`, `image`). Every spelling is its own
/// field so a payload carrying several never trips serde's duplicate-field
/// check; the normalizers merge them, snake_case first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawComic {
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub thumbnail: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub cover: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub image: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub comic_type: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub latest_chapter: Option<String>,
    #[serde(rename = "latestChapter", deserialize_with = "lenient::string")]
    pub latest_chapter_camel: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub updated_at: Option<String>,
    #[serde(rename = "updatedAt", deserialize_with = "lenient::string")]
    pub updated_at_camel: Option<String>,
}

/// The comic-detail payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawComicDetail {
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub alternative_title: Option<String>,
    #[serde(rename = "alternativeTitle", deserialize_with = "lenient::string")]
    pub alternative_title_camel: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub alternative: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub release_year: Option<String>,
    #[serde(rename = "releaseYear", deserialize_with = "lenient::string")]
    pub release_year_camel: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub released: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient::rating")]
    pub rating: Option<RawRating>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub synopsis: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub genres: Option<Vec<Value>>,
    #[serde(deserialize_with = "lenient::uint")]
    pub visitor: Option<u64>,
    #[serde(deserialize_with = "lenient::string")]
    pub thumbnail: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub cover: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub comic_type: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub latest_chapter: Option<String>,
    #[serde(rename = "latestChapter", deserialize_with = "lenient::string")]
    pub latest_chapter_camel: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub updated_at: Option<String>,
    #[serde(rename = "updatedAt", deserialize_with = "lenient::string")]
    pub updated_at_camel: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawRating {
    pub value: Option<f64>,
    pub member: Option<u64>,
}

/// The home page payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawHome {
    #[serde(deserialize_with = "lenient::records")]
    pub new_release: Vec<RawComic>,
    #[serde(rename = "newRelease", deserialize_with = "lenient::records")]
    pub new_release_camel: Vec<RawComic>,
    #[serde(deserialize_with = "lenient::records")]
    pub latest_update: Vec<RawComic>,
    #[serde(rename = "latestUpdate", deserialize_with = "lenient::records")]
    pub latest_update_camel: Vec<RawComic>,
}

/// List, search and browse payloads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawComicPage {
    #[serde(deserialize_with = "lenient::records")]
    pub comics: Vec<RawComic>,
    #[serde(deserialize_with = "lenient::uint")]
    pub current_page: Option<u64>,
    #[serde(rename = "currentPage", deserialize_with = "lenient::uint")]
    pub current_page_camel: Option<u64>,
    #[serde(deserialize_with = "lenient::uint")]
    pub total_pages: Option<u64>,
    #[serde(rename = "totalPages", deserialize_with = "lenient::uint")]
    pub total_pages_camel: Option<u64>,
    #[serde(deserialize_with = "lenient::uint")]
    pub last_page: Option<u64>,
    #[serde(rename = "lastPage", deserialize_with = "lenient::uint")]
    pub last_page_camel: Option<u64>,
}

/// The chapter reader payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawChapter {
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub images: Option<Vec<Value>>,
    #[serde(deserialize_with = "lenient::list")]
    pub prev_chapter: Option<Vec<Value>>,
    #[serde(rename = "prevChapter", deserialize_with = "lenient::list")]
    pub prev_chapter_camel: Option<Vec<Value>>,
    #[serde(deserialize_with = "lenient::list")]
    pub next_chapter: Option<Vec<Value>>,
    #[serde(rename = "nextChapter", deserialize_with = "lenient::list")]
    pub next_chapter_camel: Option<Vec<Value>>,
}

impl RawHome {
    pub fn new_releases(&self) -> &[RawComic] {
        non_empty_or(&self.new_release, &self.new_release_camel)
    }

    pub fn latest_updates(&self) -> &[RawComic] {
        non_empty_or(&self.latest_update, &self.latest_update_camel)
    }
}

impl RawComicPage {
    pub fn current_page(&self) -> Option<u64> {
        self.current_page.or(self.current_page_camel)
    }

    pub fn total_pages(&self) -> Option<u64> {
        self.total_pages
            .or(self.total_pages_camel)
            .or(self.last_page)
            .or(self.last_page_camel)
    }
}

impl RawChapter {
    pub fn image_entries(&self) -> &[Value] {
        self.images.as_deref().unwrap_or_default()
    }

    pub fn prev_chapters(&self) -> Option<&[Value]> {
        self.prev_chapter.as_deref().or(self.prev_chapter_camel.as_deref())
    }

    pub fn next_chapters(&self) -> Option<&[Value]> {
        self.next_chapter.as_deref().or(self.next_chapter_camel.as_deref())
    }
}

fn non_empty_or<'a, T>(first: &'a [T], second: &'a [T]) -> &'a [T] {
    if first.is_empty() {
        second
    } else {
        first
    }
}

/// Read a scalar as text: strings verbatim, numbers in their JSON form.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First string-ish field among `keys` on an object.
pub fn field_string(value: &Value, keys: &[&str]) -> Option<String> {
    let map = value.as_object()?;
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find_map(scalar_string)
}

pub mod lenient {
    //! `deserialize_with` helpers that never reject a payload over one field.

    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::{scalar_string, RawRating};

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<Value>::deserialize(d)?
            .as_ref()
            .and_then(scalar_string))
    }

    pub fn uint<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        Ok(Option::<Value>::deserialize(d)?.as_ref().and_then(as_u64))
    }

    /// Arrays pass through, a lone value becomes a one-element list, null is absent.
    pub fn list<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<Value>>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(items),
            Some(other) => Some(vec![other]),
        })
    }

    /// Keep every element that fits `T`, drop the rest.
    pub fn records<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(list(d)?
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect())
    }

    /// `{value, member}` objects, or a bare score.
    pub fn rating<'de, D: Deserializer<'de>>(d: D) -> Result<Option<RawRating>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Object(map)) => Some(RawRating {
                value: map.get("value").and_then(as_f64),
                member: map.get("member").and_then(as_u64),
            }),
            Some(other) => as_f64(&other).map(|value| RawRating {
                value: Some(value),
                member: None,
            }),
            None => None,
        })
    }

    fn as_f64(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn as_u64(value: &Value) -> Option<u64> {
        match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn comic_accepts_camel_case_and_numbers() {
        let raw: RawComic = serde_json::from_value(json!({
            "title": "Solo Leveling",
            "slug": "solo-leveling-bahasa-indonesia",
            "latestChapter": 179.5,
            "updatedAt": "2024-05-01T10:00:00Z",
            "type": "manhwa"
        }))
        .unwrap();
        assert_eq!(raw.latest_chapter.as_deref(), Some("179.5"));
        assert_eq!(raw.updated_at.as_deref(), Some("2024-05-01T10:00:00Z"));
        assert_eq!(raw.comic_type.as_deref(), Some("manhwa"));
        assert!(raw.thumbnail.is_none());
    }

    #[test]
    fn detail_tolerates_null_and_mistyped_fields() {
        let raw: RawComicDetail = serde_json::from_value(json!({
            "title": "Omniscient Reader",
            "release_year": null,
            "rating": {"value": "8.7", "member": 120},
            "visitor": "15230",
            "genres": "Action",
            "author": ["not", "a", "string"]
        }))
        .unwrap();
        assert!(raw.release_year.is_none());
        assert_eq!(
            raw.rating,
            Some(RawRating {
                value: Some(8.7),
                member: Some(120)
            })
        );
        assert_eq!(raw.visitor, Some(15230));
        assert_eq!(raw.genres, Some(vec![json!("Action")]));
        assert!(raw.author.is_none());
    }

    #[test]
    fn records_drop_non_object_entries() {
        let raw: RawHome = serde_json::from_value(json!({
            "new_release": [{"title": "A", "slug": "a"}, 42, null],
            "latestUpdate": [{"title": "B"}]
        }))
        .unwrap();
        assert_eq!(raw.new_releases().len(), 1);
        assert_eq!(raw.latest_updates().len(), 1);
    }

    #[test]
    fn both_key_spellings_in_one_object() {
        let comic: RawComic = serde_json::from_value(json!({
            "title": "Solo",
            "latest_chapter": "200",
            "latestChapter": "199",
            "updated_at": null,
            "updatedAt": "2024-05-01"
        }))
        .unwrap();
        assert_eq!(comic.latest_chapter.as_deref(), Some("200"));
        assert_eq!(comic.latest_chapter_camel.as_deref(), Some("199"));
        assert!(comic.updated_at.is_none());
        assert_eq!(comic.updated_at_camel.as_deref(), Some("2024-05-01"));

        let page: RawComicPage = serde_json::from_value(json!({
            "current_page": 2,
            "currentPage": 2,
            "totalPages": 9,
            "last_page": 4
        }))
        .unwrap();
        assert_eq!(page.current_page(), Some(2));
        assert_eq!(page.total_pages(), Some(9));

        let chapter: RawChapter = serde_json::from_value(json!({
            "images": ["chapter/a.jpg"],
            "prev_chapter": ["7"],
            "prevChapter": ["7"],
            "nextChapter": ["9"]
        }))
        .unwrap();
        assert_eq!(chapter.prev_chapters(), Some(&[json!("7")][..]));
        assert_eq!(chapter.next_chapters(), Some(&[json!("9")][..]));
    }

    #[test]
    fn home_prefers_non_empty_spelling() {
        let raw: RawHome = serde_json::from_value(json!({
            "new_release": [],
            "newRelease": [{"title": "A"}],
            "latest_update": [{"title": "B"}],
            "latestUpdate": [{"title": "C"}]
        }))
        .unwrap();
        assert_eq!(raw.new_releases()[0].title.as_deref(), Some("A"));
        assert_eq!(raw.latest_updates()[0].title.as_deref(), Some("B"));
    }

    #[test]
    fn field_string_takes_first_present_key() {
        let value = json!({"number": 12, "slug": "chapter-12"});
        assert_eq!(
            field_string(&value, &["chapter", "number", "slug"]),
            Some("12".to_string())
        );
        assert_eq!(field_string(&json!("x"), &["chapter"]), None);
    }
}
