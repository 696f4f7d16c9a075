// ABOUTME: The fixed genre list offered for genre browsing.
// ABOUTME: Maintained by hand; upstream does not publish its genre set in the page payload.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Genre {
    pub name: &'static str,
    pub slug: &'static str,
}

const fn genre(name: &'static str, slug: &'static str) -> Genre {
    Genre { name, slug }
}

/// Genres accepted by the genre browse path, sorted by name.
///
/// Kept by hand and may drift from what upstream actually serves.
pub const GENRES: &[Genre] = &[
    genre("Action", "action"),
    genre("Adventure", "adventure"),
    genre("Comedy", "comedy"),
    genre("Cooking", "cooking"),
    genre("Crime", "crime"),
    genre("Demons", "demons"),
    genre("Drama", "drama"),
    genre("Ecchi", "ecchi"),
    genre("Fantasy", "fantasy"),
    genre("Game", "game"),
    genre("Gender Bender", "gender-bender"),
    genre("Harem", "harem"),
    genre("Historical", "historical"),
    genre("Horror", "horror"),
    genre("Isekai", "isekai"),
    genre("Josei", "josei"),
    genre("Magic", "magic"),
    genre("Martial Arts", "martial-arts"),
    genre("Mecha", "mecha"),
    genre("Medical", "medical"),
    genre("Military", "military"),
    genre("Monsters", "monsters"),
    genre("Music", "music"),
    genre("Mystery", "mystery"),
    genre("Psychological", "psychological"),
    genre("Reincarnation", "reincarnation"),
    genre("Romance", "romance"),
    genre("School Life", "school-life"),
    genre("Sci-fi", "sci-fi"),
    genre("Seinen", "seinen"),
    genre("Shoujo", "shoujo"),
    genre("Shounen", "shounen"),
    genre("Slice of Life", "slice-of-life"),
    genre("Sports", "sports"),
    genre("Super Power", "super-power"),
    genre("Supernatural", "supernatural"),
    genre("System", "system"),
    genre("Thriller", "thriller"),
    genre("Time Travel", "time-travel"),
    genre("Tragedy", "tragedy"),
    genre("Villainess", "villainess"),
    genre("Webtoons", "webtoons"),
];

pub fn genres() -> &'static [Genre] {
    GENRES
}

/// Look a genre up by slug, ignoring ASCII case.
pub fn find_genre(slug: &str) -> Option<&'static Genre> {
    GENRES.iter().find(|g| g.slug.eq_ignore_ascii_case(slug.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genres_are_sorted_by_name() {
        let names: Vec<&str> = genres().iter().map(|g| g.name).collect();
        let mut sorted = names.clone();
        sorted.sort_by_key(|name| name.to_lowercase());
        assert_eq!(names, sorted);
    }

    #[test]
    fn slugs_are_unique_and_url_safe() {
        let mut slugs: Vec<&str> = GENRES.iter().map(|g| g.slug).collect();
        assert!(slugs
            .iter()
            .all(|s| s.chars().all(|c| c.is_ascii_lowercase() || c == '-')));
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), GENRES.len());
    }

    #[test]
    fn find_genre_by_slug() {
        assert_eq!(find_genre("Martial-Arts").map(|g| g.name), Some("Martial Arts"));
        assert!(find_genre("cultivation").is_none());
    }
}
