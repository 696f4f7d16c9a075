// ABOUTME: Main library entry point for the komik comic metadata scraper.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, canonical models, ScrapeError, genre list.

//! komik - comic metadata and chapter images from a server-rendered comic site.
//!
//! Upstream pages embed their state as JSON inside a `__NEXT_DATA__` script
//! element. This crate fetches those pages, pulls the payload out, and maps
//! it onto stable canonical shapes ([`ComicListing`], [`ComicDetail`],
//! [`ChapterImages`], [`SearchResult`]).
//!
//! Lookups that find nothing return `None` or an empty result; only failing
//! to talk to upstream produces a [`ScrapeError`].
//!
//! # Example
//!
//! ```no_run
//! use komik_core::{Client, ScrapeError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().build();
//!     if let Some(detail) = client.detail("solo-leveling").await? {
//!         println!("{} ({} genres)", detail.title, detail.genres.len());
//!     }
//!     if let Some(chapter) = client.chapter("solo-leveling", "8").await {
//!         println!("chapter {} has {} pages", chapter.chapter_number, chapter.images.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod chapter;
pub mod client;
pub mod error;
pub mod extractors;
pub mod genres;
pub mod models;
pub mod normalize;
pub mod options;
pub mod paths;
pub mod resource;

pub use crate::chapter::chapter_variants;
pub use crate::client::Client;
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::extractors::{extract_page_data, extract_page_value};
pub use crate::genres::{find_genre, genres, Genre, GENRES};
pub use crate::models::{ChapterImages, ComicDetail, ComicListing, Rating, SearchResult};
pub use crate::normalize::{canonical_slug, qualified_slug, LOCALE_SUFFIX};
pub use crate::options::{ClientBuilder, Options, Site};
pub use crate::paths::resolve_image_path;
