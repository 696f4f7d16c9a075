// ABOUTME: The main Client struct that fetches upstream pages and runs the extraction pipeline.
// ABOUTME: Provides the read-only query operations: home listings, list/search, browse and detail.

use url::Url;

use crate::error::ScrapeError;
use crate::extractors::page_data::extract_page_data;
use crate::extractors::raw::{RawComicDetail, RawComicPage, RawHome};
use crate::models::{ComicDetail, ComicListing, SearchResult};
use crate::normalize::{normalize_detail, normalize_listings, normalize_page, qualified_slug};
use crate::options::{ClientBuilder, Options, Site};
use crate::resource::{fetch, resolve_url, FetchOptions};

/// Upstream path serving the paginated list and name search.
pub const LIST_PATH: &str = "komik-list";

/// Upstream path prefix for type browsing.
pub const TYPE_PATH: &str = "type";

/// Upstream path prefix for genre browsing.
pub const GENRE_PATH: &str = "genre";

/// The komik client. Holds no per-request state; every call re-fetches.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
    fetch_opts: FetchOptions,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .cookie_store(true)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        let fetch_opts = FetchOptions::for_origin(&opts.site.base_url, &opts.headers);

        Self {
            opts,
            http_client,
            fetch_opts,
        }
    }

    /// The upstream origins this client talks to.
    pub fn site(&self) -> &Site {
        &self.opts.site
    }

    /// Fetch one upstream page as text.
    ///
    /// `path` may be absolute or relative to the page origin.
    pub async fn fetch_html(&self, path: &str) -> Result<String, ScrapeError> {
        let url = resolve_url(&self.opts.site.base_url, path)?;
        self.fetch_url(&url).await
    }

    pub(crate) async fn fetch_url(&self, url: &Url) -> Result<String, ScrapeError> {
        let result = fetch(&self.http_client, url, &self.fetch_opts).await?;
        Ok(result.text_utf8())
    }

    /// Build a page URL from percent-encoded path segments and query pairs.
    pub(crate) fn page_url(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Url, ScrapeError> {
        let base = &self.opts.site.base_url;
        let mut url = Url::parse(base).map_err(|e| {
            ScrapeError::invalid_url(
                base.as_str(),
                "PageUrl",
                Some(anyhow::anyhow!("invalid base URL: {}", e)),
            )
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ScrapeError::invalid_url(
                    base.as_str(),
                    "PageUrl",
                    Some(anyhow::anyhow!("base URL cannot carry a path")),
                )
            })?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn home(&self) -> Result<Option<RawHome>, ScrapeError> {
        let url = self.page_url(&[], &[])?;
        let html = self.fetch_url(&url).await?;
        Ok(extract_page_data(&html))
    }

    /// Newly released comics from the home page.
    pub async fn new_releases(&self) -> Result<Vec<ComicListing>, ScrapeError> {
        let home = self.home().await?.unwrap_or_default();
        Ok(normalize_listings(&self.opts.site, home.new_releases()))
    }

    /// Recently updated comics from the home page.
    pub async fn latest_updates(&self) -> Result<Vec<ComicListing>, ScrapeError> {
        let home = self.home().await?.unwrap_or_default();
        Ok(normalize_listings(&self.opts.site, home.latest_updates()))
    }

    /// One page of the full list, optionally filtered by a name search.
    pub async fn list(&self, page: u32, search: Option<&str>) -> Result<SearchResult, ScrapeError> {
        let page = page.max(1);
        let mut query = vec![("page", page.to_string())];
        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            query.push(("name", term.to_string()));
        }
        let url = self.page_url(&[LIST_PATH], &query)?;
        self.search_page(&url, page).await
    }

    /// One page of comics of a given type (`manga`, `manhwa`, `manhua`).
    pub async fn by_type(&self, comic_type: &str, page: u32) -> Result<SearchResult, ScrapeError> {
        let page = page.max(1);
        let url = self.page_url(&[TYPE_PATH, comic_type], &[("page", page.to_string())])?;
        self.search_page(&url, page).await
    }

    /// One page of comics tagged with a genre slug.
    pub async fn by_genre(&self, genre: &str, page: u32) -> Result<SearchResult, ScrapeError> {
        let page = page.max(1);
        let url = self.page_url(&[GENRE_PATH, genre], &[("page", page.to_string())])?;
        self.search_page(&url, page).await
    }

    async fn search_page(&self, url: &Url, page: u32) -> Result<SearchResult, ScrapeError> {
        let html = self.fetch_url(url).await?;
        let raw: Option<RawComicPage> = extract_page_data(&html);
        Ok(normalize_page(&self.opts.site, raw.as_ref(), page))
    }

    /// Comic detail. `Ok(None)` means upstream served a page without a payload.
    ///
    /// `slug` may be given with or without the locale suffix.
    pub async fn detail(&self, slug: &str) -> Result<Option<ComicDetail>, ScrapeError> {
        let url = self.page_url(&[qualified_slug(slug).as_str()], &[])?;
        let html = self.fetch_url(&url).await?;
        let raw: Option<RawComicDetail> = extract_page_data(&html);
        Ok(raw.map(|raw| normalize_detail(&self.opts.site, &raw)))
    }
}
