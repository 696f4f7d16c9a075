// ABOUTME: Configuration for the komik client including Site origins, Options, and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// Default page origin of the upstream site.
pub const DEFAULT_BASE_URL: &str = "https://komikindo.ch";

/// Default origin serving cover art.
pub const DEFAULT_COVER_ORIGIN: &str = "https://thumbnail.komikindo.ch";

/// Default origin serving chapter pages.
pub const DEFAULT_IMAGE_ORIGIN: &str = "https://cdn.komikindo.ch";

/// Desktop Chrome UA; upstream serves a stripped page to unknown agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// The three upstream origins every request and image URL is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub base_url: String,
    pub cover_origin: String,
    pub image_origin: String,
}

impl Site {
    /// Build a Site from explicit origins. Trailing slashes are dropped.
    pub fn new(
        base_url: impl Into<String>,
        cover_origin: impl Into<String>,
        image_origin: impl Into<String>,
    ) -> Self {
        Self {
            base_url: trim_origin(base_url.into()),
            cover_origin: trim_origin(cover_origin.into()),
            image_origin: trim_origin(image_origin.into()),
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_COVER_ORIGIN, DEFAULT_IMAGE_ORIGIN)
    }
}

fn trim_origin(mut origin: String) -> String {
    while origin.ends_with('/') {
        origin.pop();
    }
    origin
}

/// Configuration options for the komik client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub site: Site,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            site: Site::default(),
            http_client: None,
            headers: HashMap::new(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Replace all three upstream origins at once.
    pub fn site(mut self, site: Site) -> Self {
        self.opts.site = site;
        self
    }

    /// Set the page origin requests are sent to.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.site.base_url = trim_origin(base_url.into());
        self
    }

    /// Set the origin cover art is served from.
    pub fn cover_origin(mut self, origin: impl Into<String>) -> Self {
        self.opts.site.cover_origin = trim_origin(origin.into());
        self
    }

    /// Set the origin chapter pages are served from.
    pub fn image_origin(mut self, origin: impl Into<String>) -> Self {
        self.opts.site.image_origin = trim_origin(origin.into());
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_trims_trailing_slashes() {
        let site = Site::new("http://a.test/", "http://b.test//", "http://c.test");
        assert_eq!(site.base_url, "http://a.test");
        assert_eq!(site.cover_origin, "http://b.test");
        assert_eq!(site.image_origin, "http://c.test");
    }

    #[test]
    fn builder_overrides_single_origin() {
        let builder = ClientBuilder::new().base_url("http://127.0.0.1:9000/");
        assert_eq!(builder.opts.site.base_url, "http://127.0.0.1:9000");
        assert_eq!(builder.opts.site.cover_origin, DEFAULT_COVER_ORIGIN);
    }
}
