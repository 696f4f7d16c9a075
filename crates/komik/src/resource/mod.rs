// ABOUTME: Resource handling for fetching upstream pages.
// ABOUTME: Resolves paths against the page origin, applies fixed headers, enforces size limits, decodes charsets.

use std::collections::HashMap;

use bytes::Bytes;
use url::Url;

use crate::error::ScrapeError;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

pub const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

pub const ACCEPT_LANGUAGE: &str = "id-ID,id;q=0.9,en-US;q=0.8,en;q=0.7";

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
}

impl FetchOptions {
    /// The header set upstream expects from a browser landing on `origin`.
    pub fn for_origin(origin: &str, extra: &HashMap<String, String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), ACCEPT.to_string());
        headers.insert("Accept-Language".to_string(), ACCEPT_LANGUAGE.to_string());
        headers.insert("Referer".to_string(), origin.to_string());
        for (key, value) in extra {
            headers.insert(key.clone(), value.clone());
        }
        Self { headers }
    }
}

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as UTF-8 text, using charset hints from content-type header.
    pub fn text_utf8(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Resolve `path` against the page origin. Absolute http(s) URLs pass through.
pub fn resolve_url(base_url: &str, path: &str) -> Result<Url, ScrapeError> {
    let parsed = match Url::parse(path) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(&format!("{}/", base_url)).map_err(|e| {
                ScrapeError::invalid_url(
                    base_url,
                    "Fetch",
                    Some(anyhow::anyhow!("invalid base URL: {}", e)),
                )
            })?;
            base.join(path).map_err(|e| {
                ScrapeError::invalid_url(path, "Fetch", Some(anyhow::anyhow!("invalid path: {}", e)))
            })?
        }
        Err(e) => {
            return Err(ScrapeError::invalid_url(
                path,
                "Fetch",
                Some(anyhow::anyhow!("invalid URL: {}", e)),
            ))
        }
    };

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ScrapeError::invalid_url(
            path,
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }
    Ok(parsed)
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Issue one GET. Never retries; non-2xx statuses are errors carrying the status.
pub async fn fetch(
    client: &reqwest::Client,
    url: &Url,
    opts: &FetchOptions,
) -> Result<FetchResult, ScrapeError> {
    let url_str = url.as_str();

    let mut request = client.get(url.clone());
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ScrapeError::from_transport(url_str, "Fetch", e))?;

    let status = response.status();
    tracing::debug!(url = url_str, status = status.as_u16(), "fetched upstream page");

    if !status.is_success() {
        return Err(ScrapeError::status(url_str, "Fetch", status.as_u16()));
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ScrapeError::fetch(
                url_str,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response
        .bytes()
        .await
        .map_err(|e| ScrapeError::from_transport(url_str, "Fetch", e))?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(ScrapeError::fetch(
            url_str,
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    Ok(FetchResult {
        status: status.as_u16(),
        url: url_str.to_string(),
        final_url,
        content_type,
        body,
    })
}
