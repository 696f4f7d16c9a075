// ABOUTME: Locates the embedded page-state script element and drills into its data payload.
// ABOUTME: Every miss (no element, empty text, bad JSON, missing key) yields None rather than an error.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// CSS selector for the element upstream embeds its page state in.
pub const NEXT_DATA_SELECTOR: &str = "script#__NEXT_DATA__";

/// JSON pointer from the page-state root to the page payload.
const DATA_POINTER: &str = "/props/pageProps/data";

static NEXT_DATA: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(NEXT_DATA_SELECTOR).expect("static selector is valid")
});

/// Return the raw `props.pageProps.data` value, or None when any step misses.
///
/// A JSON `null` at the end of the path counts as a miss.
pub fn extract_page_value(html: &str) -> Option<Value> {
    let doc = Html::parse_document(html);

    let Some(script) = doc.select(&NEXT_DATA).next() else {
        tracing::debug!("page-state script element not found");
        return None;
    };

    let text = script.text().collect::<String>();
    if text.trim().is_empty() {
        tracing::debug!("page-state script element is empty");
        return None;
    }

    let mut root: Value = match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "page-state script is not valid JSON");
            return None;
        }
    };

    match root.pointer_mut(DATA_POINTER).map(Value::take) {
        Some(Value::Null) | None => {
            tracing::debug!(pointer = DATA_POINTER, "page-state payload missing");
            None
        }
        Some(data) => Some(data),
    }
}

/// Extract the page payload and deserialize it into `T`.
///
/// A payload that exists but does not fit `T` is also treated as absent.
pub fn extract_page_data<T: DeserializeOwned>(html: &str) -> Option<T> {
    let value = extract_page_value(html)?;
    match serde_json::from_value(value) {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::debug!(error = %e, "page-state payload has an unexpected shape");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        title: String,
    }

    fn page(script_body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head><title>Komik</title></head>
<body>
<div id="__next"></div>
<script id="__NEXT_DATA__" type="application/json">{}</script>
</body>
</html>"#,
            script_body
        )
    }

    #[test]
    fn extracts_nested_payload() {
        let html = page(r#"{"props":{"pageProps":{"data":{"title":"Solo Leveling"}}},"page":"/[slug]"}"#);
        let probe: Option<Probe> = extract_page_data(&html);
        assert_eq!(
            probe,
            Some(Probe {
                title: "Solo Leveling".to_string()
            })
        );
    }

    #[test]
    fn missing_element_is_none() {
        let html = "<html><body><script>var x = 1;</script></body></html>";
        assert!(extract_page_value(html).is_none());
    }

    #[test]
    fn empty_element_is_none() {
        assert!(extract_page_value(&page("   ")).is_none());
    }

    #[test]
    fn malformed_json_is_none() {
        assert!(extract_page_value(&page(r#"{"props":{"pageProps":"#)).is_none());
    }

    #[test]
    fn missing_path_segment_is_none() {
        assert!(extract_page_value(&page(r#"{"props":{"pageProps":{}}}"#)).is_none());
        assert!(extract_page_value(&page(r#"{"props":{}}"#)).is_none());
        assert!(extract_page_value(&page(r#"{"query":{}}"#)).is_none());
    }

    #[test]
    fn null_payload_is_none() {
        assert!(extract_page_value(&page(r#"{"props":{"pageProps":{"data":null}}}"#)).is_none());
    }

    #[test]
    fn wrong_shape_is_none() {
        let html = page(r#"{"props":{"pageProps":{"data":[1,2,3]}}}"#);
        let probe: Option<Probe> = extract_page_data(&html);
        assert!(probe.is_none());
    }

    #[test]
    fn ignores_other_json_scripts() {
        let html = r#"<html><body>
<script type="application/ld+json">{"props":{"pageProps":{"data":{"title":"Wrong"}}}}</script>
</body></html>"#;
        assert!(extract_page_value(html).is_none());
    }
}
