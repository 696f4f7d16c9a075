// ABOUTME: Extraction of the server-rendered page state embedded in upstream HTML.
// ABOUTME: Includes the script-tag locator and the raw upstream payload shapes.

//! Extraction module.
//!
//! Upstream pages are rendered server-side and carry their state as a JSON
//! blob inside one well-known script element. This module locates that blob
//! and deserializes it into loosely-typed raw structures; the normalizers in
//! [`crate::normalize`] are the only code that reads those raw shapes.
//!
//! Submodules:
//! - `page_data`: Script-tag lookup and `props.pageProps.data` descent.
//! - `raw`: Upstream payload shapes with every field optional.

pub mod page_data;
pub mod raw;

pub use page_data::{extract_page_data, extract_page_value, NEXT_DATA_SELECTOR};
