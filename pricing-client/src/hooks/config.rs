use dioxus::prelude::*;
use pricing::PageConfig;

/// Builds the page config from `window.location.search`.
pub fn read_page_config() -> PageConfig {
    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    PageConfig::from_query(&query)
}

pub fn use_page_config() -> PageConfig {
    use_context::<PageConfig>()
}
