mod components;
mod hooks;
mod pages;

use dioxus::prelude::*;
use dioxus_logger::tracing::{Level, info};

use pages::PricingPage;

#[component]
pub fn App() -> Element {
    let config = use_context_provider(hooks::read_page_config);
    use_hook(|| info!(locale = config.locale.tag(), "Rendering pricing page"));

    rsx! {
        style { {include_str!("styles.css")} }
        PricingPage {}
    }
}

pub fn launch() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}
