use crate::components::{PricingCard, Toast};
use crate::hooks::use_page_config;
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, error};
use pricing::{Catalog, PageConfig, PlanCard, ToastTrigger};

fn load_cards(config: &PageConfig) -> anyhow::Result<Vec<PlanCard>> {
    let catalog = Catalog::builtin(config.locale)?;
    let copy = config.locale.copy();
    Ok(catalog
        .plans()
        .iter()
        .map(|plan| PlanCard::render(plan, copy))
        .collect())
}

#[component]
pub fn PricingPage() -> Element {
    let config = use_page_config();
    let copy = config.locale.copy();
    let mut toast = use_signal(ToastTrigger::default);

    let cards = use_hook(|| {
        load_cards(&config).unwrap_or_else(|e| {
            error!("Failed to load plans: {e:#}");
            Vec::new()
        })
    });

    let select_plan = move |plan_id: String| {
        debug!(%plan_id, "Plan selected");
        toast.write().show();
    };

    rsx! {
        document::Title { "{copy.title}" }

        div { class: "pricing-container",
            h1 { class: "pricing-title", "{copy.heading}" }
            p { class: "pricing-subtitle", "{copy.subtitle}" }

            div { class: "pricing-grid",
                for card in cards {
                    PricingCard { key: "{card.id}", card, on_select: select_plan }
                }
            }

            Toast {
                message: copy.toast_message.to_string(),
                trigger: toast,
                on_close: move |_| toast.write().reset(),
                config: config.toast_config(),
            }
        }
    }
}
