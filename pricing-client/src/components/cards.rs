use crate::components::{Button, ButtonVariant};
use dioxus::prelude::*;
use pricing::PlanCard;

#[component]
pub fn PricingCard(card: PlanCard, on_select: Option<EventHandler<String>>) -> Element {
    let variant = if card.is_popular() {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    };
    let class = card.class();
    let selectable = card.clone();

    rsx! {
        div { class: "{class}",
            if let Some(badge) = card.badge() {
                div { class: "popular-badge", "{badge}" }
            }

            div { class: "pricing-header",
                h3 { class: "plan-name", "{card.name}" }
                div { class: "price",
                    span { class: "amount", "{card.amount}" }
                    span { class: "period", "{card.period}" }
                }
                p { class: "description", "{card.description}" }
            }

            div { class: "features",
                for (index, feature) in card.features().iter().enumerate() {
                    div { key: "{index}", class: "feature-item",
                        span { class: "feature-icon", "{feature.icon}" }
                        span { class: "feature-text", "{feature.text}" }
                    }
                }
            }

            Button {
                variant,
                onclick: move |_| {
                    selectable.select(on_select.map(|handler| move |id: &str| handler.call(id.to_string())));
                },
                "{card.cta_label}"
            }
        }
    }
}
