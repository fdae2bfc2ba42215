use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "cta-button cta-primary",
            ButtonVariant::Secondary => "cta-button",
        }
    }
}

#[component]
pub fn Button(variant: ButtonVariant, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let class_name = variant.class_name();

    rsx! {
        button {
            class: "{class_name}",
            r#type: "button",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
