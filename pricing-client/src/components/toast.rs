use crate::hooks::use_toast;
use dioxus::prelude::*;
use pricing::{ToastConfig, ToastTrigger};

/// Auto-dismissing notice. `on_close` fires once the hide animation has finished.
#[component]
pub fn Toast(
    message: String,
    trigger: Signal<ToastTrigger>,
    on_close: EventHandler<()>,
    #[props(default)] config: ToastConfig,
) -> Element {
    let machine = use_toast(trigger, config, on_close);
    let toast = machine.read();

    if !trigger.read().visible() && !toast.displayed() {
        return rsx! {};
    }

    let class = toast.class();

    rsx! {
        div { class: "{class}", role: "status", "{message}" }
    }
}
