use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "c-empty",
            p { class: "c-empty__text", "{message}" }
        }
    }
}

/// Outcome banner for form submissions
#[component]
pub fn StatusMessage(is_error: bool, message: String) -> Element {
    let modifier = if is_error { "c-status--error" } else { "c-status--success" };
    let icon = if is_error { "⚠️" } else { "✅" };

    rsx! {
        div { class: "c-status {modifier}",
            span { class: "c-status__icon", "{icon}" }
            span { class: "c-status__text", "{message}" }
        }
    }
}
