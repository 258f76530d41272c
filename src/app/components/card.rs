use dioxus::prelude::*;

/// Labelled value tile used by the stats and channel views
#[component]
pub fn Card(
    title: Option<String>,
    highlighted: Option<bool>,
    children: Element,
) -> Element {
    let highlighted_class = if highlighted.unwrap_or(false) {
        "c-card--highlighted"
    } else {
        ""
    };

    rsx! {
        div {
            class: "c-card {highlighted_class}",
            if let Some(title) = title {
                div {
                    class: "c-card__header",
                    h3 { class: "c-card__title", "{title}" }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
