use dioxus::prelude::*;

use crate::app::routes::HOME_PATH;
use crate::shared::hooks::use_router;

/// Shown for any location with no route. `path` is the location as the
/// history reports it.
#[component]
pub fn NotFound(path: String) -> Element {
    let router = use_router();

    rsx! {
        div { class: "not-found-page",
            h1 { "Page not found" }
            p { "Nothing lives at " code { "{path}" } "." }
            a {
                class: "breadcrumb-link",
                href: HOME_PATH,
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    router.navigate(HOME_PATH);
                },
                "← Back to home"
            }
        }
    }
}
