use dioxus::prelude::*;

use crate::app::routes::{CHANNELS_PATH, HOME_PATH};
use crate::shared::hooks::{use_current_route, use_router};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            NavLink { to: HOME_PATH, class: "c-navbar__logo", "📁 Fileserver" }

            div { class: "c-navbar__links",
                NavLink { to: HOME_PATH, "Home" }
                NavLink { to: CHANNELS_PATH, "Channels" }
            }
        }
    }
}

/// Anchor that navigates through the router instead of reloading the page
#[component]
pub fn NavLink(
    to: &'static str,
    #[props(default = "c-navbar__link")] class: &'static str,
    children: Element,
) -> Element {
    let router = use_router();
    let current = use_current_route();

    let is_active = current()
        .map(|entry| entry.path == to)
        .unwrap_or(false);
    let active_class = if is_active { "is-active" } else { "" };

    rsx! {
        a {
            class: "{class} {active_class}",
            href: to,
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                router.navigate(to);
            },
            {children}
        }
    }
}
