use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, Card, ErrorMessage, LoadingText};
use crate::app::routes::CHANNELS_PATH;
use crate::domain::models::ServerStats;
use crate::shared::hooks::{use_api, use_router};

/// Landing page: server-wide statistics
#[component]
pub fn Home() -> Element {
    let api = use_api();
    let router = use_router();

    let mut stats = use_resource(move || {
        let api = api.clone();
        async move { api.get_stats().await }
    });

    let content = match &*stats.read() {
        Some(Ok(stats)) => rsx! { StatsGrid { stats: stats.clone() } },
        Some(Err(err)) => {
            tracing::error!("Failed to load server stats: {}", err);
            rsx! { ErrorMessage { message: format!("Could not load server stats: {}", err) } }
        }
        None => rsx! { LoadingText { message: "Loading server stats...".to_string() } },
    };

    rsx! {
        div { class: "home-page",
            div { class: "home-page__header",
                h1 { "Fileserver" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| stats.restart(),
                    "Refresh"
                }
            }

            {content}

            Button {
                onclick: move |_| router.navigate(CHANNELS_PATH),
                "Browse channels →"
            }
        }
    }
}

#[component]
fn StatsGrid(stats: ServerStats) -> Element {
    let started = stats.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();

    rsx! {
        div { class: "c-stats",
            Card { title: "Files sent".to_string(), highlighted: true,
                span { class: "c-stats__value", "{stats.files_sent}" }
            }
            Card { title: "Clients connected".to_string(),
                span { class: "c-stats__value", "{stats.clients_connected}" }
            }
            Card { title: "Channels".to_string(),
                span { class: "c-stats__value", "{stats.channels_available}" }
            }
            Card { title: "Running since".to_string(),
                span { class: "c-stats__value c-stats__value--small", "{started}" }
            }
        }
    }
}
