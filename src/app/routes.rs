use dioxus::prelude::*;

use crate::app::components::ErrorMessage;
use crate::app::layouts::Navbar;
use crate::app::pages::{Channels, Home, NotFound};
use crate::config::ClientConfig;
use crate::router::{platform_history, RouteEntry, RouteTable, Router};
use crate::shared::errors::RouteConfigError;
use crate::shared::hooks::{use_current_route, use_provide_api, use_provide_router, use_router};

pub const HOME_PATH: &str = "/";
pub const CHANNELS_PATH: &str = "/channels";

/// Page components addressable by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Channels,
}

impl Page {
    pub fn render(self) -> Element {
        match self {
            Page::Home => rsx! { Home {} },
            Page::Channels => rsx! { Channels {} },
        }
    }
}

pub type AppRouter = Router<Page>;

/// The application's route table
pub fn app_routes() -> Result<RouteTable<Page>, RouteConfigError> {
    RouteTable::new(vec![
        RouteEntry::new(HOME_PATH, "Home", Page::Home),
        RouteEntry::new(CHANNELS_PATH, "Channels", Page::Channels),
    ])
}

#[component]
pub fn App() -> Element {
    let router = use_hook(|| {
        app_routes().map(|table| Router::new(table, platform_history()))
    });

    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    match router {
        Ok(router) => rsx! { RouterShell { router } },
        Err(err) => rsx! { ErrorMessage { message: format!("Invalid route configuration: {}", err) } },
    }
}

#[component]
fn RouterShell(router: AppRouter) -> Element {
    use_provide_router(router);
    use_provide_api(ClientConfig::detect());

    rsx! { Layout {} }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/bundle.css");

    let router = use_router();
    let current = use_current_route();
    let page = match current() {
        Some(entry) => entry.component.render(),
        None => rsx! { NotFound { path: router.current_path() } },
    };

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                {page}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::router::MemoryHistory;

    #[test]
    fn test_app_routes_table() {
        let table = app_routes().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("/").map(|e| e.component), Some(Page::Home));
        assert_eq!(table.resolve("/channels").map(|e| e.component), Some(Page::Channels));
        assert!(table.resolve("/unknown").is_none());
    }

    #[test]
    fn test_app_router_navigation() {
        let router = Router::new(
            app_routes().unwrap(),
            Rc::new(MemoryHistory::with_initial_path(HOME_PATH)),
        );
        assert_eq!(router.current().map(|e| e.name), Some("Home".to_string()));

        router.navigate(CHANNELS_PATH);
        assert_eq!(router.current().map(|e| e.component), Some(Page::Channels));
        assert_eq!(router.current_path(), "/channels");

        router.back();
        assert_eq!(router.current().map(|e| e.component), Some(Page::Home));
    }

    #[test]
    fn test_each_unknown_location_reaches_the_shell() {
        let router = Router::new(
            app_routes().unwrap(),
            Rc::new(MemoryHistory::with_initial_path(HOME_PATH)),
        );
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = seen.clone();
        let reader = router.clone();
        // Layout re-renders on every notification and reads the location then
        router.subscribe(move |entry| {
            sink.borrow_mut().push((entry.is_some(), reader.current_path()));
        });

        router.navigate("/first-missing");
        router.navigate("/second-missing");
        assert_eq!(
            *seen.borrow(),
            vec![
                (false, "/first-missing".to_string()),
                (false, "/second-missing".to_string()),
            ]
        );
    }
}
