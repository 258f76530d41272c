use std::sync::Arc;

use dioxus::prelude::*;
use futures::StreamExt;

use crate::app::routes::{AppRouter, Page};
use crate::router::RouteEntry;

/// Reactive copy of the router's current route
pub type CurrentRoute = Signal<Option<RouteEntry<Page>>>;

/// Provide the router and a signal that follows its current route.
///
/// Must be called once, near the root: every call registers a router listener
/// and a history updater.
pub fn use_provide_router(router: AppRouter) -> CurrentRoute {
    let current = use_signal({
        let router = router.clone();
        move || router.current()
    });

    use_hook({
        let router = router.clone();
        move || {
            router.subscribe(move |entry| {
                let mut current = current;
                // The signal is gone once the root unmounts
                if let Ok(mut slot) = current.try_write() {
                    *slot = entry.cloned();
                }
            });

            // Back/forward buttons change the location behind the router's
            // back. The updater only has to be Send, so it pings a channel and
            // the refresh happens on the UI task.
            let (tx, mut rx) = futures::channel::mpsc::unbounded::<()>();
            router.on_external_change(Arc::new(move || {
                if let Err(err) = tx.unbounded_send(()) {
                    tracing::warn!("Router refresh channel closed: {}", err);
                }
            }));

            spawn(async move {
                while rx.next().await.is_some() {
                    router.refresh();
                }
            });
        }
    });

    use_context_provider(move || router);
    use_context_provider(move || current)
}

pub fn use_router() -> AppRouter {
    use_context::<AppRouter>()
}

pub fn use_current_route() -> CurrentRoute {
    use_context::<CurrentRoute>()
}
