//! Navigation history, backed by the `dioxus::history` providers
//!
//! The renderer installs the provider: `WebHistory` (`pushState` and
//! `popstate`) in the browser, `MemoryHistory` off the browser and in tests.

use std::rc::Rc;

pub use dioxus::history::{History, MemoryHistory};

/// History handle shared between the router and the renderer
pub type SharedHistory = Rc<dyn History>;

/// The history provider of the running renderer.
///
/// Must be called inside the Dioxus runtime. Falls back to an in-memory
/// history when the renderer does not provide one.
pub fn platform_history() -> SharedHistory {
    dioxus::history::history()
}

/// The part of a history location that routes match on.
///
/// Query string and fragment are dropped: `/channels?x=1#top` matches the
/// same route as `/channels`.
pub fn route_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_path_strips_query_and_fragment() {
        assert_eq!(route_path("/channels"), "/channels");
        assert_eq!(route_path("/channels?x=1"), "/channels");
        assert_eq!(route_path("/channels#top"), "/channels");
        assert_eq!(route_path("/channels?x=1#top"), "/channels");
        assert_eq!(route_path("/?tab=stats"), "/");
        assert_eq!(route_path(""), "");
    }

    #[test]
    fn test_memory_history_back_and_forward() {
        let history: SharedHistory = Rc::new(MemoryHistory::with_initial_path("/"));
        history.push("/channels".to_string());
        assert_eq!(history.current_route(), "/channels");

        history.go_back();
        assert_eq!(history.current_route(), "/");
        assert!(history.can_go_forward());

        history.go_forward();
        assert_eq!(history.current_route(), "/channels");
        assert!(!history.can_go_forward());
    }
}
