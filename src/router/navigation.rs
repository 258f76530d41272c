use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use super::history::{route_path, SharedHistory};
use super::route_table::{RouteEntry, RouteTable};
use crate::shared::logging::{log_history_pop, log_navigation};

pub type RouteListener<C> = Rc<dyn Fn(Option<&RouteEntry<C>>)>;

struct RouterInner<C> {
    table: RouteTable<C>,
    history: SharedHistory,
    current: RefCell<Option<RouteEntry<C>>>,
    // History location `current` was resolved from
    location: RefCell<String>,
    listeners: RefCell<Vec<RouteListener<C>>>,
    notifying: Cell<bool>,
    dirty: Cell<bool>,
}

impl<C: Clone> RouterInner<C> {
    fn sync(&self, location: String) {
        let resolved = self.table.resolve(route_path(&location)).cloned();
        *self.current.borrow_mut() = resolved;
        *self.location.borrow_mut() = location;
        self.notify();
    }

    /// Listeners may navigate. A change made while notifying does not recurse:
    /// it marks the router dirty and another round runs once this one ends.
    /// Every listener call reads the route that is current at that moment.
    fn notify(&self) {
        self.dirty.set(true);
        if self.notifying.replace(true) {
            return;
        }

        while self.dirty.replace(false) {
            let listeners = self.listeners.borrow().clone();
            for listener in listeners {
                let current = self.current.borrow().clone();
                listener(current.as_ref());
            }
        }
        self.notifying.set(false);
    }
}

/// Keeps the current route in step with a [`History`](super::History).
///
/// The router is an owned handle: clones share the same state, so one instance
/// can be handed to every component that needs to navigate. The current route
/// is resolved from the history at construction and again after every
/// `navigate`, `back`, `forward` or `refresh`. Routes match on the path of a
/// location; query string and fragment are ignored.
pub struct Router<C> {
    inner: Rc<RouterInner<C>>,
}

impl<C> Clone for Router<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C> PartialEq for Router<C> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C: Clone> Router<C> {
    pub fn new(table: RouteTable<C>, history: SharedHistory) -> Self {
        let location = history.current_route();
        let current = table.resolve(route_path(&location)).cloned();

        Self {
            inner: Rc::new(RouterInner {
                table,
                history,
                current: RefCell::new(current),
                location: RefCell::new(location),
                listeners: RefCell::new(Vec::new()),
                notifying: Cell::new(false),
                dirty: Cell::new(false),
            }),
        }
    }

    pub fn resolve(&self, path: &str) -> Option<&RouteEntry<C>> {
        self.inner.table.resolve(route_path(path))
    }

    /// Push `path` onto the history and switch to its route.
    ///
    /// Navigating to the location already shown is a no-op. Unknown paths are
    /// pushed too and leave no current route.
    pub fn navigate(&self, path: &str) {
        let from = self.inner.history.current_route();
        if from == path {
            tracing::debug!("Already at {}, skipping navigation", path);
            return;
        }

        log_navigation(&from, path);
        self.inner.history.push(path.to_string());
        self.inner.sync(path.to_string());
    }

    /// Navigate to the route registered under `name`. Returns `false` when no
    /// such route exists.
    pub fn navigate_named(&self, name: &str) -> bool {
        match self.inner.table.by_name(name) {
            Some(entry) => {
                let path = entry.path.clone();
                self.navigate(&path);
                true
            }
            None => {
                tracing::warn!("No route named {}", name);
                false
            }
        }
    }

    pub fn back(&self) {
        self.inner.history.go_back();
        self.refresh();
    }

    pub fn forward(&self) {
        self.inner.history.go_forward();
        self.refresh();
    }

    /// Re-read the history location and switch routes if it moved without
    /// going through `navigate` (browser back/forward buttons, for one).
    /// Returns whether the route was re-resolved.
    pub fn refresh(&self) -> bool {
        let location = self.inner.history.current_route();
        if *self.inner.location.borrow() == location {
            return false;
        }

        log_history_pop(&location);
        self.inner.sync(location);
        true
    }

    /// Have the history call `callback` whenever its location changes from
    /// outside the router. The callback should lead to a [`Router::refresh`].
    pub fn on_external_change(&self, callback: Arc<dyn Fn() + Send + Sync>) {
        self.inner.history.updater(callback);
    }

    pub fn current(&self) -> Option<RouteEntry<C>> {
        self.inner.current.borrow().clone()
    }

    /// Full history location, query string and fragment included
    pub fn current_path(&self) -> String {
        self.inner.history.current_route()
    }

    /// Called with the new route (or `None`) after every change.
    pub fn subscribe(&self, listener: impl Fn(Option<&RouteEntry<C>>) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn table(&self) -> &RouteTable<C> {
        &self.inner.table
    }

    pub fn history(&self) -> &SharedHistory {
        &self.inner.history
    }
}
