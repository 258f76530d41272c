//! Structured logging for the fileserver web front-end
//!
//! Every event carries an `operation` field so browser and native logs can be
//! filtered the same way.

/// Operation tag attached to log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    HttpRequest,
    RouteResolve,
    Navigation,
    HistoryPop,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::HttpRequest => "http_request",
            LogOperation::RouteResolve => "route_resolve",
            LogOperation::Navigation => "navigation",
            LogOperation::HistoryPop => "history_pop",
        }
    }
}

/// Install the global subscriber. Native builds honour `RUST_LOG`.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

/// Install the global subscriber (browser console).
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    if dioxus::logger::init(tracing::Level::INFO).is_err() {
        web_sys::console::warn_1(&"[WASM] logger already initialized".into());
    }
}

/// Log an outgoing request
pub fn log_http_request(method: &str, url: &str) {
    tracing::debug!(
        operation = LogOperation::HttpRequest.as_str(),
        method = method,
        url = url,
        "Sending request"
    );
}

/// Log the transport response (status is informational only)
pub fn log_http_response(method: &str, url: &str, status: u16) {
    tracing::trace!(
        operation = LogOperation::HttpRequest.as_str(),
        method = method,
        url = url,
        status = status,
        "Response received"
    );
}

/// Log a route lookup
pub fn log_route_resolve(path: &str, matched: Option<&str>) {
    match matched {
        Some(name) => tracing::trace!(
            operation = LogOperation::RouteResolve.as_str(),
            path = path,
            route = name,
            "Route resolved"
        ),
        None => tracing::debug!(
            operation = LogOperation::RouteResolve.as_str(),
            path = path,
            "No route matches path"
        ),
    }
}

pub fn log_navigation(from: &str, to: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        from = from,
        to = to,
        "Navigating"
    );
}

pub fn log_history_pop(path: &str) {
    tracing::debug!(
        operation = LogOperation::HistoryPop.as_str(),
        path = path,
        "History pop"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::HttpRequest.as_str(), "http_request");
        assert_eq!(LogOperation::RouteResolve.as_str(), "route_resolve");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::HistoryPop.as_str(), "history_pop");
    }
}
