// Shared services
pub mod api_service;
pub mod fetch_wrapper;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use api_service::FileserverApi;
pub use fetch_wrapper::{FetchWrapper, Method, RequestDescriptor, Transport, TransportResponse};
pub use transport::DefaultTransport;
