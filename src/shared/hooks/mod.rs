// Custom Dioxus hooks
pub mod use_api;
pub mod use_router;

pub use use_api::{use_api, use_provide_api};
pub use use_router::{use_current_route, use_provide_router, use_router, CurrentRoute};
