//! Client-side routing: a validated route table and the router that keeps it
//! in step with the renderer's navigation history.

pub mod history;
pub mod navigation;
pub mod route_table;

pub use history::{platform_history, route_path, History, MemoryHistory, SharedHistory};
pub use navigation::{RouteListener, Router};
pub use route_table::{RouteEntry, RouteTable};
