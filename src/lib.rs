// Public API exports
pub mod config;
pub mod domain;
pub mod router;
pub mod shared;

// Dioxus application shell
pub mod app;
