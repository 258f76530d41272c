// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod channel;
pub mod stats;

pub use channel::{Channel, SendFileRequest, SendFileResponse};
pub use stats::ServerStats;
