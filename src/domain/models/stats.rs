use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate counters reported by `GET /stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStats {
    pub files_sent: u64,
    pub clients_connected: u64,
    pub channels_available: u64,
    /// Server start time
    pub created_at: DateTime<Utc>,
}
