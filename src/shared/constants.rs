// Fileserver admin API
pub const API_PORT: u16 = 8081;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";

pub const STATS_ENDPOINT: &str = "/stats";
pub const CHANNELS_LIST_ENDPOINT: &str = "/channels/list";
pub const CHANNELS_SEND_ENDPOINT: &str = "/channels/send";

// HTTP
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";
