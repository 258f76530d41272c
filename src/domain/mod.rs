// Domain models (fileserver admin API payloads)
pub mod models;
