pub mod config;
pub mod logging;

pub mod dedup;
pub mod downloader;
pub mod error;
pub mod fetch_head;
pub mod fingerprint;
pub mod pipeline;
pub mod storage;
pub mod url_model;
