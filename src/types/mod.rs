pub mod config;
pub mod pull_request;
pub mod snapshot;
