pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod infra;
pub mod logging;
pub mod metrics;
pub mod parser;
pub mod pipeline;
pub mod speaker;
pub mod types;
