//! # Site Preview Host
//!
//! Serves the `site-web` bundle for local previews.
//!
//! - **[`config`]**: Environment-driven configuration
//! - **[`server`]**: Router and startup

pub mod config;
pub mod server;

pub use config::ServerConfig;
pub use server::{create_router, start_server};
