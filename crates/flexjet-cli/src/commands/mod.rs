//! CLI command implementations.

mod auth;
mod config;
mod flights;

pub use auth::{login, logout, status};
pub use config::{config, ConfigUpdate};
pub use flights::flights;
