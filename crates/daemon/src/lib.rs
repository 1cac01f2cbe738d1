//! Wee web host
//!
//! Serves the compiled web client, proxies `/api/*` to the REST API and
//! resolves `/wee/{code}` short links into redirects.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::Settings;
pub use error::{DaemonError, Result};
pub use server::HttpServer;
