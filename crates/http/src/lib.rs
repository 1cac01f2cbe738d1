//! Wee HTTP client
//!
//! Typed access to the link-shortener REST API. Requests carry the bearer
//! token of the persisted session, and a 401 from any endpoint tears the
//! session down.

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{
    api::{WeeClient, WeeClientBuilder},
    error::ClientError,
    session::{Navigator, SessionClient},
};
