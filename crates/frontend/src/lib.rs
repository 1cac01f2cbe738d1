pub mod app;
pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod pages;
pub mod storage;

pub use app::{App, Route};
