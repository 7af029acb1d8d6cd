pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod util;
pub mod view;

/// Where the backend location is published, next to the bundle.
pub const CONFIG_URL: &str = "/config.json";
