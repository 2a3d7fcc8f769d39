pub mod app_config;
pub mod domain;
pub mod host;
pub mod platform_loader;
