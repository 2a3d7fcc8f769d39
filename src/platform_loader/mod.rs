mod factory;
mod loader;
mod pin_number_deserializer;
pub(in crate::platform_loader) mod serialized_config;

pub use factory::{Location, PlatformConfigError, device_from_value, from_json, from_value, widget_from_value};
pub use loader::{LoaderError, load_platform_from};
