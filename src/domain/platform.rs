use crate::domain::{DeviceConfig, WidgetConfig};
use std::time::Duration;

/// Top-level configuration scope owning all devices of one plugin instance.
#[derive(PartialEq, Clone, Debug)]
pub struct PlatformConfig {
    platform_name: String,
    server_url: String,
    poller_seconds: u64,
    devices: Vec<DeviceConfig>,
}

impl PlatformConfig {
    pub const DEFAULT_PLATFORM_NAME: &'static str = "BlynkPlatform";
    pub const DEFAULT_POLLER_SECONDS: u64 = 5;

    pub fn new(platform_name: String, server_url: String, poller_seconds: u64, devices: Vec<DeviceConfig>) -> Self {
        PlatformConfig {
            platform_name,
            server_url,
            poller_seconds,
            devices,
        }
    }

    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn poller_seconds(&self) -> u64 {
        self.poller_seconds
    }

    pub fn poller_interval(&self) -> Duration {
        Duration::from_secs(self.poller_seconds)
    }

    pub fn devices(&self) -> &[DeviceConfig] {
        &self.devices
    }

    pub fn widgets(&self) -> impl Iterator<Item = &WidgetConfig> {
        self.devices.iter().flat_map(|device| device.widgets())
    }
}
