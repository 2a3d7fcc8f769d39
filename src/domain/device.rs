use crate::domain::WidgetConfig;
use std::fmt::{Debug, Formatter};

/// One authenticated hub or app instance owning its widgets.
#[derive(PartialEq, Clone)]
pub struct DeviceConfig {
    name: String,
    token: String,
    manufacturer: String,
    discover: bool,
    widgets: Vec<WidgetConfig>,
}

impl DeviceConfig {
    pub fn new(name: String, token: String, manufacturer: String, discover: bool, widgets: Vec<WidgetConfig>) -> Self {
        DeviceConfig {
            name,
            token,
            manufacturer,
            discover,
            widgets,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn discover(&self) -> bool {
        self.discover
    }

    pub fn widgets(&self) -> &[WidgetConfig] {
        &self.widgets
    }
}

impl Debug for DeviceConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("name", &self.name)
            .field("token", &"***")
            .field("manufacturer", &self.manufacturer)
            .field("discover", &self.discover)
            .field("widgets", &self.widgets)
            .finish()
    }
}
