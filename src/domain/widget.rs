use crate::domain::CapabilityType;
use std::fmt::{Debug, Formatter};
use url::form_urlencoded;

const VIRTUAL_PIN_TYPE: &str = "virtual";

/// A single pin-backed capability of a device, exposed to the host as one accessory.
///
/// The pin token and polling URL are derived once when the widget is built and never change.
#[derive(PartialEq, Clone)]
pub struct WidgetConfig {
    name: String,
    widget_type: String,
    capability_type: CapabilityType,
    pin_type: String,
    pin_number: String,
    model: String,
    manufacturer: String,
    service_type: Option<String>,
    pin: String,
    pin_url: String,
    update_url_base: String,
}

impl WidgetConfig {
    pub fn builder(name: String, widget_type: String, capability_type: CapabilityType, pin_type: String, pin_number: String) -> WidgetConfigBuilder {
        WidgetConfigBuilder::new(name, widget_type, capability_type, pin_type, pin_number)
    }

    pub fn capability_type(&self) -> CapabilityType {
        self.capability_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn widget_type(&self) -> &str {
        &self.widget_type
    }

    /// Host identifier resolved for the capability, `None` when the host has no counterpart.
    pub fn service_type(&self) -> Option<&str> {
        self.service_type.as_deref()
    }

    /// The pin type exactly as configured, compare with [`WidgetConfig::is_virtual_pin`] instead.
    pub fn pin_type(&self) -> &str {
        &self.pin_type
    }

    pub fn pin_number(&self) -> &str {
        &self.pin_number
    }

    pub fn is_virtual_pin(&self) -> bool {
        self.pin_type.eq_ignore_ascii_case(VIRTUAL_PIN_TYPE)
    }

    /// Vendor protocol pin token, `V<number>` for virtual pins.
    pub fn pin(&self) -> &str {
        &self.pin
    }

    pub fn pin_url(&self) -> &str {
        &self.pin_url
    }

    pub fn pin_label(&self) -> &str {
        &self.name
    }

    pub fn update_url(&self, value: &str) -> String {
        let encoded = form_urlencoded::byte_serialize(value.as_bytes()).collect::<String>();
        format!("{}={}", self.update_url_base, encoded)
    }
}

// The URLs embed the device token
impl Debug for WidgetConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetConfig")
            .field("name", &self.name)
            .field("widget_type", &self.widget_type)
            .field("capability_type", &self.capability_type)
            .field("pin_type", &self.pin_type)
            .field("pin_number", &self.pin_number)
            .field("model", &self.model)
            .field("manufacturer", &self.manufacturer)
            .field("service_type", &self.service_type)
            .field("pin", &self.pin)
            .finish_non_exhaustive()
    }
}

pub struct WidgetConfigBuilder {
    name: String,
    widget_type: String,
    capability_type: CapabilityType,
    pin_type: String,
    pin_number: String,
    model: String,
    manufacturer: String,
    service_type: Option<String>,
}

impl WidgetConfigBuilder {
    pub fn new(name: String, widget_type: String, capability_type: CapabilityType, pin_type: String, pin_number: String) -> Self {
        WidgetConfigBuilder {
            name,
            widget_type,
            capability_type,
            pin_type,
            pin_number,
            model: String::new(),
            manufacturer: String::new(),
            service_type: None,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    pub fn service_type(mut self, service_type: Option<String>) -> Self {
        self.service_type = service_type;
        self
    }

    pub fn build(self, server_url: &str, token: &str) -> WidgetConfig {
        let pin = if self.pin_type.eq_ignore_ascii_case(VIRTUAL_PIN_TYPE) {
            format!("V{}", self.pin_number)
        } else {
            self.pin_number.clone()
        };
        let pin_url = format!("{}/external/api/get?token={}&{}", server_url, token, pin);
        let update_url_base = format!("{}/external/api/update?token={}&{}", server_url, token, pin);

        WidgetConfig {
            name: self.name,
            widget_type: self.widget_type,
            capability_type: self.capability_type,
            pin_type: self.pin_type,
            pin_number: self.pin_number,
            model: self.model,
            manufacturer: self.manufacturer,
            service_type: self.service_type,
            pin,
            pin_url,
            update_url_base,
        }
    }
}
