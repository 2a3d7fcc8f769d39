use crate::domain::{CapabilityType, DeviceConfig, PlatformConfig, WidgetConfig};
use crate::host::{CapabilityRegistry, PlatformLogger};
use crate::platform_loader::serialized_config::{SerializedDevice, SerializedPlatform, SerializedWidget};
use serde::Deserialize;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub fn from_json(json: &str, logger: &dyn PlatformLogger, registry: &dyn CapabilityRegistry) -> Result<PlatformConfig, PlatformConfigError> {
    let raw = serde_json::from_str::<Value>(json).inspect_err(|err| logger.error("platform configuration is not valid json", &[("error", err)]))?;
    from_value(&raw, logger, registry)
}

/// Builds the complete platform, aborting on the first invalid device or widget.
pub fn from_value(raw: &Value, logger: &dyn PlatformLogger, registry: &dyn CapabilityRegistry) -> Result<PlatformConfig, PlatformConfigError> {
    to_platform(raw, logger, registry).inspect_err(|err| logger.error("invalid platform configuration", &[("error", err)]))
}

fn to_platform(raw: &Value, logger: &dyn PlatformLogger, registry: &dyn CapabilityRegistry) -> Result<PlatformConfig, PlatformConfigError> {
    let location = Location::Platform;
    let platform = SerializedPlatform::deserialize(raw).map_err(|source| PlatformConfigError::InvalidEntry { location, source })?;

    let server_url = required(platform.serverurl, location, "serverurl")?;
    let platform_name = match platform.platform.filter(|name| !name.is_empty()) {
        Some(name) => name,
        None => {
            logger.debug("no platform name configured, using default", &[("platform", &PlatformConfig::DEFAULT_PLATFORM_NAME)]);
            PlatformConfig::DEFAULT_PLATFORM_NAME.to_string()
        }
    };
    let poller_seconds = to_poller_seconds(platform.pollerseconds, logger);

    let devices = platform
        .devices
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(device, raw)| device_from_value(raw, &server_url, device, logger, registry))
        .collect::<Result<Vec<_>, _>>()?;

    logger.info(
        "loaded platform configuration",
        &[("platform", &platform_name), ("devices", &devices.len()), ("pollerseconds", &poller_seconds)],
    );
    Ok(PlatformConfig::new(platform_name, server_url, poller_seconds, devices))
}

fn to_poller_seconds(value: Option<Value>, logger: &dyn PlatformLogger) -> u64 {
    let default = PlatformConfig::DEFAULT_POLLER_SECONDS;
    let Some(value) = value else {
        logger.debug("no poller interval configured, using default", &[("pollerseconds", &default)]);
        return default;
    };

    // Numeric strings are accepted as well
    let seconds = value.as_u64().or_else(|| value.as_str().and_then(|s| s.trim().parse::<u64>().ok()));
    match seconds.filter(|seconds| *seconds > 0) {
        Some(seconds) => seconds,
        None => {
            logger.warn("invalid poller interval, using default", &[("pollerseconds", &value), ("default", &default)]);
            default
        }
    }
}

pub fn device_from_value(
    raw: &Value,
    server_url: &str,
    device: usize,
    logger: &dyn PlatformLogger,
    registry: &dyn CapabilityRegistry,
) -> Result<DeviceConfig, PlatformConfigError> {
    let location = Location::Device { device };
    let serialized = SerializedDevice::deserialize(raw).map_err(|source| PlatformConfigError::InvalidEntry { location, source })?;

    let name = required(serialized.name, location, "name")?;
    let token = required(serialized.token, location, "token")?;
    let manufacturer = serialized.manufacturer.unwrap_or_else(|| {
        logger.debug("no manufacturer configured", &[("device", &name)]);
        String::new()
    });
    let discover = serialized.discover.unwrap_or(false);

    let widgets = serialized
        .accessories
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(widget, raw)| {
            let location = Location::Widget { device, widget };
            widget_from_value(raw, server_url, &token, &manufacturer, location, logger, registry)
        })
        .collect::<Result<Vec<_>, _>>()?;

    logger.debug("loaded device", &[("device", &name), ("widgets", &widgets.len()), ("discover", &discover)]);
    Ok(DeviceConfig::new(name, token, manufacturer, discover, widgets))
}

pub fn widget_from_value(
    raw: &Value,
    server_url: &str,
    token: &str,
    manufacturer: &str,
    location: Location,
    logger: &dyn PlatformLogger,
    registry: &dyn CapabilityRegistry,
) -> Result<WidgetConfig, PlatformConfigError> {
    let serialized = SerializedWidget::deserialize(raw).map_err(|source| PlatformConfigError::InvalidEntry { location, source })?;

    let name = required(serialized.name, location, "name")?;
    let widget_type = required(serialized.widget_type, location, "type")?;
    let type_of = required(serialized.type_of, location, "typeOf")?;
    let pin_type = required(serialized.pintype, location, "pintype")?;
    let pin_number = required(serialized.pinnumber.map(|pin_number| pin_number.0), location, "pinnumber")?;

    let capability_type = type_of
        .parse::<CapabilityType>()
        .map_err(|err| PlatformConfigError::UnknownCapabilityMapping { location, type_of: err.0 })?;

    let service_type = registry.resolve(capability_type).map(str::to_owned);
    if service_type.is_none() {
        logger.warn("capability is not supported by the host", &[("widget", &location), ("capability", &capability_type)]);
    }

    Ok(WidgetConfig::builder(name, widget_type, capability_type, pin_type, pin_number)
        .model(serialized.model.unwrap_or_default())
        .manufacturer(manufacturer)
        .service_type(service_type)
        .build(server_url, token))
}

// Empty strings count as missing
fn required(value: Option<String>, location: Location, field: &'static str) -> Result<String, PlatformConfigError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(PlatformConfigError::MissingRequiredField { location, field })
}

/// Where in the configuration document an entry lives, indices are zero-based.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Location {
    Platform,
    Device { device: usize },
    Widget { device: usize, widget: usize },
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Platform => write!(f, "platform"),
            Location::Device { device } => write!(f, "device #{}", device),
            Location::Widget { device, widget } => write!(f, "accessory #{} of device #{}", widget, device),
        }
    }
}

#[derive(Error, Debug)]
pub enum PlatformConfigError {
    #[error("json deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("invalid {location}: {source}")]
    InvalidEntry { location: Location, source: serde_json::Error },
    #[error("missing required field '{field}' in {location}")]
    MissingRequiredField { location: Location, field: &'static str },
    #[error("unknown capability type '{type_of}' in {location}")]
    UnknownCapabilityMapping { location: Location, type_of: String },
}
