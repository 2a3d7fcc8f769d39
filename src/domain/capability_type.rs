use crate::domain::CapabilityType::*;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// Accessory behaviour the host exposes for a widget
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum CapabilityType {
    Outlet,
    Switch,
    Lightbulb,
    Fan,
    TemperatureSensor,
    HumiditySensor,
    ContactSensor,
    MotionSensor,
    OccupancySensor,
    LeakSensor,
    LightSensor,
    SmokeSensor,
}

impl CapabilityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outlet => "outlet",
            Switch => "switch",
            Lightbulb => "lightbulb",
            Fan => "fan",
            TemperatureSensor => "temperature_sensor",
            HumiditySensor => "humidity_sensor",
            ContactSensor => "contact_sensor",
            MotionSensor => "motion_sensor",
            OccupancySensor => "occupancy_sensor",
            LeakSensor => "leak_sensor",
            LightSensor => "light_sensor",
            SmokeSensor => "smoke_sensor",
        }
    }

    /// Sensors only report values, they cannot be controlled from the host.
    pub fn is_sensor(&self) -> bool {
        match self {
            Outlet | Switch | Lightbulb | Fan => false,
            TemperatureSensor | HumiditySensor | ContactSensor | MotionSensor | OccupancySensor | LeakSensor | LightSensor | SmokeSensor => true,
        }
    }

    pub fn all() -> [CapabilityType; 12] {
        [
            Outlet,
            Switch,
            Lightbulb,
            Fan,
            TemperatureSensor,
            HumiditySensor,
            ContactSensor,
            MotionSensor,
            OccupancySensor,
            LeakSensor,
            LightSensor,
            SmokeSensor,
        ]
    }
}

impl FromStr for CapabilityType {
    type Err = UnknownCapabilityType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "outlet" => Ok(Outlet),
            "switch" => Ok(Switch),
            "lightbulb" => Ok(Lightbulb),
            "fan" => Ok(Fan),
            "temperature_sensor" => Ok(TemperatureSensor),
            "humidity_sensor" => Ok(HumiditySensor),
            "contact_sensor" => Ok(ContactSensor),
            "motion_sensor" => Ok(MotionSensor),
            "occupancy_sensor" => Ok(OccupancySensor),
            "leak_sensor" => Ok(LeakSensor),
            "light_sensor" => Ok(LightSensor),
            "smoke_sensor" => Ok(SmokeSensor),
            _ => Err(UnknownCapabilityType(value.to_owned())),
        }
    }
}

impl Display for CapabilityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown capability type '{0}'")]
pub struct UnknownCapabilityType(pub String);
