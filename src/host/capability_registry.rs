use crate::domain::CapabilityType;
use crate::domain::CapabilityType::*;

/// Resolves a capability to the identifier the host uses for it.
pub trait CapabilityRegistry: Send + Sync {
    fn resolve(&self, capability: CapabilityType) -> Option<&str>;
}

/// HomeKit Accessory Protocol service types.
#[derive(Debug, Default, Clone, Copy)]
pub struct HapServiceRegistry;

impl CapabilityRegistry for HapServiceRegistry {
    fn resolve(&self, capability: CapabilityType) -> Option<&str> {
        let uuid = match capability {
            Outlet => "00000047-0000-1000-8000-0026BB765291",
            Switch => "00000049-0000-1000-8000-0026BB765291",
            Lightbulb => "00000043-0000-1000-8000-0026BB765291",
            Fan => "00000040-0000-1000-8000-0026BB765291",
            TemperatureSensor => "0000008A-0000-1000-8000-0026BB765291",
            HumiditySensor => "00000082-0000-1000-8000-0026BB765291",
            ContactSensor => "00000080-0000-1000-8000-0026BB765291",
            MotionSensor => "00000085-0000-1000-8000-0026BB765291",
            OccupancySensor => "00000086-0000-1000-8000-0026BB765291",
            LeakSensor => "00000083-0000-1000-8000-0026BB765291",
            LightSensor => "00000084-0000-1000-8000-0026BB765291",
            SmokeSensor => "00000087-0000-1000-8000-0026BB765291",
        };
        Some(uuid)
    }
}
