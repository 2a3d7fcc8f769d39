mod capability_type;
mod device;
mod platform;
mod widget;

pub use capability_type::{CapabilityType, UnknownCapabilityType};
pub use device::DeviceConfig;
pub use platform::PlatformConfig;
pub use widget::{WidgetConfig, WidgetConfigBuilder};
