mod capability_registry;
mod logger;

pub use capability_registry::{CapabilityRegistry, HapServiceRegistry};
pub use logger::{LogContext, PlatformLogger, TracingLogger};

#[cfg(test)]
pub use logger::{LogLevel, RecordingLogger};
