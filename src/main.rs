use blynk_platform::app_config::AppConfig;
use blynk_platform::host::{HapServiceRegistry, TracingLogger};
use blynk_platform::platform_loader::load_platform_from;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.core().log_level()).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let platform = load_platform_from(config.platform().config_file(), &TracingLogger, &HapServiceRegistry).await?;
    info!("✅  Loaded platform '{}' polling every {}s", platform.platform_name(), platform.poller_seconds());

    for device in platform.devices() {
        info!(device = device.name(), "🔌 {} widget(s), discover: {}", device.widgets().len(), device.discover());
        for widget in device.widgets() {
            info!(
                device = device.name(),
                "🔌 '{}' as {} on pin {} ({})",
                widget.pin_label(),
                widget.capability_type(),
                widget.pin(),
                widget.widget_type()
            );
            debug!(
                device = device.name(),
                "Widget '{}' model: '{}', manufacturer: '{}', service: {}",
                widget.name(),
                widget.model(),
                widget.manufacturer(),
                widget.service_type().unwrap_or("unsupported")
            );
        }
    }

    info!("🔥 {} is configured", env!("CARGO_PKG_NAME"));
    Ok(())
}
