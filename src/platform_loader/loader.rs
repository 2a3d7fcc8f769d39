use crate::domain::PlatformConfig;
use crate::host::{CapabilityRegistry, PlatformLogger};
use crate::platform_loader::factory::{PlatformConfigError, from_json};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

#[instrument(skip(logger, registry))]
pub async fn load_platform_from(path: &Path, logger: &dyn PlatformLogger, registry: &dyn CapabilityRegistry) -> Result<PlatformConfig, LoaderError> {
    info!("📁 Loading platform configuration...");
    let content = fs::read_to_string(path).await.map_err(|e| LoaderError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;

    let platform = from_json(&content, logger, registry).map_err(|e| LoaderError::PlatformConfig {
        source: e,
        path: path.to_path_buf(),
    })?;

    info!(
        "📁 Loading platform configuration... OK, {} device(s), {} widget(s)",
        platform.devices().len(),
        platform.widgets().count()
    );
    Ok(platform)
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("invalid platform configuration in '{}': {}", path.display(), source)]
    PlatformConfig { source: PlatformConfigError, path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CapabilityType;
    use crate::host::{HapServiceRegistry, RecordingLogger};
    use crate::platform_loader::Location;
    use test_log::test;

    fn resource(name: &str) -> PathBuf {
        PathBuf::from(format!("{}/tests/resources/platform/{}", env!("CARGO_MANIFEST_DIR"), name))
    }

    #[test(tokio::test)]
    async fn loads_a_platform_from_a_file() -> Result<(), LoaderError> {
        let path = resource("defaults.json");
        assert!(path.is_file(), "expected path to be a file");

        let platform = load_platform_from(&path, &RecordingLogger::new(), &HapServiceRegistry).await?;

        assert_eq!(platform.platform_name(), PlatformConfig::DEFAULT_PLATFORM_NAME);
        assert_eq!(platform.devices().len(), 1);

        let widgets = platform.devices()[0].widgets();
        assert_eq!(widgets[0].capability_type(), CapabilityType::Outlet);
        assert_eq!(widgets[0].pin_label(), "Wojstead Button");
        assert_eq!(widgets[1].pin_url(), "http://wwww.blynk.server/external/api/get?token=auth-token&V111");

        Ok(())
    }

    #[test(tokio::test)]
    async fn returns_an_io_error_for_a_missing_file() {
        let path = resource("doesNotExist.json");

        let result = load_platform_from(&path, &RecordingLogger::new(), &HapServiceRegistry).await;

        match result {
            Err(LoaderError::Io { path: error_path, .. }) => assert_eq!(error_path, path),
            other => assert!(false, "Expected a LoaderError::Io, found {:?}", other),
        }
    }

    #[test(tokio::test)]
    async fn returns_an_error_for_an_invalid_platform_file() {
        let path = resource("invalid/missingServerUrl.json");
        assert!(path.is_file(), "expected path to be a file");

        let result = load_platform_from(&path, &RecordingLogger::new(), &HapServiceRegistry).await;

        assert!(matches!(
            result,
            Err(LoaderError::PlatformConfig {
                source: PlatformConfigError::MissingRequiredField {
                    location: Location::Platform,
                    field: "serverurl"
                },
                path: _
            })
        ));
    }
}
