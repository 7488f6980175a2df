use std::{fs, path::Path};

use tracing::debug;

use super::{ClientConfig, ConfigError};

impl ClientConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, `ConfigError::Parse`
    /// for malformed TOML and `ConfigError::Invalid` for unusable values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let location = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf())
            .to_string_lossy()
            .to_string();
        debug!(%location, "loading client configuration");

        Self::parse(&content, location)
    }

    /// Parses and validates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Invalid` for unusable values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "string".to_string())
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `signal_buffer` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.signal_buffer == 0 {
            return Err(ConfigError::Invalid {
                field: "signal_buffer",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    fn parse(content: &str, location: String) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            location,
            details: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::config::BusKind;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn reads_bus_and_buffer() {
        let config = ClientConfig::from_toml_str(
            r#"
bus = "system"
signal_buffer = 16
"#,
        )
        .unwrap();

        assert_eq!(config.bus, BusKind::System);
        assert_eq!(config.signal_buffer, 16);
    }

    #[test]
    fn rejects_zero_buffer() {
        let error = ClientConfig::from_toml_str("signal_buffer = 0").unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Invalid {
                field: "signal_buffer",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_bus() {
        let error = ClientConfig::from_toml_str(r#"bus = "starship""#).unwrap_err();
        match error {
            ConfigError::Parse { location, .. } => assert_eq!(location, "string"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mpris.toml");
        fs::write(&path, "signal_buffer = 4\n").unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.signal_buffer, 4);
        assert_eq!(config.bus, BusKind::Session);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let error = ClientConfig::load(&path).unwrap_err();
        assert!(matches!(error, ConfigError::Io { path: p, .. } if p == path));
    }
}
