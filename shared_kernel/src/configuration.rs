use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Loads settings from `./configuration`, picking the overlay named by `APP_ENVIRONMENT`.
pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    let environment = std::env::var("APP_ENVIRONMENT").ok();
    config_from(&base_path.join("configuration"), environment.as_deref())
}

/// `base.yaml` is required, `{environment}.yaml` is optional and wins over it,
/// `APP_`-prefixed environment variables win over both (`APP_APPLICATION__PORT=8080`).
pub fn config_from<Settings: DeserializeOwned>(
    configuration_directory: &Path,
    environment: Option<&str>,
) -> anyhow::Result<Settings> {
    let mut builder = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")));

    if let Some(environment) = environment {
        builder = builder.add_source(
            config::File::from(configuration_directory.join(format!("{environment}.yaml")))
                .required(false),
        );
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to build configuration")?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}

#[cfg(test)]
mod tests {
    use super::config_from;
    use serde::Deserialize;
    use std::fs;

    #[derive(Deserialize, Debug)]
    struct Settings {
        listener: Listener,
    }

    #[derive(Deserialize, Debug)]
    struct Listener {
        host: String,
        port: u16,
    }

    #[test]
    fn test_environment_overlay_overrides_base_values() {
        let directory = tempfile::tempdir().unwrap();
        fs::write(
            directory.path().join("base.yaml"),
            "listener:\n  host: 0.0.0.0\n  port: 5001\n",
        )
        .unwrap();
        fs::write(directory.path().join("local.yaml"), "listener:\n  port: 8080\n").unwrap();

        let settings: Settings = config_from(directory.path(), Some("local")).unwrap();

        assert_eq!(settings.listener.host, "0.0.0.0");
        assert_eq!(settings.listener.port, 8080);
    }

    #[test]
    fn test_missing_overlay_falls_back_to_base() {
        let directory = tempfile::tempdir().unwrap();
        fs::write(
            directory.path().join("base.yaml"),
            "listener:\n  host: 127.0.0.1\n  port: 5001\n",
        )
        .unwrap();

        let settings: Settings = config_from(directory.path(), Some("production")).unwrap();

        assert_eq!(settings.listener.port, 5001);
    }

    #[test]
    fn test_missing_base_file_is_an_error() {
        let directory = tempfile::tempdir().unwrap();

        let result = config_from::<Settings>(directory.path(), None);

        assert!(result.is_err())
    }
}
