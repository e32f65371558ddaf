use std::path::PathBuf;

use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use shared_kernel::configuration::config;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub data: DataSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub api_key: Secret<String>,
}

#[derive(Debug, Deserialize)]
pub struct DataSettings {
    pub region_directory: PathBuf,
    pub catalog_file: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct TelemetrySettings {
    pub service_name: String,
    pub export_traces: bool,
}

impl Settings {
    pub fn parse() -> anyhow::Result<Self> {
        config::<Settings>()
    }
}
