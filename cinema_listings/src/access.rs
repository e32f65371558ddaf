use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unauthorized: Invalid API key")]
pub struct Unauthorized;

/// Decides whether the credential presented with a request may use the service.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, presented: Option<&str>) -> Result<(), Unauthorized>;
}

/// A single shared secret compared for exact equality.
pub struct StaticApiKey {
    secret: Secret<String>,
}

impl StaticApiKey {
    pub fn new(secret: Secret<String>) -> Self {
        Self { secret }
    }
}

impl CredentialVerifier for StaticApiKey {
    fn verify(&self, presented: Option<&str>) -> Result<(), Unauthorized> {
        match presented {
            Some(presented) if presented == self.secret.expose_secret().as_str() => Ok(()),
            _ => Err(Unauthorized),
        }
    }
}
