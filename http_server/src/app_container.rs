use std::sync::Arc;

use cinema_listings::access::CredentialVerifier;
use cinema_listings::contracts::LookupEngine;

pub struct Application {
    pub lookup: LookupEngine,
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl Application {
    pub fn new(lookup: LookupEngine, credentials: Arc<dyn CredentialVerifier>) -> Self {
        Application {
            lookup,
            credentials,
        }
    }
}
