//! Resolution of link paths against service base URLs.

use std::collections::HashMap;

use crate::config::{Config, DEFAULT_SERVICE_URL, ServiceKind};

/// Turns paths into hrefs.
///
/// Own-service links are root-relative unless a public base is set. Links to
/// a peer service are always absolute, built from the registered base URL of
/// that service. Peers are never contacted.
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    own_base: Option<String>,
    services: HashMap<ServiceKind, String>,
}

impl LinkBuilder {
    pub fn new(own_base: Option<String>) -> Self {
        Self {
            own_base: own_base.map(|b| b.trim_end_matches('/').to_string()),
            services: HashMap::new(),
        }
    }

    /// Registers the base URL of a peer service.
    pub fn with_service(mut self, service: ServiceKind, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.services
            .insert(service, base_url.trim_end_matches('/').to_string());
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.public_base_url.clone())
            .with_service(ServiceKind::Usuario, &config.usuario_service_url)
            .with_service(ServiceKind::Venta, &config.venta_service_url)
    }

    /// Href for a path served by this service.
    pub fn own(&self, path: &str) -> String {
        match self.own_base {
            Some(ref base) => format!("{base}{path}"),
            None => path.to_string(),
        }
    }

    /// Absolute href for a path served by `service`.
    pub fn peer(&self, service: ServiceKind, path: &str) -> String {
        let base = self
            .services
            .get(&service)
            .map(String::as_str)
            .unwrap_or(DEFAULT_SERVICE_URL);
        format!("{base}{path}")
    }
}
