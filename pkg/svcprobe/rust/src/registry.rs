// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::config::{ServiceConfig, builtin_services};
use crate::error::RegistryError;
use crate::probe::Probe;
use log::debug;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tonic::transport::Endpoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub host: String,
    pub port: u16,
}

impl ServiceEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Plaintext HTTP/2 URI for the channel.
    pub fn uri(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// A service and the one call used to probe it.
#[derive(Clone)]
pub struct ServiceDescriptor {
    name: String,
    endpoint: ServiceEndpoint,
    probe: Arc<dyn Probe>,
}

impl ServiceDescriptor {
    pub fn new(name: impl Into<String>, endpoint: ServiceEndpoint, probe: Arc<dyn Probe>) -> Self {
        Self {
            name: name.into(),
            endpoint,
            probe,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    pub fn probe(&self) -> Arc<dyn Probe> {
        Arc::clone(&self.probe)
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("method", &self.probe.method())
            .finish()
    }
}

impl From<ServiceConfig> for ServiceDescriptor {
    fn from(config: ServiceConfig) -> Self {
        ServiceDescriptor::new(
            config.name,
            ServiceEndpoint::new(config.host, config.port),
            config.probe.into_probe(),
        )
    }
}

/// Ordered, immutable set of services to probe.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    services: Vec<ServiceDescriptor>,
}

impl Registry {
    /// Validate and wrap `services`, keeping their order.
    pub fn new(services: Vec<ServiceDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for svc in &services {
            if svc.name.trim().is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if !seen.insert(svc.name.as_str()) {
                return Err(RegistryError::DuplicateName(svc.name.clone()));
            }
            validate_endpoint(svc)?;
        }
        debug!("registry holds {} service(s)", services.len());
        Ok(Self { services })
    }

    pub fn from_configs(configs: Vec<ServiceConfig>) -> Result<Self, RegistryError> {
        Self::new(configs.into_iter().map(ServiceDescriptor::from).collect())
    }

    /// The six services of the shop backend on their default local ports.
    pub fn builtin() -> Self {
        Self {
            services: builtin_services()
                .into_iter()
                .map(ServiceDescriptor::from)
                .collect(),
        }
    }

    /// Keep only the named services, in registry order.
    pub fn select(&self, names: &[String]) -> Result<Self, RegistryError> {
        if let Some(unknown) = names
            .iter()
            .find(|n| !self.services.iter().any(|s| &s.name == *n))
        {
            return Err(RegistryError::UnknownService(unknown.clone()));
        }
        let services = self
            .services
            .iter()
            .filter(|s| names.contains(&s.name))
            .cloned()
            .collect();
        Ok(Self { services })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceDescriptor> {
        self.services.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

fn validate_endpoint(svc: &ServiceDescriptor) -> Result<(), RegistryError> {
    let invalid = |reason: String| RegistryError::InvalidEndpoint {
        name: svc.name.clone(),
        reason,
    };
    if svc.endpoint.host.trim().is_empty() {
        return Err(invalid("host must not be empty".to_string()));
    }
    if svc.endpoint.port == 0 {
        return Err(invalid("port must not be 0".to_string()));
    }
    Endpoint::from_shared(svc.endpoint.uri()).map_err(|e| invalid(format!("{e}")))?;
    Ok(())
}
