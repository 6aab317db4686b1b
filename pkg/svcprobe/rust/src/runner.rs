// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::config::ProbeConfig;
use crate::connector::{ConnectMode, Connector};
use crate::error::ProbeError;
use crate::outcome::ProbeOutcome;
use crate::registry::{Registry, ServiceDescriptor};
use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::timeout;

/// Probes every service of a registry, one after the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner {
    connector: Connector,
    call_timeout: Option<Duration>,
}

impl Runner {
    /// `call_timeout` also bounds the connect step. `None` keeps the
    /// transport default.
    pub fn new(mode: ConnectMode, call_timeout: Option<Duration>) -> Self {
        Self {
            connector: Connector::new(mode, call_timeout),
            call_timeout,
        }
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(config.connect, config.timeout())
    }

    /// Produce exactly one outcome per service, in registry order.
    pub async fn run(&self, registry: &Registry) -> Vec<ProbeOutcome> {
        let mut outcomes = Vec::with_capacity(registry.len());
        for descriptor in registry.iter() {
            outcomes.push(self.probe(descriptor).await);
        }
        outcomes
    }

    pub async fn probe(&self, descriptor: &ServiceDescriptor) -> ProbeOutcome {
        let name = descriptor.name();
        match self.attempt(descriptor).await {
            Ok(()) => {
                info!("[{name}] passed");
                ProbeOutcome::success(name)
            }
            Err(e) => {
                let outcome = ProbeOutcome::failure(name, e);
                if let Some(message) = outcome.message() {
                    warn!("[{name}] failed: {message}");
                }
                outcome
            }
        }
    }

    async fn attempt(&self, descriptor: &ServiceDescriptor) -> Result<(), ProbeError> {
        let endpoint = descriptor.endpoint();
        info!("probing {} at {endpoint}", descriptor.name());

        let channel = self.connector.connect(endpoint).await?;

        let probe = descriptor.probe();
        debug!("[{}] calling {}", descriptor.name(), probe.method());

        // The channel moves into the task and is dropped with it, on every path.
        // Running the call as a task also turns a panicking probe into a JoinError.
        let mut task = tokio::spawn(async move { probe.call(channel).await });

        let joined = match self.call_timeout {
            Some(limit) => match timeout(limit, &mut task).await {
                Ok(joined) => joined,
                Err(_) => {
                    task.abort();
                    return Err(ProbeError::Timeout(limit));
                }
            },
            None => task.await,
        };

        match joined {
            Ok(result) => result.map_err(ProbeError::from),
            Err(e) => Err(ProbeError::Aborted(e.to_string())),
        }
    }
}
