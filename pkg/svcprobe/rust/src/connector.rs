// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::error::ProbeError;
use crate::registry::ServiceEndpoint;
use log::debug;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};

/// When the TCP/HTTP2 connection is established.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ConnectMode {
    /// Connect before issuing the call; an unreachable service fails as a
    /// connection error.
    #[default]
    Eager,
    /// Defer connecting to the first call; an unreachable service surfaces
    /// as an `Unavailable` status.
    Lazy,
}

impl fmt::Display for ConnectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectMode::Eager => write!(f, "eager"),
            ConnectMode::Lazy => write!(f, "lazy"),
        }
    }
}

/// Opens one plaintext channel per probe. Channels are never shared.
#[derive(Debug, Clone, Copy, Default)]
pub struct Connector {
    mode: ConnectMode,
    connect_timeout: Option<Duration>,
}

impl Connector {
    pub fn new(mode: ConnectMode, connect_timeout: Option<Duration>) -> Self {
        Self {
            mode,
            connect_timeout,
        }
    }

    pub fn mode(&self) -> ConnectMode {
        self.mode
    }

    pub async fn connect(&self, endpoint: &ServiceEndpoint) -> Result<Channel, ProbeError> {
        let uri = endpoint.uri();
        let connect_err = |source| ProbeError::Connect {
            endpoint: uri.clone(),
            source,
        };

        let mut builder = Endpoint::from_shared(uri.clone()).map_err(connect_err)?;
        if let Some(limit) = self.connect_timeout {
            builder = builder.connect_timeout(limit);
        }

        match self.mode {
            ConnectMode::Lazy => {
                debug!("lazy channel to {uri}");
                Ok(builder.connect_lazy())
            }
            ConnectMode::Eager => {
                debug!("connecting to {uri}");
                builder.connect().await.map_err(connect_err)
            }
        }
    }
}
