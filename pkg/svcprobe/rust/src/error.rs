// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::outcome::FailureKind;
use std::time::Duration;
use thiserror::Error;

/// Failure captured while probing a single service.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to connect to {endpoint}")]
    Connect {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("remote call returned {code:?}: {message}")]
    Remote { code: tonic::Code, message: String },

    #[error("no response within {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("probe task aborted: {0}")]
    Aborted(String),
}

impl ProbeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ProbeError::Connect { .. } => FailureKind::Connection,
            ProbeError::Remote { .. } => FailureKind::RemoteInvocation,
            ProbeError::Timeout(_) => FailureKind::Timeout,
            ProbeError::Aborted(_) => FailureKind::Aborted,
        }
    }

    /// Render the error together with its source chain.
    pub fn describe(self) -> String {
        format!("{:#}", anyhow::Error::new(self))
    }
}

impl From<tonic::Status> for ProbeError {
    fn from(status: tonic::Status) -> Self {
        let code = status.code();
        let message = if status.message().is_empty() {
            code.description().to_string()
        } else {
            status.message().to_string()
        };
        ProbeError::Remote { code, message }
    }
}

/// A registry that cannot be built. These surface at startup, never per probe.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("service name must not be empty")]
    EmptyName,

    #[error("duplicate service name: {0}")]
    DuplicateName(String),

    #[error("invalid endpoint for {name}: {reason}")]
    InvalidEndpoint { name: String, reason: String },

    #[error("unknown service: {0}")]
    UnknownService(String),
}
