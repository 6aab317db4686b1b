// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::error::ProbeError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Endpoint unreachable, refused, or not resolvable.
    Connection,
    /// The service answered with a non-OK status.
    RemoteInvocation,
    /// No answer within the configured timeout.
    Timeout,
    /// The probe itself panicked or was cancelled.
    Aborted,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Connection => write!(f, "connection"),
            FailureKind::RemoteInvocation => write!(f, "remote invocation"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Aborted => write!(f, "aborted"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    Success,
    Failure { kind: FailureKind, message: String },
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Success => write!(f, "passed"),
            ProbeStatus::Failure { message, .. } => write!(f, "failed: {message}"),
        }
    }
}

/// Result of probing one service during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub service_name: String,
    pub status: ProbeStatus,
}

impl ProbeOutcome {
    pub fn success(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            status: ProbeStatus::Success,
        }
    }

    pub fn failure(service_name: impl Into<String>, err: ProbeError) -> Self {
        let kind = err.kind();
        Self {
            service_name: service_name.into(),
            status: ProbeStatus::Failure {
                kind,
                message: err.describe(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ProbeStatus::Success
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match &self.status {
            ProbeStatus::Success => None,
            ProbeStatus::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.status {
            ProbeStatus::Success => None,
            ProbeStatus::Failure { message, .. } => Some(message),
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.service_name, self.status)
    }
}

/// Pass/fail counts over a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn of(outcomes: &[ProbeOutcome]) -> Self {
        let passed = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} service(s) passed", self.passed, self.total)
    }
}
