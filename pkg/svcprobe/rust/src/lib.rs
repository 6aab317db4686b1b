// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! gRPC reachability probe.
//!
//! A [`Registry`] lists the services to check and the single unary call to
//! make against each. The [`Runner`] walks it in order and yields one
//! [`ProbeOutcome`] per service; a failing service never stops the run.

pub mod config;
pub mod connector;
pub mod error;
pub mod outcome;
pub mod probe;
pub mod proto;
pub mod registry;
pub mod runner;

pub use config::{ProbeConfig, ServiceConfig, load_config};
pub use connector::{ConnectMode, Connector};
pub use error::{ProbeError, RegistryError};
pub use outcome::{FailureKind, ProbeOutcome, ProbeStatus, Summary};
pub use probe::{Probe, ProbeSpec};
pub use registry::{Registry, ServiceDescriptor, ServiceEndpoint};
pub use runner::Runner;
