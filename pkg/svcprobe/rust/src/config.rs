// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::connector::ConnectMode;
use crate::probe::ProbeSpec;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

fn default_host() -> String {
    "localhost".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub name: String,
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    pub probe: ProbeSpec,
}

impl ServiceConfig {
    pub fn new(name: &str, port: u16, probe: ProbeSpec) -> Self {
        Self {
            name: name.to_string(),
            host: default_host(),
            port,
            probe,
        }
    }
}

/// Top-level YAML document. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    #[serde(default)]
    pub log_level: Option<String>,
    /// Bounds both connect and call. Absent means the transport default,
    /// which can block forever on a hung service.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub connect: ConnectMode,
    /// Exit non-zero when any probe fails.
    #[serde(default)]
    pub fail_on_error: bool,
    #[serde(default = "builtin_services")]
    pub services: Vec<ServiceConfig>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            timeout_ms: None,
            connect: ConnectMode::default(),
            fail_on_error: false,
            services: builtin_services(),
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Parsed `log_level`, `Info` when unset.
    pub fn log_level(&self) -> Result<log::Level> {
        match self.log_level.as_deref() {
            None => Ok(log::Level::Info),
            Some(raw) => log::Level::from_str(raw.trim())
                .with_context(|| format!("invalid log_level: {raw}")),
        }
    }
}

/// Auth, User, Product, Cart, Order and Payment on their default ports.
pub fn builtin_services() -> Vec<ServiceConfig> {
    vec![
        ServiceConfig::new("Auth", 50050, ProbeSpec::verify_token()),
        ServiceConfig::new("User", 50051, ProbeSpec::get_user_info()),
        ServiceConfig::new("Product", 50052, ProbeSpec::get_products()),
        ServiceConfig::new("Cart", 50055, ProbeSpec::get_cart()),
        ServiceConfig::new("Order", 50053, ProbeSpec::get_user_orders()),
        ServiceConfig::new("Payment", 50054, ProbeSpec::query_payment()),
    ]
}

pub fn load_config(path: &Path) -> Result<ProbeConfig> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("parsing {}", path.display()))
}

fn parse_config(contents: &str) -> Result<ProbeConfig> {
    // An empty document means "all defaults".
    if contents.trim().is_empty() {
        return Ok(ProbeConfig::default());
    }
    let config: ProbeConfig = serde_yaml::from_str(contents)?;
    if config.timeout_ms == Some(0) {
        bail!("timeout_ms must be greater than 0");
    }
    Ok(config)
}
