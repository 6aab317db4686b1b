// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::process::ExitCode;
use svcprobe::{ConnectMode, ProbeConfig, Registry, Runner, Summary, load_config};

/// Probe each configured gRPC service once and report pass/fail.
#[derive(Debug, Parser)]
#[command(name = "svcprobe", version)]
struct Args {
    /// YAML registry and settings. Without it the built-in services are probed.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Probe only this service (repeatable). Registry order is kept.
    #[arg(short, long = "service", value_name = "NAME")]
    services: Vec<String>,

    /// Bound each connect and call, in milliseconds.
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,

    #[arg(long, value_enum)]
    connect: Option<ConnectMode>,

    /// Exit with status 1 if any probe failed.
    #[arg(long)]
    exit_code: bool,

    /// error, warn, info, debug or trace.
    #[arg(long)]
    log_level: Option<log::Level>,

    /// Print the registry and exit without probing.
    #[arg(long)]
    list: bool,
}

impl Args {
    fn apply(&self, config: &mut ProbeConfig) {
        if let Some(ms) = self.timeout_ms {
            config.timeout_ms = Some(ms);
        }
        if let Some(mode) = self.connect {
            config.connect = mode;
        }
        if self.exit_code {
            config.fail_on_error = true;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ProbeConfig::default(),
    };
    args.apply(&mut config);

    let log_level = match args.log_level {
        Some(level) => level,
        None => config.log_level()?,
    };
    // Local offsets can't be resolved once the resolver has spawned threads.
    SimpleLogger::new()
        .with_level(log_level.to_level_filter())
        .with_utc_timestamps()
        .init()?;

    let mut registry = Registry::from_configs(config.services.clone())
        .context("invalid service registry")?;
    if !args.services.is_empty() {
        registry = registry.select(&args.services)?;
    }

    if args.list {
        for svc in registry.iter() {
            println!("{}\t{}\t{}", svc.name(), svc.endpoint(), svc.probe().method());
        }
        return Ok(ExitCode::SUCCESS);
    }

    info!(
        "svcprobe {} probing {} service(s) (connect={}, timeout={})",
        env!("CARGO_PKG_VERSION"),
        registry.len(),
        config.connect,
        config
            .timeout_ms
            .map_or_else(|| "none".to_string(), |ms| format!("{ms}ms")),
    );

    let outcomes = Runner::from_config(&config).run(&registry).await;
    let summary = Summary::of(&outcomes);
    info!("{summary}");

    if config.fail_on_error && !summary.all_passed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
