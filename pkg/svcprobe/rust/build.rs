// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

const PROTOS: &[&str] = &[
    "proto/auth.proto",
    "proto/user.proto",
    "proto/product.proto",
    "proto/cart.proto",
    "proto/order.proto",
    "proto/payment.proto",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto");

    // Servers are generated too so tests can stand up fake services.
    tonic_prost_build::configure()
        .build_client(true)
        .build_server(true)
        .compile_protos(PROTOS, &["proto"])?;
    Ok(())
}
