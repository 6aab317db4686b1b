// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Generated messages and clients for the probed services.

pub mod auth {
    tonic::include_proto!("auth");
}

pub mod user {
    tonic::include_proto!("user");
}

pub mod product {
    tonic::include_proto!("product");
}

pub mod cart {
    tonic::include_proto!("cart");
}

pub mod order {
    tonic::include_proto!("order");
}

pub mod payment {
    tonic::include_proto!("payment");
}
