// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Per-service probe calls.
//!
//! Every service exposes a different request and response type. Each probe
//! hides its own request construction behind [`Probe::call`] so the runner
//! can treat all of them alike.

use crate::proto::auth::{VerifyTokenReq, auth_service_client::AuthServiceClient};
use crate::proto::cart::{GetCartRequest, cart_service_client::CartServiceClient};
use crate::proto::order::{GetUserOrdersRequest, order_service_client::OrderServiceClient};
use crate::proto::payment::{QueryPaymentRequest, payment_service_client::PaymentServiceClient};
use crate::proto::product::{GetProductsRequest, product_service_client::ProductServiceClient};
use crate::proto::user::{GetUserInfoRequest, user_service_client::UserServiceClient};
use serde::Deserialize;
use std::sync::Arc;
use tonic::Status;
use tonic::transport::Channel;

/// One unary round trip against an open channel.
///
/// The response payload is discarded: any OK reply counts as success.
#[tonic::async_trait]
pub trait Probe: Send + Sync {
    async fn call(&self, channel: Channel) -> Result<(), Status>;

    /// Fully qualified gRPC method, e.g. `auth.AuthService/VerifyTokenByRPC`.
    fn method(&self) -> &'static str;
}

pub struct VerifyTokenProbe {
    pub token: String,
}

#[tonic::async_trait]
impl Probe for VerifyTokenProbe {
    async fn call(&self, channel: Channel) -> Result<(), Status> {
        let mut client = AuthServiceClient::new(channel);
        client
            .verify_token_by_rpc(VerifyTokenReq {
                token: self.token.clone(),
            })
            .await?;
        Ok(())
    }

    fn method(&self) -> &'static str {
        "auth.AuthService/VerifyTokenByRPC"
    }
}

pub struct GetUserInfoProbe {
    pub user_id: i32,
}

#[tonic::async_trait]
impl Probe for GetUserInfoProbe {
    async fn call(&self, channel: Channel) -> Result<(), Status> {
        let mut client = UserServiceClient::new(channel);
        client
            .get_user_info(GetUserInfoRequest {
                user_id: self.user_id,
            })
            .await?;
        Ok(())
    }

    fn method(&self) -> &'static str {
        "user.UserService/GetUserInfo"
    }
}

pub struct GetProductsProbe {
    pub page: i32,
    pub page_size: i32,
}

#[tonic::async_trait]
impl Probe for GetProductsProbe {
    async fn call(&self, channel: Channel) -> Result<(), Status> {
        let mut client = ProductServiceClient::new(channel);
        client
            .get_products(GetProductsRequest {
                page: self.page,
                page_size: self.page_size,
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    fn method(&self) -> &'static str {
        "product.ProductService/GetProducts"
    }
}

pub struct GetCartProbe {
    pub user_id: i32,
}

#[tonic::async_trait]
impl Probe for GetCartProbe {
    async fn call(&self, channel: Channel) -> Result<(), Status> {
        let mut client = CartServiceClient::new(channel);
        client
            .get_cart(GetCartRequest {
                user_id: self.user_id,
            })
            .await?;
        Ok(())
    }

    fn method(&self) -> &'static str {
        "cart.CartService/GetCart"
    }
}

pub struct GetUserOrdersProbe {
    pub user_id: i32,
}

#[tonic::async_trait]
impl Probe for GetUserOrdersProbe {
    async fn call(&self, channel: Channel) -> Result<(), Status> {
        let mut client = OrderServiceClient::new(channel);
        client
            .get_user_orders(GetUserOrdersRequest {
                user_id: self.user_id,
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    fn method(&self) -> &'static str {
        "order.OrderService/GetUserOrders"
    }
}

pub struct QueryPaymentProbe {
    pub order_id: String,
}

#[tonic::async_trait]
impl Probe for QueryPaymentProbe {
    async fn call(&self, channel: Channel) -> Result<(), Status> {
        let mut client = PaymentServiceClient::new(channel);
        client
            .query_payment(QueryPaymentRequest {
                order_id: self.order_id.clone(),
            })
            .await?;
        Ok(())
    }

    fn method(&self) -> &'static str {
        "payment.PaymentService/QueryPayment"
    }
}

fn default_token() -> String {
    "test_token".to_string()
}

fn default_order_id() -> String {
    "test_order".to_string()
}

fn default_id() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

/// Probe call described as data, as it appears in the YAML registry.
///
/// Field values are placeholders that only need to pass required-field
/// validation on the remote side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case", deny_unknown_fields)]
pub enum ProbeSpec {
    VerifyToken {
        #[serde(default = "default_token")]
        token: String,
    },
    GetUserInfo {
        #[serde(default = "default_id")]
        user_id: i32,
    },
    GetProducts {
        #[serde(default = "default_id")]
        page: i32,
        #[serde(default = "default_page_size")]
        page_size: i32,
    },
    GetCart {
        #[serde(default = "default_id")]
        user_id: i32,
    },
    GetUserOrders {
        #[serde(default = "default_id")]
        user_id: i32,
    },
    QueryPayment {
        #[serde(default = "default_order_id")]
        order_id: String,
    },
}

impl ProbeSpec {
    pub fn verify_token() -> Self {
        ProbeSpec::VerifyToken {
            token: default_token(),
        }
    }

    pub fn get_user_info() -> Self {
        ProbeSpec::GetUserInfo {
            user_id: default_id(),
        }
    }

    pub fn get_products() -> Self {
        ProbeSpec::GetProducts {
            page: default_id(),
            page_size: default_page_size(),
        }
    }

    pub fn get_cart() -> Self {
        ProbeSpec::GetCart {
            user_id: default_id(),
        }
    }

    pub fn get_user_orders() -> Self {
        ProbeSpec::GetUserOrders {
            user_id: default_id(),
        }
    }

    pub fn query_payment() -> Self {
        ProbeSpec::QueryPayment {
            order_id: default_order_id(),
        }
    }

    pub fn into_probe(self) -> Arc<dyn Probe> {
        match self {
            ProbeSpec::VerifyToken { token } => Arc::new(VerifyTokenProbe { token }),
            ProbeSpec::GetUserInfo { user_id } => Arc::new(GetUserInfoProbe { user_id }),
            ProbeSpec::GetProducts { page, page_size } => {
                Arc::new(GetProductsProbe { page, page_size })
            }
            ProbeSpec::GetCart { user_id } => Arc::new(GetCartProbe { user_id }),
            ProbeSpec::GetUserOrders { user_id } => Arc::new(GetUserOrdersProbe { user_id }),
            ProbeSpec::QueryPayment { order_id } => Arc::new(QueryPaymentProbe { order_id }),
        }
    }
}
