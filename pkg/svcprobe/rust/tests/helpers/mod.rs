// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;
use svcprobe::proto::auth::auth_service_server::{AuthService, AuthServiceServer};
use svcprobe::proto::auth::{VerifyResp, VerifyTokenReq};
use svcprobe::proto::cart::cart_service_server::{CartService, CartServiceServer};
use svcprobe::proto::cart::{Cart, GetCartRequest, GetCartResponse};
use svcprobe::proto::order::order_service_server::{OrderService, OrderServiceServer};
use svcprobe::proto::order::{GetUserOrdersRequest, GetUserOrdersResponse};
use svcprobe::proto::payment::payment_service_server::{PaymentService, PaymentServiceServer};
use svcprobe::proto::payment::{QueryPaymentRequest, QueryPaymentResponse};
use svcprobe::proto::product::product_service_server::{ProductService, ProductServiceServer};
use svcprobe::proto::product::{GetProductsRequest, GetProductsResponse, Product};
use svcprobe::proto::user::user_service_server::{UserService, UserServiceServer};
use svcprobe::proto::user::{GetUserInfoRequest, GetUserInfoResponse};
use svcprobe::{Registry, ServiceConfig, config::builtin_services};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tonic::{Code, Request, Response, Status};

/// How a fake service answers its one method.
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    Ok,
    Reject(Code),
    /// Never answer.
    Hang,
}

async fn respond<T>(behavior: Behavior, reply: T) -> Result<Response<T>, Status> {
    match behavior {
        Behavior::Ok => Ok(Response::new(reply)),
        Behavior::Reject(code) => Err(Status::new(code, "rejected by fake service")),
        Behavior::Hang => {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Response::new(reply))
        }
    }
}

/// Requests received by all fakes, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Calls(Arc<Mutex<Vec<String>>>);

impl Calls {
    fn record(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct FakeAuth {
    behavior: Behavior,
    calls: Calls,
}

#[tonic::async_trait]
impl AuthService for FakeAuth {
    async fn verify_token_by_rpc(
        &self,
        request: Request<VerifyTokenReq>,
    ) -> Result<Response<VerifyResp>, Status> {
        let req = request.into_inner();
        self.calls.record(format!("Auth token={}", req.token));
        respond(self.behavior, VerifyResp { res: false }).await
    }
}

struct FakeUser {
    behavior: Behavior,
    calls: Calls,
}

#[tonic::async_trait]
impl UserService for FakeUser {
    async fn get_user_info(
        &self,
        request: Request<GetUserInfoRequest>,
    ) -> Result<Response<GetUserInfoResponse>, Status> {
        let req = request.into_inner();
        self.calls.record(format!("User user_id={}", req.user_id));
        let reply = GetUserInfoResponse {
            user_id: req.user_id,
            username: "alice".into(),
            email: "alice@example.com".into(),
            phone: "555-0100".into(),
        };
        respond(self.behavior, reply).await
    }
}

struct FakeProduct {
    behavior: Behavior,
    calls: Calls,
}

#[tonic::async_trait]
impl ProductService for FakeProduct {
    async fn get_products(
        &self,
        request: Request<GetProductsRequest>,
    ) -> Result<Response<GetProductsResponse>, Status> {
        let req = request.into_inner();
        self.calls.record(format!(
            "Product page={} page_size={}",
            req.page, req.page_size
        ));
        let reply = GetProductsResponse {
            products: vec![Product {
                id: 1,
                name: "widget".into(),
                price: 9.99,
                stock: 3,
                ..Default::default()
            }],
            total: 1,
        };
        respond(self.behavior, reply).await
    }
}

struct FakeCart {
    behavior: Behavior,
    calls: Calls,
}

#[tonic::async_trait]
impl CartService for FakeCart {
    async fn get_cart(
        &self,
        request: Request<GetCartRequest>,
    ) -> Result<Response<GetCartResponse>, Status> {
        let req = request.into_inner();
        self.calls.record(format!("Cart user_id={}", req.user_id));
        let reply = GetCartResponse {
            success: true,
            error_message: String::new(),
            cart: Some(Cart {
                id: 7,
                user_id: req.user_id,
                ..Default::default()
            }),
        };
        respond(self.behavior, reply).await
    }
}

struct FakeOrder {
    behavior: Behavior,
    calls: Calls,
}

#[tonic::async_trait]
impl OrderService for FakeOrder {
    async fn get_user_orders(
        &self,
        request: Request<GetUserOrdersRequest>,
    ) -> Result<Response<GetUserOrdersResponse>, Status> {
        let req = request.into_inner();
        self.calls.record(format!("Order user_id={}", req.user_id));
        // A business-level failure inside an OK reply still counts as reachable.
        let reply = GetUserOrdersResponse {
            success: false,
            error_message: "no orders".into(),
            ..Default::default()
        };
        respond(self.behavior, reply).await
    }
}

struct FakePayment {
    behavior: Behavior,
    calls: Calls,
}

#[tonic::async_trait]
impl PaymentService for FakePayment {
    async fn query_payment(
        &self,
        request: Request<QueryPaymentRequest>,
    ) -> Result<Response<QueryPaymentResponse>, Status> {
        let req = request.into_inner();
        self.calls.record(format!("Payment order_id={}", req.order_id));
        let reply = QueryPaymentResponse {
            order_id: req.order_id,
            status: "paid".into(),
            ..Default::default()
        };
        respond(self.behavior, reply).await
    }
}

/// A fake gRPC server bound to an ephemeral loopback port.
/// Stops serving when dropped.
pub struct FakeServer {
    pub port: u16,
    handle: JoinHandle<()>,
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn serve(router: Router) -> FakeServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = tokio::spawn(async move {
        if let Err(e) = router
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
        {
            eprintln!("[fake:{port}] server error: {e}");
        }
    });
    FakeServer { port, handle }
}

/// A loopback port with nothing listening on it.
pub async fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

/// Start the fake for the service named `name` (one of the built-in six).
pub async fn spawn_fake(name: &str, behavior: Behavior, calls: &Calls) -> FakeServer {
    let calls = calls.clone();
    let mut builder = Server::builder();
    let router = match name {
        "Auth" => builder.add_service(AuthServiceServer::new(FakeAuth { behavior, calls })),
        "User" => builder.add_service(UserServiceServer::new(FakeUser { behavior, calls })),
        "Product" => {
            builder.add_service(ProductServiceServer::new(FakeProduct { behavior, calls }))
        }
        "Cart" => builder.add_service(CartServiceServer::new(FakeCart { behavior, calls })),
        "Order" => builder.add_service(OrderServiceServer::new(FakeOrder { behavior, calls })),
        "Payment" => {
            builder.add_service(PaymentServiceServer::new(FakePayment { behavior, calls }))
        }
        other => panic!("no fake for service {other}"),
    };
    serve(router).await
}

/// The built-in six services running as fakes. `None` leaves a service down.
pub struct Shop {
    pub calls: Calls,
    pub services: Vec<ServiceConfig>,
    _servers: Vec<FakeServer>,
}

impl Shop {
    /// `plan` is indexed in built-in order: Auth, User, Product, Cart, Order, Payment.
    pub async fn start(plan: [Option<Behavior>; 6]) -> Self {
        let calls = Calls::default();
        let mut services = Vec::new();
        let mut servers = Vec::new();

        for (mut svc, behavior) in builtin_services().into_iter().zip(plan) {
            svc.host = "127.0.0.1".to_string();
            svc.port = match behavior {
                Some(b) => {
                    let server = spawn_fake(&svc.name, b, &calls).await;
                    let port = server.port;
                    servers.push(server);
                    port
                }
                None => closed_port().await,
            };
            services.push(svc);
        }

        Self {
            calls,
            services,
            _servers: servers,
        }
    }

    pub async fn all_up() -> Self {
        Self::start([Some(Behavior::Ok); 6]).await
    }

    pub fn registry(&self) -> Registry {
        Registry::from_configs(self.services.clone()).unwrap()
    }

    /// Registry restricted to `names`, in built-in order.
    pub fn registry_of(&self, names: &[&str]) -> Registry {
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        self.registry().select(&names).unwrap()
    }

    /// YAML `services:` section pointing at the fakes.
    pub fn services_yaml(&self, names: &[&str]) -> String {
        let mut yaml = String::from("services:\n");
        for svc in self.services.iter().filter(|s| names.contains(&s.name.as_str())) {
            yaml.push_str(&format!(
                "  - name: {}\n    host: {}\n    port: {}\n    probe:\n      method: {}\n",
                svc.name,
                svc.host,
                svc.port,
                method_key(&svc.name)
            ));
        }
        yaml
    }
}

fn method_key(name: &str) -> &'static str {
    match name {
        "Auth" => "verify_token",
        "User" => "get_user_info",
        "Product" => "get_products",
        "Cart" => "get_cart",
        "Order" => "get_user_orders",
        "Payment" => "query_payment",
        other => panic!("no probe method for {other}"),
    }
}
