// SPDX-License-Identifier: Apache-2.0
#![allow(dead_code)]

use std::net::SocketAddr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cena_core::sha256_hex;
use cena_server::{build_router, ApiConfig, AppState, Role, UserAccount};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub const MANAGER: (&str, &str) = ("manager", "manager-pass");
pub const ALICE: (&str, &str) = ("alice", "alice-pass");
pub const BOB: (&str, &str) = ("bob", "bob-pass");
pub const ADMIN: (&str, &str) = ("admin", "admin-pass");
pub const OPS: (&str, &str) = ("ops", "ops-pass");

fn account((name, password): (&str, &str), roles: &[Role]) -> UserAccount {
    UserAccount {
        name: name.to_string(),
        password_sha256: sha256_hex(password.as_bytes()),
        roles: roles.to_vec(),
    }
}

pub fn accounts() -> Vec<UserAccount> {
    vec![
        account(MANAGER, &[Role::AuthenticatedUser, Role::IngredientManager]),
        account(ALICE, &[Role::AuthenticatedUser]),
        account(BOB, &[Role::AuthenticatedUser]),
        account(ADMIN, &[Role::SuperAdministrator]),
        account(OPS, &[Role::Actuator]),
    ]
}

pub async fn spawn_app(api: ApiConfig) -> SocketAddr {
    let app = build_router(AppState::new(api, &accounts()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

pub async fn spawn_default_app() -> SocketAddr {
    spawn_app(ApiConfig::default()).await
}

pub fn basic((name, password): (&str, &str)) -> String {
    format!("Basic {}", STANDARD.encode(format!("{name}:{password}")))
}

#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub head: String,
    pub body: String,
}

impl RawResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("json body expected ({e}): {}", self.body))
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }

    pub fn error_code(&self) -> u64 {
        self.json()["code"].as_u64().expect("error code")
    }
}

pub async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    auth: Option<(&str, &str)>,
    body: Option<&str>,
) -> RawResponse {
    let mut headers = Vec::new();
    if let Some(credentials) = auth {
        headers.push(("Authorization".to_string(), basic(credentials)));
    }
    send_with_headers(addr, method, path, &headers, body).await
}

pub async fn send_with_headers(
    addr: SocketAddr,
    method: &str,
    path: &str,
    headers: &[(String, String)],
    body: Option<&str>,
) -> RawResponse {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    let payload = body.unwrap_or_default();
    if body.is_some() {
        req.push_str("Content-Type: application/json\r\n");
    }
    req.push_str(&format!("Content-Length: {}\r\n\r\n{payload}", payload.len()));
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    RawResponse {
        status,
        head: head.to_string(),
        body: body.to_string(),
    }
}

/// Creates an ingredient as the manager and returns its id.
pub async fn create_ingredient(addr: SocketAddr, body: &str) -> String {
    let res = send_raw(addr, "POST", "/api/ingredients", Some(MANAGER), Some(body)).await;
    assert_eq!(res.status, 201, "{}", res.body);
    res.json()["id"].as_str().expect("ingredient id").to_string()
}

/// Creates a recipe as `author` and returns its id.
pub async fn create_recipe(addr: SocketAddr, author: (&str, &str), body: &str) -> String {
    let res = send_raw(addr, "POST", "/api/recipes", Some(author), Some(body)).await;
    assert_eq!(res.status, 201, "{}", res.body);
    res.json()["id"].as_str().expect("recipe id").to_string()
}
