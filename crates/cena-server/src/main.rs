// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use std::env;
use std::path::PathBuf;

use cena_server::{
    build_router, load_users, validate_startup_config, ApiConfig, AppState, DEFAULT_BIND_ADDR,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                warn!("cannot register unix signal handlers, falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("CENA_LOG_JSON", true) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn api_config_from_env() -> ApiConfig {
    let defaults = ApiConfig::default();
    ApiConfig {
        bind_addr: env::var("CENA_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        max_body_bytes: env_usize("CENA_MAX_BODY_BYTES", defaults.max_body_bytes),
        allow_bulk_delete: env_bool("CENA_ALLOW_BULK_DELETE", defaults.allow_bulk_delete),
        users_file: env::var("CENA_USERS_FILE").ok().map(PathBuf::from),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let api = api_config_from_env();
    let users = match &api.users_file {
        Some(path) => load_users(path).map_err(|e| e.to_string())?,
        None => {
            warn!("CENA_USERS_FILE is not set; only anonymous access is possible");
            Vec::new()
        }
    };
    validate_startup_config(&api, &users).map_err(|e| e.to_string())?;

    let bind_addr = api.bind_addr.clone();
    let state = AppState::new(api, &users);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind failed on {bind_addr}: {e}"))?;
    info!(users = users.len(), "cena-server listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
