// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{net::SocketAddr, process::ExitCode};

use axum::http::{Method, header};
use campus_bridge::{
    Bridge,
    clap::Parser,
    settings::{build_config, build_file_path, command::Args},
};
use enviroment::build_address_http;
use middleware::tower_trace;
use server::build_routes;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

mod enviroment;
mod error;
mod logging;
mod middleware;
mod server;
mod wrappers;

mod doc;

const TARGET_MAIN: &str = "Campus-Http";

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut file_path = args.file_path;
    if file_path.is_empty() {
        file_path = build_file_path();
    }

    let config = match build_config(args.env_config, &file_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let _logging = logging::init_logging(&config.logging);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(TARGET_MAIN, "{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: campus_bridge::config::Config) -> Result<(), String> {
    let address = build_address_http();
    let listener_http = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| format!("Can not bind {}: {}", address, e))?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any);

    let bridge = Bridge::build(config, None)
        .await
        .map_err(|e| e.to_string())?;
    let token = bridge.token().clone();

    info!(TARGET_MAIN, "Listening on {}", address);
    axum::serve(
        listener_http,
        tower_trace(build_routes(bridge))
            .layer(cors)
            .into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        token.cancelled().await;
    })
    .await
    .map_err(|e| format!("Server error: {}", e))
}
