// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod client_id;
mod json_body;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use super_lottery::{Clock, SystemClock};
use super_lottery_api::{
    ApiError, ChosenNumbersRequest, ClientNameRequest, ClientNameService, LotteryNameRequest,
    LotteryService, NextExtractionRequest, ParticipantService,
};
use super_lottery_domain::{Extraction, Lottery, LotteryMembership, Participant, ParticipantStats};
use super_lottery_persistence::{
    BlobStore, LotteryRepository, PersistenceError, SqliteBlobStore,
};
use tracing::{error, info};

use crate::client_id::ClientId;
use crate::json_body::JsonBody;

/// Super Lottery Server - HTTP server for the Super Lottery
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    bind: IpAddr,
}

/// Errors that stop the server from starting or serving.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    /// The record store could not be opened.
    #[error("failed to open record store: {0}")]
    Store(#[from] PersistenceError),
    /// The listener failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state shared across handlers.
///
/// The services are cheap to clone; they share one record store and clock.
#[derive(Clone)]
struct AppState {
    lotteries: LotteryService,
    participants: ParticipantService,
    client_names: ClientNameService,
}

impl AppState {
    fn new(store: Arc<dyn BlobStore>, clock: Arc<dyn Clock>) -> Self {
        let repository: LotteryRepository = LotteryRepository::new(store);
        Self {
            lotteries: LotteryService::new(repository.clone(), Arc::clone(&clock)),
            participants: ParticipantService::new(repository.clone(), clock),
            client_names: ClientNameService::new(repository),
        }
    }
}

/// Envelope of every response body.
#[derive(Debug, Serialize)]
struct DataResponse<T> {
    data: T,
}

/// Successful handler output: the client cookie (when newly issued) and the body.
type HandlerResult<T> = Result<(ClientId, Json<DataResponse<T>>), HttpError>;

const fn respond<T>(client: ClientId, data: T) -> (ClientId, Json<DataResponse<T>>) {
    (client, Json(DataResponse { data }))
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<DataResponse<String>> = Json(DataResponse { data: self.message });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %err, "Request failed");
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Owner endpoints
// ============================================================================

async fn handle_list_lotteries(
    State(app_state): State<AppState>,
    client: ClientId,
) -> HandlerResult<Vec<Lottery>> {
    let lotteries: Vec<Lottery> = app_state.lotteries.load_lotteries(&client.id).await?;
    Ok(respond(client, lotteries))
}

async fn handle_create_lottery(
    State(app_state): State<AppState>,
    client: ClientId,
    JsonBody(req): JsonBody<LotteryNameRequest>,
) -> HandlerResult<Lottery> {
    info!(client_id = %client.id, lottery = %req.name, "Handling create_lottery request");
    let lottery: Lottery = app_state
        .lotteries
        .create_lottery(&client.id, &req.name)
        .await?;
    Ok(respond(client, lottery))
}

async fn handle_get_lottery(
    State(app_state): State<AppState>,
    client: ClientId,
    Path(lottery_id): Path<String>,
) -> HandlerResult<Lottery> {
    let lottery: Lottery = app_state
        .lotteries
        .get_lottery(&lottery_id, &client.id)
        .await?;
    Ok(respond(client, lottery))
}

async fn handle_create_next_extraction(
    State(app_state): State<AppState>,
    client: ClientId,
    Path(lottery_id): Path<String>,
    JsonBody(req): JsonBody<NextExtractionRequest>,
) -> HandlerResult<Lottery> {
    info!(
        client_id = %client.id,
        lottery = %lottery_id,
        extraction_time = %req.extraction_time,
        "Handling create_next_extraction request"
    );
    let lottery: Lottery = app_state
        .lotteries
        .create_next_extraction(&lottery_id, &client.id, &req)
        .await?;
    Ok(respond(client, lottery))
}

async fn handle_get_extraction(
    State(app_state): State<AppState>,
    client: ClientId,
    Path((lottery_id, extraction_id)): Path<(String, String)>,
) -> HandlerResult<Extraction> {
    let extraction: Extraction = app_state
        .participants
        .get_extraction(&lottery_id, &client.id, &extraction_id)
        .await?;
    Ok(respond(client, extraction))
}

async fn handle_get_extraction_stats(
    State(app_state): State<AppState>,
    client: ClientId,
    Path((lottery_id, extraction_id)): Path<(String, String)>,
) -> HandlerResult<Vec<ParticipantStats>> {
    let stats: Vec<ParticipantStats> = app_state
        .participants
        .get_extraction_stats(&lottery_id, &client.id, &extraction_id)
        .await?;
    Ok(respond(client, stats))
}

// ============================================================================
// Participant endpoints
// ============================================================================

async fn handle_list_joined_lotteries(
    State(app_state): State<AppState>,
    client: ClientId,
) -> HandlerResult<Vec<LotteryMembership>> {
    let joined: Vec<LotteryMembership> = app_state
        .participants
        .get_joined_lotteries(&client.id)
        .await?;
    Ok(respond(client, joined))
}

async fn handle_join_lottery(
    State(app_state): State<AppState>,
    client: ClientId,
    JsonBody(req): JsonBody<LotteryNameRequest>,
) -> HandlerResult<Participant> {
    info!(client_id = %client.id, lottery = %req.name, "Handling join_lottery request");
    let participant: Participant = app_state
        .participants
        .join_lottery(&client.id, &req.name)
        .await?;
    Ok(respond(client, participant))
}

async fn handle_get_joined_lottery(
    State(app_state): State<AppState>,
    client: ClientId,
    Path(lottery_id): Path<String>,
) -> HandlerResult<LotteryMembership> {
    let membership: LotteryMembership = app_state
        .participants
        .get_joined_lottery(&lottery_id, &client.id)
        .await?;
    Ok(respond(client, membership))
}

async fn handle_save_chosen_numbers(
    State(app_state): State<AppState>,
    client: ClientId,
    Path(lottery_id): Path<String>,
    JsonBody(req): JsonBody<ChosenNumbersRequest>,
) -> HandlerResult<Participant> {
    info!(client_id = %client.id, lottery = %lottery_id, "Handling save_chosen_numbers request");
    let participant: Participant = app_state
        .participants
        .save_chosen_numbers(&client.id, &lottery_id, &req.chosen_numbers)
        .await?;
    Ok(respond(client, participant))
}

// ============================================================================
// Client names
// ============================================================================

async fn handle_get_client_name(
    State(app_state): State<AppState>,
    client: ClientId,
) -> HandlerResult<Option<String>> {
    let name: Option<String> = app_state.client_names.get_client_name(&client.id).await?;
    Ok(respond(client, name))
}

async fn handle_save_client_name(
    State(app_state): State<AppState>,
    client: ClientId,
    JsonBody(req): JsonBody<ClientNameRequest>,
) -> HandlerResult<String> {
    let name: String = app_state
        .client_names
        .save_client_name(&client.id, &req.name)
        .await?;
    Ok(respond(client, name))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/lotteries",
            get(handle_list_lotteries).post(handle_create_lottery),
        )
        .route("/api/lotteries/{lottery_id}", get(handle_get_lottery))
        .route(
            "/api/lotteries/{lottery_id}/next-extraction",
            post(handle_create_next_extraction),
        )
        .route(
            "/api/lotteries/{lottery_id}/extractions/{extraction_id}",
            get(handle_get_extraction),
        )
        .route(
            "/api/lotteries/{lottery_id}/extractions/{extraction_id}/stats",
            get(handle_get_extraction_stats),
        )
        .route(
            "/api/joined-lotteries",
            get(handle_list_joined_lotteries).post(handle_join_lottery),
        )
        .route(
            "/api/joined-lotteries/{lottery_id}",
            get(handle_get_joined_lottery).put(handle_save_chosen_numbers),
        )
        .route(
            "/api/client-name",
            get(handle_get_client_name).put(handle_save_client_name),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Super Lottery Server");

    // Initialize the record store (in-memory or file-based based on CLI argument)
    let store: SqliteBlobStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteBlobStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteBlobStore::new_in_memory()?
    };

    let app_state: AppState = AppState::new(Arc::new(store), Arc::new(SystemClock));

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
