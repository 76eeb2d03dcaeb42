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

mod seed;
mod session;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{info, warn};

use clinic_rota::Ledger;
use clinic_rota_api::{
    ApiError, ApiResponse, ApiResult, AssignShiftRequest, AssignShiftResponse,
    AuthenticatedActor, Operation, RateLimiter, RemoveAssignmentRequest,
    RemoveAssignmentResponse, SubmitSwapOfferRequest, UpdateScheduleStatusRequest,
    UpsertConstraintRequest, approve_swap, assign_shift, authorize, auto_assign,
    get_constraints, get_roster, get_schedule, get_swaps, remove_assignment, submit_swap_offer,
    update_schedule_status, upsert_constraint,
};
use clinic_rota_domain::{CohortTag, OrgRole, StaffMember};
use clinic_rota_telemetry::{CohortStats, MemoryRecorder, OperationEvent, Recorder};

use crate::session::{SessionActor, SessionStore};

/// Clinic Rota Server - HTTP adaptation of the scheduling engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Everything the engine owns for one cycle, guarded by a single lock.
///
/// Every operation (reads included) takes this lock for its whole
/// guard-validate-apply-commit span, giving the one-logical-writer model
/// the ledger requires: no interleaving between a capacity check and the
/// write it validates, and atomic rate-limit bucket updates per actor.
struct Engine {
    ledger: Ledger,
    limiter: RateLimiter,
    recorder: MemoryRecorder,
    sessions: SessionStore,
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<Mutex<Engine>>,
}

/// API request for the simulated login.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoginRequest {
    /// The organizational role to log in as (ADMIN or WORKER).
    role: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoginResponse {
    /// The bearer token for subsequent requests.
    token: String,
    /// The resolved staff member's identifier.
    staff_id: String,
    /// Display name.
    name: String,
    /// Organizational role.
    org_role: String,
    /// Clinical staff role.
    staff_role: String,
    /// Experiment cohort tag, if assigned.
    cohort: Option<String>,
}

/// Aggregated telemetry for one cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CohortStatsView {
    /// The cohort tag.
    cohort: String,
    /// Total events recorded.
    total: usize,
    /// Events that failed.
    errors: usize,
    /// Mean duration in milliseconds.
    avg_duration_ms: u64,
}

/// API response for the telemetry stats endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TelemetryStatsResponse {
    /// One entry per cohort seen in the event buffer.
    cohorts: Vec<CohortStatsView>,
}

/// Maps a typed API error to its HTTP status.
fn status_for(err: &ApiError) -> StatusCode {
    match err {
        ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
        ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        ApiError::RoleMismatch { .. }
        | ApiError::AlreadyAssigned { .. }
        | ApiError::CapacityExceeded { .. }
        | ApiError::ConstraintViolation { .. }
        | ApiError::InvalidState { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Wraps a read result in the uniform envelope with its HTTP status.
fn reply<T>(result: Result<T, ApiError>) -> (StatusCode, Json<ApiResponse<T>>) {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::ok(data))),
        Err(err) => (status_for(&err), Json(ApiResponse::err(&err))),
    }
}

/// Commits a mutating result: on success the new ledger becomes
/// authoritative while the lock is still held.
fn commit<T>(
    ledger: &mut Ledger,
    result: Result<ApiResult<T>, ApiError>,
) -> (StatusCode, Json<ApiResponse<T>>) {
    match result {
        Ok(api_result) => {
            *ledger = api_result.new_ledger;
            (StatusCode::OK, Json(ApiResponse::ok(api_result.response)))
        }
        Err(err) => (status_for(&err), Json(ApiResponse::err(&err))),
    }
}

/// Records the per-operation telemetry event. Recording is an in-memory
/// append and never blocks the response.
fn record(
    recorder: &mut MemoryRecorder,
    operation: Operation,
    started: Instant,
    success: bool,
    actor: Option<&AuthenticatedActor>,
) {
    let duration_ms: u64 =
        u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let cohort: Option<CohortTag> = actor.and_then(|a| a.cohort.clone());
    recorder.record(OperationEvent::new(
        operation.name().to_string(),
        duration_ms,
        success,
        cohort,
    ));
}

/// Handler for POST `/login`.
///
/// Simulated authentication: resolves the first roster member holding the
/// requested organizational role and issues a session token for them.
async fn handle_login(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<ApiResponse<LoginResponse>>) {
    let role: Result<OrgRole, _> = OrgRole::from_str(&request.role.to_uppercase());
    let Ok(role) = role else {
        let err: ApiError = ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Invalid role: '{}'. Must be ADMIN or WORKER", request.role),
        };
        return (status_for(&err), Json(ApiResponse::err(&err)));
    };

    let mut engine = state.engine.lock().await;
    let member: Option<StaffMember> = engine
        .ledger
        .roster
        .iter()
        .find(|s| s.org_role == role)
        .cloned();

    let Some(member) = member else {
        let err: ApiError = ApiError::NotFound {
            resource_type: String::from("Staff member"),
            message: format!("No roster member holds the {role} role"),
        };
        return (status_for(&err), Json(ApiResponse::err(&err)));
    };

    let actor: AuthenticatedActor = AuthenticatedActor::from_staff(&member);
    let token: String = engine.sessions.issue(actor);
    drop(engine);

    info!(staff_id = %member.id, role = %role, "Session issued");

    let response: LoginResponse = LoginResponse {
        token,
        staff_id: member.id.value().to_string(),
        name: member.name.clone(),
        org_role: member.org_role.as_str().to_string(),
        staff_role: member.staff_role.as_str().to_string(),
        cohort: member.cohort.as_ref().map(|c| c.value().to_string()),
    };
    (StatusCode::OK, Json(ApiResponse::ok(response)))
}

/// Handler for POST `/logout`.
///
/// Deletes the session behind the presented bearer token. Unknown or
/// absent tokens are ignored; logout always succeeds.
async fn handle_logout(
    AxumState(state): AxumState<AppState>,
    headers: axum::http::HeaderMap,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let token: Option<&str> = headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    if let Some(token) = token {
        let mut engine = state.engine.lock().await;
        engine.sessions.revoke(token);
    }

    (StatusCode::OK, Json(ApiResponse::ok(())))
}

/// Handler for GET `/schedule`.
async fn handle_get_schedule(
    AxumState(state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
) -> impl axum::response::IntoResponse {
    let started: Instant = Instant::now();
    let mut engine = state.engine.lock().await;
    let Engine {
        ledger, recorder, ..
    } = &mut *engine;

    let result = get_schedule(ledger, actor.as_ref());
    let success: bool = result.is_ok();
    let response = reply(result);
    record(
        recorder,
        Operation::GetSchedule,
        started,
        success,
        actor.as_ref(),
    );
    response
}

/// Handler for POST `/schedule/status`.
async fn handle_update_schedule_status(
    AxumState(state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Json(request): Json<UpdateScheduleStatusRequest>,
) -> impl axum::response::IntoResponse {
    let started: Instant = Instant::now();
    let mut engine = state.engine.lock().await;
    let Engine {
        ledger,
        limiter,
        recorder,
        ..
    } = &mut *engine;

    let result = update_schedule_status(
        ledger,
        &request,
        actor.as_ref(),
        limiter,
        OffsetDateTime::now_utc(),
    );
    let success: bool = result.is_ok();
    let response = commit(ledger, result);
    record(
        recorder,
        Operation::UpdateScheduleStatus,
        started,
        success,
        actor.as_ref(),
    );
    response
}

/// Handler for GET `/constraints/{staff_id}`.
async fn handle_get_constraints(
    AxumState(state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(staff_id): Path<String>,
) -> impl axum::response::IntoResponse {
    let started: Instant = Instant::now();
    let mut engine = state.engine.lock().await;
    let Engine {
        ledger,
        limiter,
        recorder,
        ..
    } = &mut *engine;

    let result = get_constraints(
        ledger,
        &staff_id,
        actor.as_ref(),
        limiter,
        OffsetDateTime::now_utc(),
    );
    let success: bool = result.is_ok();
    let response = reply(result);
    record(
        recorder,
        Operation::GetConstraints,
        started,
        success,
        actor.as_ref(),
    );
    response
}

/// Handler for POST `/constraints`.
async fn handle_upsert_constraint(
    AxumState(state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Json(request): Json<UpsertConstraintRequest>,
) -> impl axum::response::IntoResponse {
    let started: Instant = Instant::now();
    let mut engine = state.engine.lock().await;
    let Engine {
        ledger,
        limiter,
        recorder,
        ..
    } = &mut *engine;

    let result = upsert_constraint(
        ledger,
        &request,
        actor.as_ref(),
        limiter,
        OffsetDateTime::now_utc(),
    );
    let success: bool = result.is_ok();
    let response = commit(ledger, result);
    record(
        recorder,
        Operation::UpsertConstraint,
        started,
        success,
        actor.as_ref(),
    );
    response
}

/// Handler for POST `/assign_shift`.
async fn handle_assign_shift(
    AxumState(state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Json(request): Json<AssignShiftRequest>,
) -> (StatusCode, Json<ApiResponse<AssignShiftResponse>>) {
    let started: Instant = Instant::now();
    let mut engine = state.engine.lock().await;
    let Engine {
        ledger,
        limiter,
        recorder,
        ..
    } = &mut *engine;

    let result = assign_shift(
        ledger,
        &request,
        actor.as_ref(),
        limiter,
        OffsetDateTime::now_utc(),
    );
    let success: bool = result.is_ok();
    if !success {
        warn!(shift_id = %request.shift_id, staff_id = %request.staff_id, "Assignment rejected");
    }
    let response = commit(ledger, result);
    record(
        recorder,
        Operation::AssignShift,
        started,
        success,
        actor.as_ref(),
    );
    response
}

/// Handler for POST `/remove_assignment`.
async fn handle_remove_assignment(
    AxumState(state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Json(request): Json<RemoveAssignmentRequest>,
) -> (StatusCode, Json<ApiResponse<RemoveAssignmentResponse>>) {
    let started: Instant = Instant::now();
    let mut engine = state.engine.lock().await;
    let Engine {
        ledger,
        limiter,
        recorder,
        ..
    } = &mut *engine;

    let result = remove_assignment(
        ledger,
        &request,
        actor.as_ref(),
        limiter,
        OffsetDateTime::now_utc(),
    );
    let success: bool = result.is_ok();
    let response = commit(ledger, result);
    record(
        recorder,
        Operation::RemoveAssignment,
        started,
        success,
        actor.as_ref(),
    );
    response
}

/// Handler for POST `/auto_assign`.
async fn handle_auto_assign(
    AxumState(state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
) -> impl axum::response::IntoResponse {
    let started: Instant = Instant::now();
    let mut engine = state.engine.lock().await;
    let Engine {
        ledger,
        limiter,
        recorder,
        ..
    } = &mut *engine;

    let result = auto_assign(ledger, actor.as_ref(), limiter, OffsetDateTime::now_utc());
    let success: bool = result.is_ok();
    let response = commit(ledger, result);
    record(
        recorder,
        Operation::AutoAssign,
        started,
        success,
        actor.as_ref(),
    );
    response
}

/// Handler for GET `/swaps`.
async fn handle_get_swaps(
    AxumState(state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
) -> impl axum::response::IntoResponse {
    let started: Instant = Instant::now();
    let mut engine = state.engine.lock().await;
    let Engine {
        ledger, recorder, ..
    } = &mut *engine;

    let result = get_swaps(ledger, actor.as_ref());
    let success: bool = result.is_ok();
    let response = reply(result);
    record(
        recorder,
        Operation::GetSwaps,
        started,
        success,
        actor.as_ref(),
    );
    response
}

/// Handler for POST `/swaps/{swap_id}/offer`.
async fn handle_submit_swap_offer(
    AxumState(state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(swap_id): Path<String>,
) -> impl axum::response::IntoResponse {
    let started: Instant = Instant::now();
    let mut engine = state.engine.lock().await;
    let Engine {
        ledger,
        limiter,
        recorder,
        ..
    } = &mut *engine;

    let request: SubmitSwapOfferRequest = SubmitSwapOfferRequest { swap_id };
    let result = submit_swap_offer(
        ledger,
        &request,
        actor.as_ref(),
        limiter,
        OffsetDateTime::now_utc(),
    );
    let success: bool = result.is_ok();
    let response = commit(ledger, result);
    record(
        recorder,
        Operation::SubmitSwapOffer,
        started,
        success,
        actor.as_ref(),
    );
    response
}

/// Handler for POST `/swaps/{swap_id}/approve`.
async fn handle_approve_swap(
    AxumState(state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(swap_id): Path<String>,
) -> impl axum::response::IntoResponse {
    let started: Instant = Instant::now();
    let mut engine = state.engine.lock().await;
    let Engine {
        ledger,
        limiter,
        recorder,
        ..
    } = &mut *engine;

    let result = approve_swap(
        ledger,
        &swap_id,
        actor.as_ref(),
        limiter,
        OffsetDateTime::now_utc(),
    );
    let success: bool = result.is_ok();
    let response = commit(ledger, result);
    record(
        recorder,
        Operation::ApproveSwap,
        started,
        success,
        actor.as_ref(),
    );
    response
}

/// Handler for GET `/roster`.
async fn handle_get_roster(
    AxumState(state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
) -> impl axum::response::IntoResponse {
    let started: Instant = Instant::now();
    let mut engine = state.engine.lock().await;
    let Engine {
        ledger, recorder, ..
    } = &mut *engine;

    let result = get_roster(ledger, actor.as_ref());
    let success: bool = result.is_ok();
    let response = reply(result);
    record(
        recorder,
        Operation::GetRoster,
        started,
        success,
        actor.as_ref(),
    );
    response
}

/// Handler for GET `/telemetry/stats`.
///
/// Aggregates the recorder's buffer per cohort for the diagnostics view.
async fn handle_telemetry_stats(
    AxumState(state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
) -> (StatusCode, Json<ApiResponse<TelemetryStatsResponse>>) {
    let engine = state.engine.lock().await;

    if let Err(err) = authorize(actor.as_ref(), Operation::GetTelemetryStats) {
        let err: ApiError = err.into();
        return (status_for(&err), Json(ApiResponse::err(&err)));
    }

    let mut cohorts: Vec<String> = engine
        .recorder
        .events()
        .iter()
        .filter_map(|e| e.cohort.as_ref().map(|c| c.value().to_string()))
        .collect();
    cohorts.sort_unstable();
    cohorts.dedup();

    let views: Vec<CohortStatsView> = cohorts
        .into_iter()
        .map(|cohort| {
            let stats: CohortStats = engine.recorder.stats_for(&CohortTag::new(&cohort));
            CohortStatsView {
                cohort,
                total: stats.total,
                errors: stats.errors,
                avg_duration_ms: stats.avg_duration_ms,
            }
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::ok(TelemetryStatsResponse { cohorts: views })),
    )
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/schedule", get(handle_get_schedule))
        .route("/schedule/status", post(handle_update_schedule_status))
        .route("/constraints/{staff_id}", get(handle_get_constraints))
        .route("/constraints", post(handle_upsert_constraint))
        .route("/assign_shift", post(handle_assign_shift))
        .route("/remove_assignment", post(handle_remove_assignment))
        .route("/auto_assign", post(handle_auto_assign))
        .route("/swaps", get(handle_get_swaps))
        .route("/swaps/{swap_id}/offer", post(handle_submit_swap_offer))
        .route("/swaps/{swap_id}/approve", post(handle_approve_swap))
        .route("/roster", get(handle_get_roster))
        .route("/telemetry/stats", get(handle_telemetry_stats))
        .with_state(app_state)
}

/// Builds the shared application state around a seeded ledger.
fn build_app_state(ledger: Ledger) -> AppState {
    AppState {
        engine: Arc::new(Mutex::new(Engine {
            ledger,
            limiter: RateLimiter::with_defaults(),
            recorder: MemoryRecorder::new(),
            sessions: SessionStore::new(),
        })),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Clinic Rota Server");

    let today: time::Date = OffsetDateTime::now_utc().date();
    let ledger: Ledger = seed::demo_ledger(today);
    info!(
        shifts = ledger.schedule.shifts.len(),
        staff = ledger.roster.len(),
        "Demo cycle seeded"
    );

    let app_state: AppState = build_app_state(ledger);
    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
