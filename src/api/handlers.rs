//! HTTP request handlers for the incentive dashboard API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! read endpoint loads the full entry collection from the store and hands it
//! to the pure functions in [`crate::calculation`].

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    available_years, billing_by_client, calculate_stats, entry_margins, filter_by_sales,
    filter_by_year, goal_progress, monthly_breakdown, monthly_time_series, sales_persons,
    select_view, staff_yearly_summary,
};
use crate::error::DashboardError;
use crate::models::{Entry, Goals, NewEntry};

use super::request::{PersonQuery, ViewQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entries", get(list_entries_handler).post(create_entry_handler))
        .route(
            "/entries/:id",
            put(update_entry_handler).delete(delete_entry_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/series/:year", get(series_handler))
        .route("/staff-summary/:year", get(staff_summary_handler))
        .route("/breakdown", get(breakdown_handler))
        .route("/margins", get(margins_handler))
        .route("/clients", get(clients_handler))
        .route("/sales-persons", get(sales_persons_handler))
        .route("/years", get(years_handler))
        .route("/settings", get(settings_handler))
        .route("/goals", get(get_goals_handler).put(put_goals_handler))
        .route("/goals/progress", get(goal_progress_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: DashboardError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message is only in the body text
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

async fn load_entries(state: &AppState, correlation_id: Uuid) -> Result<Vec<Entry>, Response> {
    state
        .store()
        .list()
        .await
        .map_err(|err| error_response(correlation_id, err))
}

fn view_entries<'a>(entries: &'a [Entry], query: &ViewQuery) -> Vec<&'a Entry> {
    match query.view_filter() {
        Some(filter) => select_view(entries, &filter),
        None => filter_by_sales(entries, &query.sales_filter()),
    }
}

/// Handler for GET /entries.
async fn list_entries_handler(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let entries = match load_entries(&state, correlation_id).await {
        Ok(entries) => entries,
        Err(response) => return response,
    };

    let selected: Vec<&Entry> = view_entries(&entries, &query);
    info!(
        correlation_id = %correlation_id,
        total = entries.len(),
        selected = selected.len(),
        "Listed entries"
    );
    json_response(StatusCode::OK, selected)
}

/// Handler for POST /entries.
///
/// Returns 201 with the stored entry, including its assigned id.
async fn create_entry_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing add entry request");

    let new_entry = match payload {
        Ok(Json(entry)) => entry,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.store().add(new_entry).await {
        Ok(entry) => {
            info!(
                correlation_id = %correlation_id,
                id = entry.id,
                month = %entry.month,
                "Entry added"
            );
            json_response(StatusCode::CREATED, entry)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /entries/:id.
async fn update_entry_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, id, "Processing update entry request");

    let new_entry = match payload {
        Ok(Json(entry)) => entry,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.store().update(id, new_entry).await {
        Ok(entry) => {
            info!(correlation_id = %correlation_id, id, "Entry updated");
            json_response(StatusCode::OK, entry)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /entries/:id.
async fn delete_entry_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.store().delete(id).await {
        Ok(()) => {
            info!(correlation_id = %correlation_id, id, "Entry deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /stats.
async fn stats_handler(State(state): State<AppState>, Query(query): Query<ViewQuery>) -> Response {
    let correlation_id = Uuid::new_v4();
    let entries = match load_entries(&state, correlation_id).await {
        Ok(entries) => entries,
        Err(response) => return response,
    };

    let stats = calculate_stats(view_entries(&entries, &query), state.policy());
    info!(
        correlation_id = %correlation_id,
        count = stats.count,
        total_profit = %stats.total_profit,
        total_incentive = %stats.total_incentive,
        "Stats calculated"
    );
    json_response(StatusCode::OK, stats)
}

/// Handler for GET /series/:year.
async fn series_handler(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Query(query): Query<PersonQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let entries = match load_entries(&state, correlation_id).await {
        Ok(entries) => entries,
        Err(response) => return response,
    };

    let series = monthly_time_series(
        filter_by_sales(&entries, &query.sales_filter()),
        &year,
        state.policy(),
    );
    json_response(StatusCode::OK, series)
}

/// Handler for GET /staff-summary/:year.
async fn staff_summary_handler(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Query(query): Query<PersonQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let entries = match load_entries(&state, correlation_id).await {
        Ok(entries) => entries,
        Err(response) => return response,
    };

    let in_year = filter_by_year(filter_by_sales(&entries, &query.sales_filter()), &year);
    let summary = staff_yearly_summary(in_year, state.policy());
    info!(
        correlation_id = %correlation_id,
        year = %year,
        staff = summary.staff.len(),
        "Staff summary calculated"
    );
    json_response(StatusCode::OK, summary)
}

/// Handler for GET /breakdown.
async fn breakdown_handler(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let entries = match load_entries(&state, correlation_id).await {
        Ok(entries) => entries,
        Err(response) => return response,
    };

    json_response(
        StatusCode::OK,
        monthly_breakdown(view_entries(&entries, &query)),
    )
}

/// Handler for GET /margins.
async fn margins_handler(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let entries = match load_entries(&state, correlation_id).await {
        Ok(entries) => entries,
        Err(response) => return response,
    };

    json_response(StatusCode::OK, entry_margins(view_entries(&entries, &query)))
}

/// Handler for GET /clients.
async fn clients_handler(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let entries = match load_entries(&state, correlation_id).await {
        Ok(entries) => entries,
        Err(response) => return response,
    };

    json_response(
        StatusCode::OK,
        billing_by_client(view_entries(&entries, &query)),
    )
}

/// Handler for GET /sales-persons.
async fn sales_persons_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match load_entries(&state, correlation_id).await {
        Ok(entries) => json_response(StatusCode::OK, sales_persons(&entries)),
        Err(response) => response,
    }
}

/// Handler for GET /years.
async fn years_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match load_entries(&state, correlation_id).await {
        Ok(entries) => json_response(StatusCode::OK, available_years(&entries)),
        Err(response) => response,
    }
}

/// Handler for GET /settings.
async fn settings_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.settings().await)
}

/// Handler for GET /goals.
async fn get_goals_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.settings().await.goals)
}

/// Handler for PUT /goals.
///
/// Saves the goals through the store first; the in-memory settings only
/// change once the store accepted them.
async fn put_goals_handler(
    State(state): State<AppState>,
    payload: Result<Json<Goals>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing goals update");

    let goals = match payload {
        Ok(Json(goals)) => goals,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = state.store().save_goals(&goals).await {
        return error_response(correlation_id, err);
    }

    let mut settings = state.settings().await;
    settings.goals = goals.clone();
    state.set_settings(settings).await;

    info!(
        correlation_id = %correlation_id,
        billing = %goals.billing,
        profit = %goals.profit,
        incentive = %goals.incentive,
        "Goals updated"
    );
    json_response(StatusCode::OK, goals)
}

/// Handler for GET /goals/progress.
async fn goal_progress_handler(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let entries = match load_entries(&state, correlation_id).await {
        Ok(entries) => entries,
        Err(response) => return response,
    };

    let stats = calculate_stats(view_entries(&entries, &query), state.policy());
    let goals = state.settings().await.goals;
    json_response(StatusCode::OK, goal_progress(&stats, &goals))
}
