//! The single RPC endpoint.
//!
//! All procedures share `/rpc/{procedure}`. Queries are called with `GET`
//! and carry their input as URL-encoded JSON in `?input=`; mutations are
//! called with `POST` and carry it as the JSON body. Input is decoded and
//! validated before any handler, and therefore any store access, runs.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use inventory_core::error::CoreError;
use inventory_core::item::{decode, parse_input};
use inventory_core::rpc::{Procedure, ProcedureKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::handlers;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query string for `GET /rpc/{procedure}`.
#[derive(Debug, Deserialize)]
pub struct RpcQuery {
    pub input: Option<String>,
}

/// Routes mounted at `/rpc`.
///
/// ```text
/// GET  /{procedure}   -> query
/// POST /{procedure}   -> mutation
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{procedure}", get(query).post(mutation))
}

async fn query(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<RpcQuery>,
) -> AppResult<Response> {
    let procedure = resolve(&name, ProcedureKind::Query)?;
    let input = params
        .input
        .as_deref()
        .map(|raw| parse_json(raw.as_bytes()))
        .transpose()?;
    dispatch(&state, procedure, input).await
}

async fn mutation(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> AppResult<Response> {
    let procedure = resolve(&name, ProcedureKind::Mutation)?;
    let input = if body.is_empty() {
        None
    } else {
        Some(parse_json(&body)?)
    };
    dispatch(&state, procedure, input).await
}

/// Look up a procedure and check it was called with the right method.
fn resolve(name: &str, called_as: ProcedureKind) -> AppResult<Procedure> {
    let procedure =
        Procedure::from_name(name).ok_or_else(|| AppError::UnknownProcedure(name.to_string()))?;

    if procedure.kind() != called_as {
        let expected = match procedure.kind() {
            ProcedureKind::Query => Method::GET,
            ProcedureKind::Mutation => Method::POST,
        };
        return Err(AppError::MethodNotSupported {
            procedure: procedure.name(),
            expected,
        });
    }
    Ok(procedure)
}

fn parse_json(raw: &[u8]) -> Result<Value, CoreError> {
    serde_json::from_slice(raw)
        .map_err(|e| CoreError::Validation(format!("input is not valid JSON: {e}")))
}

/// Run `procedure` with `input` against the store held in `state`.
pub async fn dispatch(
    state: &AppState,
    procedure: Procedure,
    input: Option<Value>,
) -> AppResult<Response> {
    let pool = &state.pool;
    tracing::debug!(%procedure, "Dispatching procedure");

    let response = match procedure {
        Procedure::Healthcheck => respond(handlers::health::status(pool).await),
        Procedure::CreateItem => {
            respond(handlers::item::create_item(pool, parse_input(input)?).await?)
        }
        Procedure::GetItems => respond(handlers::item::get_items(pool).await?),
        Procedure::GetItem => respond(handlers::item::get_item(pool, decode(input)?).await?),
        Procedure::UpdateItem => {
            respond(handlers::item::update_item(pool, parse_input(input)?).await?)
        }
        Procedure::DeleteItem => {
            respond(handlers::item::delete_item(pool, decode(input)?).await?)
        }
    };
    Ok(response)
}

fn respond<T: Serialize>(data: T) -> Response {
    Json(DataResponse { data }).into_response()
}
