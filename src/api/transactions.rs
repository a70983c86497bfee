// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction endpoints.
//!
//! A transaction moves from submission through owner confirmations to a
//! single execution. Execution only certifies that the quorum, pause and
//! timelock gates passed; the returned payload is for the caller to act on.

use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    models::{
        ConfirmTxRequest, ExecuteTxRequest, ExecuteTxResponse, StatusResponse, SubmitTxRequest,
        TransactionView,
    },
    state::AppState,
};

/// Propose a transaction. The creator is recorded as the first confirmation.
#[utoipa::path(
    post,
    path = "/tx/submit",
    request_body = SubmitTxRequest,
    tag = "Transactions",
    responses(
        (status = 200, description = "Transaction submitted", body = TransactionView),
        (status = 403, description = "Creator is not an owner"),
        (status = 404, description = "Wallet not found")
    )
)]
pub async fn submit_tx(
    State(state): State<AppState>,
    Json(request): Json<SubmitTxRequest>,
) -> Result<Json<TransactionView>, ApiError> {
    let tx = state.engine.submit_transaction(
        &request.wallet_id,
        &request.creator,
        serde_json::Value::Object(request.payload),
    )?;
    Ok(Json(tx))
}

#[utoipa::path(
    post,
    path = "/tx/confirm",
    request_body = ConfirmTxRequest,
    tag = "Transactions",
    responses(
        (status = 200, body = StatusResponse),
        (status = 400, description = "Transaction already executed"),
        (status = 403, description = "Not an owner"),
        (status = 404, description = "Wallet or transaction not found"),
        (status = 409, description = "Owner already confirmed")
    )
)]
pub async fn confirm_tx(
    State(state): State<AppState>,
    Json(request): Json<ConfirmTxRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    state
        .engine
        .confirm_transaction(&request.wallet_id, &request.tx_id, &request.owner)?;
    Ok(Json(StatusResponse::new("confirmed")))
}

/// Execute a transaction that has reached quorum.
///
/// Fails with 409 while the wallet is paused, below threshold, or inside the
/// timelock window.
#[utoipa::path(
    post,
    path = "/tx/execute",
    request_body = ExecuteTxRequest,
    tag = "Transactions",
    responses(
        (status = 200, body = ExecuteTxResponse),
        (status = 400, description = "Transaction already executed"),
        (status = 404, description = "Wallet or transaction not found"),
        (status = 409, description = "Paused, threshold not met, or timelock not elapsed")
    )
)]
pub async fn execute_tx(
    State(state): State<AppState>,
    Json(request): Json<ExecuteTxRequest>,
) -> Result<Json<ExecuteTxResponse>, ApiError> {
    let result = state
        .engine
        .execute_transaction(&request.wallet_id, &request.tx_id)?;
    Ok(Json(ExecuteTxResponse {
        status: "executed".to_string(),
        result,
    }))
}
