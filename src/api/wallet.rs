// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet lifecycle endpoints: creation, pause control and owner replacement.

use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    models::{CreateWalletRequest, ReplaceOwnerRequest, StatusResponse, WalletIdRequest, WalletView},
    state::AppState,
};

/// Create a wallet controlled by the given owners.
#[utoipa::path(
    post,
    path = "/wallet/create",
    request_body = CreateWalletRequest,
    tag = "Wallet",
    responses(
        (status = 200, description = "Wallet created", body = WalletView),
        (status = 400, description = "Empty owner list or threshold out of range")
    )
)]
pub async fn create_wallet(
    State(state): State<AppState>,
    Json(request): Json<CreateWalletRequest>,
) -> Result<Json<WalletView>, ApiError> {
    let wallet = state.engine.create_wallet(
        request.owners,
        request.threshold,
        request.timelock_seconds.unwrap_or(0),
    )?;
    Ok(Json(wallet))
}

#[utoipa::path(
    post,
    path = "/wallet/pause",
    request_body = WalletIdRequest,
    tag = "Wallet",
    responses(
        (status = 200, body = StatusResponse),
        (status = 404, description = "Wallet not found")
    )
)]
pub async fn pause_wallet(
    State(state): State<AppState>,
    Json(request): Json<WalletIdRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.engine.pause(&request.wallet_id)?;
    Ok(Json(StatusResponse::new("paused")))
}

#[utoipa::path(
    post,
    path = "/wallet/unpause",
    request_body = WalletIdRequest,
    tag = "Wallet",
    responses(
        (status = 200, body = StatusResponse),
        (status = 404, description = "Wallet not found")
    )
)]
pub async fn unpause_wallet(
    State(state): State<AppState>,
    Json(request): Json<WalletIdRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.engine.unpause(&request.wallet_id)?;
    Ok(Json(StatusResponse::new("unpaused")))
}

/// Swap an existing owner for a new identity.
#[utoipa::path(
    post,
    path = "/wallet/replace-owner",
    request_body = ReplaceOwnerRequest,
    tag = "Wallet",
    responses(
        (status = 200, body = StatusResponse),
        (status = 400, description = "New owner already present"),
        (status = 403, description = "Old owner is not an owner"),
        (status = 404, description = "Wallet not found")
    )
)]
pub async fn replace_owner(
    State(state): State<AppState>,
    Json(request): Json<ReplaceOwnerRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    state
        .engine
        .replace_owner(&request.wallet_id, &request.old_owner, &request.new_owner)?;
    Ok(Json(StatusResponse::new("owner_replaced")))
}
