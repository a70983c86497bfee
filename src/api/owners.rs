// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    models::{OwnersResponse, WalletIdRequest},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/owners/list",
    request_body = WalletIdRequest,
    tag = "Owners",
    responses(
        (status = 200, body = OwnersResponse),
        (status = 404, description = "Wallet not found")
    )
)]
pub async fn list_owners(
    State(state): State<AppState>,
    Json(request): Json<WalletIdRequest>,
) -> Result<Json<OwnersResponse>, ApiError> {
    let owners = state.engine.get_owners(&request.wallet_id)?;
    Ok(Json(OwnersResponse { owners }))
}
