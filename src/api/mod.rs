// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    error::ApiError,
    models::{
        ConfirmTxRequest, CreateWalletRequest, ExecuteTxRequest, ExecuteTxResponse,
        ExecutionReceipt, OwnersResponse, ReplaceOwnerRequest, StatusResponse, SubmitTxRequest,
        TransactionView, WalletIdRequest, WalletView,
    },
    multisig::{TxId, WalletId},
    state::AppState,
};

pub mod health;
pub mod owners;
pub mod transactions;
pub mod wallet;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/wallet/create", post(wallet::create_wallet))
        .route("/wallet/pause", post(wallet::pause_wallet))
        .route("/wallet/unpause", post(wallet::unpause_wallet))
        .route("/wallet/replace-owner", post(wallet::replace_owner))
        .route("/owners/list", post(owners::list_owners))
        .route("/tx/submit", post(transactions::submit_tx))
        .route("/tx/confirm", post(transactions::confirm_tx))
        .route("/tx/execute", post(transactions::execute_tx))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(CorsLayer::permissive())
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Multisig Wallet API"),
    paths(
        health::health,
        health::liveness,
        wallet::create_wallet,
        wallet::pause_wallet,
        wallet::unpause_wallet,
        wallet::replace_owner,
        owners::list_owners,
        transactions::submit_tx,
        transactions::confirm_tx,
        transactions::execute_tx
    ),
    components(
        schemas(
            WalletId,
            TxId,
            WalletView,
            TransactionView,
            ExecutionReceipt,
            CreateWalletRequest,
            WalletIdRequest,
            ReplaceOwnerRequest,
            OwnersResponse,
            SubmitTxRequest,
            ConfirmTxRequest,
            ExecuteTxRequest,
            ExecuteTxResponse,
            StatusResponse,
            health::HealthResponse,
            health::LivenessResponse
        )
    ),
    tags(
        (name = "Health", description = "Service health probes"),
        (name = "Wallet", description = "Wallet creation, pause control and owner replacement"),
        (name = "Owners", description = "Owner listing"),
        (name = "Transactions", description = "Submission, confirmation and execution")
    )
)]
struct ApiDoc;
