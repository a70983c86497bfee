// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::multisig::{InvalidOperationReason, WalletError};

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub error_code: &'static str,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    error_code: String,
}

impl ApiError {
    pub fn new(status: StatusCode, error_code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error_code,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", message)
    }
}

impl From<WalletError> for ApiError {
    fn from(err: WalletError) -> Self {
        let status = match &err {
            WalletError::WalletNotFound(_)
            | WalletError::InvalidOperation(InvalidOperationReason::TransactionNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            WalletError::NotAnOwner { .. } => StatusCode::FORBIDDEN,
            WalletError::AlreadyConfirmed { .. }
            | WalletError::ThresholdNotMet { .. }
            | WalletError::WalletPaused(_)
            | WalletError::TimelockNotElapsed { .. } => StatusCode::CONFLICT,
            WalletError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
        };
        Self::new(status, err.error_code(), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
            error_code: self.error_code.to_string(),
        });
        (self.status, body).into_response()
    }
}
