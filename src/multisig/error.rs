// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authorization errors.
//!
//! Every failure the engine can report is a variant here. All of them are
//! recoverable and caused by the request, never by the process.

use super::types::{TxId, WalletId};

/// Why a request was structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidOperationReason {
    #[error("a wallet needs at least one owner")]
    EmptyOwners,

    #[error("threshold {threshold} must be between 1 and the number of owners ({owners})")]
    ThresholdOutOfRange { threshold: u32, owners: usize },

    #[error("transaction {0} not found")]
    TransactionNotFound(TxId),

    #[error("transaction {0} already executed")]
    AlreadyExecuted(TxId),

    #[error("{0} is already an owner")]
    DuplicateOwner(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("wallet {0} not found")]
    WalletNotFound(WalletId),

    #[error("{identity} is not an owner of wallet {wallet_id}")]
    NotAnOwner {
        wallet_id: WalletId,
        identity: String,
    },

    #[error("{owner} already confirmed transaction {tx_id}")]
    AlreadyConfirmed { tx_id: TxId, owner: String },

    #[error("transaction {tx_id} has {confirmations} of {threshold} required confirmations")]
    ThresholdNotMet {
        tx_id: TxId,
        confirmations: usize,
        threshold: u32,
    },

    #[error("wallet {0} is paused")]
    WalletPaused(WalletId),

    #[error("timelock for transaction {tx_id} has {remaining_seconds}s remaining")]
    TimelockNotElapsed { tx_id: TxId, remaining_seconds: u64 },

    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] InvalidOperationReason),
}

impl WalletError {
    /// Stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            WalletError::WalletNotFound(_) => "wallet_not_found",
            WalletError::NotAnOwner { .. } => "not_an_owner",
            WalletError::AlreadyConfirmed { .. } => "already_confirmed",
            WalletError::ThresholdNotMet { .. } => "threshold_not_met",
            WalletError::WalletPaused(_) => "wallet_paused",
            WalletError::TimelockNotElapsed { .. } => "timelock_not_elapsed",
            WalletError::InvalidOperation(InvalidOperationReason::TransactionNotFound(_)) => {
                "transaction_not_found"
            }
            WalletError::InvalidOperation(_) => "invalid_operation",
        }
    }
}

pub type WalletResult<T> = Result<T, WalletError>;
