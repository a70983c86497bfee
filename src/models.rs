// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures used by the REST API, plus the views the
//! engine returns. All types derive `Serialize`/`Deserialize` and `ToSchema`
//! for JSON handling and OpenAPI documentation.
//!
//! ## Model Categories
//!
//! - **Views**: externally visible snapshots of wallets and transactions.
//!   Set-valued fields are sorted lexicographically.
//! - **Wallet requests**: creation, pause, owner replacement.
//! - **Transaction requests**: submit, confirm, execute.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::multisig::{Transaction, TxId, Wallet, WalletId};

// =============================================================================
// Views
// =============================================================================

/// Snapshot of a wallet's configuration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct WalletView {
    /// Unique wallet identifier.
    pub wallet_id: WalletId,
    /// Owners in lexicographic order.
    pub owners: Vec<String>,
    /// Confirmations required to execute.
    pub threshold: u32,
    /// Minimum delay between submission and execution.
    pub timelock_seconds: u64,
    /// Whether execution is currently blocked.
    pub paused: bool,
}

impl From<&Wallet> for WalletView {
    fn from(wallet: &Wallet) -> Self {
        Self {
            wallet_id: wallet.id.clone(),
            owners: wallet.sorted_owners(),
            threshold: wallet.threshold,
            timelock_seconds: wallet.timelock_seconds,
            paused: wallet.paused,
        }
    }
}

/// Snapshot of a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TransactionView {
    pub tx_id: TxId,
    /// Owner who submitted the transaction.
    pub creator: String,
    /// Opaque action descriptor.
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
    pub submitted_at: DateTime<Utc>,
    /// Confirming owners in lexicographic order.
    pub confirmations: Vec<String>,
    pub executed: bool,
}

impl From<&Transaction> for TransactionView {
    fn from(tx: &Transaction) -> Self {
        Self {
            tx_id: tx.id.clone(),
            creator: tx.creator.clone(),
            payload: tx.payload.clone(),
            submitted_at: tx.submitted_at,
            confirmations: tx.sorted_confirmations(),
            executed: tx.executed,
        }
    }
}

/// Result of a successful execution. The action itself is carried out by the
/// caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ExecutionReceipt {
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
    pub executed_at: DateTime<Utc>,
}

// =============================================================================
// Wallet Requests
// =============================================================================

/// Request to create a new wallet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateWalletRequest {
    /// Owner identities; duplicates are collapsed.
    pub owners: Vec<String>,
    /// Confirmations required to execute (1..=unique owners).
    pub threshold: u32,
    /// Minimum delay between submission and execution. Defaults to 0.
    #[serde(default)]
    pub timelock_seconds: Option<u64>,
}

/// Request addressing a single wallet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WalletIdRequest {
    pub wallet_id: WalletId,
}

/// Request to swap one owner for another.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplaceOwnerRequest {
    pub wallet_id: WalletId,
    pub old_owner: String,
    pub new_owner: String,
}

/// Current owner list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct OwnersResponse {
    /// Owners in lexicographic order.
    pub owners: Vec<String>,
}

// =============================================================================
// Transaction Requests
// =============================================================================

/// Request to propose a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitTxRequest {
    pub wallet_id: WalletId,
    /// Submitting owner; counts as the first confirmation.
    pub creator: String,
    /// Opaque action descriptor (must be a JSON object).
    #[schema(value_type = Object)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

/// Request to confirm a pending transaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConfirmTxRequest {
    pub wallet_id: WalletId,
    pub tx_id: TxId,
    pub owner: String,
}

/// Request to execute a transaction that has reached quorum.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExecuteTxRequest {
    pub wallet_id: WalletId,
    pub tx_id: TxId,
}

/// Outcome of a successful execution.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ExecuteTxResponse {
    /// Always `"executed"`.
    pub status: String,
    pub result: ExecutionReceipt,
}

// =============================================================================
// Generic
// =============================================================================

/// Acknowledgement carrying a status word such as `"paused"`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
