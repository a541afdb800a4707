//! Solana JSON-RPC client.
//!
//! All reads and writes go through the cluster's JSON-RPC endpoint at the
//! "confirmed" commitment level: balance and token-account reads, signature
//! history, blockhash and rent queries, transaction submission and
//! confirmation polling. Responses are parsed out of `serde_json::Value`
//! directly; the node's schemas are stable and shallow enough that typed
//! response structs would only add ceremony.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Value, json};

use crate::client::http::{HEALTH_CHECK_TIMEOUT_SECS, HttpClient};
use crate::constants::{CONFIRM_POLL_INTERVAL_MS, CONFIRM_TIMEOUT_SECS};
use crate::domain::{Cluster, ForgeError, Pubkey, SignatureRecord};
use crate::tx::token::TOKEN_PROGRAM_ID;

/// Commitment tier used for every read, submit and confirmation.
const COMMITMENT: &str = "confirmed";

// ============================================================================
// Response Types
// ============================================================================

/// A token account owned by the session address.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedTokenAccount {
    /// The token account address.
    pub account: String,
    /// The mint this account holds.
    pub mint: String,
}

/// The observable state of an account, used for change detection.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountState {
    /// Account balance in lamports.
    pub lamports: u64,
    /// Base64-encoded account data.
    pub data: String,
}

// ============================================================================
// RPC Client
// ============================================================================

/// JSON-RPC 2.0 client for a Solana cluster.
#[derive(Debug, Clone)]
pub struct RpcClient {
    cluster: Cluster,
    http: HttpClient,
}

impl RpcClient {
    /// Create a new client for the given cluster.
    #[must_use]
    pub fn new(cluster: Cluster) -> Self {
        Self {
            cluster,
            http: HttpClient::new(),
        }
    }

    /// Returns the cluster this client talks to.
    #[must_use]
    #[allow(dead_code)] // Part of the client API
    pub const fn cluster(&self) -> Cluster {
        self.cluster
    }

    /// Issue a JSON-RPC call and unwrap the `result` field.
    async fn call(&self, method: &str, params: Value) -> Result<Value, ForgeError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(self.cluster.rpc_url())
            .json(&body)
            .send()
            .await?;

        let payload: Value = response.json().await?;

        if let Some(err) = payload.get("error") {
            let message = err["message"]
                .as_str()
                .unwrap_or("unknown RPC failure")
                .to_string();
            tracing::debug!("{method} failed: {message}");
            return Err(ForgeError::rpc(message));
        }

        payload
            .get("result")
            .cloned()
            .ok_or_else(|| ForgeError::parse(format!("{method} response missing result")))
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Check that the RPC node is reachable and healthy.
    ///
    /// # Errors
    ///
    /// Returns an error when the node is unreachable or reports unhealthy.
    pub async fn get_health(&self) -> Result<(), ForgeError> {
        let body = json!({"jsonrpc": "2.0", "id": 1, "method": "getHealth"});
        let response = self
            .http
            .post(self.cluster.rpc_url())
            .json(&body)
            .timeout(Duration::from_secs(HEALTH_CHECK_TIMEOUT_SECS))
            .send()
            .await?;

        let payload: Value = response.json().await?;
        match payload["result"].as_str() {
            Some("ok") => Ok(()),
            _ => Err(ForgeError::rpc(format!(
                "node at {} is not healthy",
                self.cluster.rpc_url()
            ))),
        }
    }

    /// Read the native balance of an address, in lamports.
    pub async fn get_balance(&self, address: Pubkey) -> Result<u64, ForgeError> {
        let result = self
            .call(
                "getBalance",
                json!([address.to_base58(), {"commitment": COMMITMENT}]),
            )
            .await?;

        result["value"]
            .as_u64()
            .ok_or_else(|| ForgeError::parse("getBalance value is not a number"))
    }

    /// Enumerate the token accounts owned by an address under the SPL token
    /// program.
    pub async fn get_token_accounts_by_owner(
        &self,
        owner: Pubkey,
    ) -> Result<Vec<OwnedTokenAccount>, ForgeError> {
        let result = self
            .call(
                "getTokenAccountsByOwner",
                json!([
                    owner.to_base58(),
                    {"programId": TOKEN_PROGRAM_ID.to_base58()},
                    {"encoding": "jsonParsed", "commitment": COMMITMENT},
                ]),
            )
            .await?;

        parse_token_accounts(&result)
    }

    /// Read the display balance of a single token account.
    ///
    /// A `null` uiAmount (an empty account) reads as zero.
    pub async fn get_token_account_balance(&self, account: &str) -> Result<f64, ForgeError> {
        let result = self
            .call(
                "getTokenAccountBalance",
                json!([account, {"commitment": COMMITMENT}]),
            )
            .await?;

        Ok(result["value"]["uiAmount"].as_f64().unwrap_or(0.0))
    }

    /// List the most recent transaction signatures for an address,
    /// most-recent-first, capped at `limit`.
    pub async fn get_signatures_for_address(
        &self,
        address: Pubkey,
        limit: usize,
    ) -> Result<Vec<SignatureRecord>, ForgeError> {
        let result = self
            .call(
                "getSignaturesForAddress",
                json!([
                    address.to_base58(),
                    {"limit": limit, "commitment": COMMITMENT},
                ]),
            )
            .await?;

        parse_signature_records(&result)
    }

    /// Fetch a recent blockhash to anchor a new transaction.
    pub async fn get_latest_blockhash(&self) -> Result<[u8; 32], ForgeError> {
        let result = self
            .call("getLatestBlockhash", json!([{"commitment": COMMITMENT}]))
            .await?;

        parse_blockhash(&result)
    }

    /// Minimum lamports for rent exemption of an account of `size` bytes.
    pub async fn get_minimum_balance_for_rent_exemption(
        &self,
        size: u64,
    ) -> Result<u64, ForgeError> {
        let result = self
            .call(
                "getMinimumBalanceForRentExemption",
                json!([size, {"commitment": COMMITMENT}]),
            )
            .await?;

        result
            .as_u64()
            .ok_or_else(|| ForgeError::parse("rent exemption is not a number"))
    }

    /// Read an account's observable state, or `None` if it does not exist.
    pub async fn get_account_state(
        &self,
        address: &str,
    ) -> Result<Option<AccountState>, ForgeError> {
        let result = self
            .call(
                "getAccountInfo",
                json!([address, {"encoding": "base64", "commitment": COMMITMENT}]),
            )
            .await?;

        let value = &result["value"];
        if value.is_null() {
            return Ok(None);
        }

        Ok(Some(AccountState {
            lamports: value["lamports"].as_u64().unwrap_or(0),
            data: value["data"][0].as_str().unwrap_or_default().to_string(),
        }))
    }

    /// Returns whether an account exists on the cluster.
    pub async fn account_exists(&self, address: &str) -> Result<bool, ForgeError> {
        Ok(self.get_account_state(address).await?.is_some())
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Submit a signed wire-format transaction, returning its signature.
    pub async fn send_transaction(&self, wire: &[u8]) -> Result<String, ForgeError> {
        let encoded = BASE64.encode(wire);
        let result = self
            .call(
                "sendTransaction",
                json!([
                    encoded,
                    {"encoding": "base64", "preflightCommitment": COMMITMENT},
                ]),
            )
            .await?;

        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ForgeError::parse("sendTransaction result is not a string"))
    }

    /// Poll the cluster until `signature` reaches the confirmed tier.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Rpc`] when the transaction landed with an
    /// error, or [`ForgeError::Unconfirmed`] when the poll times out.
    pub async fn confirm_transaction(&self, signature: &str) -> Result<(), ForgeError> {
        let deadline =
            tokio::time::Instant::now() + Duration::from_secs(CONFIRM_TIMEOUT_SECS);

        while tokio::time::Instant::now() < deadline {
            let result = self
                .call(
                    "getSignatureStatuses",
                    json!([[signature], {"searchTransactionHistory": false}]),
                )
                .await?;

            let status = &result["value"][0];
            if !status.is_null() {
                if !status["err"].is_null() {
                    return Err(ForgeError::rpc(format!(
                        "transaction failed: {}",
                        status["err"]
                    )));
                }
                if matches!(
                    status["confirmationStatus"].as_str(),
                    Some("confirmed" | "finalized")
                ) {
                    return Ok(());
                }
            }

            tokio::time::sleep(Duration::from_millis(CONFIRM_POLL_INTERVAL_MS)).await;
        }

        Err(ForgeError::Unconfirmed {
            signature: signature.to_string(),
        })
    }

    /// Submit a signed transaction and wait for its confirmation.
    pub async fn send_and_confirm(&self, wire: &[u8]) -> Result<String, ForgeError> {
        let signature = self.send_transaction(wire).await?;
        self.confirm_transaction(&signature).await?;
        Ok(signature)
    }
}

// ============================================================================
// Response Parsing
// ============================================================================

fn parse_token_accounts(result: &Value) -> Result<Vec<OwnedTokenAccount>, ForgeError> {
    let entries = result["value"]
        .as_array()
        .ok_or_else(|| ForgeError::parse("token account list is not an array"))?;

    let mut accounts = Vec::with_capacity(entries.len());
    for entry in entries {
        let account = entry["pubkey"]
            .as_str()
            .ok_or_else(|| ForgeError::parse("token account missing pubkey"))?
            .to_string();
        let mint = entry["account"]["data"]["parsed"]["info"]["mint"]
            .as_str()
            .unwrap_or_default()
            .to_string();
        accounts.push(OwnedTokenAccount { account, mint });
    }

    Ok(accounts)
}

fn parse_signature_records(result: &Value) -> Result<Vec<SignatureRecord>, ForgeError> {
    let entries = result
        .as_array()
        .ok_or_else(|| ForgeError::parse("signature list is not an array"))?;

    Ok(entries
        .iter()
        .filter_map(|entry| {
            entry["signature"].as_str().map(|sig| SignatureRecord {
                signature: sig.to_string(),
                block_time: entry["blockTime"].as_i64(),
            })
        })
        .collect())
}

fn parse_blockhash(result: &Value) -> Result<[u8; 32], ForgeError> {
    let hash = result["value"]["blockhash"]
        .as_str()
        .ok_or_else(|| ForgeError::parse("getLatestBlockhash missing blockhash"))?;

    let bytes = bs58::decode(hash)
        .into_vec()
        .map_err(|e| ForgeError::parse(format!("blockhash decode failed: {e}")))?;

    bytes
        .try_into()
        .map_err(|_| ForgeError::parse("blockhash is not 32 bytes"))
}

// ============================================================================
// Tests
// ============================================================================
