//! Wire types for the Actions discovery and post-response envelopes.
//!
//! Field names follow the Actions spec verbatim (camelCase where the spec
//! uses it); `type` is renamed to `kind` on the Rust side.

use serde::{Deserialize, Serialize};

// ─── Discovery (GET) ─────────────────────────────────────────────────────────

/// The discovery document ("blink" metadata) served on GET/OPTIONS.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionGetResponse {
    pub title: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub label: String,
    pub links: ActionLinks,
}

/// Linked actions the client may invoke.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

/// One invocable action: href template + its parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LinkedAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub href: String,
    pub parameters: Vec<ActionParameter>,
}

/// A parameter in the href template. `kind` is only present for typed inputs
/// (e.g. `"select"`); free-form text fields omit it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionParameter {
    pub name: String,
    pub label: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ActionParameterOption>>,
}

/// One entry of a select parameter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionParameterOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

// ─── Order creation (POST) ───────────────────────────────────────────────────

/// POST request body: the caller's wallet account as a base58 string.
#[derive(Deserialize, Debug, Clone)]
pub struct AccountRequest {
    pub account: String,
}

/// POST response envelope carrying the unsigned transaction for the caller's
/// wallet to sign.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionPostResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub transaction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionPostResponse {
    /// Standard post-response constructor: wrap an unsigned transaction
    /// encoding into the envelope blink clients expect.
    pub fn transaction(transaction: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: "transaction".to_string(),
            transaction: transaction.into(),
            message: Some(message.into()),
        }
    }
}
