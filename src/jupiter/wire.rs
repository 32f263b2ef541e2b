//! Wire types for the Jupiter limit-order API.

use serde::{Deserialize, Serialize};

/// `POST /createOrder` request payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub input_mint: String,
    pub output_mint: String,
    pub maker: String,
    pub payer: String,
    pub params: CreateOrderParams,
    /// Priority fee in micro-lamports, or the literal `"auto"`.
    pub compute_unit_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_token_program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_token_program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_and_unwrap_sol: Option<bool>,
}

/// Order amounts in base units, as integer strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderParams {
    pub making_amount: String,
    pub taking_amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_bps: Option<String>,
}

/// `createOrder` response: the unsigned transaction encoding plus the order
/// account address.
#[derive(Deserialize, Debug, Clone)]
pub struct CreateOrderResponse {
    pub order: String,
    pub tx: String,
}
