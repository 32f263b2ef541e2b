//! Axum router and request handlers for the action endpoint.
//!
//! Each request is a single linear pass with no shared mutable state; the
//! only suspension point is the outbound call to the order service.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_pubkey::Pubkey;
use tower_http::trace::TraceLayer;

use crate::action::action_descriptor;
use crate::action::headers::ACTIONS_CORS_HEADERS;
use crate::action::wire::{AccountRequest, ActionPostResponse};
use crate::convert::{convert_to_decimals, scale_usdc_amount};
use crate::error::AdapterError;
use crate::jupiter::client::JupiterClient;
use crate::jupiter::wire::{CreateOrder, CreateOrderParams};
use crate::tokens::{decimals_for, USDC_MINT};

/// Shared state, read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub jupiter: JupiterClient,
    /// Cluster connection established at startup. Not exercised by the order
    /// flow — the unsigned transaction is signed and submitted by the
    /// caller's wallet, not by this service.
    pub rpc: Arc<RpcClient>,
}

/// One path, method-routed. OPTIONS serves the descriptor exactly like GET to
/// satisfy preflight.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/order",
            get(get_order).post(create_order).options(get_order),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Query parameters advertised in the descriptor's href template.
#[derive(Deserialize, Debug)]
struct OrderQuery {
    token: String,
    amount: String,
    #[serde(rename = "purchasePrice")]
    purchase_price: String,
}

/// GET/OPTIONS: the fixed discovery document. Cannot fail.
async fn get_order() -> impl IntoResponse {
    (StatusCode::OK, ACTIONS_CORS_HEADERS, Json(action_descriptor()))
}

/// POST: build a limit order via the Jupiter API and relay the unsigned
/// transaction. Every failure surfaces through [`AdapterError`] as a 400.
async fn create_order(
    State(state): State<AppState>,
    query: Result<Query<OrderQuery>, QueryRejection>,
    body: Result<Json<AccountRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AdapterError> {
    let Query(query) =
        query.map_err(|e| AdapterError::new(format!("invalid query parameters: {e}")))?;
    let Json(AccountRequest { account }) =
        body.map_err(|e| AdapterError::new(format!("invalid request body: {e}")))?;

    // Validate the sender before anything leaves the process.
    let sender = Pubkey::from_str(&account)
        .map_err(|e| AdapterError::new(format!("invalid account {account}: {e}")))?;

    // Input side is always USDC, scaled by the fixed 10^6 literal; the output
    // side goes through the decimals table. See the `convert` module docs for
    // why these stay separate.
    let making_amount = scale_usdc_amount(&query.amount)?;
    let taking_amount = convert_to_decimals(&query.purchase_price, decimals_for(&query.token)?)?;

    let order = CreateOrder {
        input_mint: USDC_MINT.to_string(),
        // Forwarded verbatim; only known mints survive the decimals lookup.
        output_mint: query.token.clone(),
        maker: sender.to_string(),
        payer: sender.to_string(),
        params: CreateOrderParams {
            making_amount,
            taking_amount,
            expired_at: None,
            fee_bps: None,
        },
        compute_unit_price: "auto".to_string(),
        referral: None,
        input_token_program: None,
        output_token_program: None,
        wrap_and_unwrap_sol: None,
    };

    let created = state.jupiter.create_order(&order).await?;

    Ok((
        StatusCode::OK,
        ACTIONS_CORS_HEADERS,
        Json(ActionPostResponse::transaction(
            created.tx,
            "Order created successfully",
        )),
    ))
}
