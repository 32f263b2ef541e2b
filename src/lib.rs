//! # jup-limit-action
//!
//! A Solana Actions ("blink") endpoint for creating limit orders on the
//! Jupiter Exchange. USDC is always the input side of the trade; the caller
//! picks an output token, an order amount, and a purchase price, and gets
//! back an unsigned transaction built by the Jupiter limit-order API, ready
//! for wallet signing. Nothing is ever signed or submitted here.
//!
//! One path, method-routed:
//!
//! - `GET` / `OPTIONS /api/order` — static discovery descriptor
//! - `POST /api/order?token=&amount=&purchasePrice=` — create the order

/// Solana Actions response shapes: descriptor, envelope, headers.
pub mod action;

/// Amount scaling between human decimals and base units.
pub mod convert;

/// Adapter error type and its HTTP boundary mapping.
pub mod error;

/// Jupiter limit-order API: wire types + thin client.
pub mod jupiter;

/// Network URL constants.
pub mod network;

/// Axum router and request handlers.
pub mod server;

/// Static mint → decimals table.
pub mod tokens;

pub use error::AdapterError;
