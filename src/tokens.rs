//! Static mint → decimals table for the tokens this action trades.
//!
//! Assembled once at process start and read-only afterwards. The input side
//! of every order is USDC; the output side is one of the selectable mints in
//! the discovery descriptor. Every mint referenced there must appear here or
//! conversion fails.

use std::collections::HashMap;

use crate::error::AdapterError;

/// Wrapped SOL mint (9 decimals).
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// USDC mint — the fixed input side of every order (6 decimals).
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

/// JUP mint (6 decimals).
pub const JUP_MINT: &str = "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN";

/// SEND mint (6 decimals).
pub const SEND_MINT: &str = "SENDdRQtYMWaQrBroBrJ2Q53fgVuq95CV9UPGEvpCxa";

lazy_static::lazy_static! {
    static ref DECIMALS: HashMap<&'static str, u8> = HashMap::from([
        (SOL_MINT, 9),
        (USDC_MINT, 6),
        (JUP_MINT, 6),
        (SEND_MINT, 6),
    ]);
}

/// Decimal precision for `mint`. A mint absent from the table is an explicit
/// failure, never a silent fallback.
pub fn decimals_for(mint: &str) -> Result<u8, AdapterError> {
    DECIMALS
        .get(mint)
        .copied()
        .ok_or_else(|| AdapterError::new(format!("unknown token: {mint}")))
}
