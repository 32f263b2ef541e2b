//! Network URL constants.

/// Jupiter limit-order API base URL.
pub const JUPITER_LIMIT_API_URL: &str = "https://api.jup.ag/limit/v1";

/// Solana mainnet-beta RPC endpoint.
pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
