//! Fixed response headers required by the Solana Actions spec.

/// Actions spec version advertised to blink clients.
pub const ACTION_VERSION: &str = "2.4";

/// CAIP-2 id for Solana mainnet, exposed via `X-Blockchain-Ids`.
pub const BLOCKCHAIN_ID_MAINNET: &str = "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp";

/// Header set applied to every response from the action endpoint, success or
/// failure, so wallets and blink clients can call it cross-origin.
pub const ACTIONS_CORS_HEADERS: [(&str, &str); 7] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET,POST,PUT,OPTIONS"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type, Authorization, Content-Encoding, Accept-Encoding, X-Accept-Action-Version, X-Accept-Blockchain-Ids",
    ),
    (
        "Access-Control-Expose-Headers",
        "X-Action-Version, X-Blockchain-Ids",
    ),
    ("Content-Type", "application/json"),
    ("X-Action-Version", ACTION_VERSION),
    ("X-Blockchain-Ids", BLOCKCHAIN_ID_MAINNET),
];
