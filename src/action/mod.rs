//! Solana Actions response shapes.
//!
//! The discovery descriptor, the post-response envelope, and the fixed header
//! set are all consumed as data shapes defined by the Actions spec; nothing
//! here is negotiated at runtime.

pub mod descriptor;
pub mod headers;
pub mod wire;

pub use descriptor::action_descriptor;
pub use headers::ACTIONS_CORS_HEADERS;
pub use wire::{AccountRequest, ActionGetResponse, ActionPostResponse};
