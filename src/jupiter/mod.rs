//! Jupiter limit-order API: wire types + thin client.

pub mod client;
pub mod wire;

pub use client::JupiterClient;
pub use wire::{CreateOrder, CreateOrderParams, CreateOrderResponse};
