//! HTTP service that forwards notebook questions to an external webhook and
//! relays the webhook's JSON answer.

pub mod config;
pub mod error;
pub mod message;
pub mod provision;
pub mod routes;
pub mod services;
pub mod state;
