// src/services/mod.rs
pub mod forwarder;
