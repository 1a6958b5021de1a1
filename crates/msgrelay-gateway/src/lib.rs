//! msgrelay gateway library entry.
//!
//! This crate wires configuration, logging, the HTTP facade, ingress policy,
//! and the realtime relay into a cohesive stack. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod policy;
pub mod relay;
pub mod router;
pub mod transport;
