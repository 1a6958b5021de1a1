//! Top-level facade crate for msgrelay.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use msgrelay_core::*;
}

pub mod gateway {
    pub use msgrelay_gateway::*;
}
