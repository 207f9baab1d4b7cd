//! Top-level facade crate for guides.
//!
//! Re-exports the core metric primitives and the admin server library so users can depend on a single crate.

pub mod core {
    pub use guides_core::*;
}

pub mod admin {
    pub use guides_admin::*;
}
