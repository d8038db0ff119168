//! Core state-management services.
//!
//! # Responsibility
//! - Orchestrate model, persistence, and verification seams into the
//!   store observed by the host UI.
//!
//! # Invariants
//! - Services stay storage- and platform-agnostic above their seams.

pub mod place_store;
