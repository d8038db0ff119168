//! Persistence layer for the saved-places document.
//!
//! # Responsibility
//! - Define the storage contract the place store depends on.
//! - Isolate file-format and filesystem details from state management.
//!
//! # Invariants
//! - Document writes are atomic; readers never observe partial contents.
//! - Decode failures reject the whole document instead of salvaging a
//!   prefix of it.

pub mod place_repo;
