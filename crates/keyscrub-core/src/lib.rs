//! Core contracts for keyscrub
//!
//! This crate contains:
//! - The session merge seam (`SessionMerger`) and its result mapping
//! - The merge smoke check
//! - Shared error types

pub mod error;
pub mod merge;

pub use error::{Error, Result};
pub use merge::{MergeOutcome, STATUS_OK, SessionMerger, smoke_check};
