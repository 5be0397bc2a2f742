//! Secret redaction for keyscrub
//!
//! This crate contains:
//! - The built-in rule table (the leaked service role key)
//! - The redaction engine, over text and raw bytes

pub mod error;
pub mod redactor;
pub mod rule;

pub use error::{Result, SecurityError};
pub use redactor::{RedactionInfo, Redactor, redact, redact_bytes};
pub use rule::{Rule, SERVICE_ROLE_KEY_PLACEHOLDER, SERVICE_ROLE_KEY_PREFIX, builtin_rules};
