//! Redaction rules

use serde::{Deserialize, Serialize};

/// Literal prefix of the leaked service role key (the JWT header segment).
pub const SERVICE_ROLE_KEY_PREFIX: &str =
    "SUPABASE_SERVICE_ROLE_KEY=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";

/// Placeholder written in place of the key.
pub const SERVICE_ROLE_KEY_PLACEHOLDER: &str =
    "SUPABASE_SERVICE_ROLE_KEY=your_supabase_service_role_key";

/// A named pattern and the literal text that replaces each match.
///
/// `pattern` is a regex over text. Byte input uses `bytes_pattern` when set,
/// otherwise `pattern` with Unicode mode on, which only matches valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub pattern: String,
    pub replacement: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes_pattern: Option<String>,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
            bytes_pattern: None,
        }
    }

    /// Use a separate pattern when matching raw bytes
    pub fn with_bytes_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.bytes_pattern = Some(pattern.into());
        self
    }

    /// The service role key rule: prefix plus the rest of the line.
    ///
    /// The tail is one or more non-newline characters, greedy, but never ends
    /// on a carriage return, so a CRLF line ending stays outside the match.
    /// Over bytes the tail takes any byte, valid UTF-8 or not.
    pub fn service_role_key() -> Self {
        let prefix = regex::escape(SERVICE_ROLE_KEY_PREFIX);

        Self::new(
            "SUPABASE_SERVICE_ROLE_KEY",
            format!(r"{prefix}[^\n]*[^\r\n]"),
            SERVICE_ROLE_KEY_PLACEHOLDER,
        )
        .with_bytes_pattern(format!(r"{prefix}(?-u:[^\n])*(?-u:[^\r\n])"))
    }
}

/// Rule table applied by [`crate::Redactor::new`], in order.
pub fn builtin_rules() -> Vec<Rule> {
    vec![Rule::service_role_key()]
}
