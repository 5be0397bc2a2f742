//! Secret redaction engine

use lazy_static::lazy_static;
use regex::{NoExpand, Regex, bytes};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SecurityError};
use crate::rule::{Rule, builtin_rules};

/// How many times one rule fired on one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub rule: String,
    pub count: usize,
}

#[derive(Clone)]
struct CompiledRule {
    name: String,
    replacement: String,
    text: Regex,
    bytes: bytes::Regex,
}

impl CompiledRule {
    fn compile(rule: &Rule) -> Result<Self> {
        let bytes_pattern = rule.bytes_pattern.as_deref().unwrap_or(&rule.pattern);
        let invalid = |source| SecurityError::InvalidPattern {
            rule: rule.name.clone(),
            source,
        };

        Ok(Self {
            name: rule.name.clone(),
            replacement: rule.replacement.clone(),
            text: Regex::new(&rule.pattern).map_err(invalid)?,
            bytes: bytes::Regex::new(bytes_pattern).map_err(invalid)?,
        })
    }
}

lazy_static! {
    static ref BUILTIN: Redactor =
        Redactor::with_rules(builtin_rules()).expect("built-in rules must compile");
}

/// Applies an ordered table of rules to text or raw bytes
#[derive(Clone)]
pub struct Redactor {
    rules: Vec<CompiledRule>,
}

impl Redactor {
    /// Redactor over the built-in rule table
    pub fn new() -> Self {
        BUILTIN.clone()
    }

    /// Compile a custom rule table. Rules are applied in the given order.
    pub fn with_rules(rules: impl IntoIterator<Item = Rule>) -> Result<Self> {
        let rules = rules
            .into_iter()
            .map(|rule| CompiledRule::compile(&rule))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Names of the rules, in application order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }

    /// Redact secrets from content
    pub fn redact(&self, content: &str) -> (String, Vec<RedactionInfo>) {
        let mut result = content.to_string();
        let mut redactions = Vec::new();

        for rule in &self.rules {
            let count = rule.text.find_iter(&result).count();

            if count > 0 {
                result = rule
                    .text
                    .replace_all(&result, NoExpand(&rule.replacement))
                    .into_owned();

                redactions.push(RedactionInfo {
                    rule: rule.name.clone(),
                    count,
                });
            }
        }

        (result, redactions)
    }

    /// Redact secrets from raw bytes; input need not be valid UTF-8
    pub fn redact_bytes(&self, content: &[u8]) -> (Vec<u8>, Vec<RedactionInfo>) {
        let mut result = content.to_vec();
        let mut redactions = Vec::new();

        for rule in &self.rules {
            let count = rule.bytes.find_iter(&result).count();

            if count > 0 {
                result = rule
                    .bytes
                    .replace_all(&result, bytes::NoExpand(rule.replacement.as_bytes()))
                    .into_owned();

                redactions.push(RedactionInfo {
                    rule: rule.name.clone(),
                    count,
                });
            }
        }

        (result, redactions)
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace every service role key in `input` with the placeholder
pub fn redact(input: &str) -> String {
    BUILTIN.redact(input).0
}

/// Byte-level [`redact`]
pub fn redact_bytes(input: &[u8]) -> Vec<u8> {
    BUILTIN.redact_bytes(input).0
}
