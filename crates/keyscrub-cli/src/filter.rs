use anyhow::{Context, Result};
use keyscrub_security::{RedactionInfo, Redactor};
use std::io::{Read, Write};

/// Read all of `input`, redact it, write all of it to `output`.
pub fn run<R: Read, W: Write>(
    redactor: &Redactor,
    mut input: R,
    mut output: W,
) -> Result<Vec<RedactionInfo>> {
    let mut content = Vec::new();
    input
        .read_to_end(&mut content)
        .context("Failed to read input")?;

    let (redacted, redactions) = redactor.redact_bytes(&content);

    tracing::debug!(
        bytes_in = content.len(),
        bytes_out = redacted.len(),
        "Redacted input"
    );
    for info in &redactions {
        tracing::debug!(rule = %info.rule, count = info.count, "Rule matched");
    }

    output
        .write_all(&redacted)
        .context("Failed to write output")?;
    output.flush().context("Failed to flush output")?;

    Ok(redactions)
}
