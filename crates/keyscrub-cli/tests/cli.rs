//! End-to-end tests for the keyscrub binary

#![allow(deprecated)] // cargo_bin is the standard way to test CLI binaries

use assert_cmd::Command;
use predicates::prelude::*;

const PLACEHOLDER: &str = "SUPABASE_SERVICE_ROLE_KEY=your_supabase_service_role_key";

fn keyscrub() -> Command {
    Command::cargo_bin("keyscrub").unwrap()
}

#[test]
fn test_cli_help() {
    keyscrub()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("service role key"));
}

#[test]
fn test_cli_version() {
    keyscrub()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_rejects_arguments() {
    keyscrub().arg("README.md").assert().failure().code(2);
}

#[test]
fn test_redacts_env_block() {
    keyscrub()
        .write_stdin(
            "SUPABASE_SERVICE_ROLE_KEY=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.ABC123.XYZ\nOTHER_VAR=1\n",
        )
        .assert()
        .success()
        .stdout(format!("{PLACEHOLDER}\nOTHER_VAR=1\n"));
}

#[test]
fn test_redacts_every_occurrence_in_readme() {
    let readme = "\
## Environment

```
SUPABASE_SERVICE_ROLE_KEY=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.first.sig
NEXT_PUBLIC_SUPABASE_URL=https://example.supabase.co
SUPABASE_SERVICE_ROLE_KEY=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.second.sig
```
";
    let expected = format!(
        "\
## Environment

```
{PLACEHOLDER}
NEXT_PUBLIC_SUPABASE_URL=https://example.supabase.co
{PLACEHOLDER}
```
"
    );

    keyscrub()
        .write_stdin(readme)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_empty_stdin() {
    keyscrub().write_stdin("").assert().success().stdout("");
}

#[test]
fn test_passes_non_utf8_through() {
    let input = b"\xfe\xffbinary\r\nno trailing newline".to_vec();

    keyscrub()
        .write_stdin(input.clone())
        .assert()
        .success()
        .stdout(input);
}

#[test]
fn test_debug_logs_stay_off_stdout() {
    keyscrub()
        .env("RUST_LOG", "debug")
        .write_stdin("SUPABASE_SERVICE_ROLE_KEY=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.x")
        .assert()
        .success()
        .stdout(PLACEHOLDER)
        .stderr(predicate::str::contains("Rule matched"));
}
