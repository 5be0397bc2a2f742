use clap::Parser;

/// Reads stdin, replaces the leaked service role key, writes stdout.
///
/// Intended as a history-rewrite helper, e.g.
/// `git filter-branch --tree-filter 'keyscrub < README.md > README.tmp && mv README.tmp README.md'`.
#[derive(Parser)]
#[command(name = "keyscrub")]
#[command(about = "Strip a leaked Supabase service role key from stdin", long_about = None)]
#[command(version)]
pub struct Cli {}
