//! Logging setup and CLI log-level flags.

use std::env;

use clap::Args;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logging controls for the CLI.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single global log level for our crates (error|warn|info|debug|trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Set an explicit tracing filter directive (overrides other flags)
    /// e.g. "webpane_engine=trace,webpane_dispatch=debug"
    #[arg(long)]
    pub log_filter: Option<String>,
}

/// Crate targets that constitute "our" logs.
fn our_crates() -> &'static [&'static str] {
    &[
        "webpane",
        "webpane_engine",
        "webpane_dispatch",
        "webpane_keycode",
    ]
}

/// Build a filter directive string setting the same `level` for all of our
/// crates.
fn level_spec_for(level: &str) -> String {
    let lvl = level.to_ascii_lowercase();
    let parts: Vec<String> = our_crates()
        .iter()
        .map(|t| format!("{}={}", t, lvl))
        .collect();
    parts.join(",")
}

/// Compute the final filter spec string with precedence:
/// - `log_filter`
/// - `trace`/`debug`/`log_level` (crate-scoped)
/// - `RUST_LOG` env
/// - default to crate-scoped `info`
pub fn compute_spec(args: &LogArgs) -> String {
    if let Some(spec) = &args.log_filter {
        return spec.clone();
    }
    if args.trace {
        return level_spec_for("trace");
    }
    if args.debug {
        return level_spec_for("debug");
    }
    if let Some(lvl) = &args.log_level {
        return level_spec_for(lvl);
    }
    env::var("RUST_LOG").unwrap_or_else(|_| level_spec_for("info"))
}

/// Install the process-wide subscriber: env filter plus compact output.
pub fn init(args: &LogArgs) {
    let spec = compute_spec(args);
    tracing_subscriber::registry()
        .with(EnvFilter::new(spec))
        .with(fmt::layer().without_time())
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> LogArgs {
        LogArgs {
            trace: false,
            debug: false,
            log_level: None,
            log_filter: None,
        }
    }

    #[test]
    fn explicit_filter_wins() {
        let mut a = args();
        a.trace = true;
        a.log_filter = Some("webpane_engine=warn".into());
        assert_eq!(compute_spec(&a), "webpane_engine=warn");
    }

    #[test]
    fn level_flags_scope_to_our_crates() {
        let mut a = args();
        a.debug = true;
        let spec = compute_spec(&a);
        assert!(spec.contains("webpane=debug"));
        assert!(spec.contains("webpane_engine=debug"));
        assert!(spec.contains("webpane_dispatch=debug"));
        assert!(spec.contains("webpane_keycode=debug"));
    }

    #[test]
    fn log_level_flag_is_case_insensitive() {
        let mut a = args();
        a.log_level = Some("WARN".into());
        assert!(compute_spec(&a).contains("webpane=warn"));
    }
}
