// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Tracing subscriber setup for the demo binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr subscriber.
///
/// Level defaults to `info` (or `debug` when `verbose` is set) and can be
/// overridden with `RUST_LOG`, e.g. `RUST_LOG=alphaswitch=trace`.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!("alphaswitch v{} logging ready", env!("CARGO_PKG_VERSION"));
    Ok(())
}
