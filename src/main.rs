// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

use std::path::PathBuf;

use clap::Parser;

/// Gallery of AlphaSwitch toggles.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON theme applied to every switch at startup.
    #[arg(long, value_name = "PATH")]
    theme: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    alphaswitch::utils::init_logging(cli.verbose)?;
    alphaswitch::app::run(cli.theme.as_deref())
}
