//! Catalog filter CLI.
//!
//! This binary delegates to `product_catalog::catalog_cli` for settings and
//! rendering, keeping the CLI behaviour testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use product_catalog::catalog_cli::{CatalogSettings, CliError, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match load_and_run() {
        Ok(output) => {
            if let Err(err) = io::stdout().lock().write_all(output.as_bytes()) {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn load_and_run() -> Result<String, CliError> {
    let settings = CatalogSettings::load().map_err(|e| CliError::Settings {
        message: e.to_string(),
    })?;
    run(&settings)
}
