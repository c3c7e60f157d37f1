//! Command-line presentation of the filtered catalog.
//!
//! One invocation holds one criteria tuple: settings are layered from
//! command-line flags and `CATALOG_*` environment variables, the catalog is
//! joined once, filtered once and rendered. The binary delegates to
//! [`run`] so the whole flow can be exercised without spawning a process.

mod error;
mod settings;

use std::path::Path;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use tracing::info;

pub use error::CliError;
pub use settings::{CatalogSettings, OutputFormat};

use crate::error::FixtureError;
use crate::filter::apply_filters;
use crate::fixtures::CatalogFixtures;
use crate::view::CatalogView;

/// Loads fixture tables from `path`, or the bundled set when `None`.
///
/// # Errors
///
/// Returns [`CliError`] when the path is not a UTF-8 file path or the
/// document cannot be read or parsed.
pub fn load_fixtures(path: Option<&Path>) -> Result<CatalogFixtures, CliError> {
    let Some(path) = path else {
        return Ok(CatalogFixtures::bundled()?);
    };

    let utf8_path = Utf8Path::from_path(path).ok_or_else(|| CliError::InvalidFixturesPath {
        path: path.to_path_buf(),
        reason: "path must be valid UTF-8",
    })?;
    let file_name = utf8_path
        .file_name()
        .ok_or_else(|| CliError::InvalidFixturesPath {
            path: path.to_path_buf(),
            reason: "path must name a file",
        })?;
    let parent = match utf8_path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        FixtureError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    Ok(CatalogFixtures::from_file(&dir, Utf8Path::new(file_name))?)
}

/// Loads, joins, filters and renders the catalog for one set of settings.
///
/// # Errors
///
/// Returns [`CliError`] for invalid settings, unreadable fixtures, dangling
/// fixture references or serialisation failures.
pub fn run(settings: &CatalogSettings) -> Result<String, CliError> {
    let criteria = settings.criteria()?;
    let format = settings.output_format()?;
    let fixtures = load_fixtures(settings.fixtures_path.as_deref())?;
    let catalog = fixtures.build_catalog()?;
    let visible = apply_filters(&catalog, &criteria);

    info!(
        total = catalog.len(),
        visible = visible.len(),
        filtered = !criteria.is_empty(),
        "catalog query complete"
    );

    match format {
        OutputFormat::Table => Ok(CatalogView::new(&visible).render_table()),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&visible).map_err(|e| CliError::Render {
                    message: e.to_string(),
                })?;
            json.push('\n');
            Ok(json)
        }
    }
}
