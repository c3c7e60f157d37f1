//! Fixture tables and JSON loading.
//!
//! The three source tables are shipped as a single versioned JSON document.
//! Loading checks the document shape, the version and id uniqueness; foreign
//! keys are only resolved by the join, or up front via
//! [`CatalogFixtures::check_references`].

use std::collections::HashSet;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Deserialize;

use crate::error::{FixtureError, LookupError};
use crate::join::{build_catalog, find_category, find_owner};
use crate::model::{Category, EnrichedProduct, Product, User};

/// Current supported fixture document version.
pub const SUPPORTED_VERSION: u32 = 1;

const BUNDLED_JSON: &str = include_str!("../data/catalog.json");

/// The static source tables of the catalog.
///
/// # Example
///
/// ```
/// use product_catalog::CatalogFixtures;
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": 1, "name": "Roma", "sex": "m"}],
///     "categories": [{"id": 2, "title": "Drinks", "icon": "🍺", "ownerId": 1}],
///     "products": [{"id": 1, "name": "Milk", "categoryId": 2}]
/// }"#;
///
/// let fixtures = CatalogFixtures::from_json(json).expect("valid fixtures");
/// assert_eq!(fixtures.products().len(), 1);
/// assert!(fixtures.check_references().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFixtures {
    version: u32,
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl CatalogFixtures {
    /// Parses fixture tables from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if:
    /// - The JSON is malformed or a required field is missing
    /// - The version is unsupported
    /// - Two rows of one table share an id
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let raw: RawCatalogFixtures =
            serde_json::from_str(json).map_err(|e| FixtureError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads fixture tables from a JSON file relative to `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, FixtureError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| FixtureError::IoError {
                path: path.as_std_path().to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    /// Returns the fixture tables compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] only if the bundled document is invalid.
    pub fn bundled() -> Result<Self, FixtureError> {
        Self::from_json(BUNDLED_JSON)
    }

    fn from_raw(raw: RawCatalogFixtures) -> Result<Self, FixtureError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(FixtureError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        ensure_unique_ids("users", raw.users.iter().map(|u| u.id))?;
        ensure_unique_ids("categories", raw.categories.iter().map(|c| c.id))?;
        ensure_unique_ids("products", raw.products.iter().map(|p| p.id))?;

        Ok(Self {
            version: raw.version,
            users: raw.users,
            categories: raw.categories,
            products: raw.products,
        })
    }

    /// Returns the document version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the users table.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the categories table.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the products table.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Verifies every foreign key without building the catalog.
    ///
    /// Categories are checked before products, so a category with an unknown
    /// owner is reported even when no product uses it.
    ///
    /// # Errors
    ///
    /// Returns the first [`LookupError`] found.
    pub fn check_references(&self) -> Result<(), LookupError> {
        for category in &self.categories {
            find_owner(category, &self.users)?;
        }
        for product in &self.products {
            find_category(product, &self.categories)?;
        }
        Ok(())
    }

    /// Joins the tables into the denormalised catalog.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when a foreign key does not resolve.
    pub fn build_catalog(&self) -> Result<Vec<EnrichedProduct>, LookupError> {
        build_catalog(&self.products, &self.categories, &self.users)
    }
}

fn ensure_unique_ids(
    table: &'static str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), FixtureError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId { table, id });
        }
    }
    Ok(())
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalogFixtures {
    version: u32,
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}
