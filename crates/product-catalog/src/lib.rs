//! Product catalog joining and filtering over static fixture tables.
//!
//! The crate denormalises three related tables (products, categories and
//! users) into a single catalog once, then derives the visible subset of
//! that catalog from an immutable [`FilterCriteria`] value.
//!
//! # Overview
//!
//! - Loading fixture tables from JSON, or using the bundled set
//! - Joining products with their category and the category's owner
//! - Conjunctive filtering by owner, case-insensitive name search and
//!   category set
//! - Facet controls and table rows for a presentation layer
//!
//! # Example
//!
//! ```
//! use product_catalog::{CatalogFixtures, FilterCriteria, apply_filters};
//!
//! let json = r#"{
//!     "version": 1,
//!     "users": [{"id": 100, "name": "Max", "sex": "m"}],
//!     "categories": [{"id": 10, "title": "Furniture", "icon": "🪑", "ownerId": 100}],
//!     "products": [{"id": 1, "name": "Office Chair", "categoryId": 10}]
//! }"#;
//!
//! let fixtures = CatalogFixtures::from_json(json).expect("valid fixtures");
//! let catalog = fixtures.build_catalog().expect("references resolve");
//!
//! let criteria = FilterCriteria::default().with_search_text("chair");
//! let visible = apply_filters(&catalog, &criteria);
//!
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible.first().map(|p| p.user.name.as_str()), Some("Max"));
//! ```

pub mod catalog_cli;
mod error;
mod facets;
mod filter;
mod fixtures;
mod join;
mod model;
mod view;

pub use error::{FixtureError, LookupError};
pub use facets::{CategoryFacet, OwnerFacet, all_categories_active, category_facets, owner_facets};
pub use filter::{FilterCriteria, apply_filters};
pub use fixtures::{CatalogFixtures, SUPPORTED_VERSION};
pub use join::build_catalog;
pub use model::{
    Category, CategoryId, EnrichedProduct, Product, ProductId, Sex, User, UserId,
};
pub use view::{CatalogView, NO_MATCHES_MESSAGE, ProductRow};
