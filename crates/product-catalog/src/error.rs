//! Error types for the product-catalog crate.
//!
//! Fixture loading and the catalog join fail in different ways: loading
//! reports malformed documents, while the join reports dangling foreign keys.
//! Both follow the project's `thiserror` conventions.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{CategoryId, ProductId, UserId};

/// A foreign key in the fixture tables did not resolve during the join.
///
/// This is a data error rather than a runtime condition: the fixture tables
/// are invalid and retrying cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A product references a category that does not exist.
    #[error("product {product_id} references unknown category {category_id}")]
    MissingCategory {
        /// Product holding the dangling reference.
        product_id: ProductId,
        /// Category id that could not be found.
        category_id: CategoryId,
    },

    /// A category references an owner that does not exist.
    #[error("category {category_id} references unknown owner {owner_id}")]
    MissingOwner {
        /// Category holding the dangling reference.
        category_id: CategoryId,
        /// User id that could not be found.
        owner_id: UserId,
    },
}

/// Errors that can occur when loading fixture tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture file at '{path}': {message}")]
    IoError {
        /// Path to the fixture file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The fixture JSON is malformed or missing required fields.
    #[error("invalid fixture JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The fixture document version is not supported.
    #[error("unsupported fixture version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// Two rows of the same table share an id.
    #[error("duplicate id {id} in {table} table")]
    DuplicateId {
        /// Table containing the duplicate.
        table: &'static str,
        /// The repeated id.
        id: u32,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        LookupError::MissingCategory { product_id: 1, category_id: 99 },
        "product 1 references unknown category 99"
    )]
    #[case(
        LookupError::MissingOwner { category_id: 10, owner_id: 7 },
        "category 10 references unknown owner 7"
    )]
    fn lookup_error_formats_correctly(#[case] err: LookupError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn fixture_error_io_formats_correctly() {
        let err = FixtureError::IoError {
            path: PathBuf::from("/tmp/catalog.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read fixture file at '/tmp/catalog.json': file not found"
        );
    }

    #[test]
    fn fixture_error_parse_formats_correctly() {
        let err = FixtureError::ParseError {
            message: "unexpected token".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid fixture JSON: unexpected token");
    }

    #[test]
    fn fixture_error_version_formats_correctly() {
        let err = FixtureError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported fixture version: expected 1, found 3"
        );
    }

    #[test]
    fn fixture_error_duplicate_id_formats_correctly() {
        let err = FixtureError::DuplicateId {
            table: "categories",
            id: 4,
        };
        assert_eq!(err.to_string(), "duplicate id 4 in categories table");
    }
}
