//! Fixture entities and the denormalised product record.
//!
//! Source rows mirror the JSON fixture tables one-to-one. They are loaded
//! once and never mutated; [`EnrichedProduct`] is derived from them by the
//! join.

use serde::{Deserialize, Serialize};

/// Identifier of a [`User`].
pub type UserId = u32;

/// Identifier of a [`Category`].
pub type CategoryId = u32;

/// Identifier of a [`Product`].
pub type ProductId = u32;

/// Sex recorded for a user; drives how the owner name is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Male.
    #[serde(rename = "m")]
    M,
    /// Female.
    #[serde(rename = "f")]
    F,
}

/// A user who can own categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Recorded sex.
    pub sex: Sex,
}

/// A product category owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Human-readable title.
    pub title: String,
    /// Icon shown next to the title, usually a single emoji.
    pub icon: String,
    /// Owning user; must resolve to a [`User::id`].
    pub owner_id: UserId,
}

/// A product row as stored in the fixture table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,
    /// Product name, matched by the free-text search.
    pub name: String,
    /// Category of the product; must resolve to a [`Category::id`].
    pub category_id: CategoryId,
}

/// A product with its category and the category's owner embedded inline.
///
/// # Example
///
/// ```
/// use product_catalog::{Category, EnrichedProduct, Product, Sex, User};
///
/// let product = Product { id: 1, name: "Chair".to_owned(), category_id: 10 };
/// let category = Category {
///     id: 10,
///     title: "Furniture".to_owned(),
///     icon: "🪑".to_owned(),
///     owner_id: 100,
/// };
/// let user = User { id: 100, name: "Max".to_owned(), sex: Sex::M };
///
/// let enriched = EnrichedProduct::new(&product, category, user);
/// assert_eq!(enriched.category.title, "Furniture");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    /// Product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category reference as stored on the product.
    pub category_id: CategoryId,
    /// The resolved category.
    pub category: Category,
    /// The category's owner.
    pub user: User,
}

impl EnrichedProduct {
    /// Combines a product with its already resolved category and owner.
    #[must_use]
    pub fn new(product: &Product, category: Category, user: User) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category_id: product.category_id,
            category,
            user,
        }
    }
}
