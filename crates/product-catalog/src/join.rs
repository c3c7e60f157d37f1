//! Denormalising join over the fixture tables.
//!
//! Each product is paired with the first category whose id matches its
//! `category_id`, and that category with the first user whose id matches its
//! `owner_id`. A dangling reference fails the whole join; no placeholder
//! record is substituted.

use tracing::debug;

use crate::error::LookupError;
use crate::model::{Category, EnrichedProduct, Product, User};

/// Builds the denormalised catalog from the three fixture tables.
///
/// Output order matches the order of `products`.
///
/// # Errors
///
/// Returns [`LookupError::MissingCategory`] when a product references an
/// unknown category, or [`LookupError::MissingOwner`] when a category
/// references an unknown user.
///
/// # Example
///
/// ```
/// use product_catalog::{Category, LookupError, Product, Sex, User, build_catalog};
///
/// let products = [Product { id: 1, name: "Chair".to_owned(), category_id: 10 }];
/// let categories = [Category {
///     id: 10,
///     title: "Furniture".to_owned(),
///     icon: "🪑".to_owned(),
///     owner_id: 100,
/// }];
/// let users = [User { id: 100, name: "Max".to_owned(), sex: Sex::M }];
///
/// let catalog = build_catalog(&products, &categories, &users).expect("valid fixtures");
/// assert_eq!(catalog.len(), 1);
///
/// let result = build_catalog(&products, &categories, &[]);
/// assert_eq!(result, Err(LookupError::MissingOwner { category_id: 10, owner_id: 100 }));
/// ```
pub fn build_catalog(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> Result<Vec<EnrichedProduct>, LookupError> {
    let catalog = products
        .iter()
        .map(|product| enrich(product, categories, users))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(products = catalog.len(), "catalog built");
    Ok(catalog)
}

fn enrich(
    product: &Product,
    categories: &[Category],
    users: &[User],
) -> Result<EnrichedProduct, LookupError> {
    let category = find_category(product, categories)?;
    let user = find_owner(category, users)?;
    Ok(EnrichedProduct::new(product, category.clone(), user.clone()))
}

pub(crate) fn find_category<'a>(
    product: &Product,
    categories: &'a [Category],
) -> Result<&'a Category, LookupError> {
    categories
        .iter()
        .find(|category| category.id == product.category_id)
        .ok_or(LookupError::MissingCategory {
            product_id: product.id,
            category_id: product.category_id,
        })
}

pub(crate) fn find_owner<'a>(
    category: &Category,
    users: &'a [User],
) -> Result<&'a User, LookupError> {
    users
        .iter()
        .find(|user| user.id == category.owner_id)
        .ok_or(LookupError::MissingOwner {
            category_id: category.id,
            owner_id: category.owner_id,
        })
}
