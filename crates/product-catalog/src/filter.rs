//! Conjunctive filtering of the denormalised catalog.
//!
//! [`FilterCriteria`] holds the whole selection as one value: every user
//! action produces a new criteria value, and the caller recomputes the
//! visible subset with [`apply_filters`].

use std::collections::HashSet;

use tracing::debug;

use crate::model::{CategoryId, EnrichedProduct, UserId};

/// The current filter selection driving the visible subset.
///
/// The default value is the empty selection, under which every product is
/// visible.
///
/// # Example
///
/// ```
/// use product_catalog::FilterCriteria;
///
/// let criteria = FilterCriteria::default()
///     .with_owner(Some(2))
///     .toggling_category(1)
///     .toggling_category(3)
///     .toggling_category(1);
///
/// assert_eq!(criteria.owner_id(), Some(2));
/// assert!(criteria.is_category_selected(3));
/// assert!(!criteria.is_category_selected(1));
/// assert!(criteria.reset().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    owner_id: Option<UserId>,
    search_text: String,
    category_ids: HashSet<CategoryId>,
}

impl FilterCriteria {
    /// Creates criteria from explicit values.
    #[must_use]
    pub fn new(
        owner_id: Option<UserId>,
        search_text: impl Into<String>,
        category_ids: impl IntoIterator<Item = CategoryId>,
    ) -> Self {
        Self {
            owner_id,
            search_text: search_text.into(),
            category_ids: category_ids.into_iter().collect(),
        }
    }

    /// Returns the selected owner, if any.
    #[must_use]
    pub const fn owner_id(&self) -> Option<UserId> {
        self.owner_id
    }

    /// Returns the search text exactly as entered.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Returns the selected category ids.
    #[must_use]
    pub const fn category_ids(&self) -> &HashSet<CategoryId> {
        &self.category_ids
    }

    /// Selects a single owner, or all owners when `None`.
    #[must_use]
    pub fn with_owner(self, owner_id: Option<UserId>) -> Self {
        Self { owner_id, ..self }
    }

    /// Replaces the search text.
    #[must_use]
    pub fn with_search_text(self, search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            ..self
        }
    }

    /// Clears the search text.
    #[must_use]
    pub fn without_search_text(self) -> Self {
        self.with_search_text(String::new())
    }

    /// Adds the category to the selection, or removes it if already selected.
    #[must_use]
    pub fn toggling_category(mut self, category_id: CategoryId) -> Self {
        if !self.category_ids.remove(&category_id) {
            self.category_ids.insert(category_id);
        }
        self
    }

    /// Clears the category selection.
    #[must_use]
    pub fn without_categories(self) -> Self {
        Self {
            category_ids: HashSet::new(),
            ..self
        }
    }

    /// Returns the empty selection.
    #[must_use]
    pub fn reset(self) -> Self {
        self.with_owner(None)
            .without_search_text()
            .without_categories()
    }

    /// Returns `true` when the search text is active, i.e. non-blank.
    #[must_use]
    pub fn has_search_text(&self) -> bool {
        !self.search_text.trim().is_empty()
    }

    /// Returns `true` when the category is part of the selection.
    #[must_use]
    pub fn is_category_selected(&self, category_id: CategoryId) -> bool {
        self.category_ids.contains(&category_id)
    }

    /// Returns `true` when no predicate is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owner_id.is_none() && !self.has_search_text() && self.category_ids.is_empty()
    }

    fn matches(&self, product: &EnrichedProduct, needle: Option<&str>) -> bool {
        self.owner_id.is_none_or(|owner_id| product.user.id == owner_id)
            && needle.is_none_or(|text| product.name.to_lowercase().contains(text))
            && (self.category_ids.is_empty() || self.category_ids.contains(&product.category.id))
    }
}

/// Returns the products visible under `criteria`, in catalog order.
///
/// Each active predicate narrows the result; inactive ones (no owner, blank
/// search text, empty category set) keep every product. Blank-ness is judged
/// on the trimmed text, but matching uses the text as entered, lowercased.
///
/// # Example
///
/// ```
/// use product_catalog::{CatalogFixtures, FilterCriteria, apply_filters};
///
/// let catalog = CatalogFixtures::bundled()
///     .expect("bundled fixtures")
///     .build_catalog()
///     .expect("bundled references resolve");
///
/// let everything = apply_filters(&catalog, &FilterCriteria::default());
/// assert_eq!(everything, catalog);
///
/// let nothing = apply_filters(&catalog, &FilterCriteria::default().with_owner(Some(999)));
/// assert!(nothing.is_empty());
/// ```
#[must_use]
pub fn apply_filters(catalog: &[EnrichedProduct], criteria: &FilterCriteria) -> Vec<EnrichedProduct> {
    let needle = criteria
        .has_search_text()
        .then(|| criteria.search_text.to_lowercase());

    let visible: Vec<_> = catalog
        .iter()
        .filter(|product| criteria.matches(product, needle.as_deref()))
        .cloned()
        .collect();

    debug!(
        total = catalog.len(),
        visible = visible.len(),
        owner_id = ?criteria.owner_id,
        categories = criteria.category_ids.len(),
        "filters applied"
    );
    visible
}
