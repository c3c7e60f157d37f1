//! Facet controls derived from the source tables and the current criteria.

use crate::filter::FilterCriteria;
use crate::model::{Category, CategoryId, User, UserId};

/// Label of the facet entry that clears the owner selection.
const ALL_OWNERS_LABEL: &str = "All";

/// One owner tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerFacet {
    /// Owner selected by this tab; `None` for the "All" tab.
    pub id: Option<UserId>,
    /// Text shown on the tab.
    pub label: String,
    /// Whether this tab matches the current selection.
    pub is_active: bool,
}

/// One category toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFacet {
    /// Category toggled by this control.
    pub id: CategoryId,
    /// Category title.
    pub title: String,
    /// Whether the category is part of the current selection.
    pub is_selected: bool,
}

/// Builds the owner tabs: "All" first, then one per user in table order.
///
/// Exactly one tab is active when the selected owner exists in `users`.
///
/// # Example
///
/// ```
/// use product_catalog::{FilterCriteria, Sex, User, owner_facets};
///
/// let users = [User { id: 1, name: "Roma".to_owned(), sex: Sex::M }];
/// let facets = owner_facets(&users, &FilterCriteria::default());
///
/// assert_eq!(facets.len(), 2);
/// assert!(facets.first().is_some_and(|all| all.is_active));
/// ```
#[must_use]
pub fn owner_facets(users: &[User], criteria: &FilterCriteria) -> Vec<OwnerFacet> {
    let selected = criteria.owner_id();
    let all = OwnerFacet {
        id: None,
        label: ALL_OWNERS_LABEL.to_owned(),
        is_active: selected.is_none(),
    };

    std::iter::once(all)
        .chain(users.iter().map(|user| OwnerFacet {
            id: Some(user.id),
            label: user.name.clone(),
            is_active: selected == Some(user.id),
        }))
        .collect()
}

/// Builds one toggle per category in table order.
#[must_use]
pub fn category_facets(categories: &[Category], criteria: &FilterCriteria) -> Vec<CategoryFacet> {
    categories
        .iter()
        .map(|category| CategoryFacet {
            id: category.id,
            title: category.title.clone(),
            is_selected: criteria.is_category_selected(category.id),
        })
        .collect()
}

/// Returns `true` when the "All" categories control is active.
#[must_use]
pub fn all_categories_active(criteria: &FilterCriteria) -> bool {
    criteria.category_ids().is_empty()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::model::Sex;

    fn users() -> Vec<User> {
        vec![
            User {
                id: 1,
                name: "Roma".to_owned(),
                sex: Sex::M,
            },
            User {
                id: 2,
                name: "Anna".to_owned(),
                sex: Sex::F,
            },
        ]
    }

    fn categories() -> Vec<Category> {
        [(1, "Grocery"), (2, "Drinks"), (3, "Fruits")]
            .into_iter()
            .map(|(id, title)| Category {
                id,
                title: title.to_owned(),
                icon: String::new(),
                owner_id: 1,
            })
            .collect()
    }

    fn active_labels(facets: &[OwnerFacet]) -> Vec<&str> {
        facets
            .iter()
            .filter(|f| f.is_active)
            .map(|f| f.label.as_str())
            .collect()
    }

    #[rstest]
    #[case(None, vec!["All"])]
    #[case(Some(2), vec!["Anna"])]
    #[case(Some(9), vec![])]
    fn owner_facets_mark_selection(#[case] owner: Option<u32>, #[case] expected: Vec<&str>) {
        let criteria = FilterCriteria::default().with_owner(owner);
        let facets = owner_facets(&users(), &criteria);

        assert_eq!(facets.len(), 3);
        assert_eq!(active_labels(&facets), expected);
    }

    #[test]
    fn owner_facets_follow_table_order() {
        let facets = owner_facets(&users(), &FilterCriteria::default());
        let ids: Vec<_> = facets.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![None, Some(1), Some(2)]);
    }

    #[test]
    fn category_facets_mark_selected_categories() {
        let criteria = FilterCriteria::new(None, "", [1, 3]);
        let selected: Vec<_> = category_facets(&categories(), &criteria)
            .into_iter()
            .filter(|f| f.is_selected)
            .map(|f| f.title)
            .collect();

        assert_eq!(selected, vec!["Grocery", "Fruits"]);
        assert!(!all_categories_active(&criteria));
    }

    #[test]
    fn all_categories_active_without_selection() {
        let criteria = FilterCriteria::default().toggling_category(2).without_categories();
        assert!(all_categories_active(&criteria));
        assert!(
            category_facets(&categories(), &criteria)
                .iter()
                .all(|f| !f.is_selected)
        );
    }
}
