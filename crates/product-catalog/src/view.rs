//! Table rows for displaying the visible products.
//!
//! Sorting is not supported; rows keep catalog order.

use crate::model::{EnrichedProduct, ProductId, Sex};

/// Message shown instead of rows when nothing matches.
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];

/// A single rendered product row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    /// Product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category icon and title, formatted as `"{icon} - {title}"`.
    pub category_label: String,
    /// Name of the category owner.
    pub user_name: String,
    /// Sex of the category owner, used to style the name.
    pub user_sex: Sex,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(product: &EnrichedProduct) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category_label: format!("{} - {}", product.category.icon, product.category.title),
            user_name: product.user.name.clone(),
            user_sex: product.user.sex,
        }
    }
}

impl ProductRow {
    fn cells(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.category_label.clone(),
            self.user_name.clone(),
        ]
    }
}

/// The product table for one filter result.
///
/// # Example
///
/// ```
/// use product_catalog::{CatalogView, NO_MATCHES_MESSAGE};
///
/// let view = CatalogView::new(&[]);
/// assert_eq!(view.empty_message(), Some(NO_MATCHES_MESSAGE));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    rows: Vec<ProductRow>,
}

impl CatalogView {
    /// Builds rows for the given products, preserving their order.
    #[must_use]
    pub fn new(products: &[EnrichedProduct]) -> Self {
        Self {
            rows: products.iter().map(ProductRow::from).collect(),
        }
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    /// Returns the "no matches" message when there are no rows.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(NO_MATCHES_MESSAGE)
    }

    /// Renders the rows as a left-aligned plain-text table.
    ///
    /// The header row is always present; an empty table is preceded by
    /// [`NO_MATCHES_MESSAGE`].
    ///
    /// Column widths count `char`s, not terminal cells. A column holding
    /// double-width glyphs such as emoji icons is padded one cell short per
    /// glyph, so the columns after it can shift on screen. Use the JSON
    /// output when exact alignment matters.
    #[must_use]
    pub fn render_table(&self) -> String {
        let body: Vec<[String; 4]> = self.rows.iter().map(ProductRow::cells).collect();
        let header = HEADERS.map(str::to_owned);

        let mut widths = header.each_ref().map(|cell| cell.chars().count());
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        if let Some(message) = self.empty_message() {
            out.push_str(message);
            out.push('\n');
        }
        for cells in std::iter::once(&header).chain(&body) {
            push_line(&mut out, cells, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(cell);
        let padding = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat_n(' ', padding));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Product, User};

    fn chair() -> EnrichedProduct {
        EnrichedProduct::new(
            &Product {
                id: 1,
                name: "Chair".to_owned(),
                category_id: 10,
            },
            Category {
                id: 10,
                title: "Furniture".to_owned(),
                icon: "#".to_owned(),
                owner_id: 100,
            },
            User {
                id: 100,
                name: "Anna".to_owned(),
                sex: Sex::F,
            },
        )
    }

    #[test]
    fn row_formats_category_label() {
        let row = ProductRow::from(&chair());
        assert_eq!(row.category_label, "# - Furniture");
        assert_eq!(row.user_name, "Anna");
        assert_eq!(row.user_sex, Sex::F);
    }

    #[test]
    fn non_empty_view_has_no_message() {
        let view = CatalogView::new(&[chair()]);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.empty_message(), None);
    }

    #[test]
    fn renders_aligned_table() {
        let view = CatalogView::new(&[chair()]);
        let expected = concat!(
            "ID  Product  Category       User\n",
            "1   Chair    # - Furniture  Anna\n",
        );
        assert_eq!(view.render_table(), expected);
    }

    #[test]
    fn pads_by_char_count_not_display_width() {
        let mut wide = chair();
        wide.category.icon = "🪑".to_owned();
        let view = CatalogView::new(&[wide]);
        let expected = concat!(
            "ID  Product  Category       User\n",
            "1   Chair    🪑 - Furniture  Anna\n",
        );
        assert_eq!(view.render_table(), expected);
    }

    #[test]
    fn renders_message_for_empty_table() {
        let view = CatalogView::new(&[]);
        let expected = concat!(
            "No products matching selected criteria\n",
            "ID  Product  Category  User\n",
        );
        assert_eq!(view.render_table(), expected);
    }
}
