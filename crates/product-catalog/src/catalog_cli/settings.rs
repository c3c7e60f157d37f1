//! Layered settings for a single catalog query.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;

use super::CliError;
use crate::filter::FilterCriteria;
use crate::model::CategoryId;

/// How the visible products are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    #[default]
    Table,
    /// Pretty-printed JSON array of enriched products.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(CliError::UnknownFormat {
                value: value.to_owned(),
            }),
        }
    }
}

const DEFAULT_FORMAT: &str = "table";

/// Settings for one catalog query, loaded via OrthoConfig.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG")]
pub struct CatalogSettings {
    /// Show only products whose category belongs to this user.
    pub owner: Option<u32>,
    /// Case-insensitive product name search.
    pub query: Option<String>,
    /// Comma-separated category ids to include.
    ///
    /// The environment layer types `CATALOG_CATEGORIES` values, so a single
    /// id arrives as a number and `1,5` as a sequence; both are normalised
    /// back to the comma-separated form.
    #[serde(default, deserialize_with = "deserialize_category_list")]
    pub categories: Option<String>,
    /// Fixture JSON file; the bundled fixtures are used when absent.
    pub fixtures_path: Option<PathBuf>,
    /// Output format: `table` or `json`.
    #[ortho_config(default = String::from("table"))]
    pub format: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            owner: None,
            query: None,
            categories: None,
            fixtures_path: None,
            format: DEFAULT_FORMAT.to_owned(),
        }
    }
}

impl CatalogSettings {
    /// Converts the settings into filter criteria.
    ///
    /// Blank entries in the category list are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidCategoryId`] when a category entry is not a
    /// number.
    ///
    /// # Example
    ///
    /// ```
    /// use product_catalog::catalog_cli::CatalogSettings;
    ///
    /// let settings = CatalogSettings {
    ///     owner: Some(2),
    ///     categories: Some("1, 3".to_owned()),
    ///     ..CatalogSettings::default()
    /// };
    ///
    /// let criteria = settings.criteria().expect("valid settings");
    /// assert_eq!(criteria.owner_id(), Some(2));
    /// assert!(criteria.is_category_selected(3));
    /// ```
    pub fn criteria(&self) -> Result<FilterCriteria, CliError> {
        let category_ids = self
            .categories
            .as_deref()
            .map(parse_category_ids)
            .transpose()?
            .unwrap_or_default();

        Ok(FilterCriteria::new(
            self.owner,
            self.query.clone().unwrap_or_default(),
            category_ids,
        ))
    }

    /// Returns the requested output format.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownFormat`] for unrecognised names.
    pub fn output_format(&self) -> Result<OutputFormat, CliError> {
        OutputFormat::from_str(&self.format)
    }
}

fn parse_category_ids(raw: &str) -> Result<Vec<CategoryId>, CliError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse()
                .map_err(|e: std::num::ParseIntError| CliError::InvalidCategoryId {
                    value: entry.to_owned(),
                    message: e.to_string(),
                })
        })
        .collect()
}

fn deserialize_category_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CategoryListVisitor)
}

/// A single entry of a typed category sequence.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryEntry {
    Id(u64),
    Text(String),
}

impl fmt::Display for CategoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

struct CategoryListVisitor;

impl<'de> Visitor<'de> for CategoryListVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a category id, a comma-separated list or a sequence of ids")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Some(value.to_owned()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::new();
        while let Some(entry) = seq.next_element::<CategoryEntry>()? {
            entries.push(entry.to_string());
        }
        Ok(Some(entries.join(",")))
    }
}

#[cfg(test)]
mod tests {
    //! Covers normalisation of typed category values.

    use rstest::rstest;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Categories {
        #[serde(default, deserialize_with = "deserialize_category_list")]
        categories: Option<String>,
    }

    #[rstest]
    #[case::string(r#"{"categories": "1,5"}"#, Some("1,5"))]
    #[case::single_id(r#"{"categories": 5}"#, Some("5"))]
    #[case::sequence(r#"{"categories": [1, 5]}"#, Some("1,5"))]
    #[case::string_sequence(r#"{"categories": ["2", "4"]}"#, Some("2,4"))]
    #[case::null(r#"{"categories": null}"#, None)]
    #[case::absent("{}", None)]
    fn normalises_category_values(#[case] json: &str, #[case] expected: Option<&str>) {
        let parsed: Categories = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.categories.as_deref(), expected);
    }

    #[test]
    fn rejects_nested_objects() {
        let result = serde_json::from_str::<Categories>(r#"{"categories": {"id": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn default_settings_render_a_table() {
        let settings = CatalogSettings::default();
        assert_eq!(settings.format, DEFAULT_FORMAT);
        assert_eq!(settings.output_format(), Ok(OutputFormat::Table));
    }
}
