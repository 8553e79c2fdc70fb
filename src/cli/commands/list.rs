//! Category listing commands.

use std::sync::Arc;

use anyhow::Result;
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::errors::DomainError;
use crate::domain::models::Category;
use crate::services::CategoryIndexCache;

/// One category in a listing.
#[derive(Debug, serde::Serialize)]
pub struct CategoryRow {
    /// Backend id.
    pub id: String,
    /// Normalized slug.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Parent category ids.
    pub parents: Vec<String>,
}

impl From<&Category> for CategoryRow {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            slug: category.normalized_slug(),
            name: category.name.clone(),
            parents: category.parent_category_id.clone().unwrap_or_default(),
        }
    }
}

/// Result of `catalog list` and `catalog children`.
#[derive(Debug, serde::Serialize)]
pub struct CategoryListOutput {
    /// Slug of the parent when listing children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Listed categories.
    pub categories: Vec<CategoryRow>,
    /// Number of listed categories.
    pub total: usize,
}

impl CategoryListOutput {
    fn new(parent: Option<String>, categories: &[Arc<Category>]) -> Self {
        let categories: Vec<CategoryRow> =
            categories.iter().map(|c| CategoryRow::from(&**c)).collect();
        Self {
            parent,
            total: categories.len(),
            categories,
        }
    }
}

impl CommandOutput for CategoryListOutput {
    fn to_human(&self) -> String {
        if self.categories.is_empty() {
            return match self.parent {
                Some(ref parent) => format!("No subcategories of '{parent}'."),
                None => "No categories found.".to_string(),
            };
        }

        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("ID").add_attribute(Attribute::Bold),
                Cell::new("Slug").add_attribute(Attribute::Bold),
                Cell::new("Name").add_attribute(Attribute::Bold),
                Cell::new("Parents").add_attribute(Attribute::Bold),
            ]);

        for row in &self.categories {
            table.add_row(vec![
                Cell::new(&row.id),
                Cell::new(&row.slug),
                Cell::new(truncate(&row.name, 40)),
                Cell::new(row.parents.join(", ")),
            ]);
        }

        let heading = match self.parent {
            Some(ref parent) => format!("{} subcategory(ies) of '{parent}':", self.total),
            None => format!("Found {} category(ies):", self.total),
        };
        format!("{heading}\n{table}")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// List all categories, or only top-level ones.
pub async fn execute(cache: &CategoryIndexCache, top_level: bool, json_mode: bool) -> Result<()> {
    let categories = if top_level {
        cache.top_level().await
    } else {
        cache.all().await
    };

    output(&CategoryListOutput::new(None, &categories), json_mode);
    Ok(())
}

/// List the direct children of the category behind `slug`.
pub async fn execute_children(
    cache: &CategoryIndexCache,
    slug: &str,
    json_mode: bool,
) -> Result<()> {
    let parent_id = cache
        .lookup_id_by_slug(slug)
        .await
        .ok_or_else(|| DomainError::CategoryNotFound(slug.to_string()))?;
    let children = cache.children_of(&parent_id).await;

    output(
        &CategoryListOutput::new(Some(slug.trim().to_string()), &children),
        json_mode,
    );
    Ok(())
}
