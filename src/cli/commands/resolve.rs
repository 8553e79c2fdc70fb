//! Slug resolution commands.

use anyhow::Result;

use crate::cli::output::{output, CommandOutput};
use crate::domain::errors::DomainError;
use crate::domain::models::{normalize_slug, Category};
use crate::services::CategoryIndexCache;

/// Result of `catalog resolve`.
#[derive(Debug, serde::Serialize)]
pub struct ResolveOutput {
    /// Normalized slug that was looked up.
    pub slug: String,
    /// Resolved category id.
    pub id: String,
}

impl CommandOutput for ResolveOutput {
    fn to_human(&self) -> String {
        self.id.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Result of `catalog show`.
#[derive(Debug, serde::Serialize)]
pub struct CategoryDetailOutput {
    /// The matched category record.
    pub category: Category,
}

impl CommandOutput for CategoryDetailOutput {
    fn to_human(&self) -> String {
        let c = &self.category;
        let mut lines = vec![
            format!("Name:        {}", c.name),
            format!("Slug:        {}", c.slug),
            format!("ID:          {}", c.id),
        ];
        match c.parent_category_id.as_deref() {
            Some(parents) if !parents.is_empty() => {
                lines.push(format!("Parents:     {}", parents.join(", ")));
            }
            _ => lines.push("Parents:     (top level)".to_string()),
        }
        if let Some(ref description) = c.description {
            lines.push(format!("Description: {description}"));
        }
        if let Some(ref icon) = c.icon {
            lines.push(format!("Icon:        {icon}"));
        }
        if let Some(ref image) = c.image {
            lines.push(format!("Image:       {image}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.category).unwrap_or_default()
    }
}

/// Print the id a slug resolves to.
pub async fn execute(cache: &CategoryIndexCache, slug: &str, json_mode: bool) -> Result<()> {
    let id = cache
        .lookup_id_by_slug(slug)
        .await
        .ok_or_else(|| DomainError::CategoryNotFound(slug.to_string()))?;

    output(
        &ResolveOutput {
            slug: normalize_slug(slug),
            id,
        },
        json_mode,
    );
    Ok(())
}

/// Print the full record a slug resolves to.
pub async fn execute_show(cache: &CategoryIndexCache, slug: &str, json_mode: bool) -> Result<()> {
    let category = cache
        .lookup_category_by_slug(slug)
        .await
        .ok_or_else(|| DomainError::CategoryNotFound(slug.to_string()))?;

    output(
        &CategoryDetailOutput {
            category: (*category).clone(),
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_human_output() {
        let output = CategoryDetailOutput {
            category: Category {
                description: Some("Locks, alarms and PPE".to_string()),
                ..Category::new("c1", "safety-security", "Safety & Security").with_parent("c0")
            },
        };

        let text = output.to_human();
        assert!(text.contains("Safety & Security"));
        assert!(text.contains("Parents:     c0"));
        assert!(text.contains("Locks, alarms and PPE"));
        assert!(!text.contains("Icon:"));
    }
}
