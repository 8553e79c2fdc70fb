//! Marketplace category record.
//!
//! The backend is the source of truth for categories; the storefront only
//! keeps read-only copies for resolving URL slugs during page rendering.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A product category as returned by the backend category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque backend identifier.
    #[serde(alias = "_id", default, deserialize_with = "lenient_string")]
    pub id: String,
    /// URL-safe key, compared case-insensitively.
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: String,
    /// Human-readable name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Parent category ids. `None` for top-level categories.
    #[serde(default)]
    pub parent_category_id: Option<Vec<String>>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon name or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Category {
    /// Create a top-level category with the given identity.
    pub fn new(id: impl Into<String>, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            parent_category_id: None,
            description: None,
            icon: None,
            image: None,
        }
    }

    /// Attach a parent category id.
    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_category_id
            .get_or_insert_with(Vec::new)
            .push(parent_id.into());
        self
    }

    /// The slug in index-key form.
    pub fn normalized_slug(&self) -> String {
        normalize_slug(&self.slug)
    }

    /// Whether the record carries both a usable slug and id.
    pub fn is_indexable(&self) -> bool {
        !self.id.trim().is_empty() && !self.normalized_slug().is_empty()
    }

    /// Whether the record has no parent.
    pub fn is_top_level(&self) -> bool {
        self.parent_category_id
            .as_ref()
            .is_none_or(|parents| parents.is_empty())
    }

    /// Whether `parent_id` is one of this record's parents.
    pub fn has_parent(&self, parent_id: &str) -> bool {
        self.parent_category_id
            .as_ref()
            .is_some_and(|parents| parents.iter().any(|p| p == parent_id))
    }
}

/// Decode a string field, mapping `null` and non-string values to empty.
///
/// Records with an empty id or slug are skipped at index time, so one bad
/// record never fails the whole listing.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Text(text) => text,
        Lenient::Other(_) => String::new(),
    })
}

/// Normalize a slug for index keys and lookups: trimmed and lowercased.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}
