//! Index status command.

use anyhow::Result;

use crate::cli::output::{output, CommandOutput};
use crate::services::{CategoryIndexCache, PreloadStatus};

impl CommandOutput for PreloadStatus {
    fn to_human(&self) -> String {
        let loaded_at = self
            .loaded_at
            .map_or_else(|| "never".to_string(), |t| t.to_rfc3339());
        format!(
            "Preloaded:            {}\nCategories:           {}\nConsecutive failures: {}\nLoaded at:            {}",
            if self.preloaded { "yes" } else { "no" },
            self.categories,
            self.consecutive_failures,
            loaded_at,
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the preload status of the index.
pub async fn execute(cache: &CategoryIndexCache, json_mode: bool) -> Result<()> {
    output(&cache.status().await, json_mode);
    Ok(())
}
