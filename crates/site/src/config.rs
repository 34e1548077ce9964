//! Mount configuration.

use serde::{Deserialize, Serialize};
use site_content::MountLabels;

/// Default location of the theme document.
pub const THEME_DOCUMENT_PATH: &str = "/assets/content/theme.json";
/// Default location of the site document.
pub const SITE_DOCUMENT_PATH: &str = "/assets/content/site.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Where the content documents live and the fixed copy used when they lack a value.
pub struct MountConfig {
    /// Same-origin path of `theme.json`.
    pub theme_path: String,
    /// Same-origin path of `site.json`.
    pub site_path: String,
    /// Fixed page copy.
    #[serde(flatten)]
    pub labels: MountLabels,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            theme_path: THEME_DOCUMENT_PATH.to_string(),
            site_path: SITE_DOCUMENT_PATH.to_string(),
            labels: MountLabels::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn default_points_at_bundled_content() {
        let config = MountConfig::default();
        assert_eq!(config.theme_path, "/assets/content/theme.json");
        assert_eq!(config.site_path, "/assets/content/site.json");
        assert_eq!(config.labels.fallback_title, "Ortsgemeinschaft");
        assert_eq!(config.labels.tile_link_label, "Öffnen");
    }

    #[test]
    fn partial_overrides_keep_remaining_defaults() {
        let config: MountConfig = serde_json::from_value(json!({
            "site_path": "/content/site.json",
            "fallback_title": "Heimatverein",
            "tile_link_label": "Mehr"
        }))
        .expect("config");

        assert_eq!(config.theme_path, "/assets/content/theme.json");
        assert_eq!(config.site_path, "/content/site.json");
        assert_eq!(config.labels.fallback_title, "Heimatverein");
        assert_eq!(config.labels.tile_link_label, "Mehr");
    }
}
