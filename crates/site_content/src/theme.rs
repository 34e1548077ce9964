//! Theme document schema and its projection onto CSS custom properties.

use serde::{Deserialize, Serialize};

use crate::{lenient, surface::SiteSurface};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
/// Visual styling document served as `theme.json`.
pub struct ThemeDocument {
    /// Named color roles.
    #[serde(deserialize_with = "lenient::section")]
    pub colors: ThemeColors,
    /// Content sizing.
    #[serde(deserialize_with = "lenient::section")]
    pub layout: ThemeLayout,
    /// Decorative background dot pattern.
    #[serde(deserialize_with = "lenient::section")]
    pub pattern: ThemePattern,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
/// Color roles, each a CSS color string.
pub struct ThemeColors {
    /// Page background.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    /// Body text.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub ink: Option<String>,
    /// Secondary text.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub muted: Option<String>,
    /// Border lines.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    /// Links and primary buttons.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Highlights and the active navigation entry.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Tile card fill.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub card_bg: Option<String>,
    /// Tile card outline.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub card_border: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
/// Layout sizing in CSS pixels.
pub struct ThemeLayout {
    /// Maximum content column width.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub content_width: Option<f64>,
    /// Corner radius shared by cards and buttons.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
/// Background pattern settings.
pub struct ThemePattern {
    /// Only an explicit `false` disables the pattern.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Pattern opacity in `0..=1`.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// CSS image or color used for each dot.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub dot: Option<String>,
    /// Dot grid spacing in CSS pixels.
    #[serde(deserialize_with = "lenient::option", skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// CSS custom property names written by [`apply_theme`].
pub mod vars {
    #![allow(missing_docs)]

    pub const BG: &str = "--bg";
    pub const INK: &str = "--ink";
    pub const MUTED: &str = "--muted";
    pub const LINE: &str = "--line";
    pub const PRIMARY: &str = "--primary";
    pub const ACCENT: &str = "--accent";
    pub const CARD_BG: &str = "--card-bg";
    pub const CARD_BORDER: &str = "--card-border";
    pub const MAX_WIDTH: &str = "--max";
    pub const RADIUS: &str = "--radius";
    pub const PATTERN_OPACITY: &str = "--patternOpacity";
    pub const PATTERN_DOT: &str = "--patternDot";
    pub const PATTERN_SIZE: &str = "--patternSize";
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single custom property assignment on the document root.
pub struct CssVariable {
    /// Property name including the leading `--`.
    pub name: &'static str,
    /// Property value as written to the style declaration.
    pub value: String,
}

impl CssVariable {
    fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Formats a JSON number the way the stylesheet expects it (`960`, `0.08`).
fn css_number(value: f64) -> String {
    format!("{value}")
}

fn css_px(value: f64) -> String {
    format!("{}px", css_number(value))
}

/// Projects a theme document onto the CSS custom properties it defines.
///
/// Only present, correctly-typed, non-empty fields produce a variable. An explicit
/// `pattern.enabled: false` forces `--patternOpacity` to `0` and suppresses the other pattern
/// variables.
pub fn theme_css_variables(theme: &ThemeDocument) -> Vec<CssVariable> {
    let colors = &theme.colors;
    let color_roles = [
        (vars::BG, &colors.bg),
        (vars::INK, &colors.ink),
        (vars::MUTED, &colors.muted),
        (vars::LINE, &colors.line),
        (vars::PRIMARY, &colors.primary),
        (vars::ACCENT, &colors.accent),
        (vars::CARD_BG, &colors.card_bg),
        (vars::CARD_BORDER, &colors.card_border),
    ];

    let mut out: Vec<CssVariable> = color_roles
        .into_iter()
        .filter_map(|(name, value)| {
            lenient::non_empty(value).map(|value| CssVariable::new(name, value))
        })
        .collect();

    if let Some(width) = theme.layout.content_width {
        out.push(CssVariable::new(vars::MAX_WIDTH, css_px(width)));
    }
    if let Some(radius) = theme.layout.radius {
        out.push(CssVariable::new(vars::RADIUS, css_px(radius)));
    }

    let pattern = &theme.pattern;
    if pattern.enabled == Some(false) {
        out.push(CssVariable::new(vars::PATTERN_OPACITY, "0"));
        return out;
    }
    if let Some(opacity) = pattern.opacity {
        out.push(CssVariable::new(vars::PATTERN_OPACITY, css_number(opacity)));
    }
    if let Some(dot) = lenient::non_empty(&pattern.dot) {
        out.push(CssVariable::new(vars::PATTERN_DOT, dot));
    }
    if let Some(size) = pattern.size {
        out.push(CssVariable::new(vars::PATTERN_SIZE, css_px(size)));
    }
    out
}

/// Writes the theme's CSS variables to `surface` and returns how many were set.
pub fn apply_theme<S: SiteSurface + ?Sized>(surface: &S, theme: &ThemeDocument) -> usize {
    let variables = theme_css_variables(theme);
    for variable in &variables {
        surface.set_css_variable(variable.name, &variable.value);
    }
    variables.len()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::surface::MemorySurface;

    fn theme(value: serde_json::Value) -> ThemeDocument {
        serde_json::from_value(value).expect("theme document")
    }

    fn pairs(theme: &ThemeDocument) -> Vec<(&'static str, String)> {
        theme_css_variables(theme)
            .into_iter()
            .map(|var| (var.name, var.value))
            .collect()
    }

    #[test]
    fn full_theme_maps_every_field_once_with_units() {
        let doc = theme(json!({
            "colors": {
                "bg": "#f7f3ea",
                "ink": "#1d1d1b",
                "muted": "#6b6b66",
                "line": "#e2dccf",
                "primary": "#2f6f4e",
                "accent": "#c8553d",
                "card_bg": "#ffffff",
                "card_border": "#e8e2d6"
            },
            "layout": { "content_width": 1080, "radius": 14 },
            "pattern": { "enabled": true, "opacity": 0.08, "dot": "#000", "size": 18 }
        }));

        assert_eq!(
            pairs(&doc),
            vec![
                ("--bg", "#f7f3ea".to_string()),
                ("--ink", "#1d1d1b".to_string()),
                ("--muted", "#6b6b66".to_string()),
                ("--line", "#e2dccf".to_string()),
                ("--primary", "#2f6f4e".to_string()),
                ("--accent", "#c8553d".to_string()),
                ("--card-bg", "#ffffff".to_string()),
                ("--card-border", "#e8e2d6".to_string()),
                ("--max", "1080px".to_string()),
                ("--radius", "14px".to_string()),
                ("--patternOpacity", "0.08".to_string()),
                ("--patternDot", "#000".to_string()),
                ("--patternSize", "18px".to_string()),
            ]
        );
    }

    #[test]
    fn empty_theme_sets_nothing() {
        assert!(theme_css_variables(&ThemeDocument::default()).is_empty());
        assert!(theme_css_variables(&theme(json!({}))).is_empty());
    }

    #[test]
    fn disabled_pattern_forces_zero_opacity_and_skips_other_pattern_fields() {
        let doc = theme(json!({
            "pattern": { "enabled": false, "opacity": 0.6, "dot": "red", "size": 10 }
        }));
        assert_eq!(pairs(&doc), vec![("--patternOpacity", "0".to_string())]);
    }

    #[test]
    fn missing_enabled_flag_keeps_pattern_on() {
        let doc = theme(json!({ "pattern": { "opacity": 0 } }));
        assert_eq!(pairs(&doc), vec![("--patternOpacity", "0".to_string())]);

        let doc = theme(json!({ "pattern": { "enabled": "no", "size": 12.5 } }));
        assert_eq!(pairs(&doc), vec![("--patternSize", "12.5px".to_string())]);
    }

    #[test]
    fn wrongly_typed_and_empty_fields_are_skipped() {
        let doc = theme(json!({
            "colors": { "bg": 12, "ink": "", "muted": null, "primary": "teal" },
            "layout": { "content_width": "960px", "radius": 8 },
            "pattern": "dots"
        }));
        assert_eq!(
            pairs(&doc),
            vec![
                ("--primary", "teal".to_string()),
                ("--radius", "8px".to_string())
            ]
        );
    }

    #[test]
    fn apply_theme_writes_to_surface_and_counts() {
        let surface = MemorySurface::new("/");
        let doc = theme(json!({
            "colors": { "accent": "orange" },
            "layout": { "content_width": 960 }
        }));

        assert_eq!(apply_theme(&surface, &doc), 2);
        assert_eq!(surface.css_variable("--accent").as_deref(), Some("orange"));
        assert_eq!(surface.css_variable("--max").as_deref(), Some("960px"));
        assert_eq!(surface.css_variable("--radius"), None);
    }
}
