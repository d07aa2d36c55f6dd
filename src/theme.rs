//! Editor color-theme documents and base/variant merging.
//!
//! A [`Theme`] keeps the whole JSON object in file order and exposes the
//! keys the tooling cares about through accessors, so unexpected shapes
//! (a string `tokenColors` path, say) are carried through untouched.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub const SCHEMA: &str = "$schema";
pub const NAME: &str = "name";
pub const UI_THEME: &str = "uiTheme";
pub const COLORS: &str = "colors";
pub const TOKEN_COLORS: &str = "tokenColors";

/// A VS Code style theme file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(Map<String, Value>);

impl Theme {
    pub fn new() -> Theme {
        Theme::default()
    }

    pub fn from_json(text: &str) -> serde_json::Result<Theme> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Theme> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Theme::from_json(&text).map_err(|e| Error::json(path, e))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_json().map_err(|e| Error::json(path, e))?;
        fs::write(path, text).map_err(|e| Error::io(path, e))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets `key`, keeping its position if it already exists.
    pub fn set(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_owned(), value);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn schema(&self) -> Option<&str> {
        self.get(SCHEMA).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(NAME).and_then(Value::as_str)
    }

    pub fn ui_theme(&self) -> Option<&str> {
        self.get(UI_THEME).and_then(Value::as_str)
    }

    /// `colors`, when it is an object.
    pub fn colors(&self) -> Option<&Map<String, Value>> {
        self.get(COLORS).and_then(Value::as_object)
    }

    /// `tokenColors` entries, empty unless it is an array.
    pub fn token_colors(&self) -> &[Value] {
        self.get(TOKEN_COLORS)
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice)
    }
}

/// Merge `overrides` onto `base`.
///
/// Every top-level key of `overrides` replaces the base value in place (new
/// keys are appended), `colors` is merged key by key with the override
/// winning, and `tokenColors` from both sides are concatenated base first.
pub fn merge_themes(base: &Theme, overrides: &Theme) -> Theme {
    let mut merged = base.clone();
    for (key, value) in &overrides.0 {
        merged.set(key, value.clone());
    }

    let mut colors = base.colors().cloned().unwrap_or_default();
    if let Some(extra) = overrides.colors() {
        for (key, value) in extra {
            colors.insert(key.clone(), value.clone());
        }
    }
    merged.set(COLORS, Value::Object(colors));

    let tokens = base
        .token_colors()
        .iter()
        .chain(overrides.token_colors())
        .cloned()
        .collect();
    merged.set(TOKEN_COLORS, Value::Array(tokens));

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn theme(value: Value) -> Theme {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accessors_and_round_trip() {
        let t = theme(json!({
            "$schema": "vscode://schemas/color-theme",
            "name": "Base",
            "type": "dark",
            "semanticHighlighting": true,
            "colors": { "editor.background": "#121212" },
            "tokenColors": [
                { "scope": ["comment"], "settings": { "foreground": "#5f5f5f", "fontStyle": "italic" } },
                { "scope": "markup" }
            ]
        }));
        assert_eq!(t.name(), Some("Base"));
        assert_eq!(t.schema(), Some("vscode://schemas/color-theme"));
        assert_eq!(t.get("type"), Some(&json!("dark")));
        assert_eq!(t.colors().unwrap()["editor.background"], json!("#121212"));
        assert_eq!(t.token_colors().len(), 2);

        let back: Value = serde_json::from_str(&t.to_json().unwrap()).unwrap();
        assert_eq!(back["semanticHighlighting"], json!(true));
        assert_eq!(back["tokenColors"][0]["scope"], json!(["comment"]));
        assert_eq!(back["tokenColors"][1], json!({ "scope": "markup" }));
    }

    #[test]
    fn unexpected_shapes_are_kept_not_rejected() {
        let t = Theme::from_json(
            r#"{ "name": "Light", "colors": "./colors.json", "tokenColors": "./tokenColors.json" }"#,
        )
        .unwrap();
        assert_eq!(t.colors(), None);
        assert!(t.token_colors().is_empty());
        assert_eq!(t.get(TOKEN_COLORS), Some(&json!("./tokenColors.json")));
    }

    #[test]
    fn merge_overrides_top_level_and_unions_colors() {
        let base = theme(json!({
            "name": "Base",
            "type": "dark",
            "colors": { "a": "#111111", "b": "#222222" },
            "tokenColors": [ { "scope": "base", "settings": {} } ]
        }));
        let overrides = theme(json!({
            "name": "Variant",
            "uiTheme": "vs-dark",
            "colors": { "b": "#333333", "c": "#444444" },
            "tokenColors": [ { "scope": "variant", "settings": {} } ]
        }));

        let merged = merge_themes(&base, &overrides);
        assert_eq!(merged.name(), Some("Variant"));
        assert_eq!(merged.ui_theme(), Some("vs-dark"));
        assert_eq!(merged.get("type"), Some(&json!("dark")));
        assert_eq!(
            Value::Object(merged.colors().unwrap().clone()),
            json!({ "a": "#111111", "b": "#333333", "c": "#444444" })
        );
        let scopes: Vec<_> = merged.token_colors().iter().map(|t| t["scope"].clone()).collect();
        assert_eq!(scopes, vec![json!("base"), json!("variant")]);
    }

    #[test]
    fn merge_keeps_base_key_order() {
        let base = theme(json!({
            "$schema": "vscode://schemas/color-theme",
            "name": "Base",
            "type": "dark",
            "colors": { "a": "#111111" },
            "semanticHighlighting": true
        }));
        let overrides = theme(json!({ "name": "Variant", "uiTheme": "vs-dark" }));

        let merged = merge_themes(&base, &overrides);
        let keys: Vec<&str> = merged.keys().collect();
        assert_eq!(
            keys,
            vec![
                "$schema",
                "name",
                "type",
                "colors",
                "semanticHighlighting",
                "uiTheme",
                "tokenColors"
            ]
        );

        let written = merged.to_json().unwrap();
        let name_at = written.find("\"name\"").unwrap();
        let type_at = written.find("\"type\"").unwrap();
        assert!(written.find("\"$schema\"").unwrap() < name_at && name_at < type_at);
    }

    #[test]
    fn merge_does_not_invent_token_settings() {
        let base = theme(json!({ "tokenColors": [ { "scope": "comment" } ] }));
        let merged = merge_themes(&base, &Theme::new());
        let back: Value = serde_json::from_str(&merged.to_json().unwrap()).unwrap();
        assert_eq!(back["tokenColors"], json!([ { "scope": "comment" } ]));
    }

    #[test]
    fn merge_with_empty_overrides_only_fills_lists() {
        let base = theme(json!({ "name": "Base", "colors": { "a": "#111111" } }));
        let merged = merge_themes(&base, &Theme::new());
        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({ "name": "Base", "colors": { "a": "#111111" }, "tokenColors": [] })
        );
    }

    #[test]
    fn non_object_colors_merge_as_empty() {
        let base = theme(json!({ "name": "Base", "colors": "nope" }));
        let overrides = theme(json!({ "colors": { "a": "#111111" } }));
        let merged = merge_themes(&base, &overrides);
        assert_eq!(
            merged.get(COLORS),
            Some(&json!({ "a": "#111111" }))
        );
    }
}
