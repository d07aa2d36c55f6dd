//! Produces the shipped theme variants from `Editor.json` plus the shared
//! syntax rules in `tokenColors.json`.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::Result;
use crate::theme::{merge_themes, Theme, COLORS, NAME, TOKEN_COLORS, UI_THEME};

pub const BASE_THEME: &str = "Editor.json";
pub const SYNTAX_FILE: &str = "tokenColors.json";

/// A theme produced from the base theme plus overrides.
#[derive(Clone, Debug)]
pub struct Variant {
    pub file_name: &'static str,
    pub name: &'static str,
    pub ui_theme: &'static str,
    pub colors: &'static [(&'static str, &'static str)],
}

pub const VARIANTS: &[Variant] = &[
    Variant {
        file_name: "PixelFactory.json",
        name: "PixelFactory Dark",
        ui_theme: "vs-dark",
        colors: &[],
    },
    Variant {
        file_name: "PixelFactory-Studio.json",
        name: "PixelFactory Studio",
        ui_theme: "vs-dark",
        colors: &[("editor.selectionBackground", "#3a3a3a")],
    },
];

impl Variant {
    fn overrides(&self, syntax: &Theme) -> Theme {
        let colors: Map<String, Value> = self
            .colors
            .iter()
            .map(|(k, v)| ((*k).to_owned(), Value::String((*v).to_owned())))
            .collect();
        let mut theme = Theme::new();
        theme.set(NAME, Value::from(self.name));
        theme.set(UI_THEME, Value::from(self.ui_theme));
        if !colors.is_empty() {
            theme.set(COLORS, Value::Object(colors));
        }
        theme.set(TOKEN_COLORS, Value::Array(syntax.token_colors().to_vec()));
        theme
    }

    pub fn build(&self, base: &Theme, syntax: &Theme) -> Theme {
        merge_themes(base, &self.overrides(syntax))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    Built(PathBuf),
    Skipped { variant: String, reason: String },
}

pub fn build_themes(theme_dir: &Path) -> Result<Vec<BuildOutcome>> {
    let syntax_path = theme_dir.join(SYNTAX_FILE);
    let mut outcomes = Vec::with_capacity(VARIANTS.len());

    for variant in VARIANTS {
        let base = Theme::load(&theme_dir.join(BASE_THEME))?;

        if !syntax_path.exists() {
            log::warn!("{} not found - skipping {}", SYNTAX_FILE, variant.file_name);
            outcomes.push(BuildOutcome::Skipped {
                variant: variant.file_name.to_owned(),
                reason: format!("{} not found", SYNTAX_FILE),
            });
            continue;
        }
        let syntax = Theme::load(&syntax_path)?;

        let out = theme_dir.join(variant.file_name);
        variant.build(&base, &syntax).save(&out)?;
        log::info!("built {}", variant.file_name);
        outcomes.push(BuildOutcome::Built(out));
    }

    Ok(outcomes)
}
