//! Theme validation: file schema, color formats, WCAG contrast and palette
//! coverage.
//!
//! Every check returns a [`Report`]; reports are combined with
//! [`Report::merge`] so no validator state outlives a call.

use std::{
    collections::BTreeSet,
    fmt::Write as _,
    fs,
    path::Path,
};

use serde_json::Value;

use crate::color::{hex_contrast_ratio, is_valid_hex_color};
use crate::theme::{Theme, NAME};

pub const THEME_FILES: &[&str] = &[
    "Editor.json",
    "PixelFactory.json",
    "PixelFactory-Studio.json",
    "PixelFactory-Light.json",
    "PixelFactory-HighContrast.json",
];

pub struct PaletteEntry {
    pub name: &'static str,
    pub hex: &'static str,
    pub usage: &'static str,
}

const fn entry(name: &'static str, hex: &'static str, usage: &'static str) -> PaletteEntry {
    PaletteEntry { name, hex, usage }
}

pub const PALETTE: &[PaletteEntry] = &[
    entry("bg1", "#121212", "primary background"),
    entry("bg2", "#1e1e1e", "secondary background"),
    entry("bg3", "#2a2a2a", "tertiary background"),
    entry("bg4", "#3a3a3a", "quaternary background"),
    entry("comment", "#5f5f5f", "comments"),
    entry("operator", "#FF8F2E", "operators & active elements"),
    entry("punctuation", "#7f7b66", "punctuation & borders"),
    entry("string", "#8A9E78", "strings & success"),
    entry("number", "#CF7F8F", "numbers & magenta"),
    entry("entity", "#798283", "entities & blue"),
    entry("keyword", "#ea603e", "keywords"),
    entry("storage", "#FFC62F", "storage & yellow"),
    entry("pointer", "#EBA96C", "pointers & orange"),
    entry("library", "#FF8F2E", "library functions"),
    entry("invalid", "#C71B00", "invalid/error states"),
];

pub struct ContrastPair {
    pub foreground: &'static str,
    pub background: &'static str,
    /// Nominal WCAG target, used for the pass/fail mark.
    pub min_ratio: f64,
    /// Below this a warning is raised.
    pub floor: f64,
}

const fn pair(foreground: &'static str, background: &'static str, min_ratio: f64) -> ContrastPair {
    ContrastPair {
        foreground,
        background,
        min_ratio,
        floor: min_ratio,
    }
}

pub const CONTRAST_PAIRS: &[ContrastPair] = &[
    pair("#798283", "#121212", 4.5),
    pair("#8A9E78", "#121212", 4.5),
    pair("#ea603e", "#121212", 4.5),
    pair("#FFC62F", "#1e1e1e", 4.5),
    pair("#FF8F2E", "#121212", 4.5),
    // Comments are deliberately de-emphasized.
    ContrastPair {
        foreground: "#5f5f5f",
        background: "#121212",
        min_ratio: 3.0,
        floor: 2.5,
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub files_checked: usize,
    pub colors_validated: usize,
    pub contrast_checked: usize,
    pub issues_found: usize,
}

impl Stats {
    fn merge(&mut self, other: Stats) {
        self.files_checked += other.files_checked;
        self.colors_validated += other.colors_validated;
        self.contrast_checked += other.contrast_checked;
        self.issues_found += other.issues_found;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: Stats,
    /// Upper-cased color values referenced by the checked themes.
    pub used_colors: BTreeSet<String>,
}

impl Report {
    pub fn merge(mut self, other: Report) -> Report {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.stats.merge(other.stats);
        self.used_colors.extend(other.used_colors);
        self
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.errors.is_empty() {
            0
        } else {
            1
        }
    }

    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Files checked:       {}", self.stats.files_checked);
        let _ = writeln!(out, "Colors validated:    {}", self.stats.colors_validated);
        let _ = writeln!(out, "Contrast pairs:      {}", self.stats.contrast_checked);

        if self.is_clean() {
            let _ = writeln!(out, "\nAll validations passed!");
            return out;
        }
        if !self.errors.is_empty() {
            let _ = writeln!(out, "\nErrors ({}):", self.errors.len());
            for err in &self.errors {
                let _ = writeln!(out, "   • {}", err);
            }
        }
        if !self.warnings.is_empty() {
            let _ = writeln!(out, "\nWarnings ({}):", self.warnings.len());
            for warn in &self.warnings {
                let _ = writeln!(out, "   • {}", warn);
            }
        }
        out
    }

    fn check_color(&mut self, value: &str, error: impl FnOnce() -> String) {
        self.stats.colors_validated += 1;
        if !is_valid_hex_color(value) {
            self.errors.push(error());
            self.stats.issues_found += 1;
        }
        self.used_colors.insert(value.to_uppercase());
    }
}

/// `null`, `false`, `0` and `""` count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn color_text(value: &Value) -> String {
    value.as_str().map_or_else(|| value.to_string(), str::to_owned)
}

/// Check one parsed theme. `file_name` only labels the messages.
pub fn validate_theme(file_name: &str, theme: &Theme) -> Report {
    let mut report = Report::default();
    report.stats.files_checked = 1;

    if !theme.schema().is_some_and(|s| s.contains("color-theme")) {
        report
            .warnings
            .push(format!("{}: Missing or invalid $schema", file_name));
    }
    if !theme.get(NAME).is_some_and(is_truthy) {
        report
            .errors
            .push(format!("{}: Missing theme name", file_name));
    }

    if let Some(colors) = theme.colors() {
        for (key, value) in colors {
            let text = color_text(value);
            report.check_color(&text, || {
                format!("{}: Invalid color \"{}\" for key \"{}\"", file_name, text, key)
            });
        }
    }

    for (idx, token) in theme.token_colors().iter().enumerate() {
        for label in ["foreground", "background"] {
            let value = token
                .get("settings")
                .and_then(|settings| settings.get(label))
                .filter(|v| is_truthy(v));
            if let Some(value) = value {
                let text = color_text(value);
                report.check_color(&text, || {
                    format!(
                        "{} tokenColors[{}]: Invalid {} color \"{}\"",
                        file_name, idx, label, text
                    )
                });
            }
        }
    }

    report
}

/// Read, parse and check a theme file.
pub fn validate_theme_file(path: &Path) -> Report {
    let file_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| Theme::from_json(&text).map_err(|e| e.to_string()));

    match parsed {
        Ok(theme) => validate_theme(&file_name, &theme),
        Err(msg) => Report {
            errors: vec![format!("{}: {}", file_name, msg)],
            ..Report::default()
        },
    }
}

pub fn validate_contrast(pairs: &[ContrastPair]) -> Report {
    let mut report = Report::default();
    for pair in pairs {
        let ratio = hex_contrast_ratio(pair.foreground, pair.background);
        report.stats.contrast_checked += 1;

        if ratio < pair.floor {
            report.warnings.push(format!(
                "Contrast: {} on {} = {:.2}:1 (expected ≥{}:1)",
                pair.foreground, pair.background, ratio, pair.floor
            ));
        } else {
            let status = if ratio >= pair.min_ratio { '✓' } else { '✗' };
            log::info!(
                "  {} {} on {} = {:.2}:1",
                status,
                pair.foreground,
                pair.background,
                ratio
            );
        }
    }
    report
}

pub fn validate_orphans(palette: &[PaletteEntry], used: &BTreeSet<String>) -> Report {
    let warnings: Vec<String> = palette
        .iter()
        .filter(|entry| !used.contains(&entry.hex.to_uppercase()))
        .map(|entry| {
            format!(
                "Orphaned color: {} ({}) - \"{}\"",
                entry.name, entry.hex, entry.usage
            )
        })
        .collect();
    if warnings.is_empty() {
        log::info!("  ✓ All palette colors are in use");
    }
    Report {
        warnings,
        ..Report::default()
    }
}

/// Run every check over the required files in `theme_dir`.
pub fn validate_themes(theme_dir: &Path) -> Report {
    let mut report = Report::default();

    for file in THEME_FILES {
        let path = theme_dir.join(file);
        if !path.exists() {
            report.errors.push(format!("Missing required file: {}", file));
            continue;
        }
        log::info!("Validating {}...", file);
        report = report.merge(validate_theme_file(&path));
    }

    log::info!("Checking WCAG contrast ratios (AA: 4.5:1 for text)...");
    report = report.merge(validate_contrast(CONTRAST_PAIRS));

    log::info!("Checking for unused palette colors...");
    let orphans = validate_orphans(PALETTE, &report.used_colors);
    report.merge(orphans)
}
