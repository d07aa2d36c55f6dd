use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "theme-kit", version, about)]
pub struct Cli {
    /// Directory holding Editor.json, tokenColors.json and the built variants.
    #[arg(long, global = true, env = "THEME_KIT_THEMES_DIR", default_value = "themes")]
    pub themes_dir: PathBuf,

    /// Where preview images are written.
    #[arg(long, global = true, env = "THEME_KIT_IMAGES_DIR", default_value = "images")]
    pub images_dir: PathBuf,

    /// More log output; repeat for trace.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Merge the base theme with each variant's overrides.
    Build,
    /// Check theme files, contrast and palette usage.
    Validate,
    /// Render the marketplace preview images.
    Images,
    /// Build, validate, then render images.
    All,
}

/// Settings resolved once from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub themes_dir: PathBuf,
    pub images_dir: PathBuf,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            themes_dir: cli.themes_dir.clone(),
            images_dir: cli.images_dir.clone(),
        }
    }
}
