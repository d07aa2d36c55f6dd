mod cli;
mod logger;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Command, Config};
use theme_kit::{build, preview, validate};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.verbose, cli.quiet));
    let config = Config::from(&cli);

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> Result<ExitCode> {
    match command {
        Command::Build => build_themes(config).map(|()| ExitCode::SUCCESS),
        Command::Validate => Ok(validate_themes(config)),
        Command::Images => generate_images(config).map(|()| ExitCode::SUCCESS),
        Command::All => {
            build_themes(config)?;
            let code = validate_themes(config);
            generate_images(config)?;
            Ok(code)
        }
    }
}

fn build_themes(config: &Config) -> Result<()> {
    log::info!("Building themes in {}", config.themes_dir.display());
    let outcomes = build::build_themes(&config.themes_dir).context("theme build failed")?;
    let built = outcomes
        .iter()
        .filter(|o| matches!(o, build::BuildOutcome::Built(_)))
        .count();
    log::info!("Theme build complete ({} of {} built)", built, outcomes.len());
    Ok(())
}

fn validate_themes(config: &Config) -> ExitCode {
    log::info!("Validating themes in {}", config.themes_dir.display());
    let report = validate::validate_themes(&config.themes_dir);
    println!("{}", report.summary());
    ExitCode::from(report.exit_code() as u8)
}

fn generate_images(config: &Config) -> Result<()> {
    log::info!("Generating preview images...");
    let written = preview::generate_previews(&config.images_dir).with_context(|| {
        format!(
            "failed to generate images in {}",
            config.images_dir.display()
        )
    })?;
    log::info!(
        "{} preview images written to {}",
        written.len(),
        config.images_dir.display()
    );
    Ok(())
}
