//! Dumps the layout groups of a Markdown file.
//!
//! ```text
//! markdown-elements-cli notes.md
//! markdown-elements-cli notes.md --format json --config ./config.toml
//! ```

mod render;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use markdown_elements_config::Config;
use markdown_elements_engine::{MarkdownParser, SpacingScale, compose};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per element, groups separated by their gap.
    Text,
    /// Pretty-printed array of `{ spacing, elements }`.
    Json,
}

/// Parse a Markdown file and print its layout groups.
#[derive(Debug, Parser)]
#[command(name = "markdown-elements-cli", version, about)]
struct Args {
    /// Markdown file to parse.
    file: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Config file to use instead of ~/.config/markdown-elements/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also list the image URL of every emoji in text runs.
    #[arg(long)]
    emoji_urls: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn scale_from(config: &Config) -> SpacingScale {
    SpacingScale {
        small: config.spacing.small,
        large: config.spacing.large,
        default: config.spacing.default,
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    let markdown = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let mut parser = MarkdownParser::new();
    let elements = parser
        .try_parse(&markdown)
        .with_context(|| format!("Failed to parse {}", args.file.display()))?
        .to_vec();
    let groups = compose(&elements);
    log::info!(
        "{}: {} elements in {} groups",
        args.file.display(),
        elements.len(),
        groups.len()
    );

    match args.format {
        Format::Text => print!(
            "{}",
            render::render_text(&mut parser, &groups, &scale_from(&config))
        ),
        Format::Json => println!("{}", render::render_json(&groups)?),
    }

    if args.emoji_urls {
        for url in render::emoji_urls(&elements, &config.emoji_base_url) {
            println!("emoji {url}");
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_to_text() {
        let args = Args::try_parse_from(["markdown-elements-cli", "a.md"]).unwrap();
        assert_eq!(args.format, Format::Text);
        assert_eq!(args.config, None);
        assert!(!args.emoji_urls && !args.verbose);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "markdown-elements-cli",
            "a.md",
            "--format",
            "json",
            "--config",
            "c.toml",
            "--emoji-urls",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.config, Some(PathBuf::from("c.toml")));
        assert!(args.emoji_urls && args.verbose);
    }

    #[test]
    fn scale_follows_config() {
        let mut config = Config::default();
        config.spacing.large = 2.0;
        let scale = scale_from(&config);
        assert_eq!(scale.large, 2.0);
        assert_eq!(scale.small, 0.5);
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = Args::try_parse_from([
            "markdown-elements-cli",
            "/definitely/not/here.md",
            "--config",
            "/definitely/not/here.toml",
        ])
        .unwrap();
        let err = run(args).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read"));
    }
}
