use anyhow::{Context, Result};
use cactusify::assets::default_data_dir;
use cactusify::config::CactusConfig;
use cactusify::{Cactusifier, DiffSink, HelperAssets, InPlaceSink, OutputTarget};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Try to modify the templates of a Nikola theme to use Cactus Comments https://cactus.chat/
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Template file to change
    #[arg(required = true)]
    template: Vec<PathBuf>,

    /// Edit the files in place. WARNING: this will overwrite your template
    /// files, please make sure to commit or back them up before.
    #[arg(short, long)]
    in_place: bool,

    /// Patch output file (if not specified the diff is written to stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the helper templates (overrides config if provided)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            CactusConfig::load(path).context("Failed to load config")?
        }
        None => CactusConfig::default(),
    };

    let data_dir = cli
        .data_dir
        .or(config.data_dir)
        .unwrap_or_else(default_data_dir);
    info!("Using helper templates from {:?}", data_dir);

    let mut cactusifier = Cactusifier::new(HelperAssets::new(data_dir));

    if cli.in_place {
        cactusifier
            .run(&cli.template, &mut InPlaceSink)
            .context("Failed to rewrite templates")?;
    } else {
        let mut sink = DiffSink::new(config.context_lines);
        cactusifier
            .run(&cli.template, &mut sink)
            .context("Failed to build patch")?;
        sink.write_to(&OutputTarget::parse(&cli.output))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["cactusify", "post.tmpl", "index.tmpl"]).unwrap();
        assert_eq!(cli.template.len(), 2);
        assert!(!cli.in_place);
        assert_eq!(cli.output, "-");
    }

    #[test]
    fn test_cli_requires_template() {
        assert!(Cli::try_parse_from(["cactusify", "-i"]).is_err());
    }
}
