//! Mockup CLI
//!
//! Browse the device and background catalogs and render mockups to disk.

mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mockup_core::{BackgroundCategory, CategoryFilter, DeviceCategory};
use tracing_subscriber::EnvFilter;

use commands::RenderArgs;

#[derive(Parser, Debug)]
#[command(name = "mockup", version, about = "Render screenshots inside device mockups")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List the device catalog
    Devices {
        /// all, phone, tablet, laptop, desktop, watch or console
        #[arg(long, default_value = "all")]
        category: CategoryFilter<DeviceCategory>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the background catalog
    Backgrounds {
        /// all, gradient, studio, abstract or texture
        #[arg(long, default_value = "all")]
        category: CategoryFilter<BackgroundCategory>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compose a mockup and write it to the output directory
    Render(RenderArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Cmd::Devices { category, json } => commands::devices(category, json)?,
        Cmd::Backgrounds { category, json } => commands::backgrounds(category, json)?,
        Cmd::Render(args) => return commands::render(&args),
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn devices_category_parses() {
        let cli =
            Cli::try_parse_from(["mockup", "devices", "--category", "Watch", "--json"]).unwrap();
        match cli.command {
            Cmd::Devices { category, json } => {
                assert_eq!(category, CategoryFilter::Only(DeviceCategory::Watch));
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn category_defaults_to_all() {
        let cli = Cli::try_parse_from(["mockup", "backgrounds"]).unwrap();
        match cli.command {
            Cmd::Backgrounds { category, json } => {
                assert_eq!(category, CategoryFilter::All);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["mockup", "devices", "--category", "toaster"]).is_err());
    }

    #[test]
    fn render_flags_parse() {
        let cli = Cli::try_parse_from([
            "mockup",
            "render",
            "--device",
            "pixel-8",
            "--image",
            "shot.png",
            "--rotation",
            "-30",
            "--zoom",
            "150",
            "--no-shadow",
            "--quality",
            "0.8",
            "--out",
            "shots",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Cmd::Render(args) => assert_eq!(
                args,
                RenderArgs {
                    device: Some("pixel-8".to_string()),
                    background: None,
                    image: Some("shot.png".to_string()),
                    rotation: Some(-30.0),
                    zoom: Some(150.0),
                    no_shadow: true,
                    quality: Some(0.8),
                    out: Some(PathBuf::from("shots")),
                    config: None,
                }
            ),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
