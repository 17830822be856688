//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Replaying a YAML gesture script
//! - Overriding the config file and frame step
//! - Text or JSON-lines output

use clap::Parser;
use std::path::PathBuf;

/// Replay gesture scripts against the sticky panel
#[derive(Parser, Debug)]
#[command(
    name = "sticky-replay",
    version,
    about = "Replay gesture scripts against the sticky panel"
)]
pub struct CliArgs {
    /// Replay script (YAML)
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Config file to use instead of the user config
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print one JSON object per frame
    #[arg(long)]
    pub json: bool,

    /// Frame step in milliseconds (overrides the script)
    #[arg(long, value_name = "MS")]
    pub frame_ms: Option<u64>,

    /// Only print input events, settles and removals
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// How frames are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    JsonLines,
}

/// Options derived from CLI arguments
#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub script: PathBuf,
    pub config_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub frame_ms: Option<u64>,
    pub quiet: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into replay options
    pub fn into_options(self) -> Result<ReplayOptions, String> {
        if self.frame_ms == Some(0) {
            return Err("--frame-ms must be at least 1".to_string());
        }

        let format = if self.json {
            OutputFormat::JsonLines
        } else {
            OutputFormat::Text
        };

        Ok(ReplayOptions {
            script: self.script,
            config_path: self.config,
            format,
            frame_ms: self.frame_ms,
            quiet: self.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(script: &str) -> CliArgs {
        CliArgs {
            script: PathBuf::from(script),
            config: None,
            json: false,
            frame_ms: None,
            quiet: false,
        }
    }

    #[test]
    fn test_defaults_to_text() {
        let options = args("tap.yaml").into_options().unwrap();
        assert_eq!(options.format, OutputFormat::Text);
        assert_eq!(options.script, PathBuf::from("tap.yaml"));
        assert!(options.config_path.is_none());
    }

    #[test]
    fn test_json_flag() {
        let options = CliArgs {
            json: true,
            ..args("tap.yaml")
        }
        .into_options()
        .unwrap();
        assert_eq!(options.format, OutputFormat::JsonLines);
    }

    #[test]
    fn test_zero_frame_step_rejected() {
        let result = CliArgs {
            frame_ms: Some(0),
            ..args("tap.yaml")
        }
        .into_options();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_from_argv() {
        let args = CliArgs::try_parse_from([
            "sticky-replay",
            "drag.yaml",
            "--config",
            "panel.yaml",
            "--frame-ms",
            "8",
            "-q",
        ])
        .unwrap();
        let options = args.into_options().unwrap();
        assert_eq!(options.config_path, Some(PathBuf::from("panel.yaml")));
        assert_eq!(options.frame_ms, Some(8));
        assert!(options.quiet);
    }
}
