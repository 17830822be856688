//! sticky-replay - drive the sticky panel from a gesture script

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use sticky_panel::cli::{CliArgs, OutputFormat};
use sticky_panel::config::PanelConfig;
use sticky_panel::replay::{replay, ReplayScript};

fn main() -> Result<()> {
    sticky_panel::tracing::init();

    let options = CliArgs::parse()
        .into_options()
        .map_err(anyhow::Error::msg)?;

    let config = match &options.config_path {
        Some(path) => PanelConfig::load_from(path),
        None => PanelConfig::load(),
    };

    let source = std::fs::read_to_string(&options.script)
        .with_context(|| format!("Failed to read script {}", options.script.display()))?;
    let mut script = ReplayScript::parse(&source).map_err(anyhow::Error::msg)?;
    if let Some(frame_ms) = options.frame_ms {
        script.frame_ms = frame_ms;
    }

    tracing::info!(
        script = %options.script.display(),
        events = script.events.len(),
        frame_ms = script.frame_ms,
        "starting replay"
    );
    let report = replay(&script, config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for frame in report
        .frames
        .iter()
        .filter(|frame| !options.quiet || frame.is_notable())
    {
        match options.format {
            OutputFormat::Text => writeln!(out, "{}", frame.to_text())?,
            OutputFormat::JsonLines => {
                let line = serde_json::to_string(frame).context("Failed to encode frame")?;
                writeln!(out, "{}", line)?;
            }
        }
    }

    let final_state = report
        .final_state
        .map(|s| format!("{:?}", s))
        .unwrap_or_else(|| "removed".to_string());
    tracing::info!(
        frames = report.frames.len(),
        settles = report.settled.len(),
        final_state = %final_state,
        "replay finished"
    );
    if options.format == OutputFormat::Text {
        writeln!(
            out,
            "-- {} frames, {} settles, final state {}",
            report.frames.len(),
            report.settled.len(),
            final_state
        )?;
    }

    Ok(())
}
