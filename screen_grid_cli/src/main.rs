// Screen grid layout generator — CLI entry point.
//
// Prints generated layouts, whole layout sequences, or a seed survey.
// Output goes to stdout (JSON or an ASCII preview); logs go to stderr and
// are filtered with `RUST_LOG` (default `warn`).
//
// Usage:
//   screen-grid layout   [--seed N] [--bias any|middle|right|away] [--format json|ascii] [--config PATH]
//   screen-grid sequence [--seed N] [--length N] [--format json|ascii] [--config PATH]
//   screen-grid survey   [--from N] [--count N] [--config PATH]
//
// Without `--seed` the current time in milliseconds (truncated to 32 bits)
// is used, and echoed to stderr so the run can be reproduced.

mod args;

use anyhow::{Result, anyhow, bail};
use args::{Format, LayoutVariant, check_flags, parse_flag};
use screen_grid_layout::ascii::render;
use screen_grid_layout::bias::{
    generate_layout_with_bias_config, generate_layout_with_input_away_from_edges_config,
};
use screen_grid_layout::survey::survey;
use screen_grid_layout::{LayoutConfig, ScreenLayout, SequenceBuilder};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage:
  screen-grid layout   [--seed N] [--bias any|middle|right|away] [--format json|ascii] [--config PATH]
  screen-grid sequence [--seed N] [--length N] [--format json|ascii] [--config PATH]
  screen-grid survey   [--from N] [--count N] [--config PATH]";

/// Seeds surveyed when `--count` is absent.
const DEFAULT_SURVEY_COUNT: u32 = 10_000;

fn main() -> Result<()> {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some(command) = args.first().filter(|a| !a.starts_with("--")) else {
        if args.iter().any(|a| a == "--help" || a == "-h") {
            println!("{USAGE}");
            return Ok(());
        }
        bail!("missing command\n{USAGE}");
    };
    let flags = &args[1..];
    let config = load_config(flags)?;

    match command.as_str() {
        "layout" => {
            check_flags(flags, &["--seed", "--bias", "--format", "--config"])?;
            let seed = seed_or_now(flags)?;
            let variant: LayoutVariant = parse_flag(flags, "--bias")?.unwrap_or_default();
            let format: Format = parse_flag(flags, "--format")?.unwrap_or_default();
            let layout = match variant {
                LayoutVariant::Bias(bias) => generate_layout_with_bias_config(seed, bias, &config),
                LayoutVariant::AwayFromEdges => {
                    generate_layout_with_input_away_from_edges_config(seed, &config)
                }
            };
            print_layouts(std::slice::from_ref(&layout), format)
        }
        "sequence" => {
            check_flags(flags, &["--seed", "--length", "--format", "--config"])?;
            let seed = seed_or_now(flags)?;
            let format: Format = parse_flag(flags, "--format")?.unwrap_or_default();
            let mut config = config;
            if let Some(length) = parse_flag(flags, "--length")? {
                config.sequence.length = length;
            }
            let layouts = SequenceBuilder::new(seed, &config).build();
            print_layouts(&layouts, format)
        }
        "survey" => {
            check_flags(flags, &["--from", "--count", "--config"])?;
            let from: u32 = parse_flag(flags, "--from")?.unwrap_or(0);
            let count: u32 = parse_flag(flags, "--count")?.unwrap_or(DEFAULT_SURVEY_COUNT);
            let to = from
                .checked_add(count)
                .ok_or_else(|| anyhow!("--from {from} plus --count {count} overflows u32"))?;
            let report = survey(from..to, &config);
            info!(
                total = report.total,
                degraded = report.degraded,
                rate = report.degraded_rate(),
                "survey finished"
            );
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        other => bail!("unknown command '{other}'\n{USAGE}"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(flags: &[String]) -> Result<LayoutConfig> {
    let Some(path) = parse_flag::<PathBuf>(flags, "--config")? else {
        return Ok(LayoutConfig::default());
    };
    LayoutConfig::load(&path)
        .map_err(|e| anyhow!("failed to load config {}: {e}", path.display()))
}

fn seed_or_now(flags: &[String]) -> Result<u32> {
    if let Some(seed) = parse_flag(flags, "--seed")? {
        return Ok(seed);
    }
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let seed = millis as u32;
    eprintln!("seed: {seed}");
    Ok(seed)
}

fn print_layouts(layouts: &[ScreenLayout], format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let json = match layouts {
                [single] => serde_json::to_string_pretty(single)?,
                _ => serde_json::to_string_pretty(layouts)?,
            };
            println!("{json}");
        }
        Format::Ascii => {
            for (i, layout) in layouts.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{} ({} blocks)", layout.id, layout.blocks.len());
                print!("{}", render(layout));
            }
        }
    }
    Ok(())
}
