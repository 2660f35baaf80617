// Flag parsing for the CLI.
//
// Flags are `--name value` pairs after the subcommand, in any order. A flag
// that is present must carry a parseable value; unknown flags are rejected.

use anyhow::{Context, Result, anyhow, bail};
use screen_grid_layout::InputBias;
use std::fmt::Display;
use std::str::FromStr;

/// Output format for layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    Ascii,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "ascii" => Ok(Format::Ascii),
            other => Err(format!("unknown format '{other}' (expected json or ascii)")),
        }
    }
}

/// Which generator the `layout` command calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutVariant {
    Bias(InputBias),
    AwayFromEdges,
}

impl Default for LayoutVariant {
    fn default() -> Self {
        LayoutVariant::Bias(InputBias::Any)
    }
}

impl FromStr for LayoutVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "away" => Ok(LayoutVariant::AwayFromEdges),
            other => other.parse().map(LayoutVariant::Bias).map_err(|_| {
                format!("unknown bias '{other}' (expected any, middle, right or away)")
            }),
        }
    }
}

/// Value following `flag`, parsed. `Ok(None)` if the flag is absent.
pub fn parse_flag<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(i) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    let value = args
        .get(i + 1)
        .with_context(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map(Some)
        .map_err(|e| anyhow!("invalid value '{value}' for {flag}: {e}"))
}

/// Reject any `--flag` not in `allowed`.
pub fn check_flags(args: &[String], allowed: &[&str]) -> Result<()> {
    for (i, arg) in args.iter().enumerate() {
        let is_value = i > 0 && allowed.contains(&args[i - 1].as_str());
        if arg.starts_with("--") && !is_value && !allowed.contains(&arg.as_str()) {
            bail!("unknown flag '{arg}' (expected one of {})", allowed.join(", "));
        }
    }
    Ok(())
}
