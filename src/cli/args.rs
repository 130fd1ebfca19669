use clap::{Parser, ValueEnum};
use nom::{
    branch::alt,
    character::complete::{char, space0},
    combinator::{all_consuming, map_res, recognize},
    multi::separated_list1,
    number::complete::float,
    sequence::{delimited, separated_pair},
    IResult, Parser as _,
};
use std::path::PathBuf;

use crate::config::Margins;
use crate::error::ConfigError;
use crate::print::{Banner, FixedBand};

#[derive(Parser, Debug)]
#[command(name = "home-to-pdf")]
#[command(
    author,
    version,
    about = "Print a home design (furniture list, plan and 3D view) to PDF"
)]
pub struct Args {
    /// Input home file (JSON)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PDF file path (defaults to input with .pdf extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page size (defaults to the size stored in the home)
    #[arg(short = 's', long, value_enum)]
    pub page_size: Option<PageSize>,

    /// Page orientation
    #[arg(long, value_enum)]
    pub orientation: Option<Orientation>,

    /// Page margins in mm: one value for all sides, or "left,top,right,bottom"
    #[arg(long, value_parser = parse_margins)]
    pub margins: Option<Margins>,

    /// Header format, e.g. "$name - $level"
    #[arg(long)]
    pub header: Option<String>,

    /// Footer format, e.g. "Page $pageNumber/$pageCount"
    #[arg(long)]
    pub footer: Option<String>,

    /// Fixed plan scale, e.g. "1/50" or "0.02" (plan is fitted to the page otherwise)
    #[arg(long, value_parser = parse_plan_scale)]
    pub plan_scale: Option<f32>,

    /// Do not print the furniture list
    #[arg(long)]
    pub no_furniture: bool,

    /// Do not print the plan
    #[arg(long)]
    pub no_plan: bool,

    /// Do not print the 3D view
    #[arg(long)]
    pub no_view3d: bool,

    /// Text file printed at the top of every page
    #[arg(long)]
    pub fixed_header: Option<PathBuf>,

    /// Text file printed at the bottom of every page
    #[arg(long)]
    pub fixed_footer: Option<PathBuf>,

    /// Write uncompressed PDF streams
    #[arg(long)]
    pub no_compress: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageSize {
    Letter,
    A4,
    Legal,
}

impl PageSize {
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (215.9, 279.4),
            PageSize::A4 => (210.0, 297.0),
            PageSize::Legal => (215.9, 355.6),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Orientation {
    Portrait,
    Landscape,
    ReverseLandscape,
}

impl From<Orientation> for crate::print::Orientation {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => crate::print::Orientation::Portrait,
            Orientation::Landscape => crate::print::Orientation::Landscape,
            Orientation::ReverseLandscape => crate::print::Orientation::ReverseLandscape,
        }
    }
}

impl Args {
    /// Get the output path, defaulting to input with .pdf extension
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("pdf"))
    }

    /// Fixed header read from `--fixed-header`, if the file can be read
    pub fn fixed_header_band(&self) -> Option<FixedBand> {
        let path = self.fixed_header.as_ref()?;
        Banner::from_file(path, None).map(FixedBand::uniform)
    }

    /// Fixed footer read from `--fixed-footer`, if the file can be read
    pub fn fixed_footer_band(&self) -> Option<FixedBand> {
        let path = self.fixed_footer.as_ref()?;
        Banner::from_file(path, None).map(FixedBand::uniform)
    }
}

fn ratio(input: &str) -> IResult<&str, f32> {
    map_res(
        separated_pair(float, delimited(space0, char('/'), space0), float),
        |(numerator, denominator): (f32, f32)| {
            if denominator == 0.0 {
                Err("zero denominator")
            } else {
                Ok(numerator / denominator)
            }
        },
    )
    .parse(input)
}

/// Parse a plan scale given as a ratio ("1/50") or a decimal ("0.02")
pub fn parse_plan_scale(spec: &str) -> Result<f32, ConfigError> {
    let spec = spec.trim();
    let (_, scale) = all_consuming(alt((ratio, float)))
        .parse(spec)
        .map_err(|_| ConfigError::InvalidScale(spec.to_string()))?;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ConfigError::InvalidScale(spec.to_string()));
    }
    Ok(scale)
}

fn margin_list(input: &str) -> IResult<&str, Vec<f32>> {
    separated_list1(recognize((space0, char(','), space0)), float).parse(input)
}

/// Parse margins in mm: "10" for all sides or "left,top,right,bottom"
pub fn parse_margins(spec: &str) -> Result<Margins, ConfigError> {
    let spec = spec.trim();
    let (_, values) = all_consuming(margin_list)
        .parse(spec)
        .map_err(|_| ConfigError::InvalidMargins(spec.to_string()))?;
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(ConfigError::InvalidMargins(spec.to_string()));
    }
    match values[..] {
        [all] => Ok(Margins::uniform(all)),
        [left, top, right, bottom] => Ok(Margins {
            left,
            top,
            right,
            bottom,
        }),
        _ => Err(ConfigError::InvalidMargins(format!(
            "{} (expected 1 or 4 values)",
            spec
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_scale() {
        assert_eq!(parse_plan_scale("1/50").unwrap(), 0.02);
        assert_eq!(parse_plan_scale(" 1 / 100 ").unwrap(), 0.01);
        assert_eq!(parse_plan_scale("0.5").unwrap(), 0.5);
    }

    #[test]
    fn test_parse_plan_scale_rejects_garbage() {
        assert!(parse_plan_scale("1/0").is_err());
        assert!(parse_plan_scale("1:50").is_err());
        assert!(parse_plan_scale("-0.5").is_err());
        assert!(parse_plan_scale("").is_err());
    }

    #[test]
    fn test_parse_margins() {
        assert_eq!(parse_margins("12.5").unwrap(), Margins::uniform(12.5));
        assert_eq!(
            parse_margins("10, 20,15,25").unwrap(),
            Margins {
                left: 10.0,
                top: 20.0,
                right: 15.0,
                bottom: 25.0,
            }
        );
        assert!(parse_margins("10,20").is_err());
        assert!(parse_margins("10,-1,10,10").is_err());
        assert!(parse_margins("wide").is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let args = Args::parse_from([
            "home-to-pdf",
            "cottage.json",
            "-s",
            "a4",
            "--orientation",
            "reverse-landscape",
            "--plan-scale",
            "1/100",
            "--no-view3d",
        ]);
        assert_eq!(args.page_size, Some(PageSize::A4));
        assert_eq!(args.orientation, Some(Orientation::ReverseLandscape));
        assert_eq!(args.plan_scale, Some(0.01));
        assert!(args.no_view3d);
        assert_eq!(args.output_path(), PathBuf::from("cottage.pdf"));
        assert!(args.fixed_header_band().is_none());
    }
}
