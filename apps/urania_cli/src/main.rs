mod output;

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use std::path::PathBuf;
use urania::ephemeris::{BirthData, GeoLocation, StaticEphemeris};
use urania::rendering::{render_html, render_svg, ChartSpecGenerator};
use urania::{ChartAssembler, ChartReport, ChartSettings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a natal chart and write its report and wheel")]
struct Args {
    /// Positions file (TOML, or JSON by extension) served as the ephemeris.
    #[arg(long)]
    positions: PathBuf,

    /// Local birth date, YYYY-MM-DD.
    #[arg(long, value_parser = parse_date)]
    date: NaiveDate,

    /// Local birth time, HH:MM.
    #[arg(long, value_parser = parse_time)]
    time: NaiveTime,

    /// East-positive longitude in degrees, -180 to 180.
    #[arg(long, allow_negative_numbers = true, value_parser = parse_longitude)]
    lon: f64,

    /// North-positive latitude in degrees, -90 to 90.
    #[arg(long, allow_negative_numbers = true, value_parser = parse_latitude)]
    lat: f64,

    /// UTC offset in hours (default: estimated from longitude).
    #[arg(long, allow_negative_numbers = true)]
    utc_offset: Option<i32>,

    /// Chart settings TOML (default: reference settings).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory that receives the chart folder.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Also write the chart as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}

fn parse_coordinate(s: &str, limit: f64) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("expected degrees: {e}"))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(format!("{value} is outside -{limit} to {limit}"));
    }
    Ok(value)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    parse_coordinate(s, 180.0)
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    parse_coordinate(s, 90.0)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => ChartSettings::load(path)
            .with_context(|| format!("Failed to load settings {}", path.display()))?,
        None => ChartSettings::default(),
    };

    let mut provider = StaticEphemeris::from_path(&args.positions)
        .with_context(|| format!("Failed to load positions {}", args.positions.display()))?;

    let mut birth = BirthData::new(
        NaiveDateTime::new(args.date, args.time),
        GeoLocation {
            lat: args.lat,
            lon: args.lon,
        },
    );
    if let Some(offset) = args.utc_offset {
        birth = birth.with_utc_offset(offset);
    }

    let assembler = ChartAssembler::new(settings).context("Invalid chart settings")?;
    let chart = assembler
        .compute(&mut provider, &birth)
        .context("Chart computation failed")?;

    let report = ChartReport::new(&chart).to_string();
    print!("{report}");

    let spec = ChartSpecGenerator::new(assembler.settings().wheel).generate(&chart);
    let artifacts = output::Artifacts {
        report,
        svg: render_svg(&spec),
        html: render_html(&chart, &spec),
        json: if args.json {
            Some(serde_json::to_string_pretty(&chart).context("Failed to serialise chart")?)
        } else {
            None
        },
    };

    let folder = output::write_artifacts(&args.out_dir, &birth, &artifacts)?;
    log::info!("chart written to {}", folder.display());
    Ok(())
}
