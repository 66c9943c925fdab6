mod config;

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use panchang_core::{Body, Direction, Ephemeris, Instant, Observer};
use panchang_ephem::AnalyticEphemeris;
use panchang_search::{
    CalendarSegment, PanchangError, PanchangRequest, PanchangResult, day_start_utc,
    find_rise_set, panchang_for_date, validate_observer,
};
use panchang_vedic::Locale;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "panchang", about = "Daily panchang from sunrise to sunset")]
struct Cli {
    /// Path to a panchang.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level (RUST_LOG is honored otherwise)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tithi, nakshatra, karana and yoga segments for a date
    Day {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Elevation above sea level in meters
        #[arg(long)]
        elevation: Option<f64>,
        /// Name table: english or hindi
        #[arg(long)]
        locale: Option<Locale>,
        /// Sampling step in seconds
        #[arg(long)]
        step: Option<i64>,
        /// Bisect segment boundaries below the sampling step
        #[arg(long)]
        refine: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Single rise or set event of the Sun or Moon
    RiseSet {
        #[arg(long, value_enum)]
        body: BodyArg,
        #[arg(long, value_enum)]
        direction: DirectionArg,
        /// Civil date (YYYY-MM-DD); the search starts at 00:00 UTC
        #[arg(long)]
        date: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        #[arg(long)]
        elevation: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BodyArg {
    Sun,
    Moon,
}

impl From<BodyArg> for Body {
    fn from(b: BodyArg) -> Self {
        match b {
            BodyArg::Sun => Body::Sun,
            BodyArg::Moon => Body::Moon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    Rise,
    Set,
}

impl From<DirectionArg> for Direction {
    fn from(d: DirectionArg) -> Self {
        match d {
            DirectionArg::Rise => Direction::Rising,
            DirectionArg::Set => Direction::Setting,
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}

/// Flag value, else file value, else an error naming the missing flag.
fn resolve(flag: Option<f64>, file: Option<f64>, name: &str) -> Result<f64, String> {
    flag.or(file)
        .ok_or_else(|| format!("--{name} is required (or set it under [location] in the config file)"))
}

fn observer_from(
    config: &CliConfig,
    lat: Option<f64>,
    lon: Option<f64>,
    elevation: Option<f64>,
) -> Result<Observer, String> {
    Ok(Observer::new(
        resolve(lat, config.location.latitude, "lat")?,
        resolve(lon, config.location.longitude, "lon")?,
        elevation.unwrap_or(config.location.elevation_m),
    ))
}

/// First `direction` event of `body` from 00:00 UTC on `date`, after the same
/// observer checks the `day` command applies.
fn rise_set_event<E: Ephemeris + ?Sized>(
    eph: &E,
    body: Body,
    direction: Direction,
    date: NaiveDate,
    observer: &Observer,
) -> Result<Instant, PanchangError> {
    validate_observer(observer)?;
    find_rise_set(eph, body, observer, direction, &day_start_utc(date), 1.0)
}

fn exit_with(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn fmt_time(t: &Instant) -> String {
    t.format("%H:%M:%S UTC").to_string()
}

fn print_segments(label: &str, segments: &[CalendarSegment]) {
    println!("{label}:");
    for s in segments {
        let paksha = s
            .paksha
            .map(|p| format!(" ({})", p.name()))
            .unwrap_or_default();
        println!(
            "  {:>2} {}{}  {} -> {}",
            s.id,
            s.name,
            paksha,
            fmt_time(&s.start),
            fmt_time(&s.end)
        );
    }
}

fn print_day(date: NaiveDate, observer: &Observer, day: &PanchangResult) {
    println!(
        "Panchang for {} at {:.4}°N, {:.4}°E\n",
        date, observer.latitude, observer.longitude
    );
    println!("Vaara:    {}", day.vaara);
    println!("Sunrise:  {}", fmt_time(&day.sunrise));
    println!("Sunset:   {}", fmt_time(&day.sunset));
    println!("Moonrise: {}", fmt_time(&day.moonrise));
    println!("Moonset:  {}\n", fmt_time(&day.moonset));
    print_segments("Tithi", &day.tithi);
    print_segments("Nakshatra", &day.nakshatra);
    print_segments("Karana", &day.karana);
    print_segments("Yoga", &day.yoga);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_config = CliConfig::load(cli.config.as_deref()).unwrap_or_else(|e| exit_with(e));
    let eph = AnalyticEphemeris::new();

    match cli.command {
        Commands::Day {
            date,
            lat,
            lon,
            elevation,
            locale,
            step,
            refine,
            json,
        } => {
            let date = parse_date(&date).unwrap_or_else(|e| exit_with(e));
            let observer =
                observer_from(&file_config, lat, lon, elevation).unwrap_or_else(|e| exit_with(e));
            let mut scan = file_config.scan_config();
            if let Some(locale) = locale {
                scan.locale = locale;
            }
            if let Some(step) = step {
                scan.step_seconds = step;
            }
            scan.refine_boundaries |= refine;

            let request = PanchangRequest {
                elevation_meters: observer.elevation_meters,
                ..PanchangRequest::new(
                    date.year(),
                    date.month(),
                    date.day(),
                    observer.latitude,
                    observer.longitude,
                )
            };
            let day = panchang_for_date(&eph, &request, &scan).unwrap_or_else(|e| exit_with(e));
            if json {
                let text = serde_json::to_string_pretty(&day).unwrap_or_else(|e| exit_with(e));
                println!("{text}");
            } else {
                print_day(date, &observer, &day);
            }
        }

        Commands::RiseSet {
            body,
            direction,
            date,
            lat,
            lon,
            elevation,
        } => {
            let date = parse_date(&date).unwrap_or_else(|e| exit_with(e));
            let observer =
                observer_from(&file_config, lat, lon, elevation).unwrap_or_else(|e| exit_with(e));
            let (body, direction) = (Body::from(body), Direction::from(direction));
            let event = rise_set_event(&eph, body, direction, date, &observer)
                .unwrap_or_else(|e| exit_with(e));
            let position = eph
                .apparent_equatorial_position(body, &event, &observer)
                .unwrap_or_else(|e| exit_with(e));
            println!("{body} {direction}: {}", event.to_rfc3339());
            println!(
                "  RA {:.4} h  Dec {:+.4}°",
                position.right_ascension_hours, position.declination_deg
            );
        }
    }
}
