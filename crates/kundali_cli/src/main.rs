use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use kundali_engine::{
    BirthDetails, ChartCalculator, ChartRequest, DashaView, IntensityRecord, LifeArea,
};
use kundali_ephem::{AnalyticEphemeris, AyanamshaSystem, Ephemeris};
use kundali_time::CivilTime;
use kundali_vedic::{DashaSnapshot, PositionResolver, SiderealPosition};

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic chart calculator")]
struct Cli {
    /// Log filter (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// Single-line JSON output
    #[arg(long, global = true)]
    compact: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: positions, houses, strengths, vargas, dasha, intensity
    Chart {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Vimshottari dasha tree
    Dasha {
        #[command(flatten)]
        request: RequestArgs,
        /// Also report the periods running on this date (YYYY-MM-DD)
        #[arg(long)]
        at: Option<String>,
    },
    /// Life-area intensity for every (Maha, Antar) pair
    Intensity {
        #[command(flatten)]
        request: RequestArgs,
        /// Only this area (wealth, business, health, marriage, children, career)
        #[arg(long)]
        area: Option<String>,
    },
    /// Sidereal sign, nakshatra and pada of a tropical longitude
    Position {
        /// Tropical ecliptic longitude in degrees
        lon: f64,
        /// Ayanamsha in degrees; takes precedence over --ayanamsha
        #[arg(long)]
        ayanamsha_deg: Option<f64>,
        /// Ayanamsha system name
        #[arg(long, default_value = "lahiri")]
        ayanamsha: String,
        /// Date for the ayanamsha (YYYY-MM-DD, 00:00 UT)
        #[arg(long, default_value = "2000-01-01")]
        date: String,
    },
}

/// Birth details and preferences, from a TOML file, flags, or both.
#[derive(Args, Debug, Default)]
struct RequestArgs {
    /// TOML request file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
    /// Local birth time (HH:MM[:SS])
    #[arg(long)]
    time: Option<String>,
    /// UTC offset in hours, e.g. 5.5
    #[arg(long, allow_hyphen_values = true)]
    tz: Option<f64>,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Ayanamsha system name
    #[arg(long)]
    ayanamsha: Option<String>,
    /// House system (equal, whole_sign, porphyry, sripati)
    #[arg(long)]
    house_system: Option<String>,
    /// Comma-separated divisional charts, e.g. D1,D9,D60
    #[arg(long, value_delimiter = ',')]
    divisors: Option<Vec<String>>,
    /// Dasha levels to report (1-3)
    #[arg(long)]
    dasha_depth: Option<u8>,
}

impl RequestArgs {
    fn to_request(&self) -> Result<ChartRequest> {
        let base = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Some(
                    ChartRequest::from_toml_str(&text)
                        .with_context(|| format!("parsing {}", path.display()))?,
                )
            }
            None => None,
        };
        let mut request = match base {
            Some(mut r) => {
                self.override_birth(&mut r.birth)?;
                r
            }
            None => ChartRequest::new(self.birth_from_flags()?, Default::default()),
        };
        let prefs = &mut request.preferences;
        if let Some(a) = &self.ayanamsha {
            prefs.ayanamsha = a.clone();
        }
        if let Some(h) = &self.house_system {
            prefs.house_system = h.clone();
        }
        if let Some(d) = &self.divisors {
            prefs.divisors = d.clone();
        }
        if let Some(depth) = self.dasha_depth {
            prefs.dasha_depth = depth;
        }
        tracing::debug!(birth = %request.birth.time, from_file = self.config.is_some(), "request assembled");
        Ok(request)
    }

    fn birth_from_flags(&self) -> Result<BirthDetails> {
        let (Some(date), Some(time), Some(lat), Some(lon)) =
            (&self.date, &self.time, self.lat, self.lon)
        else {
            bail!("--date, --time, --lat and --lon are required without --config");
        };
        Ok(BirthDetails::parse(date, time, self.tz.unwrap_or(0.0), lat, lon)?)
    }

    fn override_birth(&self, birth: &mut BirthDetails) -> Result<()> {
        let t = birth.time;
        let date = self
            .date
            .clone()
            .unwrap_or_else(|| format!("{:04}-{:02}-{:02}", t.year, t.month, t.day));
        let time = self.time.clone().unwrap_or_else(|| {
            format!("{:02}:{:02}:{:02}", t.hour, t.minute, t.second.floor() as u32)
        });
        let parsed = BirthDetails::parse(
            &date,
            &time,
            self.tz.unwrap_or(t.utc_offset_hours),
            self.lat.unwrap_or(birth.latitude_deg),
            self.lon.unwrap_or(birth.longitude_deg),
        )?;
        let keep_seconds = self.time.is_none();
        *birth = parsed;
        if keep_seconds {
            birth.time.second = t.second;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct DashaOutput<'a> {
    #[serde(flatten)]
    dasha: &'a DashaView,
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<DashaSnapshot>,
}

#[derive(Serialize)]
struct PositionOutput {
    tropical_longitude_deg: f64,
    ayanamsha_deg: f64,
    #[serde(flatten)]
    position: SiderealPosition,
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {level:?}"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| anyhow!("logger: {e}"))
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}

/// Local midnight of `date` as a UT Julian Date.
fn date_to_jd(date: &str, utc_offset_hours: f64) -> Result<f64> {
    let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .with_context(|| format!("date {date:?}"))?;
    let civil = CivilTime::new(d.year(), d.month(), d.day(), 0, 0, 0.0, utc_offset_hours);
    Ok(civil.to_jd_ut()?)
}

fn run(cli: Cli) -> Result<()> {
    let eph = AnalyticEphemeris::new();
    let calc = ChartCalculator::new(&eph);
    match cli.command {
        Commands::Chart { request } => {
            let chart = calc.compute(&request.to_request()?)?;
            print_json(&chart, cli.compact)
        }
        Commands::Dasha { request, at } => {
            let req = request.to_request()?;
            let chart = calc.compute(&req)?;
            let active = match at {
                Some(date) => Some(chart.dasha_at(date_to_jd(&date, req.birth.time.utc_offset_hours)?)),
                None => None,
            };
            print_json(
                &DashaOutput {
                    dasha: &chart.dasha,
                    active,
                },
                cli.compact,
            )
        }
        Commands::Intensity { request, area } => {
            let filter = area
                .map(|a| LifeArea::from_name(&a).ok_or_else(|| anyhow!("unknown life area {a:?}")))
                .transpose()?;
            let chart = calc.compute(&request.to_request()?)?;
            let records: Vec<&IntensityRecord> = chart
                .intensity
                .iter()
                .filter(|r| filter.is_none_or(|a| r.area == a))
                .collect();
            print_json(&records, cli.compact)
        }
        Commands::Position {
            lon,
            ayanamsha_deg,
            ayanamsha,
            date,
        } => {
            let aya = match ayanamsha_deg {
                Some(v) => v,
                None => {
                    let system = AyanamshaSystem::from_name(&ayanamsha)
                        .ok_or_else(|| anyhow!("unknown ayanamsha {ayanamsha:?}"))?;
                    eph.ayanamsha_deg(system, date_to_jd(&date, 0.0)?)?
                }
            };
            print_json(
                &PositionOutput {
                    tropical_longitude_deg: lon,
                    ayanamsha_deg: aya,
                    position: PositionResolver.resolve(lon, aya),
                },
                cli.compact,
            )
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;
    run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("kundali").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_build_a_request() {
        let cli = parse(&[
            "chart", "--date", "1972-07-17", "--time", "02:17", "--tz", "5.5", "--lat", "16.5062",
            "--lon", "80.648", "--divisors", "D1,D9,D60",
        ]);
        let Commands::Chart { request } = cli.command else {
            panic!("expected chart");
        };
        let req = request.to_request().unwrap();
        assert_eq!(req.birth.time.hour, 2);
        assert_eq!(req.birth.time.minute, 17);
        assert_eq!(req.preferences.divisors, vec!["D1", "D9", "D60"]);
        assert_eq!(req.preferences.ayanamsha, "lahiri");
    }

    #[test]
    fn missing_birth_flags_are_reported() {
        let cli = parse(&["dasha", "--date", "1972-07-17"]);
        let Commands::Dasha { request, .. } = cli.command else {
            panic!("expected dasha");
        };
        let err = request.to_request().unwrap_err();
        assert!(err.to_string().contains("--lat"));
    }

    #[test]
    fn flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("kundali-cli-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[birth]\nyear = 1963\nmonth = 9\nday = 6\nhour = 11\nminute = 0\nsecond = 30.0\n\
             utc_offset_hours = 5.5\nlatitude_deg = 28.6139\nlongitude_deg = 77.209\n\
             [preferences]\nhouse_system = \"equal\"\n",
        )
        .unwrap();
        let args = RequestArgs {
            config: Some(path.clone()),
            lat: Some(19.076),
            house_system: Some("porphyry".into()),
            ..RequestArgs::default()
        };
        let req = args.to_request().unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(req.birth.latitude_deg, 19.076);
        assert_eq!(req.birth.longitude_deg, 77.209);
        assert_eq!(req.birth.time.day, 6);
        assert_eq!(req.birth.time.second, 30.0);
        assert_eq!(req.preferences.house_system, "porphyry");
    }

    #[test]
    fn negative_coordinates_parse() {
        let cli = parse(&["chart", "--date", "2000-01-01", "--time", "12:00", "--lat", "-33.87", "--lon", "-70.6"]);
        let Commands::Chart { request } = cli.command else {
            panic!("expected chart");
        };
        assert_eq!(request.lat, Some(-33.87));
        assert_eq!(request.lon, Some(-70.6));
    }

    #[test]
    fn midnight_ut() {
        assert!((date_to_jd("2000-01-01", 0.0).unwrap() - 2_451_544.5).abs() < 1e-9);
    }
}
