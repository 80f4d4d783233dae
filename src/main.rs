mod render;

use chrono::{DateTime, NaiveDateTime, Utc};
use meridian::{
    BusinessWindow, CatalogKind, Context, Location, LocationRegistry, OffsetRounding, Options, RefreshSchedule, Session,
};
use render::{ChartKind, Palette};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MERIDIAN_LOG";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_logging();

    let session = match build_session(&config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config, &session) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Dashboard,
    Regions,
    Region(String),
}

struct CliConfig {
    locations: Vec<Location>,
    at: Option<DateTime<Utc>>,
    options: Options,
    chart: ChartKind,
    mode: Mode,
    watch: Option<u32>,
    color: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn build_session(config: &CliConfig) -> meridian::Result<Session> {
    if config.locations.is_empty() {
        return Ok(Session::new(config.options.clone()));
    }

    let mut registry = LocationRegistry::new();
    for location in &config.locations {
        registry.push(location.clone())?;
    }
    Ok(Session::with_registry(registry, config.options.clone()))
}

fn run(config: &CliConfig, session: &Session) -> meridian::Result<()> {
    let palette = Palette::new(config.color);

    match &config.mode {
        Mode::Regions => {
            let regions: Vec<(String, usize)> =
                session.catalog().regions()?.into_iter().map(|(name, entries)| (name, entries.len())).collect();
            render::print_regions(&regions, &palette);
        }
        Mode::Region(region) => {
            let entries = session.catalog().available(region, &session.registry().zone_ids())?;
            render::print_entries(region, &entries, &palette);
        }
        Mode::Dashboard => match config.watch {
            None => {
                let ctx = config.at.map(Context::at).unwrap_or_default();
                render::print_dashboard(&session.snapshot(&ctx), config.chart, &palette);
            }
            Some(ticks) => watch(config, session, ticks, &palette),
        },
    }

    Ok(())
}

/// Redraw once per tick. With `--at` the clock is simulated from that instant
/// instead of following the wall clock.
fn watch(config: &CliConfig, session: &Session, ticks: u32, palette: &Palette) {
    let schedule = RefreshSchedule::default();
    let mut simulated = config.at;

    for tick in 0..ticks {
        let instant = simulated.unwrap_or_else(Utc::now);
        if config.color {
            print!("\x1b[2J\x1b[H");
        }
        render::print_dashboard(&session.snapshot(&Context::at(instant)), config.chart, palette);

        if tick + 1 == ticks {
            break;
        }
        match simulated {
            Some(at) => simulated = Some(at.checked_add_signed(schedule.interval).unwrap_or(at)),
            None => {
                let wait = schedule.next_tick(instant) - Utc::now();
                std::thread::sleep(wait.to_std().unwrap_or_default());
            }
        }
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut locations: Vec<Location> = Vec::new();
    let mut at: Option<DateTime<Utc>> = None;
    let mut options = Options::default();
    let mut chart = ChartKind::default();
    let mut mode = Mode::Dashboard;
    let mut watch: Option<u32> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, String> {
            match &inline {
                Some(v) => Ok(v.clone()),
                None => args.next().ok_or_else(|| format!("error: {name} expects a value")),
            }
        };

        match flag.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("meridian {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--exact-offsets" => options.rounding = OffsetRounding::Exact,
            "--regions" => mode = Mode::Regions,
            "-l" | "--location" => {
                let spec = value("--location")?;
                locations.push(spec.parse().map_err(|err| format!("error: {err}"))?);
            }
            "--at" => at = Some(parse_instant(&value("--at")?)?),
            "--window" => {
                let raw = value("--window")?;
                options.window = raw
                    .parse::<BusinessWindow>()
                    .map_err(|_| format!("error: invalid --window '{raw}' (expected START-END, hours 0-23)"))?;
            }
            "--chart" => chart = value("--chart")?.parse()?,
            "--catalog" => {
                options.catalog = match value("--catalog")?.as_str() {
                    "full" => CatalogKind::Full,
                    "curated" => CatalogKind::Curated,
                    other => return Err(format!("error: unknown catalog '{other}' (expected full or curated)")),
                }
            }
            "--region" => mode = Mode::Region(value("--region")?),
            "--watch" => {
                let raw = value("--watch")?;
                let ticks = raw.parse::<u32>().map_err(|_| format!("error: invalid --watch '{raw}' (expected a count)"))?;
                watch = Some(ticks.max(1));
            }
            _ => return Err(format!("error: unknown option '{arg}'\n\n{}", help_text())),
        }
    }

    Ok(CliConfig { locations, at, options, chart, mode, watch, color })
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| format!("error: invalid --at '{value}' (expected YYYY-MM-DDTHH:MM:SS, UTC)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "meridian {version}

Business-hour overlap across up to {max} timezones.

Usage:
  meridian [OPTIONS]

Options:
  -l, --location <City=Zone>   Track a location (repeatable, up to {max}). Replaces
                               the defaults (New York, London, Tokyo). A bare zone
                               id such as Asia/Kolkata is also accepted.
  --at <timestamp>             UTC instant in YYYY-MM-DDTHH:MM:SS. Default: now.
  --window <start-end>         Local business hours, inclusive. Default: 8-18.
  --exact-offsets              Honor half/quarter-hour offsets instead of
                               rounding them down to the whole hour.
  --chart <timeline|dial>      Chart style. Default: timeline.
  --catalog <full|curated>     Timezone catalog source. Default: full.
  --regions                    List catalog regions.
  --region <name>              List zones in a region that can still be added.
  --watch <ticks>              Redraw every second, <ticks> times.
  --color                      Force ANSI color output.
  --no-color                   Disable ANSI color output.
  -h, --help                   Show this help message.
  -V, --version                Print version information.

Environment:
  {log_env}                 Log filter (e.g. debug). Default: warn.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or locations.
",
        version = env!("CARGO_PKG_VERSION"),
        max = meridian::MAX_LOCATIONS,
        log_env = LOG_ENV,
    )
}
