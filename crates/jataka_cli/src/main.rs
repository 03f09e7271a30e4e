use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use jataka_config::EngineConfig;
use jataka_ephem::MeanElementEphemeris;
use jataka_reading::{
    BirthDetails, city_from_place, generate_reading, lookup_city, parse_birth_date,
    resolve_birth_time, save_reading,
};
use jataka_vedic_base::{
    AscendantFormula, DMS_DEGREE_LIMIT, Graha, ascendant, ayanamsa_deg, build_chart,
    checked_deg_to_dms, current_mahadasha, deg_to_dms, mahadasha_sequence, mean_nodes,
    nakshatra_from_longitude, rashi_from_longitude,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jataka", about = "Vedic birth-chart and reading CLI")]
struct Cli {
    /// JSON configuration file (overrides JATAKA_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

/// Birth inputs shared by chart-level subcommands.
#[derive(clap::Args)]
struct BirthArgs {
    /// Birth date (DD-MM-YYYY)
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM AM/PM or HH:MM)
    #[arg(long, default_value = "12:00")]
    time: String,
    /// Birth place (City, Country)
    #[arg(long, default_value = "Delhi")]
    place: String,
}

#[derive(clap::Args)]
struct ReadArgs {
    #[arg(long)]
    name: Option<String>,
    /// Birth date (DD-MM-YYYY)
    #[arg(long)]
    date: Option<String>,
    /// Birth time (HH:MM AM/PM or HH:MM)
    #[arg(long)]
    time: Option<String>,
    /// Birth place (City, Country)
    #[arg(long)]
    place: Option<String>,
    /// Save without asking
    #[arg(long)]
    save: bool,
    /// Directory for the saved reading
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Reference instant for the mahadasha (YYYY-MM-DDTHH:MM, default now)
    #[arg(long)]
    now: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full reading (prompts for any detail not given)
    Read(ReadArgs),
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// Ayanamsa for a date
    Ayanamsa {
        /// Date (DD-MM-YYYY)
        date: String,
    },
    /// Mean Rahu/Ketu longitudes
    Nodes {
        /// Date (DD-MM-YYYY)
        date: String,
        /// Time (HH:MM AM/PM or HH:MM)
        #[arg(long, default_value = "00:00")]
        time: String,
    },
    /// Sidereal positions of the nine grahas
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Sidereal ascendant
    Lagna {
        #[command(flatten)]
        birth: BirthArgs,
        /// Use the obliquity-corrected formula
        #[arg(long)]
        corrected: bool,
    },
    /// Current Vimshottari mahadasha
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Reference instant (YYYY-MM-DDTHH:MM, default now)
        #[arg(long)]
        now: Option<String>,
        /// Also list all nine mahadasha windows from birth
        #[arg(long)]
        sequence: bool,
    },
    /// Coordinates for a place
    Geocode {
        /// Place (City, Country)
        place: String,
    },
    /// Print the effective configuration as JSON
    Config,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}

fn reference_instant(now: Option<&str>) -> Result<NaiveDateTime, String> {
    match now {
        None => Ok(Utc::now().naive_utc()),
        Some(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .map_err(|_| format!("invalid --now {s:?}, expected YYYY-MM-DDTHH:MM")),
    }
}

fn parse_reference(now: Option<&str>) -> NaiveDateTime {
    reference_instant(now).unwrap_or_else(|e| fail(e))
}

fn require_date(text: &str) -> NaiveDate {
    parse_birth_date(text).unwrap_or_else(|e| fail(e))
}

fn birth_details(birth: &BirthArgs, config: &EngineConfig) -> BirthDetails {
    BirthDetails::from_input("", &birth.date, &birth.time, &birth.place, config)
        .unwrap_or_else(|e| fail(e))
}

/// Print `label` and read one trimmed line.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<String, String> {
    write!(out, "{label}").map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Err("input closed".to_string()),
        Ok(_) => Ok(line.trim().to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn run_read(config: &EngineConfig, args: ReadArgs) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = read_session(config, args, &mut stdin.lock(), &mut stdout.lock()) {
        fail(e);
    }
}

/// Drive one reading: prompt for missing details, print the reading and
/// optionally save it. Returns the saved path, if any.
fn read_session(
    config: &EngineConfig,
    args: ReadArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<PathBuf>, String> {
    let interactive =
        args.name.is_none() || args.date.is_none() || args.time.is_none() || args.place.is_none();
    let io_err = |e: io::Error| e.to_string();
    if interactive {
        writeln!(out, "VEDIC ASTROLOGY READING GENERATOR").map_err(io_err)?;
        writeln!(out, "{}", "=".repeat(50)).map_err(io_err)?;
    }

    let name = match args.name {
        Some(name) => name,
        None => prompt(input, out, "Enter full name: ")?,
    };
    let birth_date = match args.date {
        Some(text) => parse_birth_date(&text).map_err(|e| e.to_string())?,
        None => loop {
            let text = prompt(input, out, "Enter birth date (DD-MM-YYYY): ")?;
            match parse_birth_date(&text) {
                Ok(d) => break d,
                Err(_) => {
                    writeln!(out, "Invalid date format. Please use DD-MM-YYYY").map_err(io_err)?
                }
            }
        },
    };
    let time_text = match args.time {
        Some(text) => text,
        None => prompt(input, out, "Enter birth time (HH:MM AM/PM): ")?,
    };
    let place = match args.place {
        Some(place) => place,
        None => prompt(input, out, "Enter birth place (City, Country): ")?,
    };

    let details = BirthDetails::from_date(&name, birth_date, &time_text, &place, config)
        .map_err(|e| e.to_string())?;
    if details.time_defaulted {
        writeln!(out, "Invalid time format. Using 12:00 PM as default.").map_err(io_err)?;
    }
    if !details.place_matched {
        writeln!(
            out,
            "Place {:?} not recognised, using {:.4}, {:.4}.",
            city_from_place(&place),
            details.moment.location().latitude_deg,
            details.moment.location().longitude_deg
        )
        .map_err(io_err)?;
    }

    writeln!(out, "\nGenerating your personalized Vedic astrology reading...\n").map_err(io_err)?;
    let reference = reference_instant(args.now.as_deref())?;
    let reading = generate_reading(&MeanElementEphemeris, &details, config, reference)
        .map_err(|e| format!("error generating reading: {e}"))?;
    writeln!(out, "{}", reading.text).map_err(io_err)?;

    let save = args.save
        || (interactive
            && prompt(
                input,
                out,
                "\nWould you like to save this reading to a file? (y/n): ",
            )?
            .eq_ignore_ascii_case("y"));
    if !save {
        return Ok(None);
    }
    let path =
        save_reading(&args.output_dir, &details.name, &reading.text).map_err(|e| e.to_string())?;
    writeln!(out, "Reading saved to {}", path.display()).map_err(io_err)?;
    Ok(Some(path))
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = EngineConfig::resolve(cli.config.as_deref()).unwrap_or_else(|e| fail(e));
    debug!(?config, "effective configuration");

    match cli.command {
        Commands::Read(args) => run_read(&config, args),

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada
            );
        }

        Commands::Dms { deg } => {
            let dms = checked_deg_to_dms(deg).unwrap_or_else(|| {
                fail(format!("angle must be finite and below {DMS_DEGREE_LIMIT} deg in magnitude"))
            });
            let sign = if deg < 0.0 { "-" } else { "" };
            println!("{sign}{dms}");
        }

        Commands::Ayanamsa { date } => {
            let date = require_date(&date);
            println!("{:.6} deg ({})", ayanamsa_deg(date), deg_to_dms(ayanamsa_deg(date)));
        }

        Commands::Nodes { date, time } => {
            let date = require_date(&date);
            let time = resolve_birth_time(&time, config.time_fallback).unwrap_or_else(|e| fail(e));
            let nodes = mean_nodes(&date.and_time(time.time));
            let rahu = rashi_from_longitude(nodes.rahu_deg);
            let ketu = rashi_from_longitude(nodes.ketu_deg);
            println!(
                "Rahu: {:.4} deg ({} {})",
                nodes.rahu_deg,
                rahu.rashi.western_name(),
                rahu.dms
            );
            println!(
                "Ketu: {:.4} deg ({} {})",
                nodes.ketu_deg,
                ketu.rashi.western_name(),
                ketu.dms
            );
        }

        Commands::Chart { birth, json } => {
            let details = birth_details(&birth, &config);
            let chart =
                build_chart(&MeanElementEphemeris, &details.moment).unwrap_or_else(|e| fail(e));
            if json {
                let out = serde_json::to_string_pretty(&chart).unwrap_or_else(|e| fail(e));
                println!("{out}");
            } else {
                println!("Ayanamsa: {:.4} deg", chart.ayanamsa_deg);
                for p in chart.iter() {
                    let nak = p.nakshatra();
                    println!(
                        "{:<8} {:<8} {:>9.4}  {:<12} {:>7.4}  {} pada {}",
                        p.graha.english_name(),
                        p.graha.name(),
                        p.sidereal_lon_deg,
                        p.rashi.western_name(),
                        p.degrees_in_rashi,
                        nak.nakshatra.name(),
                        nak.pada
                    );
                }
            }
        }

        Commands::Lagna { birth, corrected } => {
            let details = birth_details(&birth, &config);
            let formula = if corrected {
                AscendantFormula::Corrected
            } else {
                config.ascendant_formula
            };
            let lagna = ascendant(&MeanElementEphemeris, &details.moment, formula)
                .unwrap_or_else(|e| fail(e));
            println!(
                "Lagna: {:.4} deg - {} ({}) {:.4} deg in rashi [LST {:.4} deg, {} formula]",
                lagna.sidereal_lon_deg,
                lagna.rashi.name(),
                lagna.rashi.western_name(),
                lagna.degrees_in_rashi,
                lagna.lst_deg,
                lagna.formula.name()
            );
        }

        Commands::Dasha {
            birth,
            now,
            sequence,
        } => {
            let details = birth_details(&birth, &config);
            let chart =
                build_chart(&MeanElementEphemeris, &details.moment).unwrap_or_else(|e| fail(e));
            let moon = chart
                .get(Graha::Chandra)
                .unwrap_or_else(|| fail("chart has no Moon position"));
            let reference = parse_reference(now.as_deref());
            let birth_at = details.moment.datetime();
            let state = current_mahadasha(
                moon.sidereal_lon_deg,
                &birth_at,
                &reference,
                config.dasha_policy(),
            )
            .unwrap_or_else(|e| fail(e));
            println!(
                "Birth nakshatra: {}  Mahadasha: {}  remaining {:.2} years (elapsed {:.2})",
                state.birth_nakshatra.name(),
                state.mahadasha.english_name(),
                state.remaining_years,
                state.elapsed_years
            );
            if sequence {
                for p in mahadasha_sequence(moon.sidereal_lon_deg, &birth_at) {
                    println!(
                        "{:<8} {:>2}y  {} .. {}",
                        p.lord.english_name(),
                        p.years,
                        p.start.format("%Y-%m-%d"),
                        p.end.format("%Y-%m-%d")
                    );
                }
            }
        }

        Commands::Geocode { place } => {
            let city = city_from_place(&place);
            match lookup_city(city) {
                Some(loc) => println!("{city}: {:.4}, {:.4}", loc.latitude_deg, loc.longitude_deg),
                None => println!(
                    "{city}: not in table, default {:.4}, {:.4} ({:?} policy)",
                    config.default_location.latitude_deg,
                    config.default_location.longitude_deg,
                    config.unknown_place
                ),
            }
        }

        Commands::Config => {
            let out = config.to_json_pretty().unwrap_or_else(|e| fail(e));
            println!("{out}");
        }
    }
}
