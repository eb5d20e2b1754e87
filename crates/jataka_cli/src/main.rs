use clap::{Args, Parser, Subcommand};
use jataka_base::{ChartError, nakshatra_at, sub_lord};
use jataka_chart::{ChartRequest, WheelOptions, build_kp_table, compute_chart, render_wheel};
use jataka_rs::{julian_day, moon_dasha};
use jataka_time::CivilMoment;

#[derive(Parser)]
#[command(name = "jataka", about = "Jataka natal chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Birth moment shared by every time-based subcommand.
#[derive(Args)]
struct MomentArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM or HH:MM:SS)
    #[arg(long)]
    time: String,
    /// UTC offset in minutes, east positive
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    offset: i32,
}

/// Geographic location for ascendant-dependent subcommands.
#[derive(Args)]
struct PlaceArgs {
    /// Latitude in decimal degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in decimal degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day for a birth moment
    JulianDay {
        #[command(flatten)]
        moment: MomentArgs,
    },
    /// Mean planetary longitudes
    Planets {
        #[command(flatten)]
        moment: MomentArgs,
        /// Fractional digits (1-6)
        #[arg(long)]
        precision: Option<i64>,
    },
    /// Ascendant and sidereal times
    Ascendant {
        #[command(flatten)]
        moment: MomentArgs,
        #[command(flatten)]
        place: PlaceArgs,
        /// Fractional digits (1-6)
        #[arg(long)]
        precision: Option<i64>,
    },
    /// Nakshatra, pada, lord, and sub-lord for a longitude
    Nakshatra {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Vimshottari dasha timeline from the Moon at a birth moment
    Dasha {
        #[command(flatten)]
        moment: MomentArgs,
        /// Fractional digits (1-6)
        #[arg(long)]
        precision: Option<i64>,
    },
    /// KP table (planets and cusps)
    Kp {
        #[command(flatten)]
        moment: MomentArgs,
        #[command(flatten)]
        place: PlaceArgs,
        /// Fractional digits (1-6)
        #[arg(long)]
        precision: Option<i64>,
    },
    /// Full chart aggregate as pretty JSON
    Chart {
        #[command(flatten)]
        moment: MomentArgs,
        #[command(flatten)]
        place: PlaceArgs,
        /// Fractional digits (1-6)
        #[arg(long)]
        precision: Option<i64>,
    },
    /// Chart wheel as SVG on stdout
    Wheel {
        #[command(flatten)]
        moment: MomentArgs,
        #[command(flatten)]
        place: PlaceArgs,
        /// Viewport size in user units
        #[arg(long, default_value = "420")]
        size: f64,
    },
}

fn request(moment: &MomentArgs, place: &PlaceArgs, precision: Option<i64>) -> Result<ChartRequest, ChartError> {
    ChartRequest::parse(
        &moment.date,
        &moment.time,
        moment.offset,
        place.lat,
        place.lon,
        precision,
    )
}

fn run(command: Commands) -> Result<(), ChartError> {
    match command {
        Commands::JulianDay { moment } => {
            let jd = julian_day(&moment.date, &moment.time, moment.offset)?;
            println!("JD {} ({})", jd, CivilMoment::from_julian_day(jd));
        }

        Commands::Planets { moment, precision } => {
            let jd = julian_day(&moment.date, &moment.time, moment.offset)?;
            let precision = jataka_chart::clamp_precision(precision);
            let positions = jataka_base::planet_positions(jd, precision)?;
            for pos in positions.iter() {
                println!(
                    "{:<8} {:>10.4} deg  {} {:.4}",
                    pos.body.name(),
                    pos.longitude,
                    pos.sign,
                    pos.degree_in_sign
                );
            }
        }

        Commands::Ascendant { moment, place, precision } => {
            let jd = julian_day(&moment.date, &moment.time, moment.offset)?;
            let precision = jataka_chart::clamp_precision(precision);
            let asc = jataka_base::ascendant(jd, place.lat, place.lon, precision)?;
            println!(
                "Ascendant {:.4} deg - {} {:.4} (LST {:.4}, GMST {:.4})",
                asc.longitude,
                asc.sign,
                asc.degree_in_sign,
                asc.local_sidereal_time,
                asc.greenwich_sidereal_time
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_at(lon);
            println!(
                "{} (index {}) - Pada {} - Lord {} - Sub-lord {} ({:.4} deg in nakshatra)",
                info.nakshatra,
                info.nakshatra_index,
                info.pada,
                info.lord,
                sub_lord(lon),
                info.degrees_in_nakshatra
            );
        }

        Commands::Dasha { moment, precision } => {
            let dasha = moon_dasha(&moment.date, &moment.time, moment.offset, precision)?;
            let cur = &dasha.current;
            println!(
                "Current: {} ({} y, balance {:.4} y)",
                cur.lord,
                cur.duration_years,
                cur.balance_years.unwrap_or(0.0)
            );
            for p in &dasha.sequence {
                println!(
                    "{:<8} {:>5} y  {} .. {}",
                    p.lord.name(),
                    p.duration_years,
                    p.start,
                    p.end
                );
            }
        }

        Commands::Kp { moment, place, precision } => {
            let req = request(&moment, &place, precision)?;
            let jd = req.moment.to_julian_day();
            let positions = jataka_base::planet_positions(jd, req.precision)?;
            let asc = jataka_base::ascendant(jd, req.latitude, req.longitude, req.precision)?;
            let cusps = jataka_base::house_cusps(asc.longitude, req.precision);
            for row in build_kp_table(&positions, &cusps, req.precision) {
                println!(
                    "{:<8} {:>10.4}  {:<11} {:<17} P{} lord {:<8} sub {:<8} H{}",
                    row.point.to_string(),
                    row.longitude,
                    row.sign.name(),
                    row.nakshatra.name(),
                    row.pada,
                    row.nakshatra_lord.name(),
                    row.sub_lord.name(),
                    row.house_number
                );
            }
        }

        Commands::Chart { moment, place, precision } => {
            let req = request(&moment, &place, precision)?;
            let chart = compute_chart(&req)?;
            match serde_json::to_string_pretty(&chart) {
                Ok(json) => println!("{json}"),
                Err(e) => return Err(ChartError::Computation(e.to_string())),
            }
        }

        Commands::Wheel { moment, place, size } => {
            let req = request(&moment, &place, None)?;
            let jd = req.moment.to_julian_day();
            let positions = jataka_base::planet_positions(jd, req.precision)?;
            let asc = jataka_base::ascendant(jd, req.latitude, req.longitude, req.precision)?;
            let cusps = jataka_base::house_cusps(asc.longitude, req.precision);
            let wheel = render_wheel(&asc, &positions, &cusps, &WheelOptions { size });
            println!("{}", wheel.svg);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
