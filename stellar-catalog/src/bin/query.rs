use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use stellar_catalog::{alphabet, CatalogPaths, CatalogReader, Star, StarDetail, StarNames};
use stellar_core::{Angle, DmsFmt, HmsFmt};

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "query-stars")]
#[command(about = "Inspect fixed-width bright-star catalog files")]
#[command(version)]
struct Cli {
    /// Directory holding bsc5.dat, bsc4s.dat and alphabet.dat
    #[arg(long)]
    data_dir: PathBuf,

    /// Optional `identifier = proper name` file for name resolution
    #[arg(long)]
    names: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print record counts
    Info,
    /// Print one star and its detail record by HR number
    Show {
        number: u16,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// List stars, brightest first
    List {
        /// Keep only stars at least this bright
        #[arg(long)]
        mag_max: Option<f32>,
        /// Maximum number of rows
        #[arg(long, default_value = "20")]
        limit: usize,
        /// Output decimal degrees instead of HMS/DMS
        #[arg(long)]
        raw: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Print the symbol table
    Alphabet,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let reader = CatalogReader::new(CatalogPaths::from_dir(&cli.data_dir));
    let names = load_names(cli.names.as_deref())?;

    match cli.command {
        Commands::Info => {
            let stars = reader.read_stars(&names)?;
            let primary_count = reader.primary_count()?;
            let from_primary = stars
                .iter()
                .filter(|s| (s.number as usize) <= primary_count)
                .count();
            println!("Primary records: {}", from_primary);
            println!("Primary lines: {}", primary_count);
            println!("Supplement records: {}", stars.len() - from_primary);
            println!("Total stars: {}", stars.len());
        }
        Commands::Show { number, format } => {
            let stars = reader.read_stars(&names)?;
            let star = stars
                .iter()
                .find(|s| s.number == number)
                .with_context(|| format!("no star with number HR {}", number))?;
            let details = reader.star_details(number)?;
            match format {
                OutputFormat::Table => {
                    print_star(star, false);
                    if let Some(details) = &details {
                        print_details(details);
                    }
                }
                OutputFormat::Json => {
                    let row = JsonStarWithDetails {
                        star: JsonStar::from(star),
                        details: details.as_ref().map(JsonDetails::from),
                    };
                    println!("{}", serde_json::to_string_pretty(&row)?);
                }
            }
        }
        Commands::List {
            mag_max,
            limit,
            raw,
            format,
        } => {
            let mut stars = reader.read_stars(&names)?;
            if let Some(mag_max) = mag_max {
                stars.retain(|s| s.mag <= mag_max);
            }
            stars.sort_by(|a, b| a.mag.total_cmp(&b.mag));
            stars.truncate(limit);
            match format {
                OutputFormat::Table => {
                    for star in &stars {
                        print_star(star, raw);
                    }
                    println!("\nTotal results: {}", stars.len());
                }
                OutputFormat::Json => {
                    let rows: Vec<JsonStar> = stars.iter().map(JsonStar::from).collect();
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
            }
        }
        Commands::Alphabet => {
            let table = reader.read_alphabet()?;
            for (key, value) in table.iter() {
                println!("{} = {}", key, value);
            }
        }
    }

    Ok(())
}

fn load_names(path: Option<&Path>) -> anyhow::Result<StarNames> {
    let mut names = StarNames::new();
    if let Some(path) = path {
        let table = alphabet::load(path)
            .with_context(|| format!("failed to load name dictionary {:?}", path))?;
        for (key, value) in table.iter() {
            names.insert(key.to_string(), value.to_string());
        }
    }
    Ok(names)
}

fn print_star(star: &Star, raw: bool) {
    let label = star
        .proper_name
        .as_deref()
        .unwrap_or_else(|| star.name.trim());
    if raw {
        println!(
            "HR {:>5}: {:>12} RA={:.6}° Dec={:+.6}° Mag={:5.2} Color={}",
            star.number, label, star.ra, star.dec, star.mag, star.color
        );
    } else {
        let hms = HmsFmt { frac_digits: 1 };
        let dms = DmsFmt { frac_digits: 0 };
        println!(
            "HR {:>5}: {:>12} RA={} Dec={} Mag={:5.2} Color={}",
            star.number,
            label,
            hms.fmt(Angle::from_degrees(star.ra)),
            dms.fmt(Angle::from_degrees(star.dec)),
            star.mag,
            star.color
        );
    }
}

fn print_details(details: &StarDetail) {
    println!("  Spectral class: {}", details.spectral_class);
    if !details.peculiarity.is_empty() {
        println!("  Peculiarity: {}", details.peculiarity);
    }
    if let Some(rv) = details.radial_velocity {
        println!("  Radial velocity: {} km/s", rv);
    }
    if details.is_infrared_source {
        println!("  Infrared source");
    }
}

#[derive(serde::Serialize)]
struct JsonStar {
    number: u16,
    name: String,
    proper_name: Option<String>,
    hd_number: Option<String>,
    sao_number: Option<u32>,
    fk5_number: Option<u16>,
    variable_name: Option<String>,
    ra_deg: f64,
    dec_deg: f64,
    mag: f32,
    color: char,
}

#[derive(serde::Serialize)]
struct JsonStarWithDetails {
    #[serde(flatten)]
    star: JsonStar,
    details: Option<JsonDetails>,
}

#[derive(serde::Serialize)]
struct JsonDetails {
    spectral_class: String,
    peculiarity: String,
    radial_velocity: Option<i32>,
    is_infrared_source: bool,
}

impl From<&StarDetail> for JsonDetails {
    fn from(details: &StarDetail) -> Self {
        JsonDetails {
            spectral_class: details.spectral_class.clone(),
            peculiarity: details.peculiarity.clone(),
            radial_velocity: details.radial_velocity,
            is_infrared_source: details.is_infrared_source,
        }
    }
}

impl From<&Star> for JsonStar {
    fn from(star: &Star) -> Self {
        JsonStar {
            number: star.number,
            name: star.name.trim().to_string(),
            proper_name: star.proper_name.clone(),
            hd_number: star.hd_number.clone(),
            sao_number: star.sao_number,
            fk5_number: star.fk5_number,
            variable_name: star.variable_name.clone(),
            ra_deg: star.ra,
            dec_deg: star.dec,
            mag: star.mag,
            color: star.color,
        }
    }
}
