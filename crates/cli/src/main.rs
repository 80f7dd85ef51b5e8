#![deny(unsafe_code)]
//! CLI binary for colour-vision-deficiency scheme previews.
//!
//! Subcommands:
//! - `list`: print known schemes, deficiency types and vision modes
//! - `shift <scheme>`: print a scheme's colours as seen with a deficiency
//! - `swatch <scheme>`: write the scheme swatch SVG
//! - `style <scheme>`: print the plot style derived from a scheme
//! - `dashboard`: write the side-by-side HTML comparison page

mod error;

use clap::{ArgAction, Parser, Subcommand};
use cvd_core::{
    scheme_to_svg, Catalog, ColourScheme, Deficiency, DocumentType, Severity, Slot, StyleSession,
    DEFAULT_SCHEME,
};
use cvd_dashboard::curves::{DEFAULT_CURVES, DEFAULT_SAMPLES};
use cvd_dashboard::{Dashboard, DashboardOptions, VisionMode};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cvd", about = "Colour-vision-deficiency previews for plotting schemes")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Scheme catalog JSON file to use instead of the built-in one.
    #[arg(long, global = true, env = "CVD_CATALOG")]
    catalog: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List schemes, deficiency types and vision modes.
    List,
    /// Print a scheme's colours shifted towards a deficiency.
    Shift {
        /// Scheme name (case-insensitive).
        scheme: String,

        /// Deficiency type (protanopia, deuteranopia, tritanopia or prot/deut/trit).
        #[arg(short, long)]
        deficiency: String,

        /// Severity as a fraction (0-1) or a percentage (0-100).
        #[arg(short, long, default_value_t = 100.0)]
        severity: f64,
    },
    /// Render a scheme swatch as SVG, optionally shifted.
    Swatch {
        scheme: String,

        #[arg(short, long)]
        deficiency: Option<String>,

        #[arg(short, long, default_value_t = 100.0)]
        severity: f64,

        /// Output file path. Writes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the plot style derived from a scheme as JSON.
    Style {
        scheme: String,

        /// Document type: report or presentation.
        #[arg(long, default_value = "report")]
        doc_type: String,

        /// Force dark mode (default for presentations).
        #[arg(long, conflicts_with = "light")]
        dark: bool,

        /// Force light mode (default for reports).
        #[arg(long)]
        light: bool,
    },
    /// Write the HTML dashboard comparing normal and dichromat vision.
    Dashboard {
        #[arg(long, default_value = DEFAULT_SCHEME)]
        scheme: String,

        #[arg(short, long, default_value_t = 100.0)]
        severity: f64,

        /// Deficiency types to show; repeat for several. Defaults to all three.
        #[arg(short, long)]
        deficiency: Vec<String>,

        /// Noise seed for the demo curves.
        #[arg(long, default_value_t = 0)]
        seed: u32,

        #[arg(long, default_value_t = DEFAULT_CURVES)]
        curves: usize,

        #[arg(long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,

        #[arg(short, long, default_value = "dashboard.html")]
        output: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    match path {
        Some(path) => Ok(Catalog::from_path(path)?),
        None => Ok(Catalog::builtin()),
    }
}

/// Accepts 0-1 or 0-100; anything else is a usage error rather than clamped.
fn parse_severity(raw: f64) -> Result<Severity, CliError> {
    if !(0.0..=100.0).contains(&raw) {
        return Err(CliError::Input(format!(
            "severity must be between 0 and 100, got {raw}"
        )));
    }
    Ok(Severity::normalize(raw))
}

fn shifted_scheme(
    catalog: &Catalog,
    name: &str,
    deficiency: Option<&str>,
    severity: f64,
) -> Result<ColourScheme, CliError> {
    let scheme = catalog.get(name)?;
    match deficiency {
        Some(d) => {
            let deficiency: Deficiency = d.parse()?;
            Ok(scheme.shifted(deficiency, parse_severity(severity)?))
        }
        None => Ok(scheme.clone()),
    }
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Command::List => {
            let schemes = catalog.names();
            let deficiencies: Vec<&str> = Deficiency::ALL.iter().map(|d| d.name()).collect();
            let modes = VisionMode::list_modes();
            if cli.json {
                print_json(&serde_json::json!({
                    "schemes": schemes,
                    "default_scheme": DEFAULT_SCHEME,
                    "deficiencies": deficiencies,
                    "modes": modes,
                }))?;
            } else {
                println!("Schemes:");
                for name in catalog.display_names() {
                    println!("  {name}");
                }
                println!("Deficiencies:");
                for d in Deficiency::ALL {
                    println!("  {:<14}{}", d.name(), d.description());
                }
                println!("Modes:");
                println!("  {}", modes.join(", "));
            }
        }
        Command::Shift {
            scheme,
            deficiency,
            severity,
        } => {
            let shifted = shifted_scheme(&catalog, &scheme, Some(&deficiency), severity)?;
            if cli.json {
                print_json(&serde_json::json!({
                    "scheme": shifted.name(),
                    "deficiency": deficiency.parse::<Deficiency>()?.name(),
                    "severity": parse_severity(severity)?.value(),
                    "colours": serde_json::to_value(shifted.to_record())?,
                }))?;
            } else {
                for slot in Slot::ALL {
                    println!("{:<18}{}", slot.name(), shifted.get(slot).to_hex());
                }
            }
        }
        Command::Swatch {
            scheme,
            deficiency,
            severity,
            output,
        } => {
            let shifted = shifted_scheme(&catalog, &scheme, deficiency.as_deref(), severity)?;
            let svg = scheme_to_svg(&shifted);
            match output {
                Some(path) => {
                    std::fs::write(&path, &svg)?;
                    tracing::info!(path = %path.display(), "wrote swatch");
                    if cli.json {
                        print_json(&serde_json::json!({
                            "scheme": shifted.name(),
                            "deficiency": deficiency,
                            "output": path.display().to_string(),
                        }))?;
                    } else {
                        eprintln!("wrote {} swatch -> {}", shifted.name(), path.display());
                    }
                }
                None if cli.json => print_json(&serde_json::json!({ "svg": svg }))?,
                None => println!("{svg}"),
            }
        }
        Command::Style {
            scheme,
            doc_type,
            dark,
            light,
        } => {
            let dark = match (dark, light) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let mut session = StyleSession::new(catalog);
            let document_type: DocumentType = doc_type.parse()?;
            let active = session.init(&scheme, document_type, dark)?;
            // Printed as JSON with or without --json.
            println!("{}", serde_json::to_string_pretty(&active.config)?);
        }
        Command::Dashboard {
            scheme,
            severity,
            deficiency,
            seed,
            curves,
            samples,
            output,
        } => {
            let deficiencies = if deficiency.is_empty() {
                Deficiency::ALL.to_vec()
            } else {
                deficiency
                    .iter()
                    .map(|d| d.parse())
                    .collect::<Result<Vec<Deficiency>, _>>()?
            };
            let options = DashboardOptions {
                scheme,
                severity: parse_severity(severity)?,
                deficiencies,
                seed,
                curves,
                samples,
            };
            let dashboard = Dashboard::build(&catalog, &options)?;
            dashboard.write_html(&output)?;

            if cli.json {
                print_json(&serde_json::json!({
                    "scheme": dashboard.scheme,
                    "severity": dashboard.severity,
                    "panels": dashboard.panels.iter().map(|p| &p.mode).collect::<Vec<_>>(),
                    "output": output.display().to_string(),
                }))?;
            } else {
                eprintln!(
                    "wrote {} dashboard ({} panels, {:.0}% severity) -> {}",
                    dashboard.scheme,
                    dashboard.panels.len(),
                    dashboard.severity * 100.0,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
