use std::path::PathBuf;
use std::sync::Arc;

use bodymap_core::{
    config::biometric_defaults_from_env_values, constants::DEFAULT_SNIPPET_MAX_CHARS,
    records::{demo_records, read_records_file},
    BiometricInputs, BodyMap, BodyMapError, CoreConfig, MedicalRecordRef,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "bodymap")]
#[command(about = "Inspect body map catalogs, condition matches and renders")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the regions of a catalog
    Catalog {
        /// Male or Female (anything else means Male)
        #[arg(long)]
        gender: Option<String>,
    },
    /// Show which regions a records file activates
    Match {
        /// YAML or JSON list of records
        file: PathBuf,
        #[arg(long)]
        gender: Option<String>,
        /// Fail on malformed records instead of skipping them
        #[arg(long)]
        strict: bool,
    },
    /// Render a frame for a records file and pointer state
    Render {
        /// YAML or JSON list of records
        file: PathBuf,
        #[arg(long)]
        gender: Option<String>,
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// Height in centimetres
        #[arg(long)]
        height: Option<f64>,
        /// Resting heart rate in beats per minute
        #[arg(long)]
        heart_rate: Option<f64>,
        /// Region id under the pointer
        #[arg(long)]
        hover: Option<String>,
        /// Region id that was clicked
        #[arg(long)]
        select: Option<String>,
        #[arg(long)]
        strict: bool,
    },
    /// Show the activation map for the sample records
    Demo {
        #[arg(long)]
        gender: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let engine = Arc::new(BodyMap::new(Arc::new(config_from_env()?)));

    match cli.command {
        Some(Commands::Catalog { gender }) => {
            let catalog = engine.catalogs().for_input(gender.as_deref());
            println!("{} catalog ({} regions)", catalog.gender(), catalog.regions().len());
            for region in catalog.regions() {
                println!(
                    "{:<10} {:<24} {:<9} {:<16} {}",
                    region.id,
                    region.display_name,
                    region.layer.as_str(),
                    region.category.as_str(),
                    region.keywords.join(", ")
                );
            }
        }
        Some(Commands::Match {
            file,
            gender,
            strict,
        }) => {
            let records = read_records_file(&file, strict)?;
            tracing::debug!(count = records.len(), file = %file.display(), "loaded records");
            print_activation(&engine, &records, gender.as_deref())?;
        }
        Some(Commands::Render {
            file,
            gender,
            weight,
            height,
            heart_rate,
            hover,
            select,
            strict,
        }) => {
            let records = read_records_file(&file, strict)?;
            let mut session = engine.session();
            session.set_biometrics(&BiometricInputs {
                gender,
                weight_kg: weight,
                height_cm: height,
                resting_heart_rate_bpm: heart_rate,
            });
            session.set_records(records);
            if let Some(id) = select {
                if !session.click(&id) {
                    eprintln!("Ignoring unknown region for --select: {}", id);
                }
            }
            if let Some(id) = hover {
                if !session.pointer_enter(&id) {
                    eprintln!("Ignoring unknown region for --hover: {}", id);
                }
            }
            let json = serde_json::to_string_pretty(&session.render())
                .map_err(BodyMapError::Serialization)?;
            println!("{}", json);
        }
        Some(Commands::Demo { gender }) => {
            print_activation(&engine, &demo_records(), gender.as_deref())?;
        }
        None => {
            println!("Use 'bodymap --help' for commands");
        }
    }

    Ok(())
}

fn config_from_env() -> Result<CoreConfig, BodyMapError> {
    let defaults = biometric_defaults_from_env_values(
        std::env::var("BODYMAP_DEFAULT_WEIGHT_KG").ok(),
        std::env::var("BODYMAP_DEFAULT_HEIGHT_CM").ok(),
        std::env::var("BODYMAP_DEFAULT_HEART_RATE_BPM").ok(),
    )?;
    CoreConfig::new(defaults, DEFAULT_SNIPPET_MAX_CHARS)
}

fn print_activation(
    engine: &BodyMap,
    records: &[MedicalRecordRef],
    gender: Option<&str>,
) -> Result<(), BodyMapError> {
    let catalog = engine.catalogs().for_input(gender);
    let map = engine.activation_map(records, catalog.gender());
    if map.is_empty() {
        println!("No active regions ({} records).", records.len());
        return Ok(());
    }
    let json = serde_json::to_string_pretty(&map).map_err(BodyMapError::Serialization)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_flags_parse() {
        let cli = Cli::try_parse_from([
            "bodymap",
            "render",
            "records.yaml",
            "--gender",
            "Female",
            "--heart-rate",
            "0",
            "--select",
            "liver",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Render {
                gender,
                heart_rate,
                select,
                strict,
                ..
            }) => {
                assert_eq!(gender.as_deref(), Some("Female"));
                assert_eq!(heart_rate, Some(0.0));
                assert_eq!(select.as_deref(), Some("liver"));
                assert!(!strict);
            }
            _ => panic!("expected render command"),
        }
    }
}
