//! Ramp Mesher CLI
//!
//! Generate road-ramp geometry and block definitions.

use clap::{Args, Parser, Subcommand};
use ramp_mesher::{
    AddonConfig, AddonWriter, AngleClass, RampSet, RampSynthesizer, SynthConfig,
};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "ramp-mesher")]
#[command(author, version, about = "Generate road-ramp geometry and block definitions", long_about = None)]
struct Cli {
    /// Log every part and written file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write geometry and block files for the selected classes
    Generate {
        /// Output directory (BP/ and RP/ are created below it)
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        #[command(flatten)]
        selection: Selection,

        /// Add-on settings as JSON (missing keys keep their defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Block identifier namespace
        #[arg(long)]
        namespace: Option<String>,

        /// Document format version
        #[arg(long)]
        format_version: Option<String>,
    },

    /// Show the parts of the selected classes without writing anything
    List {
        #[command(flatten)]
        selection: Selection,
    },
}

#[derive(Args)]
struct Selection {
    /// Angle class, e.g. "straight-4" or "oblique-22.5" (repeatable)
    #[arg(long = "class")]
    classes: Vec<AngleClass>,

    /// Every supported class instead of the default batch
    #[arg(long, conflicts_with = "classes")]
    all: bool,

    /// Merge oblique cubes into larger boxes
    #[arg(long)]
    merge: bool,
}

impl Selection {
    fn classes(&self) -> Vec<AngleClass> {
        if self.all {
            AngleClass::all()
        } else if self.classes.is_empty() {
            AngleClass::DEFAULT_BATCH.to_vec()
        } else {
            self.classes.clone()
        }
    }

    fn synthesize(&self) -> ramp_mesher::Result<Vec<RampSet>> {
        let config = SynthConfig::default().with_merge(self.merge);
        RampSynthesizer::with_config(config).synthesize_all(&self.classes())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match cli.command {
        Commands::Generate {
            output,
            selection,
            config,
            namespace,
            format_version,
        } => {
            let mut addon = match &config {
                Some(path) => {
                    println!("Loading add-on settings from {:?}...", path);
                    AddonConfig::from_json_file(path)?
                }
                None => AddonConfig::default(),
            };
            if let Some(namespace) = namespace {
                addon = addon.with_namespace(namespace);
            }
            if let Some(format_version) = format_version {
                addon = addon.with_format_version(format_version);
            }

            if !generate(&selection, &output, addon)? {
                std::process::exit(1);
            }
        }
        Commands::List { selection } => {
            list(&selection)?;
        }
    }

    Ok(())
}

/// Returns false if any file failed to write.
fn generate(
    selection: &Selection,
    output: &Path,
    config: AddonConfig,
) -> Result<bool, Box<dyn std::error::Error>> {
    let sets = selection.synthesize()?;
    println!(
        "Generating {} classes into {:?} (namespace {})",
        sets.len(),
        output,
        config.namespace
    );

    let writer = AddonWriter::with_config(output, config);
    let report = writer.write_all(&sets);

    for set in &sets {
        println!(
            "  {}: {} parts, {} boxes",
            set.class,
            set.parts.len(),
            set.total_boxes()
        );
    }
    println!("Wrote {} files", report.written.len());

    if !report.is_success() {
        eprintln!("Failed to write {} files:", report.failed.len());
        for (path, error) in &report.failed {
            eprintln!("  {:?}: {}", path, error);
        }
    }

    Ok(report.is_success())
}

fn list(selection: &Selection) -> Result<(), Box<dyn std::error::Error>> {
    for set in selection.synthesize()? {
        println!("{} ({}°)", set.class, set.class.angle_degrees());
        for part in &set.parts {
            println!(
                "  {:<32} {:>5} boxes  y_start {:>7}  collision {:>6}  selection {:>6}",
                part.identifier,
                part.box_count(),
                part.y_start,
                part.collision_height,
                part.selection_height
            );
        }
    }
    Ok(())
}
