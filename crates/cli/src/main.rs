//! CLI pour l'encodage de séquences ADN en images

use adnpix_core::{AppConfig, OutputFormat};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod commands;
mod display;

use commands::{decode, encode, inspect};

#[derive(Parser)]
#[command(name = "adnpix")]
#[command(about = "Encodage de séquences ADN en images RGB", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Fichier de configuration (TOML, JSON ou YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode une séquence FASTA en image
    Encode {
        /// Fichier FASTA d'entrée
        #[arg(short, long, conflicts_with = "sequence", required_unless_present = "sequence")]
        input: Option<PathBuf>,

        /// Séquence collée directement (FASTA ou lettres brutes)
        #[arg(short, long)]
        sequence: Option<String>,

        /// Image de sortie
        #[arg(short, long)]
        output: PathBuf,

        /// Facteur d'agrandissement (1 = un pixel par k-mer)
        #[arg(short = 'x', long)]
        scale: Option<u32>,

        /// Format de sortie, déduit de l'extension si absent
        #[arg(short, long, value_enum)]
        format: Option<ImageFormatArg>,

        /// Qualité JPEG (1-100)
        #[arg(short, long)]
        quality: Option<u8>,
    },

    /// Décode une image en séquence FASTA
    Decode {
        /// Image d'entrée (PNG recommandé)
        #[arg(short, long)]
        input: PathBuf,

        /// Fichier FASTA de sortie
        #[arg(short, long)]
        output: PathBuf,

        /// En-tête de l'enregistrement FASTA
        #[arg(long, default_value = adnpix_utils::fasta::DEFAULT_HEADER)]
        header: String,
    },

    /// Affiche les dimensions et métadonnées d'une image
    Inspect {
        /// Image à inspecter
        #[arg(short, long)]
        input: PathBuf,

        /// Format d'affichage
        #[arg(short, long, value_enum, default_value = "table")]
        format: InspectFormat,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum ImageFormatArg {
    Png,
    Jpeg,
}

impl From<ImageFormatArg> for OutputFormat {
    fn from(format: ImageFormatArg) -> Self {
        match format {
            ImageFormatArg::Png => OutputFormat::Png,
            ImageFormatArg::Jpeg => OutputFormat::Jpeg,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum InspectFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    adnpix_core::init_logging(&config.logging, cli.verbose);

    match cli.command {
        Commands::Encode {
            input,
            sequence,
            output,
            scale,
            format,
            quality,
        } => {
            encode::run(
                encode::EncodeArgs {
                    input,
                    sequence,
                    output,
                    scale,
                    format: format.map(OutputFormat::from),
                    quality,
                },
                &config,
            )?;
        }
        Commands::Decode {
            input,
            output,
            header,
        } => {
            decode::run(input, output, &header, &config)?;
        }
        Commands::Inspect { input, format } => {
            inspect::run(input, format, &config)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb
}
