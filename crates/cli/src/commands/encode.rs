//! Commande d'encodage

use crate::create_spinner;
use crate::display::stats::display_encode_stats;
use adnpix_core::{write_image, AppConfig, ImageCodec, OutputFormat};
use adnpix_utils::sequence_from_fasta;
use anyhow::{bail, Context, Result};
use console::style;
use std::path::{Path, PathBuf};

pub struct EncodeArgs {
    pub input: Option<PathBuf>,
    pub sequence: Option<String>,
    pub output: PathBuf,
    pub scale: Option<u32>,
    pub format: Option<OutputFormat>,
    pub quality: Option<u8>,
}

pub fn run(args: EncodeArgs, config: &AppConfig) -> Result<()> {
    // 1. Lire la séquence
    let spinner = create_spinner("Lecture de la séquence...");
    let content = match (&args.input, &args.sequence) {
        (Some(path), _) => {
            println!("🧬 Encodage de: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Impossible de lire {}", path.display()))?
        }
        (None, Some(text)) => text.clone(),
        (None, None) => bail!("Fournir une séquence avec --input ou --sequence"),
    };
    let sequence = sequence_from_fasta(&content);
    spinner.finish_with_message(format!("{} bases lues", sequence.len()));

    if sequence.is_empty() {
        bail!("Aucune séquence trouvée dans l'entrée");
    }

    // 2. Configurer le codec
    let mut codec_config = config.codec.clone();
    if let Some(quality) = args.quality {
        codec_config.jpeg_quality = quality;
    }
    let codec = ImageCodec::new(codec_config)?;

    let format = args.format.unwrap_or_else(|| format_from_path(&args.output));
    if !format.is_lossless() {
        println!(
            "{}",
            style("⚠️  JPEG avec perte: image pour affichage seulement, le décodage sera incorrect")
                .yellow()
        );
    }

    // 3. Encoder
    let spinner = create_spinner("Encodage...");
    let scaled = codec.encode_sequence(&sequence, args.scale)?;
    let bytes = write_image(&scaled, format, codec.config().jpeg_quality)?;
    spinner.finish_with_message(format!(
        "Image {}x{} générée ({} octets)",
        scaled.width(),
        scaled.height(),
        bytes.len()
    ));

    // 4. Écrire l'image
    std::fs::write(&args.output, &bytes)
        .with_context(|| format!("Impossible d'écrire {}", args.output.display()))?;
    println!("Image écrite dans {}", args.output.display());

    display_encode_stats(&sequence, &scaled, codec.codec().group_size().get());

    println!("\n✅ Encodage terminé!");

    Ok(())
}

/// Déduit le format de l'extension du fichier, PNG par défaut
fn format_from_path(path: &Path) -> OutputFormat {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => OutputFormat::Jpeg,
        _ => OutputFormat::Png,
    }
}
