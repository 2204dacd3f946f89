//! Commande de décodage

use crate::create_spinner;
use adnpix_core::{read_image, AppConfig, ImageCodec, SCALE_FACTOR_KEY};
use adnpix_utils::to_fasta;
use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;

pub fn run(input: PathBuf, output: PathBuf, header: &str, config: &AppConfig) -> Result<()> {
    println!("🧬 Décodage de: {}", input.display());

    // 1. Lire l'image
    let spinner = create_spinner("Lecture de l'image...");
    let bytes = std::fs::read(&input)
        .with_context(|| format!("Impossible de lire {}", input.display()))?;
    let (image, metadata) = read_image(&bytes)?;
    spinner.finish_with_message(format!("Image {}x{} lue", image.width(), image.height()));

    if metadata.get(SCALE_FACTOR_KEY).is_none() {
        println!(
            "{}",
            style("ℹ️  Aucune métadonnée d'échelle: facteur 1 supposé").cyan()
        );
    }

    // 2. Décoder
    let spinner = create_spinner("Décodage...");
    let codec = ImageCodec::new(config.codec.clone())?;
    let sequence = codec.decode_image(&image, &metadata)?;
    spinner.finish_with_message(format!("{} bases récupérées", sequence.len()));

    // 3. Écrire le FASTA
    std::fs::write(&output, to_fasta(header, &sequence))
        .with_context(|| format!("Impossible d'écrire {}", output.display()))?;
    println!("Séquence écrite dans {}", output.display());
    println!(
        "{}",
        style("Note: les A finaux peuvent provenir du remplissage de la grille").dim()
    );

    println!("\n✅ Décodage terminé!");

    Ok(())
}
