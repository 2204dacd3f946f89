//! Commande d'inspection

use crate::InspectFormat;
use adnpix_core::{read_image, undo_scale, AppConfig, Canvas, ImageMetadata};
use anyhow::{Context, Result};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Résumé d'une image encodée
#[derive(Debug, serde::Serialize)]
struct ImageReport {
    file: String,
    width: u32,
    height: u32,
    scale_factor: u32,
    canvas_width: u32,
    canvas_height: u32,
    pixels: usize,
    trailing_black_pixels: usize,
    decoded_bases: usize,
    metadata: ImageMetadata,
}

pub fn run(input: PathBuf, format: InspectFormat, config: &AppConfig) -> Result<()> {
    let bytes = std::fs::read(&input)
        .with_context(|| format!("Impossible de lire {}", input.display()))?;
    let (image, metadata) = read_image(&bytes)?;
    let report = build_report(&input, &image, metadata, config.codec.group_size)?;

    match format {
        InspectFormat::Table => display_table(&report),
        InspectFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn build_report(
    input: &Path,
    image: &RgbImage,
    metadata: ImageMetadata,
    group_size: usize,
) -> Result<ImageReport> {
    let canvas: Canvas = undo_scale(image, &metadata)?;
    let trailing_black_pixels = canvas
        .pixels()
        .iter()
        .rev()
        .take_while(|pixel| pixel.is_black())
        .count();

    Ok(ImageReport {
        file: input.display().to_string(),
        width: image.width(),
        height: image.height(),
        scale_factor: metadata.scale_factor()?,
        canvas_width: canvas.width(),
        canvas_height: canvas.height(),
        pixels: canvas.len(),
        trailing_black_pixels,
        decoded_bases: canvas.len() * group_size,
        metadata,
    })
}

/// Visualisation en tableau
fn display_table(report: &ImageReport) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct PropertyRow {
        #[tabled(rename = "Propriété")]
        name: String,
        #[tabled(rename = "Valeur")]
        value: String,
    }

    let mut rows = vec![
        ("Fichier", report.file.clone()),
        ("Image", format!("{}x{}", report.width, report.height)),
        ("Facteur d'échelle", report.scale_factor.to_string()),
        ("Grille", format!("{}x{}", report.canvas_width, report.canvas_height)),
        ("Pixels", report.pixels.to_string()),
        ("Pixels noirs finaux", report.trailing_black_pixels.to_string()),
        ("Bases décodées", report.decoded_bases.to_string()),
    ];
    for (key, value) in report.metadata.iter() {
        rows.push(("Métadonnée", format!("{}={}", key, value)));
    }

    let rows: Vec<PropertyRow> = rows
        .into_iter()
        .map(|(name, value)| PropertyRow {
            name: name.to_string(),
            value,
        })
        .collect();

    println!();
    println!("{}", Table::new(rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use adnpix_core::ImageCodec;

    #[test]
    fn test_report_for_scaled_image() {
        let codec = ImageCodec::default();
        // 3 pixels -> grille 2x2 dont une cellule noire
        let scaled = codec.encode_text(&"ACGT".repeat(9), Some(3)).unwrap();

        let report = build_report(
            Path::new("test.png"),
            scaled.image(),
            scaled.metadata().clone(),
            12,
        )
        .unwrap();

        assert_eq!((report.width, report.height), (6, 6));
        assert_eq!(report.scale_factor, 3);
        assert_eq!((report.canvas_width, report.canvas_height), (2, 2));
        assert_eq!(report.trailing_black_pixels, 1);
        assert_eq!(report.decoded_bases, 48);
    }
}
