//! Lecture et écriture des conteneurs d'image
//!
//! Le PNG est le seul format sûr pour un aller-retour: il est sans perte et
//! porte les métadonnées dans des chunks `tEXt`. Le JPEG n'est proposé que
//! pour l'affichage.

use crate::error::Result;
use crate::scale::{ImageMetadata, ScaledImage};
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use tracing::{debug, warn};

/// Qualité JPEG par défaut
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Format de sortie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    /// Affichage seulement, ne peut pas être décodé de façon fiable
    Jpeg,
}

impl OutputFormat {
    /// Vrai si le format préserve chaque pixel et les métadonnées
    pub fn is_lossless(self) -> bool {
        matches!(self, OutputFormat::Png)
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

/// Sérialise l'image dans le format demandé
pub fn write_image(scaled: &ScaledImage, format: OutputFormat, jpeg_quality: u8) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Png => write_png(scaled),
        OutputFormat::Jpeg => write_jpeg(scaled, jpeg_quality),
    }
}

/// PNG RGB 8 bits, un chunk `tEXt` par métadonnée
pub fn write_png(scaled: &ScaledImage) -> Result<Vec<u8>> {
    encode_png(scaled.image(), scaled.metadata())
}

/// Écrit une image RGB quelconque avec les métadonnées données
pub fn encode_png(image: &RgbImage, metadata: &ImageMetadata) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        for (key, value) in metadata.iter() {
            encoder.add_text_chunk(key.to_string(), value.to_string())?;
        }

        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_raw())?;
        writer.finish()?;
    }

    debug!(bytes = buffer.len(), "PNG écrit");
    Ok(buffer)
}

/// JPEG avec perte: les métadonnées ne sont pas conservées
pub fn write_jpeg(scaled: &ScaledImage, quality: u8) -> Result<Vec<u8>> {
    warn!("sortie JPEG avec perte: l'image ne pourra pas être décodée de façon fiable");
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality).encode_image(scaled.image())?;
    Ok(buffer)
}

/// Lit une image quelconque en RGB 8 bits avec ses métadonnées textuelles.
///
/// Seul le PNG porte des métadonnées; les autres formats donnent une table vide.
pub fn read_image(bytes: &[u8]) -> Result<(RgbImage, ImageMetadata)> {
    let format = image::guess_format(bytes)?;
    let metadata = if format == ImageFormat::Png {
        read_png_metadata(bytes)?
    } else {
        warn!(?format, "format sans métadonnées, facteur d'échelle supposé égal à 1");
        ImageMetadata::new()
    };

    let image = image::load_from_memory_with_format(bytes, format)?.to_rgb8();
    debug!(
        width = image.width(),
        height = image.height(),
        entries = metadata.len(),
        "image lue"
    );
    Ok((image, metadata))
}

/// Chunks `tEXt`, `zTXt` et `iTXt` placés avant les données d'image
pub fn read_png_metadata(bytes: &[u8]) -> Result<ImageMetadata> {
    let reader = png::Decoder::new(Cursor::new(bytes)).read_info()?;
    let info = reader.info();

    let mut metadata = ImageMetadata::new();
    for chunk in &info.uncompressed_latin1_text {
        metadata.insert(chunk.keyword.as_str(), chunk.text.as_str());
    }
    for chunk in &info.compressed_latin1_text {
        metadata.insert(chunk.keyword.as_str(), chunk.get_text()?);
    }
    for chunk in &info.utf8_text {
        metadata.insert(chunk.keyword.as_str(), chunk.get_text()?);
    }
    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, Pixel};
    use crate::scale::{apply_scale, DEFAULT_MAX_DIMENSION, SCALE_FACTOR_KEY};

    fn scaled(factor: u32) -> ScaledImage {
        let pixels = (0..10u8).map(|i| Pixel::new(i, i * 3, i * 7)).collect();
        let canvas = Canvas::from_pixels(pixels).unwrap();
        apply_scale(&canvas, factor, DEFAULT_MAX_DIMENSION).unwrap()
    }

    #[test]
    fn test_png_keeps_pixels_and_metadata() {
        let original = scaled(3);
        let bytes = write_png(&original).unwrap();
        let (image, metadata) = read_image(&bytes).unwrap();

        assert_eq!(&image, original.image());
        assert_eq!(metadata.get(SCALE_FACTOR_KEY), Some("3"));
        assert_eq!(metadata.scale_factor().unwrap(), 3);
    }

    #[test]
    fn test_jpeg_has_no_metadata() {
        let original = scaled(2);
        let bytes = write_image(&original, OutputFormat::Jpeg, DEFAULT_JPEG_QUALITY).unwrap();
        let (image, metadata) = read_image(&bytes).unwrap();

        assert_eq!(image.dimensions(), original.image().dimensions());
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_png_without_text_chunk() {
        let image = RgbImage::from_pixel(2, 2, Pixel::new(1, 2, 3).to_rgb());
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let (decoded, metadata) = read_image(&bytes).unwrap();
        assert_eq!(decoded, image);
        assert_eq!(metadata.scale_factor().unwrap(), 1);
    }

    #[test]
    fn test_format_flags() {
        assert!(OutputFormat::Png.is_lossless());
        assert!(!OutputFormat::Jpeg.is_lossless());
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
    }
}
