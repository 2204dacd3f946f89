//! Agrandissement au plus proche voisin et son inverse
//!
//! Le facteur d'échelle est écrit dans les métadonnées textuelles de l'image
//! (clé [`SCALE_FACTOR_KEY`]) pour que le décodage le retrouve sans paramètre
//! externe.

use crate::canvas::{Canvas, Pixel};
use crate::error::{PixelError, Result};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Clé de métadonnée portant le facteur d'échelle
pub const SCALE_FACTOR_KEY: &str = "scale_factor";

/// Limite par défaut de la largeur et de la hauteur physiques
pub const DEFAULT_MAX_DIMENSION: u32 = 10_000;

/// Paires clé/valeur textuelles embarquées dans le conteneur d'image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageMetadata {
    entries: BTreeMap<String, String>,
}

impl ImageMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale_factor(factor: u32) -> Self {
        let mut metadata = Self::new();
        metadata.insert(SCALE_FACTOR_KEY, factor.to_string());
        metadata
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Facteur d'échelle enregistré, 1 si la clé est absente.
    ///
    /// Une valeur présente mais qui n'est pas un entier décimal strictement
    /// positif est une erreur.
    pub fn scale_factor(&self) -> Result<u32> {
        let Some(value) = self.get(SCALE_FACTOR_KEY) else {
            return Ok(1);
        };
        let digits_only = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
        match value.parse::<u32>() {
            Ok(factor) if digits_only && factor >= 1 => Ok(factor),
            _ => Err(PixelError::MetadataParse {
                key: SCALE_FACTOR_KEY.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

/// Image physique accompagnée de ses métadonnées.
///
/// Construite uniquement par [`apply_scale`]: la clé [`SCALE_FACTOR_KEY`]
/// reste toujours égale à [`ScaledImage::factor`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledImage {
    image: RgbImage,
    metadata: ImageMetadata,
    factor: u32,
}

impl ScaledImage {
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn metadata(&self) -> &ImageMetadata {
        &self.metadata
    }

    pub fn into_parts(self) -> (RgbImage, ImageMetadata) {
        (self.image, self.metadata)
    }

    pub fn factor(&self) -> u32 {
        self.factor
    }

    /// Ajoute une métadonnée libre; la clé d'échelle est réservée
    pub fn insert_metadata(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        if key == SCALE_FACTOR_KEY {
            return Err(PixelError::ReservedMetadataKey(key.to_string()));
        }
        self.metadata.insert(key, value);
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Agrandit chaque pixel de la grille en un bloc `factor` x `factor` identique.
///
/// `factor == 1` renvoie la grille telle quelle. Les dimensions physiques ne
/// doivent pas dépasser `max_dimension`: aucun écrêtage n'est fait.
pub fn apply_scale(canvas: &Canvas, factor: u32, max_dimension: u32) -> Result<ScaledImage> {
    if factor == 0 {
        return Err(PixelError::InvalidScale(factor));
    }

    let width = u64::from(canvas.width()) * u64::from(factor);
    let height = u64::from(canvas.height()) * u64::from(factor);
    if width > u64::from(max_dimension) || height > u64::from(max_dimension) {
        return Err(PixelError::ScaleTooLarge {
            width,
            height,
            limit: max_dimension,
        });
    }

    let base = canvas.to_rgb_image();
    let image = if factor == 1 {
        base
    } else {
        // width/height <= max_dimension: la conversion en u32 est sûre
        RgbImage::from_fn(width as u32, height as u32, |x, y| {
            *base.get_pixel(x / factor, y / factor)
        })
    };

    debug!(factor, width, height, "grille agrandie");
    Ok(ScaledImage {
        image,
        metadata: ImageMetadata::with_scale_factor(factor),
        factor,
    })
}

/// Retrouve la grille d'origine à partir de l'image physique.
///
/// Échantillonne le pixel en haut à gauche de chaque bloc, sans vérifier que
/// le bloc est uniforme: l'image doit avoir été stockée sans perte.
pub fn undo_scale(image: &RgbImage, metadata: &ImageMetadata) -> Result<Canvas> {
    let factor = metadata.scale_factor()?;
    if factor == 1 {
        return Ok(Canvas::from_rgb_image(image));
    }

    let width = image.width() / factor;
    let height = image.height() / factor;
    let pixels = (0..height)
        .flat_map(|block_y| {
            (0..width).map(move |block_x| {
                Pixel::from(*image.get_pixel(block_x * factor, block_y * factor))
            })
        })
        .collect();

    debug!(factor, width, height, "échelle annulée");
    Canvas::new(width, height, pixels)
}
