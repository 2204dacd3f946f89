//! Types d'erreurs pour la bibliothèque adnpix

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelError {
    #[error("Facteur d'échelle trop grand: image {width}x{height} dépasse la limite de {limit} pixels par côté")]
    ScaleTooLarge { width: u64, height: u64, limit: u32 },

    #[error("Métadonnée invalide: {key}={value:?} n'est pas un entier positif")]
    MetadataParse { key: String, value: String },

    #[error("Séquence trop courte: {len} bases, minimum {min}")]
    InputTooShort { len: usize, min: usize },

    #[error("Clé de métadonnée réservée: {0}")]
    ReservedMetadataKey(String),

    #[error("Taille de groupe invalide: {0} (multiple de 4 entre 4 et 12 requis)")]
    InvalidGroupSize(usize),

    #[error("Facteur d'échelle invalide: {0} (doit être >= 1)")]
    InvalidScale(u32),

    #[error("Dimensions incohérentes: {width}x{height} pour {pixels} pixels")]
    DimensionMismatch { width: u32, height: u32, pixels: usize },

    #[error("Grille trop grande: {0} pixels")]
    CanvasTooLarge(usize),

    #[error("Configuration invalide: {0}")]
    InvalidConfig(String),

    #[error("Erreur image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Erreur de lecture PNG: {0}")]
    PngDecoding(#[from] png::DecodingError),

    #[error("Erreur d'écriture PNG: {0}")]
    PngEncoding(#[from] png::EncodingError),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de configuration: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, PixelError>;
