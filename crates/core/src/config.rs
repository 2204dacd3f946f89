//! Configuration du codec et du logging

use crate::codec::{GroupSize, DEFAULT_GROUP_SIZE};
use crate::container::DEFAULT_JPEG_QUALITY;
use crate::error::{PixelError, Result};
use crate::scale::DEFAULT_MAX_DIMENSION;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Préfixe des variables d'environnement (`ADNPIX_CODEC__MAX_DIMENSION=...`)
pub const ENV_PREFIX: &str = "ADNPIX";

/// Paramètres du codec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Bases par pixel (K)
    pub group_size: usize,
    /// Largeur et hauteur physiques maximales
    pub max_dimension: u32,
    /// Facteur d'échelle utilisé quand l'appelant n'en donne pas
    pub default_scale: u32,
    /// Longueur minimale acceptée à l'encodage, K si absente, jamais moins que K
    pub min_sequence_len: Option<usize>,
    pub jpeg_quality: u8,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            max_dimension: DEFAULT_MAX_DIMENSION,
            default_scale: 1,
            min_sequence_len: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl CodecConfig {
    /// Vérifie la cohérence des paramètres
    pub fn validate(&self) -> Result<GroupSize> {
        let group_size = GroupSize::new(self.group_size)?;
        if self.min_sequence_len() < self.group_size {
            return Err(PixelError::InvalidConfig(format!(
                "min_sequence_len trop petit: {} < taille de groupe {}",
                self.min_sequence_len(),
                self.group_size
            )));
        }
        if self.max_dimension == 0 {
            return Err(PixelError::InvalidConfig(
                "max_dimension doit être >= 1".to_string(),
            ));
        }
        if self.default_scale == 0 {
            return Err(PixelError::InvalidScale(self.default_scale));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(PixelError::InvalidConfig(format!(
                "jpeg_quality hors plage: {} pas dans [1, 100]",
                self.jpeg_quality
            )));
        }
        Ok(group_size)
    }

    pub fn min_sequence_len(&self) -> usize {
        self.min_sequence_len.unwrap_or(self.group_size)
    }
}

/// Configuration du logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `compact` ou `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}

/// Configuration complète de l'application
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub codec: CodecConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Charge la configuration depuis un fichier (TOML, JSON, YAML selon
    /// l'extension) puis applique les variables d'environnement `ADNPIX_*`
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::load(Some(path))
    }

    /// Valeurs par défaut, fichier optionnel, puis environnement
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.codec.validate()?;
        Ok(config)
    }
}
