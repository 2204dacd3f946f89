//! Point d'entrée configuré: texte -> image et image -> séquence

use crate::codec::Codec;
use crate::config::CodecConfig;
use crate::container::{read_image, write_image, OutputFormat};
use crate::error::{PixelError, Result};
use crate::scale::{apply_scale, undo_scale, ImageMetadata, ScaledImage};
use crate::sequence::Sequence;
use crate::{log_error, log_operation};
use image::RgbImage;
use tracing::debug;

/// Codec séquence <-> image avec mise à l'échelle
#[derive(Debug, Clone)]
pub struct ImageCodec {
    config: CodecConfig,
    codec: Codec,
}

impl ImageCodec {
    pub fn new(config: CodecConfig) -> Result<Self> {
        let group_size = config.validate()?;
        Ok(Self {
            codec: Codec::new(group_size.get())?,
            config,
        })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Refuse les séquences qui ne remplissent pas un premier groupe
    pub fn ensure_min_length(&self, sequence: &Sequence) -> Result<()> {
        let min = self.config.min_sequence_len();
        if sequence.len() < min {
            return Err(log_error!(PixelError::InputTooShort {
                len: sequence.len(),
                min,
            }));
        }
        Ok(())
    }

    /// Encode un texte brut de nucléotides (déjà débarrassé des en-têtes FASTA)
    pub fn encode_text(&self, text: &str, scale: Option<u32>) -> Result<ScaledImage> {
        self.encode_sequence(&Sequence::parse(text), scale)
    }

    pub fn encode_sequence(&self, sequence: &Sequence, scale: Option<u32>) -> Result<ScaledImage> {
        log_operation!("encode_sequence", {
            self.ensure_min_length(sequence)?;
            let factor = scale.unwrap_or(self.config.default_scale);
            let canvas = self.codec.encode(sequence)?;
            apply_scale(&canvas, factor, self.config.max_dimension).map_err(|e| log_error!(e))
        })
    }

    /// Encode puis sérialise dans le format demandé
    pub fn encode_to_bytes(
        &self,
        text: &str,
        scale: Option<u32>,
        format: OutputFormat,
    ) -> Result<Vec<u8>> {
        let scaled = self.encode_text(text, scale)?;
        write_image(&scaled, format, self.config.jpeg_quality)
    }

    /// Annule l'échelle puis décode; le remplissage est conservé
    pub fn decode_image(&self, image: &RgbImage, metadata: &ImageMetadata) -> Result<Sequence> {
        log_operation!("decode_image", {
            let canvas = undo_scale(image, metadata)?;
            debug!(width = canvas.width(), height = canvas.height(), "grille retrouvée");
            Ok(self.codec.decode(&canvas))
        })
    }

    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Sequence> {
        let (image, metadata) = read_image(bytes)?;
        self.decode_image(&image, &metadata)
    }
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self {
            config: CodecConfig::default(),
            codec: Codec::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_input() {
        let codec = ImageCodec::default();
        let err = codec.encode_text("ACGTACGTACG", None).unwrap_err();
        assert!(matches!(err, PixelError::InputTooShort { len: 11, min: 12 }));
    }

    #[test]
    fn test_custom_min_length() {
        let codec = ImageCodec::new(CodecConfig {
            min_sequence_len: Some(24),
            ..Default::default()
        })
        .unwrap();
        let err = codec.encode_text(&"ACGT".repeat(5), None).unwrap_err();
        assert!(matches!(err, PixelError::InputTooShort { len: 20, min: 24 }));

        let scaled = codec.encode_text(&"ACGT".repeat(6), None).unwrap();
        assert_eq!(scaled.image().dimensions(), (2, 1));
    }

    #[test]
    fn test_empty_input_never_reaches_png() {
        let err = ImageCodec::new(CodecConfig {
            min_sequence_len: Some(0),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, PixelError::InvalidConfig(_)));

        let err = ImageCodec::default()
            .encode_to_bytes("", None, OutputFormat::Png)
            .unwrap_err();
        assert!(matches!(err, PixelError::InputTooShort { len: 0, min: 12 }));
    }

    #[test]
    fn test_default_scale_from_config() {
        let codec = ImageCodec::new(CodecConfig {
            default_scale: 5,
            ..Default::default()
        })
        .unwrap();
        let scaled = codec.encode_text("ACGTACGTACGT", None).unwrap();
        assert_eq!(scaled.factor(), 5);
        assert_eq!(scaled.image().dimensions(), (5, 5));

        let explicit = codec.encode_text("ACGTACGTACGT", Some(2)).unwrap();
        assert_eq!(explicit.factor(), 2);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let codec = ImageCodec::default();
        let text = "GATTACAGATTACAGATTACAGATTACA";
        let bytes = codec.encode_to_bytes(text, Some(3), OutputFormat::Png).unwrap();
        let decoded = codec.decode_bytes(&bytes).unwrap();

        // 28 bases -> 3 pixels -> grille 2x2
        assert_eq!(decoded.len(), 48);
        assert!(decoded.to_string().starts_with(text));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = ImageCodec::new(CodecConfig {
            group_size: 16,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, PixelError::InvalidGroupSize(16)));
    }
}
