//! Encodeur et décodeur séquence <-> grille RGB

pub mod decoder;
pub mod encoder;

pub use decoder::Decoder;
pub use encoder::Encoder;

use crate::canvas::Canvas;
use crate::error::{PixelError, Result};
use crate::sequence::Sequence;
use serde::{Deserialize, Serialize};

/// Taille de k-mer par défaut
pub const DEFAULT_GROUP_SIZE: usize = 12;

/// Bits disponibles dans un pixel (R, G, B)
pub const BITS_PER_PIXEL: u32 = 24;

/// Nombre de bases par pixel (K).
///
/// Un groupe de K bases occupe 2K bits, alignés à gauche dans les 24 bits du
/// pixel: K doit être un multiple de 4 compris entre 4 et 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GroupSize(usize);

impl GroupSize {
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 || k % 4 != 0 || 2 * k > BITS_PER_PIXEL as usize {
            return Err(PixelError::InvalidGroupSize(k));
        }
        Ok(Self(k))
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Nombre de bits utiles par pixel
    pub const fn bits(self) -> u32 {
        2 * self.0 as u32
    }
}

impl Default for GroupSize {
    fn default() -> Self {
        Self(DEFAULT_GROUP_SIZE)
    }
}

impl TryFrom<usize> for GroupSize {
    type Error = PixelError;

    fn try_from(k: usize) -> Result<Self> {
        GroupSize::new(k)
    }
}

impl From<GroupSize> for usize {
    fn from(k: GroupSize) -> Self {
        k.0
    }
}

/// Codec combiné encodeur/décodeur
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    encoder: Encoder,
    decoder: Decoder,
}

impl Codec {
    pub fn new(group_size: usize) -> Result<Self> {
        let k = GroupSize::new(group_size)?;
        Ok(Self {
            encoder: Encoder::new(k),
            decoder: Decoder::new(k),
        })
    }

    pub fn group_size(&self) -> GroupSize {
        self.encoder.group_size()
    }

    /// Encode une séquence en grille de pixels
    pub fn encode(&self, sequence: &Sequence) -> Result<Canvas> {
        self.encoder.encode(sequence)
    }

    /// Décode une grille, pixels de remplissage compris
    pub fn decode(&self, canvas: &Canvas) -> Sequence {
        self.decoder.decode(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_size_validation() {
        for k in [4, 8, 12] {
            assert_eq!(GroupSize::new(k).unwrap().get(), k);
        }
        for k in [0, 3, 6, 13, 16, 24] {
            assert!(matches!(GroupSize::new(k), Err(PixelError::InvalidGroupSize(_))));
        }
        assert_eq!(GroupSize::default().bits(), 24);
    }

    #[test]
    fn test_codec_roundtrip() {
        let codec = Codec::default();
        let original = Sequence::parse("ACGTACGTACGTTTTTGGGGCCCC");

        let canvas = codec.encode(&original).unwrap();
        let recovered = codec.decode(&canvas);

        assert_eq!(original, recovered);
    }
}
