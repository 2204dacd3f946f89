//! Encodeur séquence -> grille de pixels

use super::{GroupSize, BITS_PER_PIXEL};
use crate::canvas::{Canvas, Pixel};
use crate::error::Result;
use crate::sequence::{Nucleotide, Sequence};
use tracing::debug;

/// Encodeur k-mer -> pixel
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    group_size: GroupSize,
}

impl Encoder {
    pub fn new(group_size: GroupSize) -> Self {
        Self { group_size }
    }

    pub fn group_size(&self) -> GroupSize {
        self.group_size
    }

    /// Encode une séquence de longueur quelconque.
    ///
    /// La séquence est complétée par des `A` jusqu'à un multiple de K, chaque
    /// groupe de K bases devient un pixel, puis les pixels sont disposés dans
    /// la grille quasi carrée dont les cellules en trop restent noires.
    pub fn encode(&self, sequence: &Sequence) -> Result<Canvas> {
        let k = self.group_size.get();
        let padded = sequence.padded(k);
        let pixels: Vec<Pixel> = padded
            .bases()
            .chunks_exact(k)
            .map(|group| self.encode_group(group))
            .collect();

        let canvas = Canvas::from_pixels(pixels)?;
        debug!(
            bases = sequence.len(),
            padding = padded.len() - sequence.len(),
            width = canvas.width(),
            height = canvas.height(),
            "séquence encodée"
        );
        Ok(canvas)
    }

    /// Concatène les codes 2 bits du groupe, première base en poids fort.
    ///
    /// Bits 0-7 -> R, 8-15 -> G, 16-23 -> B. Quand 2K < 24 les bits restants
    /// sont à zéro.
    pub fn encode_group(&self, group: &[Nucleotide]) -> Pixel {
        debug_assert_eq!(group.len(), self.group_size.get());
        let word = group
            .iter()
            .fold(0u32, |acc, base| (acc << 2) | u32::from(base.bits()));
        let word = word << (BITS_PER_PIXEL - self.group_size.bits());
        Pixel::new((word >> 16) as u8, (word >> 8) as u8, word as u8)
    }
}
