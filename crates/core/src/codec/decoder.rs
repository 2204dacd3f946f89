//! Décodeur grille de pixels -> séquence

use super::{GroupSize, BITS_PER_PIXEL};
use crate::canvas::{Canvas, Pixel};
use crate::sequence::{Nucleotide, Sequence};
use tracing::debug;

/// Décodeur pixel -> k-mer
///
/// Les quatre codes 2 bits ont tous une base associée: le décodage ne peut
/// pas échouer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    group_size: GroupSize,
}

impl Decoder {
    pub fn new(group_size: GroupSize) -> Self {
        Self { group_size }
    }

    pub fn group_size(&self) -> GroupSize {
        self.group_size
    }

    /// Décode chaque pixel dans l'ordre des lignes, remplissage noir compris.
    ///
    /// La longueur du résultat vaut toujours `canvas.len() * K`; un pixel noir
    /// donne K fois `A`.
    pub fn decode(&self, canvas: &Canvas) -> Sequence {
        let mut bases = Vec::with_capacity(canvas.len() * self.group_size.get());
        for pixel in canvas.pixels() {
            bases.extend(self.decode_pixel(*pixel));
        }
        debug!(pixels = canvas.len(), bases = bases.len(), "grille décodée");
        Sequence::from_bases(bases)
    }

    /// Relit les K premiers codes 2 bits du mot R|G|B
    pub fn decode_pixel(&self, pixel: Pixel) -> impl Iterator<Item = Nucleotide> {
        let word = (u32::from(pixel.r) << 16) | (u32::from(pixel.g) << 8) | u32::from(pixel.b);
        (0..self.group_size.bits())
            .step_by(2)
            .map(move |offset| Nucleotide::from_bits((word >> (BITS_PER_PIXEL - 2 - offset)) as u8))
    }
}
